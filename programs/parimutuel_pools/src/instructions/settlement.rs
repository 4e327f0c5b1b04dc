use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::errors::PoolError;
use crate::events::{PoolCancelled, PoolFinished};
use crate::state::{Bet, PoolState};
use crate::utils::{normalize_winners, prize_per_winner, BET_SEED, POOL_SEED};
use crate::{CancelPool, FinishPool};

/// Validate one (bet, player-token-account) pair from remaining_accounts.
/// The bet must be a program-owned Bet PDA for this pool; the token account
/// must belong to that bet's player and use the staking mint.
fn load_bet_pair<'info>(
    bet_ai: &AccountInfo<'info>,
    token_ai: &AccountInfo<'info>,
    pool_id: u64,
    mint: Pubkey,
    program_id: &Pubkey,
) -> Result<Bet> {
    require!(
        bet_ai.owner == program_id,
        PoolError::BetNotOwnedByProgram
    );

    let bet: Bet = {
        let data = bet_ai
            .try_borrow_data()
            .map_err(|_| error!(PoolError::AccountBorrowFailed))?;
        let mut slice: &[u8] = &data;
        Bet::try_deserialize(&mut slice)?
    };

    require!(bet.pool_id == pool_id, PoolError::BetPdaMismatch);

    let pool_le = pool_id.to_le_bytes();
    let (expected_pda, _bump) = Pubkey::find_program_address(
        &[BET_SEED, &pool_le, bet.player.as_ref()],
        program_id,
    );
    require_keys_eq!(expected_pda, *bet_ai.key, PoolError::BetPdaMismatch);

    require!(
        token_ai.owner == &token::ID,
        PoolError::InvalidPlayerTokenAccount
    );
    let token_acc: token::TokenAccount = {
        let data = token_ai
            .try_borrow_data()
            .map_err(|_| error!(PoolError::AccountBorrowFailed))?;
        let mut slice: &[u8] = &data;
        token::TokenAccount::try_deserialize(&mut slice)?
    };
    require_keys_eq!(token_acc.owner, bet.player, PoolError::InvalidPlayerTokenAccount);
    require_keys_eq!(token_acc.mint, mint, PoolError::MintMismatch);

    Ok(bet)
}

fn persist_bet(bet_ai: &AccountInfo, bet: &Bet) -> Result<()> {
    let mut data_mut = bet_ai
        .try_borrow_mut_data()
        .map_err(|_| error!(PoolError::AccountBorrowFailed))?;
    let mut cursor = std::io::Cursor::new(&mut data_mut[..]);
    bet.try_serialize(&mut cursor)?;
    Ok(())
}

pub fn finish_pool<'info>(
    ctx: Context<'_, '_, 'info, 'info, FinishPool<'info>>,
    pool_id: u64,
    winners: Vec<String>,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, PoolError::Paused);

    let pool = &mut ctx.accounts.pool;
    require!(pool.pool_id == pool_id, PoolError::PoolPdaMismatch);
    require!(pool.is_open(), PoolError::AlreadyResolved);
    require_keys_eq!(pool.creator, ctx.accounts.creator.key(), PoolError::Unauthorized);

    let winners = normalize_winners(&winners, &pool.options)?;

    // The caller must hand over every live bet, as (bet, token account) pairs.
    let expected = (pool.bet_count as usize)
        .checked_mul(2)
        .ok_or(PoolError::MathOverflow)?;
    require!(
        ctx.remaining_accounts.len() == expected,
        PoolError::IncompleteBetSet
    );

    // First pass: validate every pair and count winning bets.
    let mut entries: Vec<(usize, Bet, bool)> = Vec::with_capacity(pool.bet_count as usize);
    let mut seen: Vec<Pubkey> = Vec::with_capacity(pool.bet_count as usize);
    let mut winner_count: u64 = 0;

    for i in (0..ctx.remaining_accounts.len()).step_by(2) {
        let bet_ai = &ctx.remaining_accounts[i];
        let token_ai = &ctx.remaining_accounts[i + 1];

        require!(!seen.contains(bet_ai.key), PoolError::DuplicateBetEntry);
        seen.push(*bet_ai.key);

        let bet = load_bet_pair(bet_ai, token_ai, pool_id, cfg.mint, ctx.program_id)?;

        let won = winners.iter().any(|w| *w == bet.option);
        if won {
            winner_count = winner_count
                .checked_add(1)
                .ok_or(PoolError::MathOverflow)?;
        }
        entries.push((i, bet, won));
    }

    let prize = if winner_count > 0 {
        prize_per_winner(pool.total_stake, winner_count)?
    } else {
        0
    };

    // total_stake is cumulative, so after early withdrawals the vault can
    // hold less than the computed payout. Abort before any transfer.
    let payout_total = prize
        .checked_mul(winner_count)
        .ok_or(PoolError::MathOverflow)?;
    require!(
        ctx.accounts.vault.amount >= payout_total,
        PoolError::InsufficientVaultFunds
    );

    let current_slot = Clock::get()?.slot;
    let pool_le = pool_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[POOL_SEED, &pool_le, &[pool.bump]]];

    // Second pass: pay winners, mark every bet settled.
    for (i, bet, won) in entries.iter_mut() {
        if *won && prize > 0 {
            token::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.vault.to_account_info(),
                        to: ctx.remaining_accounts[*i + 1].to_account_info(),
                        authority: pool.to_account_info(),
                    },
                    signer_seeds,
                ),
                prize,
            )?;
            bet.payout = prize;
        }

        bet.settled = true;
        bet.settled_slot = current_slot;
        persist_bet(&ctx.remaining_accounts[*i], bet)?;
    }

    // Result write is monotonic: no instruction touches these fields again.
    pool.state = PoolState::Finished as u8;
    pool.winning_options = winners.clone();
    pool.resolved_slot = current_slot;

    msg!(
        "pool {} finished: {} winning bets, prize {} each",
        pool_id,
        winner_count,
        prize
    );

    emit!(PoolFinished {
        pool_id,
        winning_options: winners,
        winner_count,
        prize_per_winner: prize,
        total_stake: pool.total_stake,
    });

    Ok(())
}

pub fn cancel_pool<'info>(
    ctx: Context<'_, '_, 'info, 'info, CancelPool<'info>>,
    pool_id: u64,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, PoolError::Paused);

    let pool = &mut ctx.accounts.pool;
    require!(pool.pool_id == pool_id, PoolError::PoolPdaMismatch);
    require!(pool.is_open(), PoolError::AlreadyResolved);
    require_keys_eq!(pool.creator, ctx.accounts.creator.key(), PoolError::Unauthorized);

    let expected = (pool.bet_count as usize)
        .checked_mul(2)
        .ok_or(PoolError::MathOverflow)?;
    require!(
        ctx.remaining_accounts.len() == expected,
        PoolError::IncompleteBetSet
    );

    let current_slot = Clock::get()?.slot;
    let pool_le = pool_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[POOL_SEED, &pool_le, &[pool.bump]]];

    let mut seen: Vec<Pubkey> = Vec::with_capacity(pool.bet_count as usize);
    let mut refunded: u64 = 0;

    for i in (0..ctx.remaining_accounts.len()).step_by(2) {
        let bet_ai = &ctx.remaining_accounts[i];
        let token_ai = &ctx.remaining_accounts[i + 1];

        require!(!seen.contains(bet_ai.key), PoolError::DuplicateBetEntry);
        seen.push(*bet_ai.key);

        let mut bet = load_bet_pair(bet_ai, token_ai, pool_id, cfg.mint, ctx.program_id)?;

        // Cancellation refunds the full recorded amount, no fee.
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: token_ai.to_account_info(),
                    authority: pool.to_account_info(),
                },
                signer_seeds,
            ),
            bet.amount,
        )?;

        bet.settled = true;
        bet.payout = bet.amount;
        bet.settled_slot = current_slot;
        persist_bet(bet_ai, &bet)?;

        refunded = refunded.checked_add(1).ok_or(PoolError::MathOverflow)?;
    }

    pool.state = PoolState::Cancelled as u8;
    pool.resolved_slot = current_slot;

    msg!("pool {} cancelled: {} bets refunded", pool_id, refunded);

    emit!(PoolCancelled {
        pool_id,
        refunded_bets: refunded,
    });

    Ok(())
}
