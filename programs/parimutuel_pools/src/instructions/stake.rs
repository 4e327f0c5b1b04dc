use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::constants::MAX_POOL_BETS;
use crate::errors::PoolError;
use crate::events::{StakePlaced, StakeWithdrawn};
use crate::state::Pool;
use crate::utils::withdraw_refund;
use crate::{CloseBet, PlaceStake, WithdrawStake, POOL_SEED};

pub fn place_stake(ctx: Context<PlaceStake>, pool_id: u64, option: String) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, PoolError::Paused);

    let pool = &mut ctx.accounts.pool;
    require!(pool.pool_id == pool_id, PoolError::PoolPdaMismatch);
    require!(pool.is_open(), PoolError::AlreadyResolved);
    require!(pool.bet_count < MAX_POOL_BETS, PoolError::PoolFull);

    require!(
        pool.options.iter().any(|o| *o == option),
        PoolError::InvalidOption
    );

    // All validation done; only now does money move.
    let amount = cfg.stake_amount;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.player_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.player.to_account_info(),
            },
        ),
        amount,
    )?;

    let current_slot = Clock::get()?.slot;

    let bet = &mut ctx.accounts.bet;
    bet.pool_id = pool_id;
    bet.player = ctx.accounts.player.key();
    bet.bump = ctx.bumps.bet;
    bet.option = option.clone();
    bet.amount = amount;

    bet.settled = false;
    bet.payout = 0;
    bet.settled_slot = 0;

    bet.created_slot = current_slot;

    pool.total_stake = pool
        .total_stake
        .checked_add(amount)
        .ok_or(PoolError::MathOverflow)?;
    pool.bet_count = pool
        .bet_count
        .checked_add(1)
        .ok_or(PoolError::MathOverflow)?;

    emit!(StakePlaced {
        pool_id,
        player: bet.player,
        option,
        amount,
    });

    Ok(())
}

pub fn withdraw_stake(ctx: Context<WithdrawStake>, pool_id: u64) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, PoolError::Paused);

    let pool = &mut ctx.accounts.pool;
    require!(pool.pool_id == pool_id, PoolError::PoolPdaMismatch);
    require!(pool.is_open(), PoolError::AlreadyResolved);

    let bet = &ctx.accounts.bet;
    require!(bet.pool_id == pool_id, PoolError::BetPdaMismatch);

    let refund = withdraw_refund(bet.amount, cfg.withdraw_fee_bps)?;
    let fee = bet
        .amount
        .checked_sub(refund)
        .ok_or(PoolError::MathOverflow)?;

    let pool_le = pool_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[POOL_SEED, &pool_le, &[pool.bump]]];

    if refund > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.player_token_account.to_account_info(),
                    authority: pool.to_account_info(),
                },
                signer_seeds,
            ),
            refund,
        )?;
    }

    // total_stake intentionally NOT decremented: a later finish_pool still
    // splits the cumulative figure. The fee stays in the vault.
    pool.bet_count = pool
        .bet_count
        .checked_sub(1)
        .ok_or(PoolError::MathOverflow)?;

    emit!(StakeWithdrawn {
        pool_id,
        player: ctx.accounts.player.key(),
        refund,
        fee,
    });

    // Bet account is closed by the `close = player` constraint.
    Ok(())
}

pub fn close_bet(ctx: Context<CloseBet>, pool_id: u64) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, PoolError::Paused);

    let bet = &ctx.accounts.bet;
    require!(bet.pool_id == pool_id, PoolError::BetPdaMismatch);

    // The pool account is unchecked in the context so a reclaimed pool can
    // still be passed; the address must match the PDA for this pool_id.
    let pool_le = pool_id.to_le_bytes();
    let (expected_pool, _bump) =
        Pubkey::find_program_address(&[POOL_SEED, &pool_le], ctx.program_id);
    require_keys_eq!(expected_pool, ctx.accounts.pool.key(), PoolError::PoolPdaMismatch);

    let pool_alive =
        ctx.accounts.pool.lamports() > 0 && !ctx.accounts.pool.data_is_empty();

    if pool_alive {
        let pool_data = ctx.accounts.pool.try_borrow_data()?;
        let mut slice: &[u8] = &pool_data;
        let mut pool_state = Pool::try_deserialize(&mut slice)?;
        require!(pool_state.pool_id == pool_id, PoolError::PoolPdaMismatch);

        // While the pool is live, rent comes back through withdraw_stake
        // (Open) or after settlement wrote the bet.
        require!(!pool_state.is_open(), PoolError::NotResolved);
        require!(bet.settled, PoolError::BetNotSettled);

        if pool_state.bet_count > 0 {
            pool_state.bet_count -= 1;
        }

        drop(pool_data);
        let mut pool_data_mut = ctx.accounts.pool.try_borrow_mut_data()?;
        let mut w = std::io::Cursor::new(&mut pool_data_mut[..]);
        pool_state.try_serialize(&mut w)?;
    }
    // Pool account already reclaimed: nothing left to pay out, any
    // straggler bet may recover its rent.

    // Context `close = player` handles the lamport transfer.
    Ok(())
}
