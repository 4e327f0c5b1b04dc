use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::constants::MAX_DESCRIPTION_LEN;
use crate::errors::PoolError;
use crate::events::{PoolClosed, PoolCreated};
use crate::state::PoolState;
use crate::utils::normalize_options;
use crate::{ClosePool, CreatePool, POOL_SEED};

pub fn create_pool(
    ctx: Context<CreatePool>,
    description: String,
    options: Vec<String>,
) -> Result<u64> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, PoolError::Paused);

    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        PoolError::DescriptionTooLong
    );
    let options = normalize_options(&options)?;

    let current_slot = Clock::get()?.slot;

    let pr = &mut ctx.accounts.pool_registry;
    let pool_id = pr.next_pool_id;

    let pool = &mut ctx.accounts.pool;
    pool.pool_id = pool_id;
    pool.bump = ctx.bumps.pool;
    pool.state = PoolState::Open as u8;

    pool.creator = ctx.accounts.creator.key();

    pool.vault = ctx.accounts.vault.key();
    pool.vault_bump = ctx.bumps.vault;

    pool.description = description;
    pool.options = options;
    pool.winning_options = Vec::new();

    pool.total_stake = 0;
    pool.bet_count = 0;

    pool.created_slot = current_slot;
    pool.resolved_slot = 0;

    pr.next_pool_id = pr.next_pool_id.checked_add(1).ok_or(PoolError::MathOverflow)?;

    emit!(PoolCreated {
        pool_id,
        creator: pool.creator,
        option_count: pool.options.len() as u8,
        slot: current_slot,
    });

    Ok(pool_id)
}

pub fn close_pool(ctx: Context<ClosePool>, pool_id: u64) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, PoolError::Paused);

    let pool = &ctx.accounts.pool;
    require!(pool.pool_id == pool_id, PoolError::PoolPdaMismatch);
    require!(!pool.is_open(), PoolError::NotResolved);

    // Every Bet must have reclaimed its rent before the pool goes away.
    require!(pool.bet_count == 0, PoolError::IncompleteBetSet);

    // Sweep floor remainders to the treasury, then close the vault.
    let residue = ctx.accounts.vault.amount;

    let pool_le = pool_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[POOL_SEED, &pool_le, &[pool.bump]]];

    if residue > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: pool.to_account_info(),
                },
                signer_seeds,
            ),
            residue,
        )?;
    }

    let cpi_accounts = token::CloseAccount {
        account: ctx.accounts.vault.to_account_info(),
        destination: ctx.accounts.creator.to_account_info(),
        authority: pool.to_account_info(),
    };
    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    ))?;

    emit!(PoolClosed {
        pool_id,
        residue_swept: residue,
    });

    // pool PDA is closed by the `close = creator` constraint in the context.
    Ok(())
}
