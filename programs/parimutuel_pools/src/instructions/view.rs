use anchor_lang::prelude::*;

use crate::constants::MAX_BATCH;
use crate::errors::PoolError;
use crate::state::{Pool, PoolState};
use crate::utils::{PoolOutcome, PoolSummary, PoolView, POOL_SEED};
use crate::{GetPool, ListOpenPools};

pub fn get_pool(ctx: Context<GetPool>, pool_id: u64) -> Result<PoolView> {
    let pool = &ctx.accounts.pool;
    require!(pool.pool_id == pool_id, PoolError::PoolPdaMismatch);

    let result = match pool.state {
        s if s == PoolState::Finished as u8 => {
            Some(PoolOutcome::Winners(pool.winning_options.clone()))
        }
        s if s == PoolState::Cancelled as u8 => Some(PoolOutcome::Cancelled),
        _ => None,
    };

    Ok(PoolView {
        pool_id: pool.pool_id,
        creator: pool.creator,
        description: pool.description.clone(),
        options: pool.options.clone(),
        total_stake: pool.total_stake,
        bet_count: pool.bet_count,
        result,
    })
}

pub fn list_open_pools<'info>(
    ctx: Context<'_, '_, 'info, 'info, ListOpenPools<'info>>,
) -> Result<Vec<PoolSummary>> {
    require!(
        ctx.remaining_accounts.len() <= MAX_BATCH,
        PoolError::TooManyEntries
    );

    let mut out: Vec<PoolSummary> = Vec::with_capacity(ctx.remaining_accounts.len());

    for pool_ai in ctx.remaining_accounts.iter() {
        require!(
            pool_ai.owner == ctx.program_id,
            PoolError::PoolPdaMismatch
        );

        let pool: Pool = {
            let data = pool_ai
                .try_borrow_data()
                .map_err(|_| error!(PoolError::AccountBorrowFailed))?;
            let mut slice: &[u8] = &data;
            Pool::try_deserialize(&mut slice)?
        };

        let pool_le = pool.pool_id.to_le_bytes();
        let (expected_pda, _bump) =
            Pubkey::find_program_address(&[POOL_SEED, &pool_le], ctx.program_id);
        require_keys_eq!(expected_pda, *pool_ai.key, PoolError::PoolPdaMismatch);

        if pool.is_open() {
            out.push(PoolSummary {
                pool_id: pool.pool_id,
                creator: pool.creator,
                total_stake: pool.total_stake,
                bet_count: pool.bet_count,
            });
        }
    }

    Ok(out)
}
