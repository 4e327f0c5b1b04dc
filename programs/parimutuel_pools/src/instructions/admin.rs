use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::PoolError;
use crate::{
    CloseConfig, InitializeConfig, InitializePoolRegistry, SetPause, UpdateStakeAmount,
    UpdateWithdrawFee,
};

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    stake_amount: u64,
    withdraw_fee_bps: u16,
) -> Result<()> {
    require!(stake_amount > 0, PoolError::InvalidStakeAmount);
    require!(withdraw_fee_bps <= 10_000, PoolError::InvalidFeeBps);

    let cfg = &mut ctx.accounts.config;

    cfg.admin = ctx.accounts.admin.key();
    cfg.bump = ctx.bumps.config;

    cfg.stake_amount = stake_amount;
    cfg.withdraw_fee_bps = withdraw_fee_bps;

    cfg.paused = false;
    cfg.version = INITIAL_VERSION;

    cfg.mint = ctx.accounts.mint.key();

    cfg.treasury = ctx.accounts.treasury.key();
    cfg.treasury_bump = ctx.bumps.treasury;

    Ok(())
}

pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), PoolError::Unauthorized);
    cfg.paused = paused;
    Ok(())
}

pub fn update_stake_amount(ctx: Context<UpdateStakeAmount>, new_stake_amount: u64) -> Result<()> {
    require!(new_stake_amount > 0, PoolError::InvalidStakeAmount);

    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), PoolError::Unauthorized);

    // Affects new stakes only; live bets keep their recorded amount.
    cfg.stake_amount = new_stake_amount;

    Ok(())
}

pub fn update_withdraw_fee(ctx: Context<UpdateWithdrawFee>, new_fee_bps: u16) -> Result<()> {
    require!(new_fee_bps <= 10_000, PoolError::InvalidFeeBps);

    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), PoolError::Unauthorized);

    cfg.withdraw_fee_bps = new_fee_bps;

    Ok(())
}

pub fn initialize_pool_registry(
    ctx: Context<InitializePoolRegistry>,
    start_pool_id: u64,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), PoolError::Unauthorized);

    let pr = &mut ctx.accounts.pool_registry;
    pr.admin = cfg.admin;
    pr.bump = ctx.bumps.pool_registry;
    pr.next_pool_id = start_pool_id;
    pr.version = INITIAL_VERSION;

    Ok(())
}

pub fn close_config(ctx: Context<CloseConfig>) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), PoolError::Unauthorized);
    // The account closing is handled by the `close = admin` constraint in the context.
    Ok(())
}
