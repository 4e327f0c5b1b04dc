use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;
pub use utils::*;

use solana_security_txt::security_txt;

security_txt! {
    // Required fields
    name: "Parimutuel Pools",
    project_url: "https://github.com/parimutuel-pools/parimutuel-pools",
    contacts: "link:https://github.com/parimutuel-pools/parimutuel-pools/issues",
    policy: "https://github.com/parimutuel-pools/parimutuel-pools/blob/main/SECURITY.md",

    // Optional fields
    preferred_languages: "en",
    source_code: "https://github.com/parimutuel-pools/parimutuel-pools"
}

declare_id!("GHcToocapkxTtFTEizCjV9mKLkhBdyDe5zzETanTnGt3");

#[program]
pub mod parimutuel_pools {
    use super::*;
    use crate::instructions::{admin, pool, settlement, stake, view};

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        stake_amount: u64,
        withdraw_fee_bps: u16,
    ) -> Result<()> {
        admin::initialize_config(ctx, stake_amount, withdraw_fee_bps)
    }

    pub fn close_config(ctx: Context<CloseConfig>) -> Result<()> {
        admin::close_config(ctx)
    }

    pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
        admin::set_pause(ctx, paused)
    }

    pub fn update_stake_amount(ctx: Context<UpdateStakeAmount>, new_stake_amount: u64) -> Result<()> {
        admin::update_stake_amount(ctx, new_stake_amount)
    }

    pub fn update_withdraw_fee(ctx: Context<UpdateWithdrawFee>, new_fee_bps: u16) -> Result<()> {
        admin::update_withdraw_fee(ctx, new_fee_bps)
    }

    pub fn initialize_pool_registry(
        ctx: Context<InitializePoolRegistry>,
        start_pool_id: u64,
    ) -> Result<()> {
        admin::initialize_pool_registry(ctx, start_pool_id)
    }

    // ----------------------------
    // Pool lifecycle
    // ----------------------------
    pub fn create_pool(
        ctx: Context<CreatePool>,
        description: String,
        options: Vec<String>,
    ) -> Result<u64> {
        pool::create_pool(ctx, description, options)
    }

    pub fn finish_pool<'info>(
        ctx: Context<'_, '_, 'info, 'info, FinishPool<'info>>,
        pool_id: u64,
        winners: Vec<String>,
    ) -> Result<()> {
        settlement::finish_pool(ctx, pool_id, winners)
    }

    pub fn cancel_pool<'info>(
        ctx: Context<'_, '_, 'info, 'info, CancelPool<'info>>,
        pool_id: u64,
    ) -> Result<()> {
        settlement::cancel_pool(ctx, pool_id)
    }

    pub fn close_pool(ctx: Context<ClosePool>, pool_id: u64) -> Result<()> {
        pool::close_pool(ctx, pool_id)
    }

    // ----------------------------
    // Staking
    // ----------------------------
    pub fn place_stake(ctx: Context<PlaceStake>, pool_id: u64, option: String) -> Result<()> {
        stake::place_stake(ctx, pool_id, option)
    }

    pub fn withdraw_stake(ctx: Context<WithdrawStake>, pool_id: u64) -> Result<()> {
        stake::withdraw_stake(ctx, pool_id)
    }

    pub fn close_bet(ctx: Context<CloseBet>, pool_id: u64) -> Result<()> {
        stake::close_bet(ctx, pool_id)
    }

    // ----------------------------
    // Views (return data)
    // ----------------------------
    pub fn get_pool(ctx: Context<GetPool>, pool_id: u64) -> Result<PoolView> {
        view::get_pool(ctx, pool_id)
    }

    pub fn list_open_pools<'info>(
        ctx: Context<'_, '_, 'info, 'info, ListOpenPools<'info>>,
    ) -> Result<Vec<PoolSummary>> {
        view::list_open_pools(ctx)
    }
}
