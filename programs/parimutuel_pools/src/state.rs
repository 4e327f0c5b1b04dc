use anchor_lang::prelude::*;

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_OPTIONS, MAX_OPTION_LEN};

#[account]
#[derive(InitSpace)]
pub struct PoolRegistry {
    pub admin: Pubkey,
    pub bump: u8,
    pub next_pool_id: u64,
    pub version: u16,
}

#[account]
#[derive(InitSpace)]
pub struct Config {
    pub admin: Pubkey,
    pub bump: u8,

    /// Fixed unit stake (base units of `mint`). Every bet pays exactly this.
    pub stake_amount: u64,

    /// Fee charged on early stake withdrawals (basis points). 500 = 5%.
    pub withdraw_fee_bps: u16,

    pub paused: bool,
    pub version: u16,

    /// SPL mint all pools stake in.
    pub mint: Pubkey,

    /// Treasury SPL TokenAccount (authority = config PDA).
    /// Receives vault residue when a pool account is reclaimed.
    pub treasury: Pubkey,
    pub treasury_bump: u8,
}

#[repr(u8)]
pub enum PoolState {
    Open = 0,
    Finished = 1,
    Cancelled = 2,
}

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub pool_id: u64,
    pub bump: u8,
    pub state: u8,

    pub creator: Pubkey,

    // SPL vault per pool (authority = pool PDA)
    pub vault: Pubkey,
    pub vault_bump: u8,

    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,

    /// Distinct options in creation order.
    #[max_len(MAX_OPTIONS, MAX_OPTION_LEN)]
    pub options: Vec<String>,

    /// Creator-declared winners. Empty while Open and after Cancelled.
    #[max_len(MAX_OPTIONS, MAX_OPTION_LEN)]
    pub winning_options: Vec<String>,

    /// Cumulative units staked. Withdrawals do NOT decrement this.
    pub total_stake: u64,

    /// Live Bet accounts. Settlement demands exactly this many entries.
    pub bet_count: u64,

    pub created_slot: u64,
    pub resolved_slot: u64,
}

impl Pool {
    pub fn is_open(&self) -> bool {
        self.state == PoolState::Open as u8
    }
}

#[account]
#[derive(InitSpace)]
pub struct Bet {
    pub pool_id: u64,
    pub player: Pubkey,
    pub bump: u8,

    #[max_len(MAX_OPTION_LEN)]
    pub option: String,

    /// Units actually transferred into the vault.
    pub amount: u64,

    // written by finish/cancel so rent can be reclaimed afterwards
    pub settled: bool,
    pub payout: u64,
    pub settled_slot: u64,

    pub created_slot: u64,
}
