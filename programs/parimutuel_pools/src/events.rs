// Program events for off-chain indexing.
// Bet PDAs are closed after withdrawal/settlement, so event logs are the
// durable history of a pool.

use anchor_lang::prelude::*;

#[event]
pub struct PoolCreated {
    pub pool_id: u64,
    pub creator: Pubkey,
    pub option_count: u8,
    pub slot: u64,
}

#[event]
pub struct StakePlaced {
    pub pool_id: u64,
    pub player: Pubkey,
    pub option: String,
    pub amount: u64,
}

#[event]
pub struct StakeWithdrawn {
    pub pool_id: u64,
    pub player: Pubkey,
    pub refund: u64,
    pub fee: u64,
}

#[event]
pub struct PoolFinished {
    pub pool_id: u64,
    pub winning_options: Vec<String>,
    pub winner_count: u64,
    pub prize_per_winner: u64,
    pub total_stake: u64,
}

#[event]
pub struct PoolCancelled {
    pub pool_id: u64,
    pub refunded_bets: u64,
}

#[event]
pub struct PoolClosed {
    pub pool_id: u64,
    pub residue_swept: u64,
}
