// Centralized Protocol Constants

// Option & Description Limits
// ===========================

/// Minimum number of distinct options a pool must offer.
pub const MIN_OPTIONS: usize = 2;

/// Maximum number of distinct options per pool.
/// Bounded so Pool stays rent-cheap and PoolView fits in return data (1024 bytes).
pub const MAX_OPTIONS: usize = 8;

/// Maximum byte length of a single option string.
pub const MAX_OPTION_LEN: usize = 32;

/// Maximum byte length of the pool description.
pub const MAX_DESCRIPTION_LEN: usize = 200;

// Capacity & Batch Limits
// =======================

/// Maximum live bets per pool.
/// Settlement enumerates every live bet in a single transaction as
/// (bet, token-account) pairs; 24 pairs plus the fixed accounts stays
/// within transaction account limits.
pub const MAX_POOL_BETS: u64 = 24;

/// Maximum pool accounts walked by list_open_pools.
pub const MAX_BATCH: usize = 16;

// Centralized Protocol Defaults (Devnet)
// =====================================

/// Default unit stake in base units (1.0 token = 1_000_000_000, assuming 9 decimals).
pub const DEFAULT_STAKE_AMOUNT: u64 = 1_000_000_000;

/// Default fee on early stake withdrawals (basis points). 500 = 5%.
pub const DEFAULT_WITHDRAW_FEE_BPS: u16 = 500;

/// Basis point denominator.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;

/// Starting pool ID for a new registry.
pub const INITIAL_POOL_ID: u64 = 0;
