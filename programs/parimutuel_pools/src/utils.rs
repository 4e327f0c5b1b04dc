use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOMINATOR, MAX_OPTIONS, MAX_OPTION_LEN, MIN_OPTIONS},
    errors::PoolError,
};

// -----------------
// Seeds / constants
// -----------------
pub const POOL_REGISTRY_SEED: &[u8] = b"pool_registry_v1";

pub const CONFIG_SEED: &[u8] = b"config_v1";
pub const POOL_SEED: &[u8] = b"pool_v1";
pub const VAULT_SEED: &[u8] = b"stake_vault_v1";
pub const BET_SEED: &[u8] = b"bet_v1";

pub const TREASURY_SEED: &[u8] = b"treasury_v1";

// ---------------------
// Return-data payloads
// ---------------------
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub enum PoolOutcome {
    Winners(Vec<String>),
    Cancelled,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct PoolView {
    pub pool_id: u64,
    pub creator: Pubkey,
    pub description: String,
    pub options: Vec<String>,
    pub total_stake: u64,
    pub bet_count: u64,
    pub result: Option<PoolOutcome>,
}

/// Compact row for list_open_pools. Description is excluded so a full
/// MAX_BATCH page fits in the 1024-byte return data window.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct PoolSummary {
    pub pool_id: u64,
    pub creator: Pubkey,
    pub total_stake: u64,
    pub bet_count: u64,
}

// -------------------------
// Option normalization
// -------------------------

/// Deduplicate preserving first-seen order and validate option strings.
/// A pool must end up with at least MIN_OPTIONS distinct entries.
pub fn normalize_options(raw: &[String]) -> Result<Vec<String>> {
    require!(raw.len() <= MAX_OPTIONS, PoolError::TooManyOptions);

    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for opt in raw {
        require!(!opt.is_empty(), PoolError::EmptyOption);
        require!(opt.len() <= MAX_OPTION_LEN, PoolError::OptionTooLong);
        if !out.iter().any(|o| o == opt) {
            out.push(opt.clone());
        }
    }

    require!(out.len() >= MIN_OPTIONS, PoolError::NotEnoughOptions);
    Ok(out)
}

/// Deduplicate the declared winners and check each against the pool's
/// options. The declaration itself must not be empty.
pub fn normalize_winners(raw: &[String], options: &[String]) -> Result<Vec<String>> {
    require!(!raw.is_empty(), PoolError::NoWinners);
    require!(raw.len() <= MAX_OPTIONS, PoolError::TooManyOptions);

    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for w in raw {
        require!(options.iter().any(|o| o == w), PoolError::InvalidOption);
        if !out.iter().any(|o| o == w) {
            out.push(w.clone());
        }
    }
    Ok(out)
}

// -------------------------
// Payout math
// -------------------------

/// Pro-rata prize per winning bet: total_stake / winner_count, integer
/// floor. The remainder stays in the vault.
pub fn prize_per_winner(total_stake: u64, winner_count: u64) -> Result<u64> {
    total_stake
        .checked_div(winner_count)
        .ok_or_else(|| error!(PoolError::MathOverflow))
}

/// Early-withdraw refund: amount minus the bps fee, both floored.
pub fn withdraw_refund(amount: u64, fee_bps: u16) -> Result<u64> {
    let fee = amount
        .checked_mul(fee_bps as u64)
        .ok_or(PoolError::MathOverflow)?
        .checked_div(BPS_DENOMINATOR)
        .ok_or(PoolError::MathOverflow)?;
    amount.checked_sub(fee).ok_or_else(|| error!(PoolError::MathOverflow))
}

#[cfg(test)]
mod option_tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn normalize_options_dedups_preserving_order() {
        let got = normalize_options(&s(&["A", "B", "A", "C", "B"])).unwrap();
        assert_eq!(got, s(&["A", "B", "C"]));
    }

    #[test]
    fn normalize_options_rejects_single_distinct_option() {
        let res = normalize_options(&s(&["A", "A", "A"]));
        assert!(res.is_err(), "one distinct option must be rejected");
    }

    #[test]
    fn normalize_options_rejects_empty_string() {
        let res = normalize_options(&s(&["A", ""]));
        assert!(res.is_err(), "empty option must be rejected");
    }

    #[test]
    fn normalize_options_rejects_oversized_option() {
        let long = "x".repeat(MAX_OPTION_LEN + 1);
        let res = normalize_options(&[long, "B".to_string()]);
        assert!(res.is_err());
    }

    #[test]
    fn normalize_winners_requires_membership() {
        let options = s(&["A", "B", "C"]);
        let res = normalize_winners(&s(&["D"]), &options);
        assert!(res.is_err(), "winner outside the option set must be rejected");
    }

    #[test]
    fn normalize_winners_rejects_empty_declaration() {
        let options = s(&["A", "B"]);
        let res = normalize_winners(&[], &options);
        assert!(res.is_err());
    }

    #[test]
    fn normalize_winners_dedups() {
        let options = s(&["A", "B", "C"]);
        let got = normalize_winners(&s(&["B", "A", "B"]), &options).unwrap();
        assert_eq!(got, s(&["B", "A"]));
    }
}

#[cfg(test)]
mod payout_tests {
    use super::*;
    use crate::constants::{DEFAULT_STAKE_AMOUNT, DEFAULT_WITHDRAW_FEE_BPS};

    #[test]
    fn single_winner_takes_whole_pot() {
        // two unit stakes on A and B, only the A bet wins: it takes both units
        let total = DEFAULT_STAKE_AMOUNT * 2;
        let prize = prize_per_winner(total, 1).unwrap();
        assert_eq!(prize, total);
    }

    #[test]
    fn prize_division_floors() {
        let prize = prize_per_winner(10, 3).unwrap();
        assert_eq!(prize, 3);
        // remainder 1 stays in the vault
        assert_eq!(10 - prize * 3, 1);
    }

    #[test]
    fn every_winning_bet_shares_the_pot() {
        // three unit bets, two on the winning option: both get an equal
        // share, not just the first one enumerated
        let total = 3 * DEFAULT_STAKE_AMOUNT;
        let prize = prize_per_winner(total, 2).unwrap();
        assert_eq!(prize, total / 2);
        assert!(prize * 2 <= total);
    }

    #[test]
    fn prize_with_zero_winners_errors() {
        let res = prize_per_winner(100, 0);
        assert!(res.is_err(), "division by zero winners must error");
    }

    #[test]
    fn withdraw_refund_default_fee_is_five_percent() {
        let refund = withdraw_refund(DEFAULT_STAKE_AMOUNT, DEFAULT_WITHDRAW_FEE_BPS).unwrap();
        assert_eq!(refund, DEFAULT_STAKE_AMOUNT - DEFAULT_STAKE_AMOUNT / 20);
    }

    #[test]
    fn withdraw_refund_fee_floors_toward_player() {
        // 19 * 500 / 10_000 = 0 (floor): tiny stakes pay no fee
        assert_eq!(withdraw_refund(19, 500).unwrap(), 19);
        // 20 * 500 / 10_000 = 1
        assert_eq!(withdraw_refund(20, 500).unwrap(), 19);
    }

    #[test]
    fn withdraw_refund_full_fee_returns_zero() {
        assert_eq!(withdraw_refund(1_000, 10_000).unwrap(), 0);
    }
}
