// programs/parimutuel_pools/src/contexts.rs

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::{Bet, Config, Pool, PoolRegistry};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [crate::CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// SPL mint all pools stake in (created off-chain in tests or deploy script)
    pub mint: Account<'info, Mint>,

    /// Treasury SPL = TokenAccount PDA controlled by the program (authority = config PDA)
    #[account(
        init,
        payer = admin,
        seeds = [crate::TREASURY_SEED],
        bump,
        token::mint = mint,
        token::authority = config
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct SetPause<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct UpdateStakeAmount<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct UpdateWithdrawFee<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct CloseConfig<'info> {
    #[account(
        mut,
        close = admin,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct InitializePoolRegistry<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = admin,
        space = 8 + PoolRegistry::INIT_SPACE,
        seeds = [crate::POOL_REGISTRY_SEED, config.key().as_ref()],
        bump
    )]
    pub pool_registry: Account<'info, PoolRegistry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(address = config.mint)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [crate::POOL_REGISTRY_SEED, config.key().as_ref()],
        bump = pool_registry.bump,
    )]
    pub pool_registry: Account<'info, PoolRegistry>,

    #[account(
        init,
        payer = creator,
        space = 8 + Pool::INIT_SPACE,
        seeds = [crate::POOL_SEED, pool_registry.next_pool_id.to_le_bytes().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init,
        payer = creator,
        seeds = [crate::VAULT_SEED, pool_registry.next_pool_id.to_le_bytes().as_ref()],
        bump,
        token::mint = mint,
        token::authority = pool
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct PlaceStake<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(address = config.mint)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [crate::POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(mut, address = pool.vault)]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = player,
        space = 8 + Bet::INIT_SPACE,
        seeds = [
            crate::BET_SEED,
            pool_id.to_le_bytes().as_ref(),
            player.key().as_ref(),
        ],
        bump
    )]
    pub bet: Account<'info, Bet>,

    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        constraint = player_token_account.mint == mint.key(),
        constraint = player_token_account.owner == player.key()
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct WithdrawStake<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(address = config.mint)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [crate::POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [crate::VAULT_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.vault_bump,
        token::mint = mint,
        token::authority = pool
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [
            crate::BET_SEED,
            pool_id.to_le_bytes().as_ref(),
            player.key().as_ref(),
        ],
        bump = bet.bump,
        has_one = player,
        close = player
    )]
    pub bet: Account<'info, Bet>,

    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        constraint = player_token_account.mint == mint.key(),
        constraint = player_token_account.owner == player.key()
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct FinishPool<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(address = config.mint)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [crate::POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [crate::VAULT_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.vault_bump,
        token::mint = mint,
        token::authority = pool
    )]
    pub vault: Account<'info, TokenAccount>,

    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    // bets + player token accounts via remaining_accounts, in (bet, token) pairs
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct CancelPool<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(address = config.mint)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [crate::POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [crate::VAULT_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.vault_bump,
        token::mint = mint,
        token::authority = pool
    )]
    pub vault: Account<'info, TokenAccount>,

    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    // bets + player token accounts via remaining_accounts, in (bet, token) pairs
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct ClosePool<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(address = config.mint)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        close = creator,
        seeds = [crate::POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
        has_one = creator
    )]
    pub pool: Account<'info, Pool>,

    // Residue (floor remainders) is swept here before the vault closes.
    #[account(
        mut,
        seeds = [crate::VAULT_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.vault_bump,
        token::mint = mint,
        token::authority = pool
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [crate::TREASURY_SEED],
        bump = config.treasury_bump,
        address = config.treasury
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct CloseBet<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Address is verified against the pool PDA in the handler. May
    /// already be reclaimed (zero lamports); while alive its bet_count is
    /// decremented, hence mut.
    #[account(mut)]
    pub pool: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [
            crate::BET_SEED,
            pool_id.to_le_bytes().as_ref(),
            player.key().as_ref(),
        ],
        bump = bet.bump,
        has_one = player,
        close = player
    )]
    pub bet: Account<'info, Bet>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct GetPool<'info> {
    #[account(
        seeds = [crate::POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,
}

#[derive(Accounts)]
pub struct ListOpenPools<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
    // pool accounts via remaining_accounts (read-only)
}
