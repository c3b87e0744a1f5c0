//! Stake instruction handler.
//!
//! Handles depositing tokens into a pool. A second stake into the same pool
//! merges with the existing principal and restarts the lock window.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::StakeEvent;
use crate::state::{Pool, StakingPosition, Status};
use crate::vault;

/// Accounts required for staking.
#[derive(Accounts)]
#[instruction(pool_id: u8)]
pub struct Stake<'info> {
    /// The user staking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [STATUS_SEED],
        bump = status.bump
    )]
    pub status: Account<'info, Status>,

    #[account(
        seeds = [POOL_SEED, &[pool_id]],
        bump = pool.bump,
        constraint = pool.id == pool_id @ StakingError::InvalidPoolId
    )]
    pub pool: Account<'info, Pool>,

    /// User's position in this pool (created if first time staking).
    #[account(
        init_if_needed,
        payer = user,
        space = StakingPosition::LEN,
        seeds = [POSITION_SEED, &[pool_id], user.key().as_ref()],
        bump
    )]
    pub position: Account<'info, StakingPosition>,

    /// The staking token mint.
    #[account(
        constraint = mint.key() == status.token @ StakingError::InvalidTokenAccount
    )]
    pub mint: Account<'info, Mint>,

    /// User's token account for the staking token.
    #[account(
        mut,
        constraint = user_token_account.mint == mint.key() @ StakingError::InvalidTokenAccount,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = status.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

/// Stake tokens into a pool.
///
/// # Arguments
/// * `pool_id` - Pool to stake into
/// * `amount` - Amount of tokens to stake
///
/// # Errors
/// - `InvalidPoolId` if the pool was never created
/// - `InactivePool` if the owner has deactivated the pool
/// - `InvalidAmount` if amount is zero
pub fn handler(ctx: Context<Stake>, pool_id: u8, amount: u64) -> Result<()> {
    require!(
        ctx.accounts.status.has_pool(pool_id),
        StakingError::InvalidPoolId
    );
    require!(ctx.accounts.pool.is_active, StakingError::InactivePool);
    require!(amount > 0, StakingError::InvalidAmount);

    let clock = Clock::get()?;

    vault::deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.user_token_account,
        &ctx.accounts.vault,
        &ctx.accounts.user,
        amount,
    )?;

    let user = ctx.accounts.user.key();
    let position = &mut ctx.accounts.position;
    if !position.is_opened() {
        position.open(user, pool_id, ctx.bumps.position);
    }
    position.deposit(amount, clock.unix_timestamp)?;

    ctx.accounts.status.add_stake(amount)?;

    msg!("Staked {} tokens in pool {}", amount, pool_id);
    msg!("Position amount: {}", position.amount);
    msg!("Total staked: {}", ctx.accounts.status.total_staked);

    emit!(StakeEvent {
        user,
        pool_id,
        amount,
        position_amount: position.amount,
        start_time: position.start_time,
    });

    Ok(())
}
