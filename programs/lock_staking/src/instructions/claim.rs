//! Claim instruction handler.
//!
//! Pays one reward of `amount * basis_points / 10000` for a completed lock
//! window and starts a new window over the same, still staked, principal.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::ClaimEvent;
use crate::state::{Pool, StakingPosition, Status};

/// Accounts required for claiming rewards.
#[derive(Accounts)]
#[instruction(pool_id: u8)]
pub struct Claim<'info> {
    /// The position owner.
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
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

    /// Seeds bind the position to the signer. A pair that never staked is
    /// allocated here so the handler can report `NothingStaked`; the failed
    /// instruction reverts the allocation.
    #[account(
        init_if_needed,
        payer = user,
        space = StakingPosition::LEN,
        seeds = [POSITION_SEED, &[pool_id], user.key().as_ref()],
        bump
    )]
    pub position: Account<'info, StakingPosition>,

    /// User's token account for receiving rewards.
    #[account(
        mut,
        constraint = user_token_account.mint == status.token @ StakingError::InvalidTokenAccount,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Vault paying the reward out of its reserve.
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = status.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

/// Claim the reward for a completed lock window.
///
/// # Errors
/// - `NothingStaked` if the position is empty
/// - `NotYetClaimable` if the lock window has not elapsed
/// - `InsufficientRewardReserve` if paying would dip into staked principal
pub fn handler(ctx: Context<Claim>, pool_id: u8) -> Result<()> {
    let clock = Clock::get()?;
    let reserve = ctx.accounts.status.reward_reserve(ctx.accounts.vault.amount);

    let user = ctx.accounts.user.key();
    let position = &mut ctx.accounts.position;
    if !position.is_opened() {
        position.open(user, pool_id, ctx.bumps.position);
    }

    let reward = position.claim(&ctx.accounts.pool, reserve, clock.unix_timestamp)?;

    ctx.accounts.status.vault_signer().pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.user_token_account,
        reward,
    )?;

    msg!("Claimed {} reward tokens from pool {}", reward, pool_id);
    msg!(
        "Total claimed by position: {}",
        ctx.accounts.position.total_claimed
    );

    emit!(ClaimEvent {
        user,
        pool_id,
        reward,
        total_claimed: ctx.accounts.position.total_claimed,
    });

    Ok(())
}
