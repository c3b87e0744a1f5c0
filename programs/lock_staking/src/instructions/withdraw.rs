//! Withdraw instruction handler.
//!
//! Returns the full principal of a position once its lock window has elapsed.
//! Rewards are not part of a withdrawal; they are paid only by `claim`.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::WithdrawEvent;
use crate::state::{Pool, StakingPosition, Status};

/// Accounts required for withdrawing.
#[derive(Accounts)]
#[instruction(pool_id: u8)]
pub struct Withdraw<'info> {
    /// The position owner.
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

    /// User's token account for receiving the principal.
    #[account(
        mut,
        constraint = user_token_account.mint == status.token @ StakingError::InvalidTokenAccount,
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

/// Withdraw the whole principal of a position.
///
/// # Errors
/// - `NothingStaked` if the position is empty
/// - `StillLocked` if the lock window has not elapsed
pub fn handler(ctx: Context<Withdraw>, pool_id: u8) -> Result<()> {
    let clock = Clock::get()?;

    let user = ctx.accounts.user.key();
    let position = &mut ctx.accounts.position;
    if !position.is_opened() {
        position.open(user, pool_id, ctx.bumps.position);
    }

    let principal = position.withdraw(&ctx.accounts.pool, clock.unix_timestamp)?;
    ctx.accounts.status.remove_stake(principal)?;

    ctx.accounts.status.vault_signer().pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.user_token_account,
        principal,
    )?;

    msg!("Withdrew {} tokens from pool {}", principal, pool_id);
    msg!("Total staked: {}", ctx.accounts.status.total_staked);

    emit!(WithdrawEvent {
        user,
        pool_id,
        amount: principal,
    });

    Ok(())
}
