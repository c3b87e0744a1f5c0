//! Create pool instruction handler.
//!
//! Pools are numbered 1, 2, 3, ... with no gaps. The caller proposes the id so
//! the pool PDA can be derived client-side, and the handler rejects anything
//! other than the next id in sequence.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolCreatedEvent;
use crate::state::{Pool, Status};

/// Accounts required for pool creation.
#[derive(Accounts)]
#[instruction(pool_id: u8)]
pub struct CreatePool<'info> {
    /// Must be the status owner.
    #[account(
        mut,
        constraint = signer.key() == status.owner @ StakingError::Unauthorized
    )]
    pub signer: Signer<'info>,

    /// New pool account. `init_if_needed` lets a reused id reach the handler
    /// and fail with `InvalidPoolId` rather than an allocation error.
    #[account(
        init_if_needed,
        payer = signer,
        space = Pool::LEN,
        seeds = [POOL_SEED, &[pool_id]],
        bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [STATUS_SEED],
        bump = status.bump
    )]
    pub status: Account<'info, Status>,

    pub system_program: Program<'info, System>,
}

/// Create a new pool.
///
/// # Arguments
/// * `pool_id` - Must equal `status.total_pools + 1`
/// * `basis_points` - Reward per completed lock window (10000 = 100%)
/// * `lock_time` - Lock window in seconds
pub fn handler(
    ctx: Context<CreatePool>,
    pool_id: u8,
    basis_points: u32,
    lock_time: i64,
) -> Result<()> {
    require!(lock_time >= 0, StakingError::InvalidInputValues);

    ctx.accounts.status.register_pool(pool_id)?;

    let pool = &mut ctx.accounts.pool;
    pool.id = pool_id;
    pool.basis_points = basis_points;
    pool.lock_time = lock_time;
    pool.is_active = true;
    pool.bump = ctx.bumps.pool;

    msg!(
        "Created pool {} - {}bp per {}s lock window",
        pool_id,
        basis_points,
        lock_time
    );
    msg!("Total pools: {}", ctx.accounts.status.total_pools);

    emit!(PoolCreatedEvent {
        pool_id,
        basis_points,
        lock_time,
    });

    Ok(())
}
