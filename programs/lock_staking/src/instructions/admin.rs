//! Admin instruction handlers.
//!
//! Handles owner-only operations on the status registry and pools.
//!
//! ## Security Guarantees
//! - All admin functions require signer == status.owner
//! - PDA validation ensures the canonical status and pool accounts
//! - Vault and mint authority are untouched by any admin operation

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::{OwnershipTransferredEvent, PoolStatusEvent};
use crate::state::{Pool, Status};

/// Accounts required for status-level admin operations.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The current owner.
    /// SECURITY: Must be signer; matched against status.owner in the handler.
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [STATUS_SEED],
        bump = status.bump
    )]
    pub status: Account<'info, Status>,
}

/// Accounts required for pool-level admin operations.
#[derive(Accounts)]
#[instruction(pool_id: u8)]
pub struct PoolControl<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [STATUS_SEED],
        bump = status.bump
    )]
    pub status: Account<'info, Status>,

    #[account(
        mut,
        seeds = [POOL_SEED, &[pool_id]],
        bump = pool.bump,
        constraint = pool.id == pool_id @ StakingError::InvalidPoolId
    )]
    pub pool: Account<'info, Pool>,
}

/// Hand the owner role to another wallet.
///
/// # Arguments
/// * `new_owner` - New owner pubkey, must not be the default key
pub fn transfer_ownership_handler(ctx: Context<AdminControl>, new_owner: Pubkey) -> Result<()> {
    let signer = ctx.accounts.owner.key();
    let status = &mut ctx.accounts.status;
    let previous_owner = status.owner;
    status.transfer_ownership(signer, new_owner)?;

    msg!("Ownership transferred: {} -> {}", previous_owner, new_owner);

    emit!(OwnershipTransferredEvent {
        previous_owner,
        new_owner,
    });

    Ok(())
}

/// Open or close a pool to new stakes.
///
/// Withdraw and claim stay available on an inactive pool, so deactivating a
/// pool never traps principal.
pub fn set_pool_active_handler(
    ctx: Context<PoolControl>,
    pool_id: u8,
    active: bool,
) -> Result<()> {
    let status = &ctx.accounts.status;
    status.require_owner(ctx.accounts.owner.key())?;
    require!(status.has_pool(pool_id), StakingError::InvalidPoolId);

    if !ctx.accounts.pool.set_active(active) {
        return Ok(());
    }

    msg!(
        "Pool {} {}",
        pool_id,
        if active { "ACTIVATED" } else { "DEACTIVATED" }
    );

    emit!(PoolStatusEvent {
        pool_id,
        is_active: active,
    });

    Ok(())
}
