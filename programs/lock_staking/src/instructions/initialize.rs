//! Initialize instruction handler.
//!
//! Creates the singleton status account and the custodial vault.
//!
//! ## Security Guarantees
//! - Vault is a PDA whose token authority is itself, never a wallet
//! - Mint address is locked to status permanently
//! - A second call fails instead of silently resetting state

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::InitializeEvent;
use crate::state::Status;

/// Accounts required for initialization.
///
/// ## Security Notes
/// - `status` and `vault` are `init_if_needed` so that a repeated call is
///   reported as `AlreadyInitialized` rather than an allocation failure
/// - Seeds ensure neither account can be swapped or replaced
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the status owner.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The singleton status account. Declared ahead of `vault` so a repeated
    /// call fails here before the vault's mint check runs.
    #[account(
        init_if_needed,
        payer = signer,
        space = Status::LEN,
        seeds = [STATUS_SEED],
        bump,
        constraint = !status.is_initialized() @ StakingError::AlreadyInitialized
    )]
    pub status: Account<'info, Status>,

    /// The vault that will hold staked principal and the reward reserve.
    #[account(
        init_if_needed,
        payer = signer,
        seeds = [VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = vault
    )]
    pub vault: Account<'info, TokenAccount>,

    /// The staking and reward token.
    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

/// Initialize the status registry and the vault.
///
/// # Errors
/// - `AlreadyInitialized` if the status account already names a token
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    ctx.accounts.status.require_uninitialized()?;

    let status = &mut ctx.accounts.status;
    status.owner = ctx.accounts.signer.key();
    status.token = ctx.accounts.mint.key();
    status.total_pools = 0;
    status.total_staked = 0;
    status.vault_bump = ctx.bumps.vault;
    status.bump = ctx.bumps.status;

    msg!("Lock Staking initialized");
    msg!("Owner: {}", status.owner);
    msg!("Token: {}", status.token);

    emit!(InitializeEvent {
        owner: status.owner,
        token: status.token,
        vault: ctx.accounts.vault.key(),
    });

    Ok(())
}
