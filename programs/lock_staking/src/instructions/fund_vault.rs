//! Fund vault instruction handler.
//!
//! Deposits reward tokens into the vault without creating principal, which
//! makes them part of the reward reserve that `claim` pays from.
//!
//! ## Security Guarantees
//! - Vault validation ensures the canonical PDA
//! - Mint validation prevents wrong token deposits
//! - Anyone can fund (no owner restriction)

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::VaultFundedEvent;
use crate::state::Status;
use crate::vault;

/// Accounts required for funding the vault.
#[derive(Accounts)]
pub struct FundVault<'info> {
    /// The funder (permissionless).
    pub funder: Signer<'info>,

    #[account(
        seeds = [STATUS_SEED],
        bump = status.bump
    )]
    pub status: Account<'info, Status>,

    /// Funder's token account.
    /// SECURITY: Mint and owner validation.
    #[account(
        mut,
        constraint = funder_token_account.mint == status.token @ StakingError::InvalidTokenAccount,
        constraint = funder_token_account.owner == funder.key() @ StakingError::Unauthorized
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = status.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Fund the vault's reward reserve.
///
/// # Arguments
/// * `amount` - Amount of tokens to deposit
pub fn handler(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::InvalidAmount);

    vault::deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.funder_token_account,
        &ctx.accounts.vault,
        &ctx.accounts.funder,
        amount,
    )?;

    // Reload vault to get updated balance
    ctx.accounts.vault.reload()?;
    let reserve = ctx.accounts.status.reward_reserve(ctx.accounts.vault.amount);

    msg!("Vault funded with {} tokens", amount);
    msg!("Reward reserve: {}", reserve);
    msg!("Funder: {}", ctx.accounts.funder.key());

    emit!(VaultFundedEvent {
        funder: ctx.accounts.funder.key(),
        amount,
        reserve,
    });

    Ok(())
}
