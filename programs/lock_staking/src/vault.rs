//! Token custody for the program vault.
//!
//! Deposits are authorized by the depositing wallet. Payouts are authorized by
//! the vault PDA itself, and the seeds for that signature can only be produced
//! through a [`VaultSigner`] obtained from the status account.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;

/// Moves `amount` from a wallet-owned token account into the vault.
pub fn deposit<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    vault: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer {
        from: from.to_account_info(),
        to: vault.to_account_info(),
        authority: authority.to_account_info(),
    };
    let cpi_program = token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)
}

/// Signing capability over the vault PDA.
pub struct VaultSigner {
    bump: u8,
}

impl VaultSigner {
    pub(crate) fn new(bump: u8) -> Self {
        Self { bump }
    }

    /// Moves `amount` out of the vault, signed by the vault PDA.
    pub fn pay_out<'info>(
        &self,
        token_program: &Program<'info, Token>,
        vault: &Account<'info, TokenAccount>,
        to: &Account<'info, TokenAccount>,
        amount: u64,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        let bump = [self.bump];
        let seeds: &[&[u8]] = &[VAULT_SEED, &bump];
        let signer_seeds = &[seeds];

        let cpi_accounts = Transfer {
            from: vault.to_account_info(),
            to: to.to_account_info(),
            authority: vault.to_account_info(),
        };
        let cpi_program = token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, amount)
    }
}
