//! # Lock Staking Program
//!
//! A single-token, time-locked staking program with any number of pools.
//! Each pool has its own reward rate (basis points) and lock window:
//!
//! - Stake into a pool; re-staking merges principal and restarts the lock
//! - Withdraw the full principal once the lock window has elapsed
//! - Claim `amount * basis_points / 10000` per completed lock window
//!
//! ## Features
//! - One custodial vault holding all principal plus a reward reserve
//! - Sequential, gap-free pool ids assigned by the owner
//! - Owner controls for pool creation, pool activation and ownership transfer
//! - Safe math with overflow protection

use anchor_lang::prelude::*;

declare_id!("3gbCKLUwbRTeGKP12jvPFDP8H3jWPVgAeitrMG92k4KH");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod vault;

use instructions::*;

#[program]
pub mod lock_staking {
    use super::*;

    /// Creates the status registry and the vault for the given mint.
    ///
    /// # Errors
    /// Returns `AlreadyInitialized` on any call after the first.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Owner function to create the next pool.
    ///
    /// # Arguments
    /// * `ctx` - The context containing owner, status and new pool accounts
    /// * `pool_id` - Must be `total_pools + 1`
    /// * `basis_points` - Reward per completed lock window (10000 = 100%)
    /// * `lock_time` - Lock window in seconds
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the owner
    /// - `pool_id` is out of sequence
    pub fn create_pool(
        ctx: Context<CreatePool>,
        pool_id: u8,
        basis_points: u32,
        lock_time: i64,
    ) -> Result<()> {
        instructions::create_pool::handler(ctx, pool_id, basis_points, lock_time)
    }

    /// Stakes tokens into a pool.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for staking
    /// * `pool_id` - Pool to stake into
    /// * `amount` - Amount of tokens to stake
    ///
    /// # Errors
    /// Returns an error if:
    /// - Pool does not exist or is inactive
    /// - Amount is zero
    /// - Insufficient balance
    pub fn stake(ctx: Context<Stake>, pool_id: u8, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, pool_id, amount)
    }

    /// Withdraws the full principal of a position after its lock window.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Nothing is staked
    /// - Lock window has not elapsed
    pub fn withdraw(ctx: Context<Withdraw>, pool_id: u8) -> Result<()> {
        instructions::withdraw::handler(ctx, pool_id)
    }

    /// Claims the reward for a completed lock window without unstaking.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Nothing is staked
    /// - Lock window has not elapsed
    /// - Vault reserve cannot cover the reward
    pub fn claim(ctx: Context<Claim>, pool_id: u8) -> Result<()> {
        instructions::claim::handler(ctx, pool_id)
    }

    /// Owner function to transfer ownership to a new address.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the current owner
    /// - New owner is the default key
    pub fn transfer_ownership(ctx: Context<AdminControl>, new_owner: Pubkey) -> Result<()> {
        instructions::admin::transfer_ownership_handler(ctx, new_owner)
    }

    /// Owner function to open or close a pool to new stakes.
    pub fn set_pool_active(ctx: Context<PoolControl>, pool_id: u8, active: bool) -> Result<()> {
        instructions::admin::set_pool_active_handler(ctx, pool_id, active)
    }

    /// Deposits reward tokens into the vault reserve. Permissionless.
    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        instructions::fund_vault::handler(ctx, amount)
    }
}
