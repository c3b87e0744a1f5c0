use anchor_lang::prelude::*;

use crate::constants::FIRST_POOL_ID;
use crate::error::StakingError;
use crate::vault::VaultSigner;

#[account]
#[derive(Default)]
pub struct Status {
    pub owner: Pubkey,
    pub token: Pubkey,

    pub total_pools: u8,
    pub total_staked: u64,

    pub vault_bump: u8,
    pub bump: u8,
}

impl Status {
    pub const LEN: usize = 8 + (32 * 2) + 1 + 8 + 1 + 1;

    /// The token mint is set exactly once, so a default key means the account
    /// was only just allocated.
    pub fn is_initialized(&self) -> bool {
        self.token != Pubkey::default()
    }

    pub fn require_uninitialized(&self) -> Result<()> {
        require!(!self.is_initialized(), StakingError::AlreadyInitialized);
        Ok(())
    }

    pub fn require_owner(&self, signer: Pubkey) -> Result<()> {
        require_keys_eq!(signer, self.owner, StakingError::Unauthorized);
        Ok(())
    }

    /// Hands the owner role to `new_owner`. The default key can never sign,
    /// so accepting it would strand the role.
    pub fn transfer_ownership(&mut self, signer: Pubkey, new_owner: Pubkey) -> Result<()> {
        self.require_owner(signer)?;
        require!(
            new_owner != Pubkey::default(),
            StakingError::InvalidInputValues
        );

        self.owner = new_owner;
        Ok(())
    }

    pub fn has_pool(&self, pool_id: u8) -> bool {
        pool_id >= FIRST_POOL_ID && pool_id <= self.total_pools
    }

    /// Accepts `pool_id` only when it is the next id in sequence, then counts it.
    pub fn register_pool(&mut self, pool_id: u8) -> Result<()> {
        let next_id = self
            .total_pools
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        require!(pool_id == next_id, StakingError::InvalidPoolId);

        self.total_pools = next_id;
        Ok(())
    }

    pub fn add_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn remove_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    /// Part of the vault balance that is not owed back as principal.
    pub fn reward_reserve(&self, vault_balance: u64) -> u64 {
        vault_balance.saturating_sub(self.total_staked)
    }

    pub fn vault_signer(&self) -> VaultSigner {
        VaultSigner::new(self.vault_bump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use proptest::prelude::*;

    #[test]
    fn fresh_status_is_not_initialized() {
        let mut status = Status::default();
        assert!(!status.is_initialized());

        status.token = Pubkey::new_unique();
        assert!(status.is_initialized());
    }

    #[test]
    fn second_initialize_is_rejected() {
        let mut status = Status::default();
        status.require_uninitialized().unwrap();

        status.token = Pubkey::new_unique();
        assert_eq!(
            status.require_uninitialized().unwrap_err(),
            Error::from(StakingError::AlreadyInitialized)
        );
    }

    #[test]
    fn non_owner_cannot_transfer_ownership() {
        let owner = Pubkey::new_unique();
        let mut status = Status {
            owner,
            ..Status::default()
        };

        let intruder = Pubkey::new_unique();
        assert_eq!(
            status.transfer_ownership(intruder, intruder).unwrap_err(),
            Error::from(StakingError::Unauthorized)
        );
        assert_eq!(status.owner, owner);
    }

    #[test]
    fn owner_transfers_ownership_exactly() {
        let owner = Pubkey::new_unique();
        let successor = Pubkey::new_unique();
        let mut status = Status {
            owner,
            ..Status::default()
        };

        status.transfer_ownership(owner, successor).unwrap();
        assert_eq!(status.owner, successor);

        // the previous owner has lost the role
        assert_eq!(
            status.transfer_ownership(owner, owner).unwrap_err(),
            Error::from(StakingError::Unauthorized)
        );
        status.require_owner(successor).unwrap();
    }

    #[test]
    fn ownership_cannot_go_to_the_default_key() {
        let owner = Pubkey::new_unique();
        let mut status = Status {
            owner,
            ..Status::default()
        };

        assert_eq!(
            status
                .transfer_ownership(owner, Pubkey::default())
                .unwrap_err(),
            Error::from(StakingError::InvalidInputValues)
        );
        assert_eq!(status.owner, owner);
    }

    #[test]
    fn pools_register_sequentially() {
        let mut status = Status::default();
        for id in 1..=5u8 {
            status.register_pool(id).unwrap();
            assert_eq!(status.total_pools, id);
        }
        assert!(status.has_pool(1));
        assert!(status.has_pool(5));
        assert!(!status.has_pool(0));
        assert!(!status.has_pool(6));
    }

    #[test]
    fn out_of_sequence_pool_id_is_rejected() {
        let mut status = Status::default();
        status.register_pool(1).unwrap();

        for bad_id in [0u8, 1, 3, 200] {
            assert_eq!(
                status.register_pool(bad_id).unwrap_err(),
                Error::from(StakingError::InvalidPoolId)
            );
            assert_eq!(status.total_pools, 1);
        }
    }

    #[test]
    fn pool_counter_does_not_wrap() {
        let mut status = Status {
            total_pools: u8::MAX,
            ..Status::default()
        };
        assert_eq!(
            status.register_pool(0).unwrap_err(),
            Error::from(StakingError::MathOverflow)
        );
        assert_eq!(status.total_pools, u8::MAX);
    }

    #[test]
    fn stake_totals_track_deposits_and_withdrawals() {
        let mut status = Status::default();
        status.add_stake(1_000_000_000).unwrap();
        status.add_stake(500).unwrap();
        assert_eq!(status.total_staked, 1_000_000_500);

        status.remove_stake(1_000_000_000).unwrap();
        assert_eq!(status.total_staked, 500);

        assert_eq!(
            status.remove_stake(501).unwrap_err(),
            Error::from(StakingError::MathOverflow)
        );
        assert_eq!(status.total_staked, 500);
    }

    #[test]
    fn reserve_excludes_principal() {
        let status = Status {
            total_staked: 1_000,
            ..Status::default()
        };
        assert_eq!(status.reward_reserve(1_500), 500);
        assert_eq!(status.reward_reserve(1_000), 0);
        assert_eq!(status.reward_reserve(10), 0);
    }

    proptest! {
        #[test]
        fn only_next_id_is_accepted(created in 0u8..100, proposed in any::<u8>()) {
            let mut status = Status::default();
            for id in 1..=created {
                status.register_pool(id).unwrap();
            }

            let result = status.register_pool(proposed);
            if proposed == created + 1 {
                prop_assert!(result.is_ok());
                prop_assert_eq!(status.total_pools, created + 1);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(status.total_pools, created);
            }
        }
    }
}
