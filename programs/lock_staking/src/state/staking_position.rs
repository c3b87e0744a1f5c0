use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::Pool;

#[account]
#[derive(Default)]
pub struct StakingPosition {
    pub owner: Pubkey,
    pub pool_id: u8,

    pub amount: u64,
    pub start_time: i64,
    pub total_claimed: u64,

    pub bump: u8,
}

impl StakingPosition {
    pub const LEN: usize = 8 + 32 + 1 + 8 + 8 + 8 + 1;

    /// A freshly allocated position has no owner until its first stake.
    pub fn is_opened(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn open(&mut self, owner: Pubkey, pool_id: u8, bump: u8) {
        self.owner = owner;
        self.pool_id = pool_id;
        self.amount = 0;
        self.start_time = 0;
        self.total_claimed = 0;
        self.bump = bump;
    }

    /// Adds principal and restarts the lock window at `now`.
    ///
    /// Any progress through the previous window is forfeited: the whole merged
    /// amount has to age a full lock period again before it can be withdrawn
    /// or claimed against.
    pub fn deposit(&mut self, amount: u64, now: i64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.start_time = now;
        Ok(())
    }

    pub fn is_lock_ended(&self, now: i64, lock_time: i64) -> bool {
        now.saturating_sub(self.start_time) >= lock_time
    }

    /// Zeroes the position and returns the principal it held.
    pub fn take_principal(&mut self) -> Result<u64> {
        require!(self.amount > 0, StakingError::NothingStaked);

        let principal = self.amount;
        self.amount = 0;
        self.start_time = 0;
        Ok(principal)
    }

    /// Books a paid reward and re-arms the lock window, so the same principal
    /// earns at most one reward per completed window.
    pub fn record_claim(&mut self, reward: u64, now: i64) -> Result<()> {
        self.total_claimed = self
            .total_claimed
            .checked_add(reward)
            .ok_or(StakingError::MathOverflow)?;
        self.start_time = now;
        Ok(())
    }

    /// Releases the whole principal once the pool's lock window has elapsed.
    pub fn withdraw(&mut self, pool: &Pool, now: i64) -> Result<u64> {
        require!(self.amount > 0, StakingError::NothingStaked);
        require!(
            self.is_lock_ended(now, pool.lock_time),
            StakingError::StillLocked
        );

        self.take_principal()
    }

    /// Settles one completed lock window and returns the reward owed.
    ///
    /// `reserve` is the vault balance not backing principal; a reward larger
    /// than it is refused so that a claim can never spend staked tokens.
    pub fn claim(&mut self, pool: &Pool, reserve: u64, now: i64) -> Result<u64> {
        require!(self.amount > 0, StakingError::NothingStaked);
        require!(
            self.is_lock_ended(now, pool.lock_time),
            StakingError::NotYetClaimable
        );

        let reward = pool.reward_for(self.amount)?;
        require!(reserve >= reward, StakingError::InsufficientRewardReserve);

        self.record_claim(reward, now)?;
        Ok(reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const T0: i64 = 1_700_000_000;

    fn opened() -> StakingPosition {
        let mut position = StakingPosition::default();
        position.open(Pubkey::new_unique(), 1, 254);
        position
    }

    #[test]
    fn open_binds_owner_and_pool() {
        let owner = Pubkey::new_unique();
        let mut position = StakingPosition::default();
        assert!(!position.is_opened());

        position.open(owner, 3, 250);
        assert!(position.is_opened());
        assert_eq!(position.owner, owner);
        assert_eq!(position.pool_id, 3);
        assert_eq!(position.amount, 0);
    }

    #[test]
    fn first_deposit_sets_amount_and_start() {
        let mut position = opened();
        position.deposit(1_000_000_000, T0).unwrap();

        assert_eq!(position.amount, 1_000_000_000);
        assert_eq!(position.start_time, T0);
        assert_ne!(position.start_time, 0);
    }

    #[test]
    fn restake_merges_principal_and_resets_window() {
        let mut position = opened();
        position.deposit(100, T0).unwrap();

        // 9 of 10 seconds elapsed, then topped up: the clock starts over
        position.deposit(50, T0 + 9).unwrap();
        assert_eq!(position.amount, 150);
        assert_eq!(position.start_time, T0 + 9);
        assert!(!position.is_lock_ended(T0 + 10, 10));
        assert!(position.is_lock_ended(T0 + 19, 10));
    }

    #[test]
    fn lock_ends_exactly_at_lock_time() {
        let mut position = opened();
        position.deposit(1, T0).unwrap();

        assert!(!position.is_lock_ended(T0, 10));
        assert!(!position.is_lock_ended(T0 + 9, 10));
        assert!(position.is_lock_ended(T0 + 10, 10));
        assert!(position.is_lock_ended(T0 + 11, 10));
    }

    #[test]
    fn zero_lock_time_is_always_ended() {
        let mut position = opened();
        position.deposit(1, T0).unwrap();
        assert!(position.is_lock_ended(T0, 0));
    }

    #[test]
    fn take_principal_empties_position() {
        let mut position = opened();
        position.deposit(1_000_000_000, T0).unwrap();

        assert_eq!(position.take_principal().unwrap(), 1_000_000_000);
        assert_eq!(position.amount, 0);
        assert_eq!(
            position.take_principal().unwrap_err(),
            Error::from(StakingError::NothingStaked)
        );
    }

    #[test]
    fn claim_rearms_the_window() {
        let mut position = opened();
        position.deposit(1_000_000_000, T0).unwrap();

        position.record_claim(6_000_000, T0 + 11).unwrap();
        assert_eq!(position.total_claimed, 6_000_000);
        assert_eq!(position.amount, 1_000_000_000);
        assert_eq!(position.start_time, T0 + 11);
        assert!(!position.is_lock_ended(T0 + 12, 10));
        assert!(position.is_lock_ended(T0 + 21, 10));
    }

    #[test]
    fn deposit_overflow_leaves_position_untouched() {
        let mut position = opened();
        position.deposit(u64::MAX, T0).unwrap();

        assert_eq!(
            position.deposit(1, T0 + 5).unwrap_err(),
            Error::from(StakingError::MathOverflow)
        );
        assert_eq!(position.amount, u64::MAX);
        assert_eq!(position.start_time, T0);
    }

    fn pool_60bp() -> Pool {
        Pool {
            id: 1,
            basis_points: 60,
            lock_time: 10,
            is_active: true,
            bump: 255,
        }
    }

    #[test]
    fn never_staked_position_has_nothing_to_withdraw_or_claim() {
        let pool = pool_60bp();
        let mut position = StakingPosition::default();

        assert_eq!(
            position.withdraw(&pool, T0).unwrap_err(),
            Error::from(StakingError::NothingStaked)
        );
        assert_eq!(
            position.claim(&pool, u64::MAX, T0).unwrap_err(),
            Error::from(StakingError::NothingStaked)
        );
    }

    #[test]
    fn withdraw_before_lock_changes_nothing() {
        let pool = pool_60bp();
        let mut position = opened();
        position.deposit(1_000_000_000, T0).unwrap();

        assert_eq!(
            position.withdraw(&pool, T0 + 9).unwrap_err(),
            Error::from(StakingError::StillLocked)
        );
        assert_eq!(position.amount, 1_000_000_000);
        assert_eq!(position.start_time, T0);

        assert_eq!(position.withdraw(&pool, T0 + 10).unwrap(), 1_000_000_000);
        assert_eq!(position.amount, 0);
    }

    #[test]
    fn claim_before_lock_pays_nothing() {
        let pool = pool_60bp();
        let mut position = opened();
        position.deposit(1_000_000_000, T0).unwrap();

        assert_eq!(
            position.claim(&pool, u64::MAX, T0 + 9).unwrap_err(),
            Error::from(StakingError::NotYetClaimable)
        );
        assert_eq!(position.total_claimed, 0);
        assert_eq!(position.start_time, T0);
    }

    #[test]
    fn claim_is_refused_beyond_the_reserve() {
        let pool = pool_60bp();
        let mut position = opened();
        position.deposit(1_000_000_000, T0).unwrap();

        assert_eq!(
            position.claim(&pool, 5_999_999, T0 + 10).unwrap_err(),
            Error::from(StakingError::InsufficientRewardReserve)
        );
        assert_eq!(position.total_claimed, 0);
        assert_eq!(position.start_time, T0);

        assert_eq!(position.claim(&pool, 6_000_000, T0 + 10).unwrap(), 6_000_000);
        assert_eq!(position.start_time, T0 + 10);
    }
}
