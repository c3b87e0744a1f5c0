use anchor_lang::prelude::*;

use crate::constants::BASIS_POINTS_DENOMINATOR;
use crate::error::StakingError;

#[account]
#[derive(Default)]
pub struct Pool {
    pub id: u8,
    pub basis_points: u32,
    pub lock_time: i64,
    pub is_active: bool,
    pub bump: u8,
}

impl Pool {
    pub const LEN: usize = 8 + 1 + 4 + 8 + 1 + 1;

    /// Reward for one completed lock window: `amount * basis_points / 10000`, floored.
    pub fn reward_for(&self, amount: u64) -> Result<u64> {
        let reward = (amount as u128)
            .checked_mul(self.basis_points as u128)
            .ok_or(StakingError::MathOverflow)?
            .checked_div(BASIS_POINTS_DENOMINATOR as u128)
            .ok_or(StakingError::MathOverflow)?;

        u64::try_from(reward).map_err(|_| error!(StakingError::MathOverflow))
    }

    /// Returns whether the flag actually changed.
    pub fn set_active(&mut self, active: bool) -> bool {
        if self.is_active == active {
            return false;
        }
        self.is_active = active;
        true
    }
}
