//! State structures for the Lock Staking program.
//!
//! One singleton `Status`, one `Pool` per id, and one `StakingPosition` per
//! (user, pool) pair. All of them live at program derived addresses.

pub mod pool;
pub mod staking_position;
pub mod status;

pub use pool::*;
pub use staking_position::*;
pub use status::*;
