//! Instruction handlers for the Lock Staking program.

pub mod admin;
pub mod claim;
pub mod create_pool;
pub mod fund_vault;
pub mod initialize;
pub mod stake;
pub mod withdraw;

pub use admin::*;
pub use claim::*;
pub use create_pool::*;
pub use fund_vault::*;
pub use initialize::*;
pub use stake::*;
pub use withdraw::*;
