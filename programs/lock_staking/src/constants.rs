//! Program constants for the Lock Staking program.
//!
//! PDA seeds for every account the program derives, and the denominator used
//! by the basis-point reward model.

/// Seed for the custodial token vault PDA (also its own token authority)
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for the singleton status PDA
pub const STATUS_SEED: &[u8] = b"status";

/// Seed for pool PDAs, followed by the one-byte pool id
pub const POOL_SEED: &[u8] = b"pool";

/// Seed for staking position PDAs, followed by the pool id and the owner key
pub const POSITION_SEED: &[u8] = b"position";

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Id assigned to the first pool; ids are sequential from here
pub const FIRST_POOL_ID: u8 = 1;
