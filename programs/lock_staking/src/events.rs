use anchor_lang::prelude::*;

#[event]
pub struct InitializeEvent {
    pub owner: Pubkey,
    pub token: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct PoolCreatedEvent {
    pub pool_id: u8,
    pub basis_points: u32,
    pub lock_time: i64,
}

#[event]
pub struct PoolStatusEvent {
    pub pool_id: u8,
    pub is_active: bool,
}

#[event]
pub struct StakeEvent {
    pub user: Pubkey,
    pub pool_id: u8,
    pub amount: u64,
    pub position_amount: u64,
    pub start_time: i64,
}

#[event]
pub struct WithdrawEvent {
    pub user: Pubkey,
    pub pool_id: u8,
    pub amount: u64,
}

#[event]
pub struct ClaimEvent {
    pub user: Pubkey,
    pub pool_id: u8,
    pub reward: u64,
    pub total_claimed: u64,
}

#[event]
pub struct VaultFundedEvent {
    pub funder: Pubkey,
    pub amount: u64,
    pub reserve: u64,
}

#[event]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
