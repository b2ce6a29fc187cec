use anchor_lang::prelude::*;

use crate::constants::COMPLEXITY_CLASS_COUNT;

#[event]
pub struct CostsConfigUpdated {
    pub admin: Pubkey,
    pub old_costs: [u64; COMPLEXITY_CLASS_COUNT],
    pub new_costs: [u64; COMPLEXITY_CLASS_COUNT],
}

#[event]
pub struct CacheSizeUpdated {
    pub admin: Pubkey,
    pub old_size: u32,
    pub new_size: u32,
}

#[event]
pub struct AdminProposed {
    pub admin: Pubkey,
    pub proposed: Pubkey,
}

#[event]
pub struct AdminProposalCancelled {
    pub admin: Pubkey,
    pub proposed: Pubkey,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
