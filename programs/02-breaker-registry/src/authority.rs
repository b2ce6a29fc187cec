use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::BreakerRegistry;

/// Evidence that the caller is the admin of a registry. Only `require_admin`
/// builds one, from the registry itself, and every registry mutator asks
/// for it.
#[derive(Debug)]
pub struct AdminProof {
    admin: Pubkey,
}

impl AdminProof {
    pub fn admin(&self) -> Pubkey {
        self.admin
    }
}

pub fn require_admin(registry: &BreakerRegistry, caller: &Pubkey) -> Result<AdminProof> {
    require_keys_eq!(*caller, registry.admin, RegistryError::Unauthorized);
    Ok(AdminProof {
        admin: registry.admin,
    })
}

/// Fails unless `signer` is the upgrade authority recorded in `program`'s
/// program data account.
pub fn require_upgrade_authority<T>(
    program: &Program<T>,
    program_data: &Account<ProgramData>,
    signer: &Pubkey,
) -> Result<()> {
    require!(
        program.programdata_address()? == Some(program_data.key()),
        RegistryError::Unauthorized
    );
    require!(
        program_data.upgrade_authority_address == Some(*signer),
        RegistryError::Unauthorized
    );
    Ok(())
}
