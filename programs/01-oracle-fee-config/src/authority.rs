use anchor_lang::prelude::*;

use crate::errors::FeeConfigError;

/// Evidence that a caller matched the stored admin.
///
/// The field is private, so `require_admin` is the only constructor. Every
/// mutator on `FeeConfig` takes a `&AdminProof`, which means a write that
/// skipped the check does not type-check.
#[derive(Debug)]
pub struct AdminProof {
    admin: Pubkey,
}

impl AdminProof {
    pub fn admin(&self) -> Pubkey {
        self.admin
    }
}

pub fn require_admin(admin: &Pubkey, caller: &Pubkey) -> Result<AdminProof> {
    require_keys_eq!(*caller, *admin, FeeConfigError::Unauthorized);
    Ok(AdminProof { admin: *admin })
}

/// Fails unless `signer` is the upgrade authority recorded for `program`.
pub fn require_upgrade_authority<T>(
    program: &Program<T>,
    program_data: &Account<ProgramData>,
    signer: &Pubkey,
) -> Result<()> {
    require!(
        program.programdata_address()? == Some(program_data.key()),
        FeeConfigError::Unauthorized
    );
    require!(
        program_data.upgrade_authority_address == Some(*signer),
        FeeConfigError::Unauthorized
    );
    Ok(())
}
