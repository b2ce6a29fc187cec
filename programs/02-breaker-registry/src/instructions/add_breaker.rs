use anchor_lang::prelude::*;

use crate::authority::{require_admin, AdminProof};
use crate::constants::{BUCKET_SEED, REGISTRY_SEED};
use crate::errors::RegistryError;
use crate::events::BreakerAdded;
use crate::pda::create_pda_account;
use crate::state::{BreakerBucket, BreakerRegistry};

/// Registers a breaker and creates its empty reverse-index bucket.
///
/// The bucket is created by the handler, after the registry has ruled out
/// a duplicate, so a second add reports `DuplicateBreaker`.
#[derive(Accounts, Debug)]
#[instruction(breaker: Pubkey)]
pub struct AddBreaker<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = admin @ RegistryError::Unauthorized,
        constraint = !registry.is_registered(&breaker) @ RegistryError::DuplicateBreaker,
    )]
    pub registry: Account<'info, BreakerRegistry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: must be vacant; created and written by the handler at the
    /// address checked by `seeds`.
    #[account(
        mut,
        seeds = [BUCKET_SEED, breaker.as_ref()],
        bump,
    )]
    pub bucket: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddBreaker<'info> {
    /// Registry side of the add: admin check, duplicate and capacity
    /// checks, and a vacant bucket address.
    pub(crate) fn register(&mut self, breaker: Pubkey) -> Result<AdminProof> {
        let proof = require_admin(&self.registry, &self.admin.key())?;
        self.registry.add_breaker(&proof, breaker)?;
        BreakerBucket::require_vacant(&self.bucket)?;
        Ok(proof)
    }

    /// Create the bucket account at its PDA, funded by the admin.
    fn create_bucket(&self, breaker: Pubkey, bump: u8) -> Result<()> {
        create_pda_account(
            &self.admin,
            &self.bucket,
            &self.system_program,
            &[BUCKET_SEED, breaker.as_ref(), &[bump]],
            BreakerBucket::SPACE,
        )?;

        BreakerBucket::new(breaker, bump).save(&self.bucket)
    }
}

pub fn add_breaker(ctx: Context<AddBreaker>, breaker: Pubkey) -> Result<()> {
    ctx.accounts.register(breaker)?;
    ctx.accounts.create_bucket(breaker, ctx.bumps.bucket)?;

    emit!(BreakerAdded { breaker });

    msg!(
        "Breaker added: {}. Total breakers: {}",
        breaker,
        ctx.accounts.registry.breakers().len()
    );

    Ok(())
}
