use anchor_lang::prelude::*;

use crate::authority::{require_admin, AdminProof};
use crate::constants::FEE_CONFIG_SEED;
use crate::errors::FeeConfigError;
use crate::events::*;
use crate::state::FeeConfig;

// ─── Admin writes ───────────────────────────────────────────────────────────
// Every write to the config shares this accounts struct. `has_one` rejects a
// foreign signer during account validation, and each handler asks
// `require_admin` for the proof that `FeeConfig`'s mutators take.

#[derive(Accounts)]
pub struct AdminUpdate<'info> {
    #[account(
        mut,
        seeds = [FEE_CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ FeeConfigError::Unauthorized,
    )]
    pub config: Account<'info, FeeConfig>,

    pub admin: Signer<'info>,
}

fn authorize(accounts: &AdminUpdate) -> Result<AdminProof> {
    require_admin(&accounts.config.admin, &accounts.admin.key())
}

pub fn set_costs_config(ctx: Context<AdminUpdate>, costs: Vec<u64>) -> Result<()> {
    let proof = authorize(&ctx.accounts)?;

    let config = &mut ctx.accounts.config;
    let old_costs = config.replace_costs(&proof, &costs)?;
    let new_costs = config.costs();

    emit!(CostsConfigUpdated {
        admin: proof.admin(),
        old_costs,
        new_costs,
    });

    msg!(
        "Costs config updated by {}: {:?} -> {:?}",
        proof.admin(),
        old_costs,
        new_costs
    );

    Ok(())
}

pub fn set_cache_size(ctx: Context<AdminUpdate>, cache_size: u32) -> Result<()> {
    let proof = authorize(&ctx.accounts)?;

    let old_size = ctx.accounts.config.set_cache_size(&proof, cache_size)?;

    emit!(CacheSizeUpdated {
        admin: proof.admin(),
        old_size,
        new_size: cache_size,
    });

    msg!("Cache size updated: {} -> {}", old_size, cache_size);

    Ok(())
}

pub fn propose_admin(ctx: Context<AdminUpdate>, new_admin: Pubkey) -> Result<()> {
    let proof = authorize(&ctx.accounts)?;

    ctx.accounts.config.propose_admin(&proof, new_admin)?;

    emit!(AdminProposed {
        admin: proof.admin(),
        proposed: new_admin,
    });

    msg!("Admin handover proposed: {} -> {}", proof.admin(), new_admin);

    Ok(())
}

pub fn cancel_admin_proposal(ctx: Context<AdminUpdate>) -> Result<()> {
    let proof = authorize(&ctx.accounts)?;

    let proposed = ctx.accounts.config.cancel_admin_proposal(&proof)?;

    emit!(AdminProposalCancelled {
        admin: proof.admin(),
        proposed,
    });

    msg!("Admin handover to {} cancelled", proposed);

    Ok(())
}

/// Completes a handover. Signed by the proposed key, not the current admin.
#[derive(Accounts)]
pub struct AcceptAdmin<'info> {
    pub new_admin: Signer<'info>,

    #[account(
        mut,
        seeds = [FEE_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, FeeConfig>,
}

pub fn accept_admin(ctx: Context<AcceptAdmin>) -> Result<()> {
    let new_admin = ctx.accounts.new_admin.key();
    let old_admin = ctx.accounts.config.accept_admin(&new_admin)?;

    emit!(AdminTransferred {
        old_admin,
        new_admin,
    });

    msg!("Admin transferred: {} -> {}", old_admin, new_admin);

    Ok(())
}
