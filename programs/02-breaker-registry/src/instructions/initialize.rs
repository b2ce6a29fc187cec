use anchor_lang::prelude::*;

use crate::authority::require_upgrade_authority;
use crate::constants::REGISTRY_SEED;
use crate::state::BreakerRegistry;

/// Creates the registry. Only the program's upgrade authority may pay for
/// it, so the admin cannot be picked by whoever gets here first.
#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + BreakerRegistry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, BreakerRegistry>,

    pub program: Program<'info, crate::program::BreakerRegistry>,

    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<InitializeRegistry>, admin: Pubkey) -> Result<()> {
    require_upgrade_authority(
        &ctx.accounts.program,
        &ctx.accounts.program_data,
        &ctx.accounts.payer.key(),
    )?;

    ctx.accounts
        .registry
        .set_inner(BreakerRegistry::new(admin, ctx.bumps.registry));

    msg!("Breaker registry initialized. Admin: {}", admin);

    Ok(())
}
