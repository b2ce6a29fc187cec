use anchor_lang::prelude::*;

use crate::authority::require_upgrade_authority;
use crate::constants::FEE_CONFIG_SEED;
use crate::state::FeeConfig;

/// Creates the fee config PDA. `init` makes this a one-time operation, and
/// only the program's upgrade authority may perform it.
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + FeeConfig::INIT_SPACE,
        seeds = [FEE_CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, FeeConfig>,

    pub program: Program<'info, crate::program::OracleFeeConfig>,

    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, admin: Pubkey, cache_size: u32) -> Result<()> {
    require_upgrade_authority(
        &ctx.accounts.program,
        &ctx.accounts.program_data,
        &ctx.accounts.payer.key(),
    )?;

    let config = FeeConfig::new(admin, cache_size, ctx.bumps.config)?;
    ctx.accounts.config.set_inner(config);

    msg!(
        "Fee config initialized. Admin: {}. Cache size: {}",
        admin,
        cache_size
    );

    Ok(())
}
