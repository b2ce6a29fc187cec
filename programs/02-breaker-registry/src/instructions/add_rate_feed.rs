use anchor_lang::prelude::*;

use crate::authority::{require_admin, AdminProof};
use crate::constants::{RATE_FEED_SEED, REGISTRY_SEED};
use crate::errors::RegistryError;
use crate::events::RateFeedAdded;
use crate::pda::create_pda_account;
use crate::state::{BreakerRegistry, RateFeedAccount};

/// Registers a rate feed with no breakers enabled.
#[derive(Accounts, Debug)]
#[instruction(rate_feed: Pubkey)]
pub struct AddRateFeed<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = admin @ RegistryError::Unauthorized,
    )]
    pub registry: Account<'info, BreakerRegistry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: must be vacant; created and written by the handler at the
    /// address checked by `seeds`.
    #[account(
        mut,
        seeds = [RATE_FEED_SEED, rate_feed.as_ref()],
        bump,
    )]
    pub rate_feed_account: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddRateFeed<'info> {
    /// Admin check and a vacant feed address. Returns the proof and the new
    /// rate feed count.
    fn register(&mut self) -> Result<(AdminProof, u64)> {
        let proof = require_admin(&self.registry, &self.admin.key())?;
        RateFeedAccount::require_vacant(&self.rate_feed_account)?;
        let rate_feed_count = self.registry.record_rate_feed(&proof)?;
        Ok((proof, rate_feed_count))
    }

    fn create_rate_feed(&self, rate_feed: Pubkey, bump: u8) -> Result<()> {
        create_pda_account(
            &self.admin,
            &self.rate_feed_account,
            &self.system_program,
            &[RATE_FEED_SEED, rate_feed.as_ref(), &[bump]],
            8 + RateFeedAccount::INIT_SPACE,
        )?;

        RateFeedAccount::new(rate_feed, bump).save(&self.rate_feed_account)
    }
}

pub fn add_rate_feed(ctx: Context<AddRateFeed>, rate_feed: Pubkey) -> Result<()> {
    let (_, rate_feed_count) = ctx.accounts.register()?;
    ctx.accounts
        .create_rate_feed(rate_feed, ctx.bumps.rate_feed_account)?;

    emit!(RateFeedAdded {
        rate_feed,
        rate_feed_count,
    });

    msg!(
        "Rate feed added: {}. Total rate feeds: {}",
        rate_feed,
        rate_feed_count
    );

    Ok(())
}
