use anchor_lang::prelude::*;

use crate::authority::require_admin;
use crate::constants::{BUCKET_SEED, REGISTRY_SEED};
use crate::errors::RegistryError;
use crate::events::BreakerToggled;
use crate::reverse_index::link;
use crate::state::{BreakerBucket, BreakerRegistry, RateFeedAccount};

#[derive(Accounts, Debug)]
#[instruction(breaker: Pubkey, rate_feed: Pubkey)]
pub struct ToggleBreaker<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = admin @ RegistryError::Unauthorized,
        constraint = registry.is_registered(&breaker) @ RegistryError::UnknownBreaker,
    )]
    pub registry: Account<'info, BreakerRegistry>,

    pub admin: Signer<'info>,

    /// CHECK: address pinned by `seeds`; decoded and written back through
    /// `BreakerBucket::load` and `save` once the breaker is known to be
    /// registered, so an unknown breaker reports `UnknownBreaker`.
    #[account(
        mut,
        seeds = [BUCKET_SEED, breaker.as_ref()],
        bump,
    )]
    pub bucket: UncheckedAccount<'info>,

    /// CHECK: decoded and written back through `RateFeedAccount::load` and
    /// `save`, which check owner, discriminator and PDA address. Left
    /// unchecked here so an unregistered feed reports `UnknownRateFeed`.
    #[account(mut)]
    pub rate_feed_account: UncheckedAccount<'info>,
}

pub fn toggle_breaker(
    ctx: Context<ToggleBreaker>,
    breaker: Pubkey,
    rate_feed: Pubkey,
    enabled: bool,
) -> Result<()> {
    let registry = &ctx.accounts.registry;
    let proof = require_admin(registry, &ctx.accounts.admin.key())?;
    registry.require_registered(&breaker)?;

    let bucket_info = ctx.accounts.bucket.to_account_info();
    let feed_info = ctx.accounts.rate_feed_account.to_account_info();
    let mut bucket = BreakerBucket::load(&bucket_info, &breaker)?;
    let mut feed = RateFeedAccount::load(&feed_info, &rate_feed)?;

    if !link(registry, &proof, &mut bucket, &mut feed, enabled)? {
        msg!(
            "Breaker {} already {} on {}",
            breaker,
            if enabled { "enabled" } else { "disabled" },
            rate_feed
        );
        return Ok(());
    }
    bucket.save(&bucket_info)?;
    feed.save(&feed_info)?;

    emit!(BreakerToggled {
        breaker,
        rate_feed,
        enabled,
    });

    msg!(
        "Breaker {} {} on {}. Bucket size: {}",
        breaker,
        if enabled { "ENABLED" } else { "DISABLED" },
        rate_feed,
        bucket.len()
    );

    Ok(())
}
