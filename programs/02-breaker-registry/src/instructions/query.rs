use anchor_lang::prelude::*;

use crate::constants::{BUCKET_SEED, REGISTRY_SEED};
use crate::errors::RegistryError;
use crate::state::{BreakerBucket, BreakerRegistry, RateFeedAccount};

#[derive(Accounts)]
pub struct ReadRateFeed<'info> {
    /// CHECK: decoded by `RateFeedAccount::load`, which checks owner,
    /// discriminator and PDA address.
    pub rate_feed_account: UncheckedAccount<'info>,
}

pub fn is_breaker_enabled(
    ctx: Context<ReadRateFeed>,
    breaker: Pubkey,
    rate_feed: Pubkey,
) -> Result<bool> {
    let feed = RateFeedAccount::load(&ctx.accounts.rate_feed_account, &rate_feed)?;
    Ok(feed.is_enabled(&breaker))
}

#[derive(Accounts, Debug)]
#[instruction(breaker: Pubkey)]
pub struct ReadBucket<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        constraint = registry.is_registered(&breaker) @ RegistryError::UnknownBreaker,
    )]
    pub registry: Account<'info, BreakerRegistry>,

    /// CHECK: address pinned by `seeds`; decoded by `BreakerBucket::load`.
    #[account(
        seeds = [BUCKET_SEED, breaker.as_ref()],
        bump,
    )]
    pub bucket: UncheckedAccount<'info>,
}

pub fn breaker_rate_feeds(ctx: Context<ReadBucket>, breaker: Pubkey) -> Result<Vec<Pubkey>> {
    ctx.accounts.registry.require_registered(&breaker)?;
    let bucket = BreakerBucket::load(&ctx.accounts.bucket, &breaker)?;
    let rate_feeds = bucket.rate_feeds().to_vec();

    msg!("Breaker {} enabled on {} rate feeds", breaker, rate_feeds.len());

    Ok(rate_feeds)
}
