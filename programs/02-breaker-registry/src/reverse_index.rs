//! Breaker to rate feed reverse index.
//!
//! Each breaker owns a `BreakerBucket` listing the rate feeds it is enabled
//! on. The bucket is updated in the same step as the feed's own flag, so
//! removing a breaker only has to visit the feeds in its bucket. The total
//! number of registered feeds never enters into it.

use anchor_lang::prelude::*;

use crate::authority::AdminProof;
use crate::errors::RegistryError;
use crate::state::{BreakerBucket, BreakerRegistry, RateFeedAccount};

/// Where `detach_breaker` reads and writes per-feed state.
pub trait RateFeedStore {
    fn load(&mut self, rate_feed: &Pubkey) -> Result<RateFeedAccount>;
    fn store(&mut self, account: &RateFeedAccount) -> Result<()>;
}

/// Set whether `bucket.breaker` is enabled on `feed`, keeping the bucket and
/// the feed's flag in step. Returns whether anything changed.
///
/// `proof` must belong to `registry`'s admin. Both sides are checked for
/// room before either is written.
pub fn link(
    registry: &BreakerRegistry,
    proof: &AdminProof,
    bucket: &mut BreakerBucket,
    feed: &mut RateFeedAccount,
    enabled: bool,
) -> Result<bool> {
    registry.check_proof(proof)?;
    let breaker = bucket.breaker;
    let flagged = feed.is_enabled(&breaker);

    if flagged != bucket.contains(&feed.rate_feed) {
        msg!(
            "Reverse index out of sync: breaker={} rate_feed={} flagged={}",
            breaker,
            feed.rate_feed,
            flagged
        );
        return err!(RegistryError::ConsistencyViolation);
    }

    if flagged == enabled {
        return Ok(false);
    }

    if enabled {
        require!(bucket.has_capacity(), RegistryError::BucketFull);
        require!(feed.has_capacity(), RegistryError::TooManyBreakers);
        bucket.insert(proof, feed.rate_feed)?;
    } else {
        bucket.remove(proof, &feed.rate_feed);
    }
    feed.set_enabled(proof, breaker, enabled)
}

/// Clear `bucket.breaker` from every feed in its bucket, then empty the
/// bucket. Returns the number of feeds detached.
///
/// Visits the store exactly once per bucket entry. A bucket entry whose
/// feed does not carry the flag aborts with `ConsistencyViolation`.
pub fn detach_breaker<S: RateFeedStore>(
    registry: &BreakerRegistry,
    proof: &AdminProof,
    bucket: &mut BreakerBucket,
    store: &mut S,
) -> Result<u32> {
    registry.check_proof(proof)?;
    let breaker = bucket.breaker;
    let mut detached: u32 = 0;

    for rate_feed in bucket.rate_feeds() {
        let mut feed = store.load(rate_feed)?;

        if !feed.set_enabled(proof, breaker, false)? {
            msg!(
                "Reverse index out of sync: breaker={} listed on rate_feed={} without its flag",
                breaker,
                rate_feed
            );
            return err!(RegistryError::ConsistencyViolation);
        }

        store.store(&feed)?;
        detached = detached
            .checked_add(1)
            .ok_or(RegistryError::MathOverflow)?;
    }

    bucket.clear(proof);
    Ok(detached)
}
