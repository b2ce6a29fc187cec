use anchor_lang::prelude::*;

#[event]
pub struct BreakerAdded {
    pub breaker: Pubkey,
}

#[event]
pub struct RateFeedAdded {
    pub rate_feed: Pubkey,
    pub rate_feed_count: u64,
}

#[event]
pub struct BreakerToggled {
    pub breaker: Pubkey,
    pub rate_feed: Pubkey,
    pub enabled: bool,
}

#[event]
pub struct BreakerRemoved {
    pub breaker: Pubkey,
    pub rate_feeds_detached: u32,
}
