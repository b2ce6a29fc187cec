/// Seed of the single registry PDA.
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Seed prefix of a breaker's reverse-index bucket: ["bucket", breaker].
pub const BUCKET_SEED: &[u8] = b"bucket";

/// Seed prefix of a rate feed account: ["rate_feed", rate_feed].
pub const RATE_FEED_SEED: &[u8] = b"rate_feed";

/// Registered breakers. Also caps how many breakers one feed can enable.
pub const MAX_BREAKERS: usize = 16;

/// Bucket capacity, which is also the most rate feed accounts
/// `remove_breaker` ever has to touch.
pub const MAX_RATE_FEEDS_PER_BREAKER: usize = 32;
