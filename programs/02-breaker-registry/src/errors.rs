use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    // ── Authority ───────────────────────────────────────────────────

    #[msg("Caller is not the registry admin")]
    Unauthorized,

    // ── Registry misuse ─────────────────────────────────────────────

    #[msg("Breaker is already registered")]
    DuplicateBreaker,

    #[msg("Breaker is not registered")]
    UnknownBreaker,

    #[msg("Rate feed is already registered")]
    DuplicateRateFeed,

    #[msg("Rate feed is not registered")]
    UnknownRateFeed,

    #[msg("Breaker list is full")]
    TooManyBreakers,

    #[msg("Breaker is enabled on the maximum number of rate feeds")]
    BucketFull,

    #[msg("Rate feed accounts do not match the breaker's bucket")]
    RateFeedAccountsMismatch,

    // ── Internal ────────────────────────────────────────────────────

    #[msg("Reverse index disagrees with rate feed flags")]
    ConsistencyViolation,

    #[msg("Arithmetic overflow")]
    MathOverflow,
}
