#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod authority;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod reverse_index;
pub mod state;

#[cfg(test)]
mod test_accounts;

use instructions::*;

declare_id!("2cXqNDWYxN8X9g3FubvGmPHXE3ssWnLgaT28P7Qw8V1L");

/// Breaker registry.
///
/// Tracks circuit breakers and the rate feeds each one is enabled on. Every
/// breaker has a bucket (the reverse index) listing its enabled feeds, kept
/// in step with each feed's own flags, so removing a breaker costs work in
/// proportion to its own feeds and never to the number of feeds registered.
#[program]
pub mod breaker_registry {
    use super::*;

    // ─── Setup ──────────────────────────────────────────────────────

    pub fn initialize(ctx: Context<InitializeRegistry>, admin: Pubkey) -> Result<()> {
        instructions::initialize::initialize(ctx, admin)
    }

    // ─── Registration ───────────────────────────────────────────────

    pub fn add_breaker(ctx: Context<AddBreaker>, breaker: Pubkey) -> Result<()> {
        instructions::add_breaker::add_breaker(ctx, breaker)
    }

    pub fn add_rate_feed(ctx: Context<AddRateFeed>, rate_feed: Pubkey) -> Result<()> {
        instructions::add_rate_feed::add_rate_feed(ctx, rate_feed)
    }

    // ─── Breaker state ──────────────────────────────────────────────

    /// Enable or disable a breaker on one rate feed. Idempotent.
    pub fn toggle_breaker(
        ctx: Context<ToggleBreaker>,
        breaker: Pubkey,
        rate_feed: Pubkey,
        enabled: bool,
    ) -> Result<()> {
        instructions::toggle_breaker::toggle_breaker(ctx, breaker, rate_feed, enabled)
    }

    /// Remove a breaker. Pass the rate feed accounts from its bucket, in
    /// bucket order, as remaining accounts.
    pub fn remove_breaker(ctx: Context<RemoveBreaker>, breaker: Pubkey) -> Result<()> {
        instructions::remove_breaker::remove_breaker(ctx, breaker)
    }

    // ─── Reads ──────────────────────────────────────────────────────

    pub fn is_breaker_enabled(
        ctx: Context<ReadRateFeed>,
        breaker: Pubkey,
        rate_feed: Pubkey,
    ) -> Result<bool> {
        instructions::query::is_breaker_enabled(ctx, breaker, rate_feed)
    }

    pub fn breaker_rate_feeds(ctx: Context<ReadBucket>, breaker: Pubkey) -> Result<Vec<Pubkey>> {
        instructions::query::breaker_rate_feeds(ctx, breaker)
    }
}
