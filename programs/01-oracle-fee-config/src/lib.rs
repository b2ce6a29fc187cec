#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod authority;
pub mod constants;
pub mod errors;
pub mod estimator;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod test_accounts;

use estimator::CostRequest;
use instructions::*;

declare_id!("EuXQg9hp5dZUMjG8X846BegWTdayABwh5GPwfAd5sEwx");

/// Oracle fee configuration.
///
/// Holds the per-complexity-class cost table that an oracle charges for
/// price queries, and derives the cost of a query from it. Reads and
/// estimates are open to anyone. Every write goes through
/// `authority::require_admin`, which is the only way to obtain the
/// `AdminProof` that the state mutators ask for.
#[program]
pub mod oracle_fee_config {
    use super::*;

    // ─── Setup ──────────────────────────────────────────────────────

    /// Create the config PDA with the default cost table.
    pub fn initialize(ctx: Context<Initialize>, admin: Pubkey, cache_size: u32) -> Result<()> {
        instructions::initialize::initialize(ctx, admin, cache_size)
    }

    // ─── Admin writes ───────────────────────────────────────────────

    /// Replace the whole cost table. One value per complexity class.
    pub fn set_costs_config(ctx: Context<AdminUpdate>, costs: Vec<u64>) -> Result<()> {
        instructions::admin::set_costs_config(ctx, costs)
    }

    pub fn set_cache_size(ctx: Context<AdminUpdate>, cache_size: u32) -> Result<()> {
        instructions::admin::set_cache_size(ctx, cache_size)
    }

    /// First half of an admin handover. The current admin stays in charge
    /// until the proposed key calls `accept_admin`.
    pub fn propose_admin(ctx: Context<AdminUpdate>, new_admin: Pubkey) -> Result<()> {
        instructions::admin::propose_admin(ctx, new_admin)
    }

    pub fn cancel_admin_proposal(ctx: Context<AdminUpdate>) -> Result<()> {
        instructions::admin::cancel_admin_proposal(ctx)
    }

    pub fn accept_admin(ctx: Context<AcceptAdmin>) -> Result<()> {
        instructions::admin::accept_admin(ctx)
    }

    // ─── Reads ──────────────────────────────────────────────────────

    pub fn get_costs_config(ctx: Context<ReadFeeConfig>) -> Result<Vec<u64>> {
        instructions::query::get_costs_config(ctx)
    }

    /// Cost of one query of the given class, scaled by `multiplier`.
    pub fn estimate_cost(ctx: Context<ReadFeeConfig>, class: u8, multiplier: u32) -> Result<u128> {
        instructions::query::estimate_cost(ctx, class, multiplier)
    }

    pub fn estimate_batch_cost(ctx: Context<ReadFeeConfig>, requests: Vec<CostRequest>) -> Result<u128> {
        instructions::query::estimate_batch_cost(ctx, requests)
    }
}
