use anchor_lang::prelude::*;

use crate::constants::FEE_CONFIG_SEED;
use crate::estimator::{self, CostRequest};
use crate::state::FeeConfig;

/// Read-only view of the config. No signer: reads and estimates are open.
#[derive(Accounts)]
pub struct ReadFeeConfig<'info> {
    #[account(
        seeds = [FEE_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, FeeConfig>,
}

pub fn get_costs_config(ctx: Context<ReadFeeConfig>) -> Result<Vec<u64>> {
    Ok(ctx.accounts.config.costs().to_vec())
}

pub fn estimate_cost(ctx: Context<ReadFeeConfig>, class: u8, multiplier: u32) -> Result<u128> {
    let cost = estimator::estimate(&ctx.accounts.config, class, multiplier)?;

    msg!(
        "Estimated cost: class={} multiplier={} cost={}",
        class,
        multiplier,
        cost
    );

    Ok(cost)
}

pub fn estimate_batch_cost(ctx: Context<ReadFeeConfig>, requests: Vec<CostRequest>) -> Result<u128> {
    let cost = estimator::estimate_batch(&ctx.accounts.config, &requests)?;

    msg!("Estimated batch cost: requests={} cost={}", requests.len(), cost);

    Ok(cost)
}
