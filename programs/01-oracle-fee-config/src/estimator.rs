//! Query cost derivation from the stored cost table.
//!
//! Costs are computed in `u128`. The largest possible product,
//! `u64::MAX * u32::MAX`, fits with room to spare, so a base cost set to
//! `u64::MAX` can make a query expensive but can never make it wrap.

use anchor_lang::prelude::*;

use crate::errors::FeeConfigError;
use crate::state::{ComplexityClass, FeeConfig};

/// One line of a batch estimate.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostRequest {
    /// Wire index of the `ComplexityClass`.
    pub class: u8,
    /// Number of assets or points the query touches.
    pub multiplier: u32,
}

pub fn cost_of(base: u64, multiplier: u32) -> u128 {
    u128::from(base) * u128::from(multiplier)
}

pub fn estimate(config: &FeeConfig, class: u8, multiplier: u32) -> Result<u128> {
    let class = ComplexityClass::try_from(class)?;
    Ok(cost_of(config.base_cost(class), multiplier))
}

pub fn estimate_batch(config: &FeeConfig, requests: &[CostRequest]) -> Result<u128> {
    requests.iter().try_fold(0u128, |total, request| {
        let cost = estimate(config, request.class, request.multiplier)?;
        total
            .checked_add(cost)
            .ok_or_else(|| error!(FeeConfigError::CostOverflow))
    })
}
