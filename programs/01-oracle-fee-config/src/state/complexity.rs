use anchor_lang::prelude::*;

use crate::constants::COMPLEXITY_CLASS_COUNT;
use crate::errors::FeeConfigError;

/// Category of oracle query. Each class has its own slot in the cost table,
/// in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplexityClass {
    NModifier,
    Price,
    Twap,
    CrossPrice,
    CrossTwap,
}

impl ComplexityClass {
    pub const ALL: [ComplexityClass; COMPLEXITY_CLASS_COUNT] = [
        ComplexityClass::NModifier,
        ComplexityClass::Price,
        ComplexityClass::Twap,
        ComplexityClass::CrossPrice,
        ComplexityClass::CrossTwap,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for ComplexityClass {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        ComplexityClass::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| error!(FeeConfigError::UnknownComplexityClass))
    }
}
