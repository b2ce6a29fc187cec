/// Seed of the single fee config PDA.
pub const FEE_CONFIG_SEED: &[u8] = b"fee_config";

/// NModifier, Price, Twap, CrossPrice, CrossTwap.
pub const COMPLEXITY_CLASS_COUNT: usize = 5;

/// Cost table a freshly initialized config starts with.
pub const DEFAULT_COSTS: [u64; COMPLEXITY_CLASS_COUNT] =
    [2_000_000, 10_000_000, 15_000_000, 20_000_000, 30_000_000];

/// Upper bound for the price cache size.
pub const MAX_CACHE_SIZE: u32 = 256;
