use anchor_lang::prelude::*;

#[error_code]
pub enum FeeConfigError {
    // ── Authority ───────────────────────────────────────────────────

    #[msg("Caller is not the fee config admin")]
    Unauthorized,

    #[msg("An admin handover is already pending; cancel it first")]
    AdminProposalPending,

    #[msg("No pending admin handover")]
    NoPendingAdmin,

    #[msg("Signer does not match the pending admin")]
    InvalidPendingAdmin,

    // ── Config validation ───────────────────────────────────────────

    #[msg("Costs config must hold exactly one cost per complexity class")]
    MalformedConfig,

    #[msg("Cache size exceeds the allowed maximum")]
    InvalidCacheSize,

    // ── Estimation ──────────────────────────────────────────────────

    #[msg("Unknown complexity class")]
    UnknownComplexityClass,

    #[msg("Total cost does not fit in 128 bits")]
    CostOverflow,
}
