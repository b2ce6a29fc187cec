use anchor_lang::prelude::*;

use crate::authority::AdminProof;
use crate::constants::*;
use crate::errors::FeeConfigError;
use crate::state::ComplexityClass;

/// The oracle's fee configuration.
///
/// `costs` and `cache_size` are private: they are read through getters and
/// written only through the methods below, each of which takes an
/// `AdminProof` minted for this config's admin.
///
/// PDA: ["fee_config"]
#[account]
#[derive(InitSpace, Debug)]
pub struct FeeConfig {
    /// Key allowed to change the config.
    pub admin: Pubkey,

    /// Key proposed as the next admin, if a handover is in progress.
    pub pending_admin: Option<Pubkey>,

    /// Base cost per complexity class, indexed by `ComplexityClass::index`.
    costs: [u64; COMPLEXITY_CLASS_COUNT],

    cache_size: u32,

    pub version: u8,

    pub bump: u8,
}

impl FeeConfig {
    pub const CURRENT_VERSION: u8 = 1;

    pub fn new(admin: Pubkey, cache_size: u32, bump: u8) -> Result<Self> {
        require!(cache_size <= MAX_CACHE_SIZE, FeeConfigError::InvalidCacheSize);

        Ok(Self {
            admin,
            pending_admin: None,
            costs: DEFAULT_COSTS,
            cache_size,
            version: Self::CURRENT_VERSION,
            bump,
        })
    }

    pub fn costs(&self) -> [u64; COMPLEXITY_CLASS_COUNT] {
        self.costs
    }

    pub fn base_cost(&self, class: ComplexityClass) -> u64 {
        self.costs[class.index()]
    }

    pub fn cache_size(&self) -> u32 {
        self.cache_size
    }

    /// Swap in a new cost table and return the previous one.
    ///
    /// Nothing is written unless the proof matches and `new_costs` has one
    /// entry per complexity class.
    pub fn replace_costs(
        &mut self,
        proof: &AdminProof,
        new_costs: &[u64],
    ) -> Result<[u64; COMPLEXITY_CLASS_COUNT]> {
        self.check_proof(proof)?;

        let table: [u64; COMPLEXITY_CLASS_COUNT] = new_costs
            .try_into()
            .map_err(|_| error!(FeeConfigError::MalformedConfig))?;

        Ok(std::mem::replace(&mut self.costs, table))
    }

    pub fn set_cache_size(&mut self, proof: &AdminProof, cache_size: u32) -> Result<u32> {
        self.check_proof(proof)?;
        require!(cache_size <= MAX_CACHE_SIZE, FeeConfigError::InvalidCacheSize);

        Ok(std::mem::replace(&mut self.cache_size, cache_size))
    }

    pub fn propose_admin(&mut self, proof: &AdminProof, new_admin: Pubkey) -> Result<()> {
        self.check_proof(proof)?;
        require!(
            self.pending_admin.is_none(),
            FeeConfigError::AdminProposalPending
        );

        self.pending_admin = Some(new_admin);
        Ok(())
    }

    /// Drop the pending handover and return the key that was proposed.
    pub fn cancel_admin_proposal(&mut self, proof: &AdminProof) -> Result<Pubkey> {
        self.check_proof(proof)?;
        self.pending_admin
            .take()
            .ok_or_else(|| error!(FeeConfigError::NoPendingAdmin))
    }

    /// Complete a handover. Authorized by the pending admin rather than the
    /// current one. Returns the outgoing admin.
    pub fn accept_admin(&mut self, caller: &Pubkey) -> Result<Pubkey> {
        let pending = self
            .pending_admin
            .ok_or(FeeConfigError::NoPendingAdmin)?;
        require_keys_eq!(*caller, pending, FeeConfigError::InvalidPendingAdmin);

        self.pending_admin = None;
        Ok(std::mem::replace(&mut self.admin, pending))
    }

    fn check_proof(&self, proof: &AdminProof) -> Result<()> {
        require_keys_eq!(proof.admin(), self.admin, FeeConfigError::Unauthorized);
        Ok(())
    }
}
