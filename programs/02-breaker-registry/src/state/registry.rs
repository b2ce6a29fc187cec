use anchor_lang::prelude::*;

use crate::authority::AdminProof;
use crate::constants::MAX_BREAKERS;
use crate::errors::RegistryError;

/// Global breaker list and admin.
///
/// Rate feeds are deliberately not listed here. Nothing in the program
/// needs to enumerate them, and a list would reintroduce the full scan
/// that per-breaker buckets exist to avoid.
///
/// PDA: ["registry"]
#[account]
#[derive(InitSpace, Debug)]
pub struct BreakerRegistry {
    pub admin: Pubkey,

    #[max_len(MAX_BREAKERS)]
    breakers: Vec<Pubkey>,

    /// Number of rate feed accounts ever registered.
    pub rate_feed_count: u64,

    pub bump: u8,
}

impl BreakerRegistry {
    pub fn new(admin: Pubkey, bump: u8) -> Self {
        Self {
            admin,
            breakers: Vec::new(),
            rate_feed_count: 0,
            bump,
        }
    }

    pub fn breakers(&self) -> &[Pubkey] {
        &self.breakers
    }

    pub fn is_registered(&self, breaker: &Pubkey) -> bool {
        self.breakers.contains(breaker)
    }

    pub fn require_registered(&self, breaker: &Pubkey) -> Result<()> {
        require!(self.is_registered(breaker), RegistryError::UnknownBreaker);
        Ok(())
    }

    pub fn add_breaker(&mut self, proof: &AdminProof, breaker: Pubkey) -> Result<()> {
        self.check_proof(proof)?;
        require!(!self.is_registered(&breaker), RegistryError::DuplicateBreaker);
        require!(
            self.breakers.len() < MAX_BREAKERS,
            RegistryError::TooManyBreakers
        );

        self.breakers.push(breaker);
        Ok(())
    }

    pub fn remove_breaker(&mut self, proof: &AdminProof, breaker: &Pubkey) -> Result<()> {
        self.check_proof(proof)?;
        let position = self
            .breakers
            .iter()
            .position(|b| b == breaker)
            .ok_or(RegistryError::UnknownBreaker)?;

        self.breakers.swap_remove(position);
        Ok(())
    }

    /// Count a newly created rate feed account and return the new total.
    pub fn record_rate_feed(&mut self, proof: &AdminProof) -> Result<u64> {
        self.check_proof(proof)?;
        self.rate_feed_count = self
            .rate_feed_count
            .checked_add(1)
            .ok_or(RegistryError::MathOverflow)?;
        Ok(self.rate_feed_count)
    }

    /// Fails unless `proof` was minted for this registry's admin.
    pub fn check_proof(&self, proof: &AdminProof) -> Result<()> {
        require_keys_eq!(proof.admin(), self.admin, RegistryError::Unauthorized);
        Ok(())
    }
}
