use anchor_lang::prelude::*;
use anchor_lang::{AccountDeserialize, AccountSerialize};

use crate::authority::AdminProof;
use crate::constants::{BUCKET_SEED, MAX_RATE_FEEDS_PER_BREAKER};
use crate::errors::RegistryError;

/// Reverse index entry: the rate feeds a breaker is currently enabled on.
///
/// Kept in step with `RateFeedAccount::enabled_breakers` by
/// `reverse_index::link` and `reverse_index::detach_breaker`.
///
/// PDA: ["bucket", breaker]
#[account]
#[derive(InitSpace, Debug)]
pub struct BreakerBucket {
    pub breaker: Pubkey,

    #[max_len(MAX_RATE_FEEDS_PER_BREAKER)]
    rate_feeds: Vec<Pubkey>,

    pub bump: u8,
}

impl BreakerBucket {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    pub fn new(breaker: Pubkey, bump: u8) -> Self {
        Self {
            breaker,
            rate_feeds: Vec::new(),
            bump,
        }
    }

    pub fn rate_feeds(&self) -> &[Pubkey] {
        &self.rate_feeds
    }

    pub fn contains(&self, rate_feed: &Pubkey) -> bool {
        self.rate_feeds.contains(rate_feed)
    }

    pub fn len(&self) -> usize {
        self.rate_feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rate_feeds.is_empty()
    }

    pub fn has_capacity(&self) -> bool {
        self.rate_feeds.len() < MAX_RATE_FEEDS_PER_BREAKER
    }

    // Mutators below are reached through `reverse_index`, which checks the
    // proof against the registry before calling them.

    pub(crate) fn insert(&mut self, _proof: &AdminProof, rate_feed: Pubkey) -> Result<()> {
        require!(self.has_capacity(), RegistryError::BucketFull);
        self.rate_feeds.push(rate_feed);
        Ok(())
    }

    pub(crate) fn remove(&mut self, _proof: &AdminProof, rate_feed: &Pubkey) -> bool {
        match self.rate_feeds.iter().position(|f| f == rate_feed) {
            Some(position) => {
                self.rate_feeds.swap_remove(position);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self, _proof: &AdminProof) {
        self.rate_feeds.clear();
    }

    /// Address this bucket must live at.
    pub fn address(&self) -> Result<Pubkey> {
        Pubkey::create_program_address(
            &[BUCKET_SEED, self.breaker.as_ref(), &[self.bump]],
            &crate::ID,
        )
        .map_err(|_| error!(ErrorCode::ConstraintSeeds))
    }

    /// Fails with `DuplicateBreaker` unless nothing of ours lives at `info`.
    pub fn require_vacant(info: &AccountInfo) -> Result<()> {
        require!(
            info.owner == &System::id(),
            RegistryError::DuplicateBreaker
        );
        Ok(())
    }

    /// Read the bucket of a registered `breaker` out of a raw account info.
    ///
    /// A registered breaker always has a bucket, so a missing or foreign
    /// one is a `ConsistencyViolation`.
    pub fn load(info: &AccountInfo, breaker: &Pubkey) -> Result<Self> {
        if info.owner != &crate::ID || info.data_is_empty() {
            msg!("Registered breaker {} has no bucket at {}", breaker, info.key());
            return err!(RegistryError::ConsistencyViolation);
        }

        let data = info.try_borrow_data()?;
        let bucket = Self::try_deserialize(&mut &data[..])?;

        require_keys_eq!(bucket.breaker, *breaker, RegistryError::ConsistencyViolation);
        require_keys_eq!(bucket.address()?, info.key(), ErrorCode::ConstraintSeeds);

        Ok(bucket)
    }

    /// Write the bucket back into `info`, which must be its own address.
    pub fn save(&self, info: &AccountInfo) -> Result<()> {
        require!(info.is_writable, ErrorCode::ConstraintMut);
        require_keys_eq!(self.address()?, info.key(), ErrorCode::ConstraintSeeds);

        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)?;
        Ok(())
    }

    /// Close the bucket at `info`: zero its data, hand its lamports to
    /// `destination` and return it to the system program.
    pub(crate) fn close(
        &self,
        _proof: &AdminProof,
        info: &AccountInfo,
        destination: &AccountInfo,
    ) -> Result<()> {
        require_keys_eq!(self.address()?, info.key(), ErrorCode::ConstraintSeeds);

        let mut data = info.try_borrow_mut_data()?;
        data.fill(0);
        drop(data);

        let mut bucket_lamports = info.try_borrow_mut_lamports()?;
        let mut destination_lamports = destination.try_borrow_mut_lamports()?;
        **destination_lamports = destination_lamports
            .checked_add(**bucket_lamports)
            .ok_or(RegistryError::MathOverflow)?;
        **bucket_lamports = 0;
        drop(bucket_lamports);
        drop(destination_lamports);

        info.assign(&System::id());
        Ok(())
    }
}
