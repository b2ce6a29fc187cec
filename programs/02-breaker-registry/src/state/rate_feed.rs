use anchor_lang::prelude::*;
use anchor_lang::{AccountDeserialize, AccountSerialize};

use crate::authority::AdminProof;
use crate::constants::{MAX_BREAKERS, RATE_FEED_SEED};
use crate::errors::RegistryError;

/// A tracked rate feed and the breakers enabled on it.
///
/// A breaker's presence in `enabled_breakers` is the authoritative
/// enabled flag for that (breaker, rate feed) pair.
///
/// PDA: ["rate_feed", rate_feed]
#[account]
#[derive(InitSpace, Debug)]
pub struct RateFeedAccount {
    pub rate_feed: Pubkey,

    #[max_len(MAX_BREAKERS)]
    enabled_breakers: Vec<Pubkey>,

    pub bump: u8,
}

impl RateFeedAccount {
    pub fn new(rate_feed: Pubkey, bump: u8) -> Self {
        Self {
            rate_feed,
            enabled_breakers: Vec::new(),
            bump,
        }
    }

    pub fn enabled_breakers(&self) -> &[Pubkey] {
        &self.enabled_breakers
    }

    pub fn is_enabled(&self, breaker: &Pubkey) -> bool {
        self.enabled_breakers.contains(breaker)
    }

    pub fn has_capacity(&self) -> bool {
        self.enabled_breakers.len() < MAX_BREAKERS
    }

    /// Set the flag for `breaker`. Returns whether it changed.
    ///
    /// Reached through `reverse_index`, which checks the proof against the
    /// registry first.
    pub(crate) fn set_enabled(
        &mut self,
        _proof: &AdminProof,
        breaker: Pubkey,
        enabled: bool,
    ) -> Result<bool> {
        let position = self.enabled_breakers.iter().position(|b| *b == breaker);

        match (position, enabled) {
            (Some(_), true) | (None, false) => Ok(false),
            (None, true) => {
                require!(self.has_capacity(), RegistryError::TooManyBreakers);
                self.enabled_breakers.push(breaker);
                Ok(true)
            }
            (Some(position), false) => {
                self.enabled_breakers.swap_remove(position);
                Ok(true)
            }
        }
    }

    /// Address this account must live at.
    pub fn address(&self) -> Result<Pubkey> {
        Pubkey::create_program_address(
            &[RATE_FEED_SEED, self.rate_feed.as_ref(), &[self.bump]],
            &crate::ID,
        )
        .map_err(|_| error!(RegistryError::RateFeedAccountsMismatch))
    }

    /// Read the account for `rate_feed` out of a raw account info.
    ///
    /// Anything that is not one of our initialized rate feed accounts reads
    /// as `UnknownRateFeed`; a real rate feed account sitting where a
    /// different feed was expected is `RateFeedAccountsMismatch`.
    pub fn load(info: &AccountInfo, rate_feed: &Pubkey) -> Result<Self> {
        require!(
            info.owner == &crate::ID && !info.data_is_empty(),
            RegistryError::UnknownRateFeed
        );

        let data = info.try_borrow_data()?;
        let account = Self::try_deserialize(&mut &data[..])
            .map_err(|_| error!(RegistryError::UnknownRateFeed))?;

        require_keys_eq!(
            account.rate_feed,
            *rate_feed,
            RegistryError::RateFeedAccountsMismatch
        );
        require_keys_eq!(
            account.address()?,
            info.key(),
            RegistryError::RateFeedAccountsMismatch
        );

        Ok(account)
    }

    /// Fails with `DuplicateRateFeed` unless nothing of ours lives at `info`.
    pub fn require_vacant(info: &AccountInfo) -> Result<()> {
        require!(
            info.owner == &System::id(),
            RegistryError::DuplicateRateFeed
        );
        Ok(())
    }

    /// Write the account back into `info`, which must be its own address.
    pub fn save(&self, info: &AccountInfo) -> Result<()> {
        require!(info.is_writable, ErrorCode::ConstraintMut);
        require_keys_eq!(
            self.address()?,
            info.key(),
            RegistryError::RateFeedAccountsMismatch
        );

        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)?;
        Ok(())
    }
}
