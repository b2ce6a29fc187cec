use anchor_lang::prelude::*;

use crate::authority::require_admin;
use crate::constants::{BUCKET_SEED, REGISTRY_SEED};
use crate::errors::RegistryError;
use crate::events::BreakerRemoved;
use crate::reverse_index::{detach_breaker, RateFeedStore};
use crate::state::{BreakerBucket, BreakerRegistry, RateFeedAccount};

/// Removes a breaker.
///
/// The rate feed accounts listed in the breaker's bucket follow the named
/// accounts as remaining accounts, in bucket order. Those are the only feeds
/// the instruction reads or writes; the bucket is closed to the admin.
#[derive(Accounts)]
#[instruction(breaker: Pubkey)]
pub struct RemoveBreaker<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = admin @ RegistryError::Unauthorized,
        constraint = registry.is_registered(&breaker) @ RegistryError::UnknownBreaker,
    )]
    pub registry: Account<'info, BreakerRegistry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: address pinned by `seeds`; decoded by `BreakerBucket::load`
    /// once the breaker is known to be registered, then closed by the
    /// handler.
    #[account(
        mut,
        seeds = [BUCKET_SEED, breaker.as_ref()],
        bump,
    )]
    pub bucket: UncheckedAccount<'info>,
}

/// Rate feed accounts supplied after the named accounts, consumed in order.
pub struct RemainingRateFeeds<'a, 'info> {
    accounts: &'a [AccountInfo<'info>],
    cursor: usize,
}

impl<'a, 'info> RemainingRateFeeds<'a, 'info> {
    pub fn new(accounts: &'a [AccountInfo<'info>]) -> Self {
        Self {
            accounts,
            cursor: 0,
        }
    }

    /// Fails if any supplied account was left unvisited.
    pub fn finish(self) -> Result<()> {
        require_eq!(
            self.cursor,
            self.accounts.len(),
            RegistryError::RateFeedAccountsMismatch
        );
        Ok(())
    }
}

impl RateFeedStore for RemainingRateFeeds<'_, '_> {
    fn load(&mut self, rate_feed: &Pubkey) -> Result<RateFeedAccount> {
        let info = self
            .accounts
            .get(self.cursor)
            .ok_or_else(|| error!(RegistryError::RateFeedAccountsMismatch))?;
        self.cursor += 1;

        RateFeedAccount::load(info, rate_feed)
    }

    fn store(&mut self, account: &RateFeedAccount) -> Result<()> {
        let info = self
            .cursor
            .checked_sub(1)
            .and_then(|last| self.accounts.get(last))
            .ok_or_else(|| error!(RegistryError::RateFeedAccountsMismatch))?;

        account.save(info)
    }
}

pub fn remove_breaker(ctx: Context<RemoveBreaker>, breaker: Pubkey) -> Result<()> {
    let proof = require_admin(&ctx.accounts.registry, &ctx.accounts.admin.key())?;
    ctx.accounts.registry.require_registered(&breaker)?;

    let bucket_info = ctx.accounts.bucket.to_account_info();
    let mut bucket = BreakerBucket::load(&bucket_info, &breaker)?;
    require_eq!(
        ctx.remaining_accounts.len(),
        bucket.len(),
        RegistryError::RateFeedAccountsMismatch
    );

    let mut feeds = RemainingRateFeeds::new(ctx.remaining_accounts);
    let rate_feeds_detached =
        detach_breaker(&ctx.accounts.registry, &proof, &mut bucket, &mut feeds)?;
    feeds.finish()?;

    ctx.accounts.registry.remove_breaker(&proof, &breaker)?;
    bucket.close(&proof, &bucket_info, &ctx.accounts.admin.to_account_info())?;

    emit!(BreakerRemoved {
        breaker,
        rate_feeds_detached,
    });

    msg!(
        "Breaker removed: {}. Rate feeds detached: {}. Remaining breakers: {}",
        breaker,
        rate_feeds_detached,
        ctx.accounts.registry.breakers().len()
    );

    Ok(())
}
