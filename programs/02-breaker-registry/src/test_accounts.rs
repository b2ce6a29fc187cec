use anchor_lang::prelude::*;
use anchor_lang::solana_program::account_info::AccountInfo;
use anchor_lang::solana_program::bpf_loader_upgradeable;
use anchor_lang::solana_program::clock::Epoch;
use anchor_lang::{AccountDeserialize, AccountSerialize};

use crate::authority::{require_admin, AdminProof};
use crate::constants::*;
use crate::reverse_index::link;
use crate::state::*;

fn leak_account(
    key: Pubkey,
    owner: Pubkey,
    is_signer: bool,
    is_writable: bool,
    executable: bool,
    data: Vec<u8>,
) -> &'static AccountInfo<'static> {
    let leaked_key = Box::leak(Box::new(key));
    let leaked_owner = Box::leak(Box::new(owner));
    let lamports = Box::leak(Box::new(1_000_000_000u64));
    let data: &'static mut [u8] = Box::leak(data.into_boxed_slice());

    Box::leak(Box::new(AccountInfo::new(
        leaked_key,
        is_signer,
        is_writable,
        lamports,
        data,
        leaked_owner,
        executable,
        Epoch::default(),
    )))
}

pub fn make_account(
    key: Pubkey,
    owner: Pubkey,
    is_signer: bool,
    is_writable: bool,
    data: Vec<u8>,
) -> &'static AccountInfo<'static> {
    leak_account(key, owner, is_signer, is_writable, false, data)
}

pub fn signer(key: Pubkey) -> &'static AccountInfo<'static> {
    make_account(key, Pubkey::default(), true, true, vec![])
}

pub fn system_program_account() -> &'static AccountInfo<'static> {
    leak_account(System::id(), Pubkey::default(), false, false, true, vec![])
}

/// Program data account recording `upgrade_authority`.
pub fn program_data_account(
    key: Pubkey,
    upgrade_authority: Option<Pubkey>,
) -> &'static AccountInfo<'static> {
    // Loader state `ProgramData { slot, upgrade_authority_address }`.
    let mut data = 3u32.to_le_bytes().to_vec();
    data.extend_from_slice(&0u64.to_le_bytes());
    match upgrade_authority {
        Some(authority) => {
            data.push(1);
            data.extend_from_slice(authority.as_ref());
        }
        None => data.push(0),
    }

    make_account(key, bpf_loader_upgradeable::ID, false, false, data)
}

/// This program deployed through the upgradeable loader, plus its program
/// data account.
pub fn deployed_program(
    upgrade_authority: Option<Pubkey>,
) -> (&'static AccountInfo<'static>, &'static AccountInfo<'static>) {
    let program_data_key = bpf_loader_upgradeable::get_program_data_address(&crate::id());

    // Loader state `Program { programdata_address }`.
    let mut data = 2u32.to_le_bytes().to_vec();
    data.extend_from_slice(program_data_key.as_ref());

    let program = leak_account(
        crate::id(),
        bpf_loader_upgradeable::ID,
        false,
        false,
        true,
        data,
    );
    (program, program_data_account(program_data_key, upgrade_authority))
}

fn serialize_padded<T: AccountSerialize>(state: &T, space: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(8 + space);
    state.try_serialize(&mut data).unwrap();
    data.resize(8 + space, 0);
    data
}

/// A registry with a fresh admin, and that admin's proof.
pub fn registry_admin() -> (BreakerRegistry, AdminProof) {
    let admin = Pubkey::new_unique();
    let registry = BreakerRegistry::new(admin, 255);
    let proof = require_admin(&registry, &admin).unwrap();
    (registry, proof)
}

pub fn registry_account(admin: Pubkey, breakers: &[Pubkey]) -> &'static AccountInfo<'static> {
    let (pda, bump) = Pubkey::find_program_address(&[REGISTRY_SEED], &crate::id());
    let mut registry = BreakerRegistry::new(admin, bump);
    let proof = require_admin(&registry, &admin).unwrap();
    for breaker in breakers {
        registry.add_breaker(&proof, *breaker).unwrap();
    }

    make_account(
        pda,
        crate::id(),
        false,
        true,
        serialize_padded(&registry, BreakerRegistry::INIT_SPACE),
    )
}

pub fn bucket_account(bucket: &BreakerBucket) -> &'static AccountInfo<'static> {
    let pda = Pubkey::create_program_address(
        &[BUCKET_SEED, bucket.breaker.as_ref(), &[bucket.bump]],
        &crate::id(),
    )
    .unwrap();

    make_account(
        pda,
        crate::id(),
        false,
        true,
        serialize_padded(bucket, BreakerBucket::INIT_SPACE),
    )
}

/// Bucket PDA of `breaker` that was never created.
pub fn vacant_bucket(breaker: Pubkey) -> &'static AccountInfo<'static> {
    let (pda, _) = Pubkey::find_program_address(&[BUCKET_SEED, breaker.as_ref()], &crate::id());
    make_account(pda, System::id(), false, true, vec![])
}

pub fn rate_feed_account(rate_feed: Pubkey, enabled: &[Pubkey]) -> &'static AccountInfo<'static> {
    let (pda, bump) = Pubkey::find_program_address(&[RATE_FEED_SEED, rate_feed.as_ref()], &crate::id());
    let mut feed = RateFeedAccount::new(rate_feed, bump);
    let (_, proof) = registry_admin();
    for breaker in enabled {
        feed.set_enabled(&proof, *breaker, true).unwrap();
    }

    make_account(
        pda,
        crate::id(),
        false,
        true,
        serialize_padded(&feed, RateFeedAccount::INIT_SPACE),
    )
}

/// Empty bucket at the breaker's real PDA.
pub fn empty_bucket(breaker: Pubkey) -> BreakerBucket {
    let (_, bump) = Pubkey::find_program_address(&[BUCKET_SEED, breaker.as_ref()], &crate::id());
    BreakerBucket::new(breaker, bump)
}

/// Bucket plus rate feed accounts with `breaker` enabled on each feed.
pub fn linked_feeds(
    breaker: Pubkey,
    count: usize,
) -> (BreakerBucket, Vec<&'static AccountInfo<'static>>) {
    let (registry, proof) = registry_admin();
    let mut bucket = empty_bucket(breaker);
    let mut infos = Vec::with_capacity(count);

    for _ in 0..count {
        let info = rate_feed_account(Pubkey::new_unique(), &[]);
        let mut feed = read_rate_feed(info);
        link(&registry, &proof, &mut bucket, &mut feed, true).unwrap();
        feed.save(info).unwrap();
        infos.push(info);
    }

    (bucket, infos)
}

pub fn read_rate_feed(info: &AccountInfo) -> RateFeedAccount {
    let data = info.try_borrow_data().unwrap();
    RateFeedAccount::try_deserialize(&mut &data[..]).unwrap()
}

pub fn read_bucket(info: &AccountInfo) -> BreakerBucket {
    let data = info.try_borrow_data().unwrap();
    BreakerBucket::try_deserialize(&mut &data[..]).unwrap()
}

pub fn read_registry(info: &AccountInfo) -> BreakerRegistry {
    let data = info.try_borrow_data().unwrap();
    BreakerRegistry::try_deserialize(&mut &data[..]).unwrap()
}
