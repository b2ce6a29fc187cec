use anchor_lang::prelude::*;
use anchor_lang::solana_program::account_info::AccountInfo;
use anchor_lang::solana_program::bpf_loader_upgradeable;
use anchor_lang::solana_program::clock::Epoch;
use anchor_lang::AccountSerialize;

use crate::constants::FEE_CONFIG_SEED;
use crate::state::FeeConfig;

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
    make_account(key, Pubkey::default(), true, false, vec![])
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

/// This program under the upgradeable loader, and its program data account.
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

/// Config PDA owned by this program, sized like the real account.
pub fn config_account(admin: Pubkey) -> &'static AccountInfo<'static> {
    let (pda, bump) = Pubkey::find_program_address(&[FEE_CONFIG_SEED], &crate::id());
    let config = FeeConfig::new(admin, 16, bump).unwrap();

    let mut data = Vec::with_capacity(8 + FeeConfig::INIT_SPACE);
    config.try_serialize(&mut data).unwrap();
    data.resize(8 + FeeConfig::INIT_SPACE, 0);

    make_account(pda, crate::id(), false, true, data)
}
