// farm/utils/permit.rs

// external dependencies
use anchor_lang::prelude::*;
use solana_program::{
    ed25519_program,
    instruction::Instruction,
    keccak,
    sysvar::instructions::{load_current_index_checked, load_instruction_at_checked},
};

// local dependencies
use crate::{constants::PERMIT_DOMAIN, errors::FarmError};

// Ed25519 precompile data layout (single signature):
// [0] num_signatures, [1] padding, then one 14 byte offsets record
const SIGNATURE_OFFSETS_START: usize = 2;
const SIGNATURE_OFFSETS_LEN: usize = 14;
const PUBKEY_LEN: usize = 32;
const SIGNATURE_LEN: usize = 64;
const CURRENT_INSTRUCTION: u16 = u16::MAX;

/// Off-chain authorization for the farm to pull `value` pool shares from `owner`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositPermit {
    pub farm: Pubkey,
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub value: u64,
    pub nonce: u64,
    pub deadline: i64,
}

impl DepositPermit {
    /// The 32 byte message the owner signs.
    pub fn digest(&self) -> [u8; 32] {
        keccak::hashv(&[
            PERMIT_DOMAIN,
            self.farm.as_ref(),
            self.owner.as_ref(),
            self.spender.as_ref(),
            &self.value.to_le_bytes(),
            &self.nonce.to_le_bytes(),
            &self.deadline.to_le_bytes(),
        ])
        .to_bytes()
    }
}

/// Checks that `ix` is an Ed25519 precompile instruction verifying exactly one
/// signature by `signer` over `message`, with all data inlined.
/// The precompile itself rejects the transaction if the signature is invalid,
/// so matching the key and message binds the signature to this permit.
pub fn verify_ed25519_instruction(ix: &Instruction, signer: &Pubkey, message: &[u8]) -> Result<()> {
    if ix.program_id != ed25519_program::ID || !ix.accounts.is_empty() {
        return err!(FarmError::InvalidAuthorization);
    }

    let data = ix.data.as_slice();
    if data.len() < SIGNATURE_OFFSETS_START + SIGNATURE_OFFSETS_LEN || data[0] != 1 {
        return err!(FarmError::InvalidAuthorization);
    }

    let read_u16 = |index: usize| -> u16 {
        let at = SIGNATURE_OFFSETS_START + index * 2;
        u16::from_le_bytes([data[at], data[at + 1]])
    };

    let signature_offset = usize::from(read_u16(0));
    let signature_ix = read_u16(1);
    let pubkey_offset = usize::from(read_u16(2));
    let pubkey_ix = read_u16(3);
    let message_offset = usize::from(read_u16(4));
    let message_size = usize::from(read_u16(5));
    let message_ix = read_u16(6);

    // Everything must come from the precompile instruction itself
    if signature_ix != CURRENT_INSTRUCTION
        || pubkey_ix != CURRENT_INSTRUCTION
        || message_ix != CURRENT_INSTRUCTION
    {
        return err!(FarmError::InvalidAuthorization);
    }

    if data.len() < signature_offset + SIGNATURE_LEN
        || data.len() < pubkey_offset + PUBKEY_LEN
        || data.len() < message_offset + message_size
    {
        return err!(FarmError::InvalidAuthorization);
    }

    let pubkey = &data[pubkey_offset..pubkey_offset + PUBKEY_LEN];
    let signed_message = &data[message_offset..message_offset + message_size];

    if pubkey != signer.as_ref() || signed_message != message {
        return err!(FarmError::InvalidAuthorization);
    }

    Ok(())
}

/// Loads the instruction placed right before the current one and verifies it
/// carries `owner`'s signature over the permit digest.
pub fn verify_permit(
    instructions_sysvar: &AccountInfo,
    permit: &DepositPermit,
) -> Result<()> {
    let current_index = load_current_index_checked(instructions_sysvar)?;
    if current_index == 0 {
        return err!(FarmError::InvalidAuthorization);
    }

    let signature_ix = load_instruction_at_checked(usize::from(current_index - 1), instructions_sysvar)
        .map_err(|_| error!(FarmError::InvalidAuthorization))?;

    verify_ed25519_instruction(&signature_ix, &permit.owner, &permit.digest())
}
