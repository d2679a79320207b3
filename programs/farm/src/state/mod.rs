// farm/state/mod.rs

pub mod global;
pub mod liquidity_provider;

pub use global::*;
pub use liquidity_provider::*;

use anchor_lang::prelude::*;

// Owns both vaults
#[constant]
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

#[constant]
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

#[constant]
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

// Per-owner delegate that pulls pool shares on deposit
#[constant]
pub const SESSION_AUTHORITY_SEED: &[u8] = b"session_authority";
