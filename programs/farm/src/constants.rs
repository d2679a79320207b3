// farm/constants.rs

use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;

// Upper bound on the number of reward periods a farm can be configured with.
// Sizes the snapshot array stored in the global account.
pub const MAX_PERIOD_COUNT: usize = 32;

// The start time travels as a 3 byte big-endian offset from the genesis slot
pub const START_TIME_ENCODED_LEN: usize = 3;
pub const MAX_START_OFFSET: u64 = (1 << (8 * START_TIME_ENCODED_LEN)) - 1;

#[constant]
pub const PERMIT_DOMAIN: &[u8] = b"farm-permit-v1";
