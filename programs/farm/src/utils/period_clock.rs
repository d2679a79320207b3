// farm/utils/period_clock.rs

use anchor_lang::prelude::*;

use crate::errors::FarmError;

/// Maps a slot to a reward period.
///
/// Period `i` covers slots `[start + i * length, start + (i + 1) * length)`.
/// Slots before `start` belong to period 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodClock {
    pub start: u64,
    pub length: u64,
    pub count: u32,
}

impl PeriodClock {
    pub fn new(start: u64, length: u64, count: u32) -> Self {
        Self {
            start,
            length,
            count,
        }
    }

    /// Number of whole periods elapsed since `start`, unbounded.
    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.start) / self.length
    }

    /// The period `now` falls into, clamped to the last period.
    pub fn current_period(&self, now: u64) -> u32 {
        self.elapsed(now).min(u64::from(self.count - 1)) as u32
    }

    /// Number of periods whose reward can be settled at `now`.
    /// Equals `current_period` while the farm runs and `count` once the
    /// last boundary has passed.
    pub fn finalized_periods(&self, now: u64) -> u32 {
        self.elapsed(now).min(u64::from(self.count)) as u32
    }

    /// Period 0 only opens at `start`; stake changes before that still
    /// count towards its eligible liquidity.
    pub fn has_started(&self, now: u64) -> bool {
        now >= self.start
    }

    pub fn has_ended(&self, now: u64) -> bool {
        self.finalized_periods(now) == self.count
    }

    pub fn period_boundary(&self, period: u32) -> Result<u64> {
        if period > self.count {
            return err!(FarmError::InvalidParam);
        }

        u64::from(period)
            .checked_mul(self.length)
            .and_then(|offset| offset.checked_add(self.start))
            .ok_or_else(|| error!(FarmError::MathOverflow))
    }
}
