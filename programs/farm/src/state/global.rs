// farm/state/global.rs

use anchor_lang::prelude::*;

use crate::{
    constants::MAX_PERIOD_COUNT,
    errors::FarmError,
    utils::{start_time::decode_start_offset, PeriodClock},
};

#[constant]
pub const GLOBAL_SEED: &[u8] = b"global";

#[account]
#[derive(InitSpace, Default)]
pub struct Global {
    pub admin: Pubkey,           // created the farm
    pub dao_authority: Pubkey,   // the only account allowed to fund the farm
    pub pool_mint: Pubkey,       // liquidity pool shares that get staked
    pub reward_mint: Pubkey,     // token the incentive is paid in
    pub genesis_slot: u64,       // slot the farm was created at, origin of the encoded start time
    pub start_slot: Option<u64>, // first slot of period 0, set once when the incentive arrives
    pub period_length: u64,      // slots per period
    pub period_count: u32,
    pub total_incentive: u64,  // exact amount the DAO has to send
    pub weekly_incentive: u64, // reward pot of a single period
    pub total_staked: u64,
    pub recorded_periods: u32, // snapshots of periods below this one are frozen
    pub eligible_liquidity: [u64; MAX_PERIOD_COUNT],
    pub bump: u8,
    pub vault_authority_bump: u8,
}

impl Global {
    pub fn is_initialized(&self) -> bool {
        self.start_slot.is_some()
    }

    pub fn clock(&self) -> Result<PeriodClock> {
        match self.start_slot {
            Some(start) => Ok(PeriodClock::new(
                start,
                self.period_length,
                self.period_count,
            )),
            None => err!(FarmError::NotInitialized),
        }
    }

    pub fn current_period(&self, now: u64) -> Result<u32> {
        Ok(self.clock()?.current_period(now))
    }

    pub fn finalized_periods(&self, now: u64) -> Result<u32> {
        Ok(self.clock()?.finalized_periods(now))
    }

    pub fn has_ended(&self, now: u64) -> Result<bool> {
        Ok(self.clock()?.has_ended(now))
    }

    /// Funding hook. Arms the period clock and fixes the per-period pot.
    /// Returns the start slot.
    pub fn receive_incentive(
        &mut self,
        from: &Pubkey,
        amount: u64,
        data: &[u8],
        now: u64,
    ) -> Result<u64> {
        if *from != self.dao_authority {
            return err!(FarmError::Unauthorized);
        }

        if amount != self.total_incentive {
            return err!(FarmError::WrongAmount);
        }

        let offset = decode_start_offset(data)?;
        let start_slot = self
            .genesis_slot
            .checked_add(offset)
            .ok_or(FarmError::MathOverflow)?;

        if start_slot <= now {
            return err!(FarmError::StartTimeNotInFuture);
        }

        if self.is_initialized() {
            return err!(FarmError::AlreadyInitialized);
        }

        // Remainder stays in the reward vault
        self.weekly_incentive = self
            .total_incentive
            .checked_div(u64::from(self.period_count))
            .ok_or(FarmError::InvalidParam)?;
        self.start_slot = Some(start_slot);
        self.recorded_periods = 0;

        Ok(start_slot)
    }

    /// Locks in the eligible liquidity of every period up to the one `now`
    /// falls into. Periods skipped since the last observation saw no stake
    /// change, so they all carry the current total.
    /// Nothing is recorded before the start slot: stake placed then is
    /// eligible for period 0.
    /// Must run before `total_staked` is mutated.
    pub fn record_snapshot(&mut self, now: u64) -> Result<u32> {
        let clock = self.clock()?;
        let period = clock.current_period(now);

        if !clock.has_started(now) {
            return Ok(period);
        }

        while self.recorded_periods <= period {
            self.eligible_liquidity[self.recorded_periods as usize] = self.total_staked;
            self.recorded_periods += 1;
        }

        Ok(period)
    }

    /// Eligible liquidity of `period`. A period that has not been observed yet
    /// reads as the current total, which is what it would record right now.
    pub fn eligible_liquidity_at(&self, period: u32) -> Result<u64> {
        if period >= self.period_count {
            return err!(FarmError::InvalidParam);
        }

        if period < self.recorded_periods {
            Ok(self.eligible_liquidity[period as usize])
        } else {
            Ok(self.total_staked)
        }
    }

    /// Reward owed for `period` to a stake of `stake` held at its start.
    pub fn period_share(&self, period: u32, stake: u64) -> Result<u64> {
        let eligible = self.eligible_liquidity_at(period)?;
        if stake == 0 || eligible == 0 {
            return Ok(0);
        }

        let share =
            u128::from(self.weekly_incentive) * u128::from(stake) / u128::from(eligible);

        u64::try_from(share).map_err(|_| error!(FarmError::MathOverflow))
    }

    pub fn add_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(FarmError::MathOverflow)?;
        Ok(())
    }

    pub fn remove_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(FarmError::InsufficientStake)?;
        Ok(())
    }

    /// What `amount` of fresh liquidity would earn per period if nothing
    /// else changed. Zero before funding and after the last period.
    pub fn current_farm_incentive(&self, amount: u64, now: u64) -> Result<u64> {
        if !self.is_initialized() || self.has_ended(now)? {
            return Ok(0);
        }

        let denominator = u128::from(self.total_staked) + u128::from(amount);
        if denominator == 0 {
            return Ok(0);
        }

        let incentive = u128::from(self.weekly_incentive) * u128::from(amount) / denominator;

        u64::try_from(incentive).map_err(|_| error!(FarmError::MathOverflow))
    }
}
