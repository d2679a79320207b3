// farm/state/liquidity_provider.rs

use anchor_lang::prelude::*;

use crate::{errors::FarmError, state::Global};

#[constant]
pub const LIQUIDITY_PROVIDER_SEED: &[u8] = b"liquidity_provider";

#[account]
#[derive(InitSpace, Default)]
pub struct LiquidityProvider {
    pub owner: Pubkey,
    pub balance: u64,
    pub last_claimed_period: u32, // rewards paid for every period below this one
    pub settled_period: u32,      // every period below this one is folded into `unclaimed`
    pub unclaimed: u64,
    pub period_start_balance: u64, // balance when `settled_period` started
    pub permit_nonce: u64,
    pub bump: u8,
}

impl LiquidityProvider {
    /// Binds a freshly created account to its owner. No-op afterwards.
    pub fn init_if_new(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.bump = bump;
        }
    }

    // Reward of periods [settled_period, horizon) that is not in `unclaimed` yet.
    // The balance has not changed since `settled_period` started, except for
    // mutations made during that period itself.
    fn accrued(&self, global: &Global, horizon: u32) -> Result<u64> {
        if horizon <= self.settled_period {
            return Ok(0);
        }

        let mut accrued = global.period_share(self.settled_period, self.period_start_balance)?;
        for period in self.settled_period + 1..horizon {
            accrued = accrued
                .checked_add(global.period_share(period, self.balance)?)
                .ok_or(FarmError::MathOverflow)?;
        }

        Ok(accrued)
    }

    /// Folds every period before `horizon` into `unclaimed`.
    /// Must run before `balance` changes.
    pub fn settle(&mut self, global: &Global, horizon: u32) -> Result<()> {
        if horizon <= self.settled_period {
            return Ok(());
        }

        let accrued = self.accrued(global, horizon)?;
        self.unclaimed = self
            .unclaimed
            .checked_add(accrued)
            .ok_or(FarmError::MathOverflow)?;
        self.settled_period = horizon;
        self.period_start_balance = self.balance;

        Ok(())
    }

    /// Reward that a claim at `now` would pay out.
    pub fn claimable(&self, global: &Global, now: u64) -> Result<u64> {
        let horizon = global.finalized_periods(now)?;

        self.unclaimed
            .checked_add(self.accrued(global, horizon)?)
            .ok_or_else(|| error!(FarmError::MathOverflow))
    }

    pub fn open(&mut self, global: &mut Global, amount: u64, now: u64) -> Result<()> {
        if amount == 0 {
            return err!(FarmError::ZeroAmount);
        }

        if global.has_ended(now)? {
            return err!(FarmError::FarmEnded);
        }

        global.record_snapshot(now)?;
        self.settle(global, global.finalized_periods(now)?)?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(FarmError::MathOverflow)?;
        self.track_pre_start_balance(global, now)?;
        global.add_stake(amount)
    }

    pub fn close(&mut self, global: &mut Global, amount: u64, now: u64) -> Result<()> {
        if amount == 0 {
            return err!(FarmError::ZeroAmount);
        }

        if amount > self.balance {
            return err!(FarmError::InsufficientStake);
        }

        global.record_snapshot(now)?;
        self.settle(global, global.finalized_periods(now)?)?;

        self.balance -= amount;
        self.track_pre_start_balance(global, now)?;
        global.remove_stake(amount)
    }

    // Before the start slot the balance is still the stake period 0 opens with.
    fn track_pre_start_balance(&mut self, global: &Global, now: u64) -> Result<()> {
        if !global.clock()?.has_started(now) {
            self.period_start_balance = self.balance;
        }
        Ok(())
    }

    /// Settles and zeroes the reward owed up to the last finalized period.
    /// Returns the amount to pay out.
    pub fn claim(&mut self, global: &mut Global, now: u64) -> Result<u64> {
        global.record_snapshot(now)?;

        let horizon = global.finalized_periods(now)?;
        if horizon == 0 {
            return err!(FarmError::TooEarlyToClaim);
        }

        self.settle(global, horizon)?;

        let reward = self.unclaimed;
        if reward == 0 {
            return err!(FarmError::NothingToClaim);
        }

        self.unclaimed = 0;
        self.last_claimed_period = horizon;

        Ok(reward)
    }

    /// Claims, then withdraws the whole balance.
    /// Returns the reward and the withdrawn stake.
    pub fn claim_and_close(&mut self, global: &mut Global, now: u64) -> Result<(u64, u64)> {
        let reward = self.claim(global, now)?;

        // A provider that already withdrew everything only claims
        let withdrawn = self.balance;
        if withdrawn > 0 {
            self.close(global, withdrawn, now)?;
        }

        Ok((reward, withdrawn))
    }

    /// Permit preflight. The nonce is only consumed once `verify_signature`
    /// accepts the permit.
    pub fn accept_permit<F>(
        &mut self,
        nonce: u64,
        deadline: i64,
        unix_now: i64,
        verify_signature: F,
    ) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        if unix_now > deadline {
            return err!(FarmError::AuthorizationExpired);
        }

        if nonce != self.permit_nonce {
            return err!(FarmError::NonceMismatch);
        }

        verify_signature()?;

        self.permit_nonce = self
            .permit_nonce
            .checked_add(1)
            .ok_or(FarmError::MathOverflow)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::start_time::encode_start_offset;

    const START: u64 = 200;
    const LENGTH: u64 = 10;

    fn farm() -> Global {
        let dao = Pubkey::new_unique();
        let mut global = Global {
            dao_authority: dao,
            genesis_slot: 0,
            period_length: LENGTH,
            period_count: 4,
            total_incentive: 4_000,
            ..Default::default()
        };
        global
            .receive_incentive(&dao, 4_000, &encode_start_offset(START).unwrap(), 0)
            .unwrap();
        global
    }

    fn slot_in(period: u64) -> u64 {
        START + period * LENGTH + 1
    }

    #[test]
    fn deposits_only_count_from_the_next_period() {
        let mut global = farm();
        let mut lp = LiquidityProvider::default();

        lp.open(&mut global, 100, slot_in(1)).unwrap();
        assert_eq!(lp.claimable(&global, slot_in(1)).unwrap(), 0);
        assert_eq!(lp.claimable(&global, slot_in(2)).unwrap(), 0);
        assert_eq!(lp.claimable(&global, slot_in(3)).unwrap(), 1_000);
    }

    #[test]
    fn mid_period_top_up_keeps_period_start_stake() {
        let mut global = farm();
        let mut alice = LiquidityProvider::default();
        let mut bob = LiquidityProvider::default();

        alice.open(&mut global, 100, slot_in(0)).unwrap();
        bob.open(&mut global, 100, slot_in(0)).unwrap();

        // period 1 starts with 100/100
        alice.open(&mut global, 200, slot_in(1)).unwrap();

        // period 2 starts with 300/100
        assert_eq!(alice.claim(&mut global, slot_in(3)).unwrap(), 500 + 750);
        assert_eq!(bob.claim(&mut global, slot_in(3)).unwrap(), 500 + 250);
    }

    #[test]
    fn withdrawal_keeps_earned_reward() {
        let mut global = farm();
        let mut lp = LiquidityProvider::default();

        lp.open(&mut global, 100, slot_in(0)).unwrap();
        lp.close(&mut global, 100, slot_in(2)).unwrap();

        assert_eq!(lp.balance, 0);
        assert_eq!(global.total_staked, 0);
        // full stake for period 1 and for period 2's start
        assert_eq!(lp.claimable(&global, slot_in(3)).unwrap(), 2_000);
        assert_eq!(lp.claim(&mut global, slot_in(3)).unwrap(), 2_000);
    }

    #[test]
    fn close_checks() {
        let mut global = farm();
        let mut lp = LiquidityProvider::default();
        lp.open(&mut global, 100, slot_in(0)).unwrap();

        assert_eq!(
            lp.close(&mut global, 0, slot_in(0)).unwrap_err(),
            error!(FarmError::ZeroAmount)
        );
        assert_eq!(
            lp.close(&mut global, 101, slot_in(0)).unwrap_err(),
            error!(FarmError::InsufficientStake)
        );
        assert_eq!(lp.balance, 100);
    }

    #[test]
    fn open_checks() {
        let mut global = farm();
        let mut lp = LiquidityProvider::default();

        assert_eq!(
            lp.open(&mut global, 0, slot_in(0)).unwrap_err(),
            error!(FarmError::ZeroAmount)
        );
        assert_eq!(
            lp.open(&mut global, 1, slot_in(4)).unwrap_err(),
            error!(FarmError::FarmEnded)
        );

        let mut unfunded = Global::default();
        assert_eq!(
            lp.open(&mut unfunded, 1, 0).unwrap_err(),
            error!(FarmError::NotInitialized)
        );
    }

    #[test]
    fn claim_checks() {
        let mut global = farm();
        let mut lp = LiquidityProvider::default();
        lp.open(&mut global, 100, slot_in(0)).unwrap();

        assert_eq!(
            lp.claim(&mut global, slot_in(0)).unwrap_err(),
            error!(FarmError::TooEarlyToClaim)
        );

        // the deposit came after the start, so period 0 recorded nothing
        assert_eq!(
            lp.claim(&mut global, slot_in(1)).unwrap_err(),
            error!(FarmError::NothingToClaim)
        );

        assert_eq!(lp.claim(&mut global, slot_in(2)).unwrap(), 1_000);
        assert_eq!(lp.last_claimed_period, 2);
        assert_eq!(
            lp.claim(&mut global, slot_in(2)).unwrap_err(),
            error!(FarmError::NothingToClaim)
        );
        assert_eq!(lp.last_claimed_period, 2);
    }

    #[test]
    fn last_period_pays_after_the_final_boundary() {
        let mut global = farm();
        let mut lp = LiquidityProvider::default();
        lp.open(&mut global, 100, slot_in(0)).unwrap();

        assert_eq!(lp.claim(&mut global, slot_in(3)).unwrap(), 2_000);
        assert_eq!(lp.claim(&mut global, slot_in(4)).unwrap(), 1_000);
        assert_eq!(lp.last_claimed_period, 4);
        assert_eq!(
            lp.claim(&mut global, slot_in(40)).unwrap_err(),
            error!(FarmError::NothingToClaim)
        );
    }

    #[test]
    fn stake_before_the_start_earns_period_zero() {
        let mut global = farm();
        let mut alice = LiquidityProvider::default();
        let mut bob = LiquidityProvider::default();

        alice.open(&mut global, 100, START - 50).unwrap();
        alice.open(&mut global, 100, START - 40).unwrap();
        alice.close(&mut global, 100, START - 30).unwrap();
        assert_eq!(alice.period_start_balance, 100);

        // too late for period 0
        bob.open(&mut global, 300, slot_in(0)).unwrap();

        assert_eq!(alice.claim(&mut global, slot_in(1)).unwrap(), 1_000);
        assert_eq!(bob.claim(&mut global, slot_in(2)).unwrap(), 750);
        assert_eq!(alice.claim(&mut global, slot_in(2)).unwrap(), 250);
    }

    #[test]
    fn claim_and_close_withdraws_everything() {
        let mut global = farm();
        let mut lp = LiquidityProvider::default();
        lp.open(&mut global, 100, START - 1).unwrap();

        assert_eq!(lp.claim_and_close(&mut global, slot_in(2)).unwrap(), (2_000, 100));
        assert_eq!(lp.balance, 0);
        assert_eq!(global.total_staked, 0);
        assert_eq!(lp.last_claimed_period, 2);
    }

    #[test]
    fn claim_and_close_after_a_full_withdrawal_only_claims() {
        let mut global = farm();
        let mut lp = LiquidityProvider::default();
        lp.open(&mut global, 100, START - 1).unwrap();
        lp.close(&mut global, 100, slot_in(1)).unwrap();

        assert_eq!(lp.claim_and_close(&mut global, slot_in(3)).unwrap(), (2_000, 0));
        assert_eq!(global.total_staked, 0);
    }

    #[test]
    fn claim_and_close_without_reward_keeps_the_stake() {
        let mut global = farm();
        let mut lp = LiquidityProvider::default();
        lp.open(&mut global, 100, slot_in(0)).unwrap();

        assert_eq!(
            lp.claim_and_close(&mut global, slot_in(1)).unwrap_err(),
            error!(FarmError::NothingToClaim)
        );
        assert_eq!(lp.balance, 100);
        assert_eq!(global.total_staked, 100);
    }

    #[test]
    fn expired_permit_is_rejected_before_the_nonce() {
        let mut lp = LiquidityProvider::default();
        assert_eq!(
            lp.accept_permit(7, 99, 100, || Ok(())).unwrap_err(),
            error!(FarmError::AuthorizationExpired)
        );
        assert_eq!(lp.permit_nonce, 0);
    }

    #[test]
    fn permit_with_a_stale_nonce_is_rejected() {
        let mut lp = LiquidityProvider::default();
        lp.accept_permit(0, 100, 100, || Ok(())).unwrap();
        assert_eq!(lp.permit_nonce, 1);

        assert_eq!(
            lp.accept_permit(0, 100, 50, || Ok(())).unwrap_err(),
            error!(FarmError::NonceMismatch)
        );
        lp.accept_permit(1, 100, 50, || Ok(())).unwrap();
        assert_eq!(lp.permit_nonce, 2);
    }

    #[test]
    fn rejected_signature_leaves_the_nonce_unused() {
        let mut lp = LiquidityProvider::default();
        assert_eq!(
            lp.accept_permit(0, 100, 50, || err!(FarmError::InvalidAuthorization))
                .unwrap_err(),
            error!(FarmError::InvalidAuthorization)
        );
        assert_eq!(lp.permit_nonce, 0);

        let mut verified = false;
        lp.accept_permit(0, 100, 50, || {
            verified = true;
            Ok(())
        })
        .unwrap();
        assert!(verified);
        assert_eq!(lp.permit_nonce, 1);
    }
}
