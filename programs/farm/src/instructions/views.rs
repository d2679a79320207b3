// farm/instructions/views.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    state::{Global, LiquidityProvider, GLOBAL_SEED, LIQUIDITY_PROVIDER_SEED},
    ID,
};

#[derive(Accounts)]
pub struct FarmView<'info> {
    #[account(
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
    )]
    pub global_account: Account<'info, Global>,
}

#[derive(Accounts)]
pub struct ProviderView<'info> {
    #[account(
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
    )]
    pub global_account: Account<'info, Global>,

    /// CHECK: only used to derive the liquidity provider address
    pub owner: UncheckedAccount<'info>,

    /// CHECK: may not exist yet, validated by the seed and deserialized by hand
    #[account(
        seeds = [LIQUIDITY_PROVIDER_SEED, owner.key().as_ref()],
        bump,
    )]
    pub liquidity_provider: UncheckedAccount<'info>,
}

pub fn current_farm_period(ctx: Context<FarmView>) -> Result<u32> {
    ctx.accounts
        .global_account
        .current_period(Clock::get()?.slot)
}

pub fn total_pool_balance(ctx: Context<FarmView>) -> Result<u64> {
    Ok(ctx.accounts.global_account.total_staked)
}

pub fn eligible_liquidity_per_period(ctx: Context<FarmView>, period: u32) -> Result<u64> {
    ctx.accounts.global_account.eligible_liquidity_at(period)
}

pub fn current_farm_incentive(ctx: Context<FarmView>, amount: u64) -> Result<u64> {
    ctx.accounts
        .global_account
        .current_farm_incentive(amount, Clock::get()?.slot)
}

pub fn distribution_blocks(ctx: Context<FarmView>, period: u32) -> Result<u64> {
    ctx.accounts.global_account.clock()?.period_boundary(period)
}

pub fn weekly_incentive(ctx: Context<FarmView>) -> Result<u64> {
    Ok(ctx.accounts.global_account.weekly_incentive)
}

pub fn incentive_to_be_claimed(ctx: Context<ProviderView>) -> Result<u64> {
    let account = &ctx.accounts.liquidity_provider;

    // Owners who never touched the farm have nothing to claim
    if *account.owner != ID || account.data_is_empty() {
        return Ok(0);
    }

    let data = account.try_borrow_data()?;
    let liquidity_provider = LiquidityProvider::try_deserialize(&mut &data[..])?;

    liquidity_provider.claimable(&ctx.accounts.global_account, Clock::get()?.slot)
}
