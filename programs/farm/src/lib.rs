// farm/lib.rs - top-level program file

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

use instructions::*;

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    // Required fields
    name: "Liquidity Farm Program",
    project_url: "https://hoprnet.org",
    contacts: "email:security@hoprnet.org",
    // Optional Fields
    preferred_languages: "en"
}

declare_id!("FarmD9sQ7HXvUqdGnGkTnq9dHhnQ5X3rNYo2dqfSqL5F");

#[program]
pub mod farm {
    use super::*;

    // Admin instructions

    pub fn initialize(
        ctx: Context<Initialize>,
        dao_authority: Pubkey,
        period_length: u64,
        period_count: u32,
        total_incentive: u64,
    ) -> Result<()> {
        instructions::admin::initialize::handler(
            ctx,
            dao_authority,
            period_length,
            period_count,
            total_incentive,
        )
    }

    // DAO instructions

    pub fn receive_incentive(
        ctx: Context<ReceiveIncentive>,
        amount: u64,
        data: Vec<u8>,
    ) -> Result<()> {
        instructions::dao::receive_incentive::handler(ctx, amount, data)
    }

    // Open instructions

    pub fn open_farm(ctx: Context<OpenFarm>, amount: u64) -> Result<()> {
        instructions::open::open_farm::handler(ctx, amount)
    }

    pub fn open_farm_with_permit(
        ctx: Context<OpenFarmWithPermit>,
        amount: u64,
        nonce: u64,
        deadline: i64,
    ) -> Result<()> {
        instructions::open::open_farm_with_permit::handler(ctx, amount, nonce, deadline)
    }

    pub fn close_farm(ctx: Context<CloseFarm>, amount: u64) -> Result<()> {
        instructions::open::close_farm::handler(ctx, amount)
    }

    pub fn claim_for(ctx: Context<ClaimFor>) -> Result<()> {
        instructions::open::claim_for::handler(ctx)
    }

    pub fn claim_and_close(ctx: Context<ClaimAndClose>) -> Result<()> {
        instructions::open::claim_and_close::handler(ctx)
    }

    // Views

    pub fn current_farm_period(ctx: Context<FarmView>) -> Result<u32> {
        instructions::views::current_farm_period(ctx)
    }

    pub fn total_pool_balance(ctx: Context<FarmView>) -> Result<u64> {
        instructions::views::total_pool_balance(ctx)
    }

    pub fn eligible_liquidity_per_period(ctx: Context<FarmView>, period: u32) -> Result<u64> {
        instructions::views::eligible_liquidity_per_period(ctx, period)
    }

    pub fn incentive_to_be_claimed(ctx: Context<ProviderView>) -> Result<u64> {
        instructions::views::incentive_to_be_claimed(ctx)
    }

    pub fn current_farm_incentive(ctx: Context<FarmView>, amount: u64) -> Result<u64> {
        instructions::views::current_farm_incentive(ctx, amount)
    }

    pub fn distribution_blocks(ctx: Context<FarmView>, period: u32) -> Result<u64> {
        instructions::views::distribution_blocks(ctx, period)
    }

    pub fn weekly_incentive(ctx: Context<FarmView>) -> Result<u64> {
        instructions::views::weekly_incentive(ctx)
    }
}
