// farm/instructions/admin/initialize.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    constants::{ANCHOR_DISCRIMINATOR_SIZE, MAX_PERIOD_COUNT},
    errors::FarmError,
    state::{Global, GLOBAL_SEED, POOL_VAULT_SEED, REWARD_VAULT_SEED, VAULT_AUTHORITY_SEED},
    utils::token::has_transfer_fee,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR_SIZE + Global::INIT_SPACE,
        seeds = [GLOBAL_SEED],
        bump
    )]
    pub global_account: Account<'info, Global>,

    #[account(mint::token_program = pool_token_program)]
    pub pool_mint: InterfaceAccount<'info, Mint>,

    #[account(mint::token_program = reward_token_program)]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: This account is validated by the seed, it stores no data
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [POOL_VAULT_SEED],
        bump,
        token::mint = pool_mint,
        token::authority = vault_authority,
        token::token_program = pool_token_program,
    )]
    pub pool_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init,
        payer = admin,
        seeds = [REWARD_VAULT_SEED],
        bump,
        token::mint = reward_mint,
        token::authority = vault_authority,
        token::token_program = reward_token_program,
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    pub pool_token_program: Interface<'info, TokenInterface>,

    pub reward_token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    dao_authority: Pubkey,
    period_length: u64,
    period_count: u32,
    total_incentive: u64,
) -> Result<()> {
    if period_count == 0 || period_count as usize > MAX_PERIOD_COUNT {
        return err!(FarmError::InvalidParam);
    }

    if period_length == 0 {
        return err!(FarmError::InvalidParam);
    }

    // Every period needs a non-zero pot
    if total_incentive < u64::from(period_count) {
        return err!(FarmError::InvalidParam);
    }

    // Vault balances are credited with nominal amounts
    if has_transfer_fee(&ctx.accounts.pool_mint) || has_transfer_fee(&ctx.accounts.reward_mint) {
        return err!(FarmError::InvalidAccount);
    }

    let genesis_slot = Clock::get()?.slot;

    ctx.accounts.global_account.set_inner(Global {
        admin: ctx.accounts.admin.key(),
        dao_authority,
        pool_mint: ctx.accounts.pool_mint.key(),
        reward_mint: ctx.accounts.reward_mint.key(),
        genesis_slot,
        start_slot: None, // armed by receive_incentive
        period_length,
        period_count,
        total_incentive,
        weekly_incentive: 0,
        total_staked: 0,
        recorded_periods: 0,
        eligible_liquidity: [0; MAX_PERIOD_COUNT],
        bump: ctx.bumps.global_account,
        vault_authority_bump: ctx.bumps.vault_authority,
    });

    msg!(
        "Farm created at slot {} with {} periods of {} slots",
        genesis_slot,
        period_count,
        period_length
    );

    Ok(())
}
