// farm/instructions/open/close_farm.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    errors::FarmError,
    state::{
        Global, LiquidityProvider, GLOBAL_SEED, LIQUIDITY_PROVIDER_SEED, POOL_VAULT_SEED,
        VAULT_AUTHORITY_SEED,
    },
    utils::token::transfer_from_vault,
};

#[derive(Accounts)]
pub struct CloseFarm<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
        has_one = pool_mint,
    )]
    pub global_account: Account<'info, Global>,

    #[account(
        mut,
        seeds = [LIQUIDITY_PROVIDER_SEED, owner.key().as_ref()],
        bump = liquidity_provider.bump,
        has_one = owner @ FarmError::Unauthorized,
    )]
    pub liquidity_provider: Account<'info, LiquidityProvider>,

    pub pool_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = pool_mint,
        token::authority = owner,
    )]
    pub owner_pool_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: This account is validated by the seed, it stores no data
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump = global_account.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [POOL_VAULT_SEED],
        bump,
    )]
    pub pool_vault: InterfaceAccount<'info, TokenAccount>,

    pub pool_token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<CloseFarm>, amount: u64) -> Result<()> {
    let now = Clock::get()?.slot;

    LiquidityProvider::close(
        &mut ctx.accounts.liquidity_provider,
        &mut ctx.accounts.global_account,
        amount,
        now,
    )?;

    emit!(FarmClosed {
        owner: ctx.accounts.owner.key(),
        amount,
        balance: ctx.accounts.liquidity_provider.balance,
        total_staked: ctx.accounts.global_account.total_staked,
    });

    transfer_from_vault(
        &ctx.accounts.pool_vault,
        &ctx.accounts.owner_pool_account,
        amount,
        &ctx.accounts.pool_mint,
        &ctx.accounts.vault_authority,
        ctx.accounts.global_account.vault_authority_bump,
        &ctx.accounts.pool_token_program,
    )
}

#[event]
pub struct FarmClosed {
    pub owner: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub total_staked: u64,
}
