// farm/instructions/open/open_farm.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    state::{
        Global, LiquidityProvider, GLOBAL_SEED, LIQUIDITY_PROVIDER_SEED, POOL_VAULT_SEED,
        SESSION_AUTHORITY_SEED,
    },
    utils::token::transfer_tokens_from_program,
};

#[derive(Accounts)]
pub struct OpenFarm<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
        has_one = pool_mint,
    )]
    pub global_account: Account<'info, Global>,

    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR_SIZE + LiquidityProvider::INIT_SPACE,
        seeds = [LIQUIDITY_PROVIDER_SEED, owner.key().as_ref()],
        bump,
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
        seeds = [SESSION_AUTHORITY_SEED, owner.key().as_ref()],
        bump,
    )]
    pub session_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [POOL_VAULT_SEED],
        bump,
    )]
    pub pool_vault: InterfaceAccount<'info, TokenAccount>,

    pub pool_token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<OpenFarm>, amount: u64) -> Result<()> {
    let now = Clock::get()?.slot;
    let owner = ctx.accounts.owner.key();

    let liquidity_provider = &mut ctx.accounts.liquidity_provider;
    liquidity_provider.init_if_new(owner, ctx.bumps.liquidity_provider);
    liquidity_provider.open(&mut ctx.accounts.global_account, amount, now)?;

    emit!(FarmOpened {
        owner,
        amount,
        balance: ctx.accounts.liquidity_provider.balance,
        total_staked: ctx.accounts.global_account.total_staked,
    });

    let session_authority_seeds: &[&[&[u8]]] = &[&[
        SESSION_AUTHORITY_SEED,
        owner.as_ref(),
        &[ctx.bumps.session_authority],
    ]];

    transfer_tokens_from_program(
        &ctx.accounts.owner_pool_account,                   // from
        &ctx.accounts.pool_vault,                           // to
        amount,                                             // amount
        &ctx.accounts.pool_mint,                            // mint
        &ctx.accounts.session_authority.to_account_info(),  // authority
        session_authority_seeds,                            // authority seeds
        &ctx.accounts.pool_token_program,                   // token program
    )
}

#[event]
pub struct FarmOpened {
    pub owner: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub total_staked: u64,
}
