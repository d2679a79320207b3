// farm/instructions/open/claim_and_close.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    errors::FarmError,
    instructions::open::{close_farm::FarmClosed, claim_for::IncentiveClaimed},
    state::{
        Global, LiquidityProvider, GLOBAL_SEED, LIQUIDITY_PROVIDER_SEED, POOL_VAULT_SEED,
        REWARD_VAULT_SEED, VAULT_AUTHORITY_SEED,
    },
    utils::token::transfer_from_vault,
};

#[derive(Accounts)]
pub struct ClaimAndClose<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
        has_one = pool_mint,
        has_one = reward_mint,
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

    pub reward_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = pool_mint,
        token::authority = owner,
    )]
    pub owner_pool_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = owner,
    )]
    pub owner_reward_account: InterfaceAccount<'info, TokenAccount>,

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

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED],
        bump,
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    pub pool_token_program: Interface<'info, TokenInterface>,

    pub reward_token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<ClaimAndClose>) -> Result<()> {
    let now = Clock::get()?.slot;
    let owner = ctx.accounts.owner.key();

    let liquidity_provider = &mut ctx.accounts.liquidity_provider;
    let global_account = &mut ctx.accounts.global_account;

    let (reward, withdrawn) = liquidity_provider.claim_and_close(global_account, now)?;

    emit!(IncentiveClaimed {
        owner,
        claimer: owner,
        amount: reward,
        last_claimed_period: liquidity_provider.last_claimed_period,
    });

    if withdrawn > 0 {
        emit!(FarmClosed {
            owner,
            amount: withdrawn,
            balance: 0,
            total_staked: global_account.total_staked,
        });
    }

    let vault_authority_bump = global_account.vault_authority_bump;

    transfer_from_vault(
        &ctx.accounts.reward_vault,
        &ctx.accounts.owner_reward_account,
        reward,
        &ctx.accounts.reward_mint,
        &ctx.accounts.vault_authority,
        vault_authority_bump,
        &ctx.accounts.reward_token_program,
    )?;

    if withdrawn > 0 {
        transfer_from_vault(
            &ctx.accounts.pool_vault,
            &ctx.accounts.owner_pool_account,
            withdrawn,
            &ctx.accounts.pool_mint,
            &ctx.accounts.vault_authority,
            vault_authority_bump,
            &ctx.accounts.pool_token_program,
        )?;
    }

    Ok(())
}
