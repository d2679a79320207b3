// farm/instructions/open/claim_for.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    state::{
        Global, LiquidityProvider, GLOBAL_SEED, LIQUIDITY_PROVIDER_SEED, REWARD_VAULT_SEED,
        VAULT_AUTHORITY_SEED,
    },
    utils::token::transfer_from_vault,
};

#[derive(Accounts)]
pub struct ClaimFor<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: rewards only ever go to this owner's reward account
    pub owner: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
        has_one = reward_mint,
    )]
    pub global_account: Account<'info, Global>,

    // Created on the fly so that claiming for an owner who never staked
    // reports that there is nothing to claim
    #[account(
        init_if_needed,
        payer = signer,
        space = ANCHOR_DISCRIMINATOR_SIZE + LiquidityProvider::INIT_SPACE,
        seeds = [LIQUIDITY_PROVIDER_SEED, owner.key().as_ref()],
        bump,
    )]
    pub liquidity_provider: Account<'info, LiquidityProvider>,

    pub reward_mint: InterfaceAccount<'info, Mint>,

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
        seeds = [REWARD_VAULT_SEED],
        bump,
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    pub reward_token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimFor>) -> Result<()> {
    let now = Clock::get()?.slot;
    let owner = ctx.accounts.owner.key();

    let liquidity_provider = &mut ctx.accounts.liquidity_provider;
    liquidity_provider.init_if_new(owner, ctx.bumps.liquidity_provider);
    let reward = liquidity_provider.claim(&mut ctx.accounts.global_account, now)?;

    emit!(IncentiveClaimed {
        owner,
        claimer: ctx.accounts.signer.key(),
        amount: reward,
        last_claimed_period: ctx.accounts.liquidity_provider.last_claimed_period,
    });

    transfer_from_vault(
        &ctx.accounts.reward_vault,
        &ctx.accounts.owner_reward_account,
        reward,
        &ctx.accounts.reward_mint,
        &ctx.accounts.vault_authority,
        ctx.accounts.global_account.vault_authority_bump,
        &ctx.accounts.reward_token_program,
    )
}

#[event]
pub struct IncentiveClaimed {
    pub owner: Pubkey,
    pub claimer: Pubkey,
    pub amount: u64,
    pub last_claimed_period: u32,
}
