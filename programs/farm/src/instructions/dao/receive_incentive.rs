// farm/instructions/dao/receive_incentive.rs

// external dependencies
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    state::{Global, GLOBAL_SEED, REWARD_VAULT_SEED},
    utils::token::transfer_tokens,
};

#[derive(Accounts)]
pub struct ReceiveIncentive<'info> {
    pub from: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
        has_one = reward_mint,
    )]
    pub global_account: Account<'info, Global>,

    pub reward_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = from,
    )]
    pub from_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED],
        bump,
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    pub reward_token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<ReceiveIncentive>, amount: u64, data: Vec<u8>) -> Result<()> {
    let now = Clock::get()?.slot;
    let from = ctx.accounts.from.key();

    let start_slot = ctx
        .accounts
        .global_account
        .receive_incentive(&from, amount, &data, now)?;

    emit!(IncentiveReceived {
        from,
        amount,
        start_slot,
        weekly_incentive: ctx.accounts.global_account.weekly_incentive,
    });

    transfer_tokens(
        &ctx.accounts.from_token_account,            // from
        &ctx.accounts.reward_vault,                  // to
        amount,                                      // amount
        &ctx.accounts.reward_mint,                   // mint
        &ctx.accounts.from.to_account_info(),        // authority
        &ctx.accounts.reward_token_program,          // token program
    )
}

#[event]
pub struct IncentiveReceived {
    pub from: Pubkey,
    pub amount: u64,
    pub start_slot: u64,
    pub weekly_incentive: u64,
}
