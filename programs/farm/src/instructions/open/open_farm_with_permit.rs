// farm/instructions/open/open_farm_with_permit.rs

// external dependencies
use anchor_lang::{prelude::*, solana_program::sysvar};
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    instructions::open::open_farm::FarmOpened,
    state::{
        Global, LiquidityProvider, GLOBAL_SEED, LIQUIDITY_PROVIDER_SEED, POOL_VAULT_SEED,
        SESSION_AUTHORITY_SEED,
    },
    utils::{
        permit::{verify_permit, DepositPermit},
        token::transfer_tokens_from_program,
    },
};

#[derive(Accounts)]
pub struct OpenFarmWithPermit<'info> {
    #[account(mut)]
    pub relayer: Signer<'info>,

    /// CHECK: authorization comes from the permit signature, not from a signer
    pub owner: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global_account.bump,
        has_one = pool_mint,
    )]
    pub global_account: Account<'info, Global>,

    #[account(
        init_if_needed,
        payer = relayer,
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

    /// CHECK: The address constraint pins this to the instructions sysvar
    #[account(address = sysvar::instructions::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    pub pool_token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// The permit authorizes the relayed deposit only. The tokens still move
/// through the owner's SPL approval to their session authority.
pub fn handler(
    ctx: Context<OpenFarmWithPermit>,
    amount: u64,
    nonce: u64,
    deadline: i64,
) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();

    let permit = DepositPermit {
        farm: ctx.accounts.global_account.key(),
        owner,
        spender: ctx.accounts.session_authority.key(),
        value: amount,
        nonce,
        deadline,
    };

    let liquidity_provider = &mut ctx.accounts.liquidity_provider;
    liquidity_provider.init_if_new(owner, ctx.bumps.liquidity_provider);

    let instructions_sysvar = &ctx.accounts.instructions_sysvar;
    liquidity_provider.accept_permit(nonce, deadline, clock.unix_timestamp, || {
        verify_permit(instructions_sysvar, &permit)
    })?;

    liquidity_provider.open(&mut ctx.accounts.global_account, amount, clock.slot)?;

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
