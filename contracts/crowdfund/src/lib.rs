//! # CrowdFund Contract
//!
//! This is the root crate of the crowdfunding protocol. It exposes the
//! single Soroban contract `CrowdFund` whose entry points cover the full
//! campaign lifecycle:
//!
//! | Phase      | Entry Point(s)                                    |
//! |------------|---------------------------------------------------|
//! | Bootstrap  | [`CrowdFund::init`]                               |
//! | Creation   | [`CrowdFund::create_campaign`]                    |
//! | Funding    | [`CrowdFund::donate_to_campaign`]                 |
//! | Settlement | `withdraw_campaign`, `cancel_campaign`, `refund_campaign` |
//! | Revival    | `update_campaign`, `perform_upkeep`               |
//! | Queries    | `get_campaign`, `get_campaigns`, `get_donators`, … |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`], event emission to
//! [`events`]. This file contains the entry points, their precondition
//! checks, and the status transitions — the host rolls back every write
//! when a check panics, so each call is atomic.
//!
//! ## Lifecycle
//!
//! A campaign starts `Open`. Donations accumulate until the running total
//! reaches the target (`Approved`) or the deadline passes and
//! [`CrowdFund::perform_upkeep`] moves it to `Reverted`. The owner settles
//! an `Approved` campaign with `withdraw_campaign` (fee split, `Paid`),
//! abandons an `Open` one with `cancel_campaign` (donors repaid,
//! `Deleted`), or revives a `Reverted` one with `update_campaign`. A
//! `Reverted` campaign can instead repay its donors via `refund_campaign`,
//! which is final.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String, Vec,
};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_upkeep;

pub use types::{
    Campaign, CampaignMeta, CampaignState, Category, Config, Donation, RefundMode, Status,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized     = 2,
    CampaignNotFound   = 3,
    RequiredField      = 4,
    InvalidDeadline    = 5,
    NotOwner           = 6,
    InvalidStatus      = 7,
    NothingToRefund    = 8,
    InvalidFeeConfig   = 9,
}

#[contract]
pub struct CrowdFund;

#[contractimpl]
impl CrowdFund {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract with its immutable configuration.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `fee_account` receives the fee cut of every withdrawal and must
    ///   sign the transaction.
    /// - `fee_percent` is the withdrawal cut in whole percent (0..=100).
    /// - `token` is the token contract all campaigns are funded in.
    /// - `max_duration` caps `deadline - now` at creation/update, in
    ///   seconds; pass 0 to disable the cap.
    /// - `refund_mode` fixes who may trigger refunds.
    pub fn init(
        env: Env,
        fee_account: Address,
        fee_percent: u32,
        token: Address,
        max_duration: u64,
        refund_mode: RefundMode,
    ) {
        fee_account.require_auth();
        if storage::has_config(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if fee_percent > 100 {
            panic_with_error!(&env, Error::InvalidFeeConfig);
        }
        storage::set_config(
            &env,
            &Config {
                fee_account,
                fee_percent,
                token,
                max_duration,
                refund_mode,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Campaign lifecycle
    // ─────────────────────────────────────────────────────────

    /// Create a new campaign and return it.
    ///
    /// - `title`, `description`, and `image` must be non-empty.
    /// - `target` must be strictly positive.
    /// - `deadline` must be strictly in the future and within the
    ///   configured maximum horizon.
    ///
    /// The campaign starts `Open` with nothing collected.
    pub fn create_campaign(
        env: Env,
        owner: Address,
        category: Category,
        title: String,
        description: String,
        target: i128,
        deadline: u64,
        image: String,
    ) -> Campaign {
        owner.require_auth();
        let config = storage::get_config(&env);

        if title.len() == 0 || description.len() == 0 || image.len() == 0 {
            panic_with_error!(&env, Error::RequiredField);
        }
        if target <= 0 {
            panic_with_error!(&env, Error::RequiredField);
        }
        let now = env.ledger().timestamp();
        check_deadline(&env, &config, now, deadline);

        let id = storage::get_and_increment_campaign_id(&env);

        let meta = CampaignMeta {
            id,
            owner: owner.clone(),
            category,
            title,
            description,
            image,
            created_at: now,
        };
        let state = CampaignState {
            target,
            deadline,
            amount_collected: 0,
            status: Status::Open,
            refunded: false,
        };
        storage::save_campaign(&env, &meta, &state);

        events::campaign_created(&env, id, &owner, target, deadline);
        Campaign::from_parts(meta, state)
    }

    /// Donate `amount` of the funding token to an open campaign.
    ///
    /// The deadline is checked against the current ledger time directly,
    /// not via the status: a campaign past its deadline rejects donations
    /// even when upkeep has not yet moved it to `Reverted`.
    ///
    /// When the running total first reaches the target, the campaign
    /// transitions to `Approved`.
    pub fn donate_to_campaign(env: Env, campaign_id: u64, donator: Address, amount: i128) {
        donator.require_auth();
        let config = storage::get_config(&env);
        let mut state = storage::load_state(&env, campaign_id);

        if amount <= 0 {
            panic_with_error!(&env, Error::RequiredField);
        }
        if state.status != Status::Open {
            panic_with_error!(&env, Error::InvalidStatus);
        }
        let now = env.ledger().timestamp();
        if now > state.deadline {
            panic_with_error!(&env, Error::InvalidDeadline);
        }

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&donator, &env.current_contract_address(), &amount);

        let mut donations = storage::load_donations(&env, campaign_id);
        donations.push_back(Donation {
            donator: donator.clone(),
            amount,
            timestamp: now,
        });
        storage::save_donations(&env, campaign_id, &donations);

        state.amount_collected += amount;
        let reached_target = state.amount_collected >= state.target;
        if reached_target {
            state.status = Status::Approved;
        }
        storage::save_state(&env, campaign_id, &state);

        events::donation_received(&env, campaign_id, &donator, amount);
        if reached_target {
            events::campaign_approved(&env, campaign_id, state.amount_collected);
        }
    }

    /// Cancel an open campaign, repaying every recorded donor in full.
    ///
    /// Owner-only. The campaign ends `Deleted`, which is terminal.
    pub fn cancel_campaign(env: Env, campaign_id: u64, caller: Address) {
        caller.require_auth();
        let config = storage::get_config(&env);
        let meta = storage::load_meta(&env, campaign_id);
        let mut state = storage::load_state(&env, campaign_id);

        if caller != meta.owner {
            panic_with_error!(&env, Error::NotOwner);
        }
        if state.status != Status::Open {
            panic_with_error!(&env, Error::InvalidStatus);
        }

        let refunded_total = repay_donors(&env, &config, campaign_id);
        state.amount_collected = 0;
        state.status = Status::Deleted;
        storage::save_state(&env, campaign_id, &state);

        events::campaign_canceled(&env, campaign_id, &meta.owner, refunded_total);
    }

    /// Withdraw an approved campaign's balance.
    ///
    /// Owner-only. The configured fee percentage goes to the fee account;
    /// the remainder — including any truncation remainder from the integer
    /// division — goes to the owner, so `fee + payout` equals the collected
    /// amount exactly. The campaign ends `Paid`, which is terminal.
    pub fn withdraw_campaign(env: Env, campaign_id: u64, caller: Address) {
        caller.require_auth();
        let config = storage::get_config(&env);
        let meta = storage::load_meta(&env, campaign_id);
        let mut state = storage::load_state(&env, campaign_id);

        if caller != meta.owner {
            panic_with_error!(&env, Error::NotOwner);
        }
        if state.status != Status::Approved {
            panic_with_error!(&env, Error::InvalidStatus);
        }

        let fee = state.amount_collected * i128::from(config.fee_percent) / 100;
        let payout = state.amount_collected - fee;

        let token_client = token::Client::new(&env, &config.token);
        if fee > 0 {
            token_client.transfer(&env.current_contract_address(), &config.fee_account, &fee);
        }
        token_client.transfer(&env.current_contract_address(), &meta.owner, &payout);

        state.status = Status::Paid;
        storage::save_state(&env, campaign_id, &state);

        events::campaign_paid_out(&env, campaign_id, &meta.owner, payout, fee);
    }

    /// Repay every recorded donor of a campaign in full.
    ///
    /// Authorization depends on the configured [`RefundMode`]: the owner
    /// always may; under `DonorInitiated` any recorded donator may as well.
    /// Rejected for `Paid`/`Deleted` campaigns and when nothing has been
    /// collected. The campaign ends `Reverted` with the `refunded` flag
    /// set, which is final — a refunded campaign cannot be reopened.
    pub fn refund_campaign(env: Env, campaign_id: u64, caller: Address) {
        caller.require_auth();
        let config = storage::get_config(&env);
        let meta = storage::load_meta(&env, campaign_id);
        let mut state = storage::load_state(&env, campaign_id);

        if state.status.is_terminal() {
            panic_with_error!(&env, Error::InvalidStatus);
        }
        let authorized = caller == meta.owner
            || (config.refund_mode == RefundMode::DonorInitiated
                && is_donator(&env, campaign_id, &caller));
        if !authorized {
            panic_with_error!(&env, Error::NotOwner);
        }
        if state.amount_collected == 0 {
            panic_with_error!(&env, Error::NothingToRefund);
        }

        let total = repay_donors(&env, &config, campaign_id);
        state.amount_collected = 0;
        state.status = Status::Reverted;
        state.refunded = true;
        storage::save_state(&env, campaign_id, &state);

        events::campaign_refunded(&env, campaign_id, &caller, total);
    }

    /// Give a reverted campaign a new target and deadline, reopening it.
    ///
    /// Owner-only, and only for campaigns that expired without a refund:
    /// reopening a refunded campaign would detach the `refunded` flag from
    /// the `Reverted` status it records.
    pub fn update_campaign(
        env: Env,
        campaign_id: u64,
        caller: Address,
        new_target: i128,
        new_deadline: u64,
    ) {
        caller.require_auth();
        let config = storage::get_config(&env);
        let meta = storage::load_meta(&env, campaign_id);
        let mut state = storage::load_state(&env, campaign_id);

        if caller != meta.owner {
            panic_with_error!(&env, Error::NotOwner);
        }
        if state.status != Status::Reverted || state.refunded {
            panic_with_error!(&env, Error::InvalidStatus);
        }
        if new_target <= 0 {
            panic_with_error!(&env, Error::RequiredField);
        }
        let now = env.ledger().timestamp();
        check_deadline(&env, &config, now, new_deadline);

        state.target = new_target;
        state.deadline = new_deadline;
        state.status = Status::Open;
        storage::save_state(&env, campaign_id, &state);

        events::campaign_updated(&env, campaign_id, new_target, new_deadline);
    }

    /// Move every open campaign past its deadline to `Reverted`.
    ///
    /// No authorization required. Idempotent: campaigns already moved are
    /// skipped, and a call with no eligible campaigns is a no-op. Meant to
    /// be invoked by an external scheduler, since the contract cannot run
    /// timers of its own.
    pub fn perform_upkeep(env: Env) {
        let count = storage::campaign_count(&env);
        let now = env.ledger().timestamp();
        for id in 0..count {
            let mut state = storage::load_state(&env, id);
            if state.status == Status::Open && now > state.deadline {
                state.status = Status::Reverted;
                storage::save_state(&env, id, &state);
                events::campaign_reverted(&env, id, state.deadline);
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Retrieve a campaign by its ID.
    pub fn get_campaign(env: Env, campaign_id: u64) -> Campaign {
        storage::load_campaign(&env, campaign_id)
    }

    /// Retrieve every campaign ever created, in creation order.
    /// Terminal campaigns are included — nothing is physically deleted.
    pub fn get_campaigns(env: Env) -> Vec<Campaign> {
        let count = storage::campaign_count(&env);
        let mut campaigns = Vec::new(&env);
        for id in 0..count {
            campaigns.push_back(storage::load_campaign(&env, id));
        }
        campaigns
    }

    /// Recorded donations of a campaign since its creation or last refund.
    pub fn get_donators(env: Env, campaign_id: u64) -> Vec<Donation> {
        storage::load_donations(&env, campaign_id)
    }

    /// Current lifecycle status of a campaign.
    pub fn get_status(env: Env, campaign_id: u64) -> Status {
        storage::load_state(&env, campaign_id).status
    }

    /// Whether a refund has ever been issued for a campaign.
    pub fn get_refunded(env: Env, campaign_id: u64) -> bool {
        storage::load_state(&env, campaign_id).refunded
    }

    /// The configured fee recipient.
    pub fn get_fee_account(env: Env) -> Address {
        storage::get_config(&env).fee_account
    }

    /// The configured fee percentage.
    pub fn get_fee_percent(env: Env) -> u32 {
        storage::get_config(&env).fee_percent
    }

    /// Number of campaigns ever created.
    pub fn campaign_count(env: Env) -> u64 {
        storage::campaign_count(&env)
    }

    /// Whether a campaign with this ID exists.
    pub fn campaign_exists(env: Env, campaign_id: u64) -> bool {
        campaign_id < storage::campaign_count(&env)
    }
}

// ─────────────────────────────────────────────────────────
// Internal helpers
// ─────────────────────────────────────────────────────────

/// Reject deadlines in the past and, when a cap is configured, deadlines
/// beyond `now + max_duration`.
fn check_deadline(env: &Env, config: &Config, now: u64, deadline: u64) {
    if deadline <= now {
        panic_with_error!(env, Error::InvalidDeadline);
    }
    if config.max_duration > 0 && deadline - now > config.max_duration {
        panic_with_error!(env, Error::InvalidDeadline);
    }
}

/// Transfer every recorded donation back to its donator and clear the
/// list. Returns the total repaid.
fn repay_donors(env: &Env, config: &Config, campaign_id: u64) -> i128 {
    let donations = storage::load_donations(env, campaign_id);
    let token_client = token::Client::new(env, &config.token);
    let mut total = 0i128;
    for donation in donations.iter() {
        token_client.transfer(
            &env.current_contract_address(),
            &donation.donator,
            &donation.amount,
        );
        total += donation.amount;
    }
    storage::save_donations(env, campaign_id, &Vec::new(env));
    total
}

/// Whether `address` appears in the campaign's recorded donations.
fn is_donator(env: &Env, campaign_id: u64, address: &Address) -> bool {
    let donations = storage::load_donations(env, campaign_id);
    for donation in donations.iter() {
        if donation.donator == *address {
            return true;
        }
    }
    false
}
