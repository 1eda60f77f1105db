//! # Events
//!
//! Typed contract events for every campaign lifecycle transition.
//!
//! Each event is published with a short-symbol leading topic and the
//! campaign ID as the second topic, so off-chain consumers can filter by
//! kind or by campaign without decoding payloads:
//!
//! | Topic      | Payload              | Emitted by                  |
//! |------------|----------------------|-----------------------------|
//! | `created`  | [`CampaignCreated`]  | `create_campaign`           |
//! | `donated`  | [`DonationReceived`] | `donate_to_campaign`        |
//! | `approved` | [`CampaignApproved`] | `donate_to_campaign` (goal) |
//! | `canceled` | [`CampaignCanceled`] | `cancel_campaign`           |
//! | `paidout`  | [`CampaignPaidOut`]  | `withdraw_campaign`         |
//! | `refunded` | [`CampaignRefunded`] | `refund_campaign`           |
//! | `updated`  | [`CampaignUpdated`]  | `update_campaign`           |
//! | `reverted` | [`CampaignReverted`] | `perform_upkeep`            |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// A new campaign was created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub owner: Address,
    pub target: i128,
    pub deadline: u64,
}

/// A donation was recorded against an open campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceived {
    pub campaign_id: u64,
    pub donator: Address,
    pub amount: i128,
}

/// The running donation total reached the campaign target.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignApproved {
    pub campaign_id: u64,
    pub amount_collected: i128,
}

/// The owner canceled an open campaign; all donors were repaid.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCanceled {
    pub campaign_id: u64,
    pub owner: Address,
    pub refunded_total: i128,
}

/// The owner withdrew an approved campaign's balance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignPaidOut {
    pub campaign_id: u64,
    pub owner: Address,
    pub payout: i128,
    pub fee: i128,
}

/// All donors of a campaign were repaid in full.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignRefunded {
    pub campaign_id: u64,
    pub caller: Address,
    pub total: i128,
}

/// A reverted campaign was given a new target and deadline.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignUpdated {
    pub campaign_id: u64,
    pub new_target: i128,
    pub new_deadline: u64,
}

/// Upkeep moved an open campaign past its deadline to `Reverted`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignReverted {
    pub campaign_id: u64,
    pub deadline: u64,
}

pub fn campaign_created(env: &Env, campaign_id: u64, owner: &Address, target: i128, deadline: u64) {
    env.events().publish(
        (symbol_short!("created"), campaign_id),
        CampaignCreated {
            campaign_id,
            owner: owner.clone(),
            target,
            deadline,
        },
    );
}

pub fn donation_received(env: &Env, campaign_id: u64, donator: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("donated"), campaign_id),
        DonationReceived {
            campaign_id,
            donator: donator.clone(),
            amount,
        },
    );
}

pub fn campaign_approved(env: &Env, campaign_id: u64, amount_collected: i128) {
    env.events().publish(
        (symbol_short!("approved"), campaign_id),
        CampaignApproved {
            campaign_id,
            amount_collected,
        },
    );
}

pub fn campaign_canceled(env: &Env, campaign_id: u64, owner: &Address, refunded_total: i128) {
    env.events().publish(
        (symbol_short!("canceled"), campaign_id),
        CampaignCanceled {
            campaign_id,
            owner: owner.clone(),
            refunded_total,
        },
    );
}

pub fn campaign_paid_out(env: &Env, campaign_id: u64, owner: &Address, payout: i128, fee: i128) {
    env.events().publish(
        (symbol_short!("paidout"), campaign_id),
        CampaignPaidOut {
            campaign_id,
            owner: owner.clone(),
            payout,
            fee,
        },
    );
}

pub fn campaign_refunded(env: &Env, campaign_id: u64, caller: &Address, total: i128) {
    env.events().publish(
        (symbol_short!("refunded"), campaign_id),
        CampaignRefunded {
            campaign_id,
            caller: caller.clone(),
            total,
        },
    );
}

pub fn campaign_updated(env: &Env, campaign_id: u64, new_target: i128, new_deadline: u64) {
    env.events().publish(
        (symbol_short!("updated"), campaign_id),
        CampaignUpdated {
            campaign_id,
            new_target,
            new_deadline,
        },
    );
}

pub fn campaign_reverted(env: &Env, campaign_id: u64, deadline: u64) {
    env.events().publish(
        (symbol_short!("reverted"), campaign_id),
        CampaignReverted {
            campaign_id,
            deadline,
        },
    );
}
