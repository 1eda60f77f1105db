//! Canonical event types emitted by the crowdfund contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/crowdfund/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the crowdfund contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new campaign was created (`created` topic).
    CampaignCreated,
    /// A donation was recorded (`donated` topic).
    DonationReceived,
    /// The donation total reached the target (`approved` topic).
    CampaignApproved,
    /// The owner canceled the campaign (`canceled` topic).
    CampaignCanceled,
    /// The owner withdrew the balance (`paidout` topic).
    CampaignPaidOut,
    /// All donors were repaid (`refunded` topic).
    CampaignRefunded,
    /// A reverted campaign was given a new target/deadline (`updated` topic).
    CampaignUpdated,
    /// Upkeep moved an expired campaign to Reverted (`reverted` topic).
    CampaignReverted,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::CampaignCreated,
            "donated" => Self::DonationReceived,
            "approved" => Self::CampaignApproved,
            "canceled" => Self::CampaignCanceled,
            "paidout" => Self::CampaignPaidOut,
            "refunded" => Self::CampaignRefunded,
            "updated" => Self::CampaignUpdated,
            "reverted" => Self::CampaignReverted,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignCreated => "campaign_created",
            Self::DonationReceived => "donation_received",
            Self::CampaignApproved => "campaign_approved",
            Self::CampaignCanceled => "campaign_canceled",
            Self::CampaignPaidOut => "campaign_paid_out",
            Self::CampaignRefunded => "campaign_refunded",
            Self::CampaignUpdated => "campaign_updated",
            Self::CampaignReverted => "campaign_reverted",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded campaign event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignEvent {
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
