//! # Types
//!
//! Shared data structures used across all modules of the crowdfund contract.
//!
//! ## Design decisions
//!
//! ### Meta / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignMeta`] — written once at creation; never mutated.
//! - [`CampaignState`] — written on every donation and status transition.
//!
//! Donations are the high-frequency write path, so the descriptive fields
//! (title, description, image) stay out of the entry they touch. `target`
//! and `deadline` sit on the mutable side because `update_campaign` may
//! revise them while the campaign is `Reverted`.
//!
//! The public API exposes the reconstructed [`Campaign`] struct for
//! convenience.
//!
//! ### Status as a Finite-State Machine
//!
//! [`Status`] enforces a strict lifecycle:
//!
//! ```text
//! Open ──► Approved ──► Paid
//!   ├────► Deleted
//!   └────► Reverted ──► Open   (update, unless refunded)
//!              └──────► Reverted (refund; sets the refunded flag)
//! ```
//!
//! `Paid` and `Deleted` are terminal. A refunded campaign stays `Reverted`
//! forever, so `refunded == true` always implies `status == Reverted`.

use soroban_sdk::{contracttype, Address, String};

/// Thematic campaign tag. Informational only — no entry point branches on it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Category {
    Charity,
    Tech,
    Web3,
    Games,
    Education,
}

/// Lifecycle status of a campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Status {
    /// Accepting donations.
    Open,
    /// Target reached; owner may withdraw.
    Approved,
    /// Deadline passed unfunded, or donors were refunded.
    Reverted,
    /// Canceled by the owner.
    Deleted,
    /// Funds withdrawn by the owner.
    Paid,
}

impl Status {
    /// Terminal states reject every further mutation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Deleted | Status::Paid)
    }
}

/// Who may trigger a refund of a campaign's collected donations.
///
/// Chosen once at [`init`](crate::CrowdFund::init) and immutable thereafter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RefundMode {
    /// Only the campaign owner can trigger the refund.
    OwnerOnly,
    /// The owner or any recorded donator can trigger the refund.
    DonorInitiated,
}

/// Immutable protocol configuration, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Recipient of the withdrawal fee cut.
    pub fee_account: Address,
    /// Fee percentage taken on withdrawal (0..=100).
    pub fee_percent: u32,
    /// Token contract all campaigns are funded in.
    pub token: Address,
    /// Maximum allowed `deadline - now` in seconds; 0 disables the cap.
    pub max_duration: u64,
    /// Refund authorization policy.
    pub refund_mode: RefundMode,
}

/// Immutable campaign metadata, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignMeta {
    pub id: u64,
    pub owner: Address,
    pub category: Category,
    pub title: String,
    pub description: String,
    /// Opaque content-storage URL for the campaign image.
    pub image: String,
    pub created_at: u64,
}

/// Mutable campaign state, updated on donations and status transitions.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    /// Requested funding amount; strictly positive.
    pub target: i128,
    /// Ledger timestamp after which donations are rejected.
    pub deadline: u64,
    /// Running sum of recorded donations; reset to 0 by refund and cancel.
    pub amount_collected: i128,
    pub status: Status,
    /// Set once a refund has been issued; never reset.
    pub refunded: bool,
}

/// A single recorded donation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    pub donator: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Full representation of a campaign.
///
/// Used as the public API return type; reconstructed internally from the
/// split `CampaignMeta` + `CampaignState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Unique identifier (auto-incremented, never reused).
    pub id: u64,
    /// Address that created the campaign and receives the payout.
    pub owner: Address,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub image: String,
    pub created_at: u64,
    pub target: i128,
    pub deadline: u64,
    pub amount_collected: i128,
    pub status: Status,
    pub refunded: bool,
}

impl Campaign {
    /// Reassemble the public struct from its two storage halves.
    pub fn from_parts(meta: CampaignMeta, state: CampaignState) -> Self {
        Campaign {
            id: meta.id,
            owner: meta.owner,
            category: meta.category,
            title: meta.title,
            description: meta.description,
            image: meta.image,
            created_at: meta.created_at,
            target: state.target,
            deadline: state.deadline,
            amount_collected: state.amount_collected,
            status: state.status,
            refunded: state.refunded,
        }
    }
}
