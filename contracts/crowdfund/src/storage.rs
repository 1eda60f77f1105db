//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the crowdfund
//! contract:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type     | Description                         |
//! |-----------------|----------|-------------------------------------|
//! | `Config`        | `Config` | Immutable protocol configuration    |
//! | `CampaignCount` | `u64`    | Auto-increment campaign ID counter  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day
//! remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key             | Type            | Description                     |
//! |-----------------|-----------------|---------------------------------|
//! | `Meta(id)`      | `CampaignMeta`  | Immutable campaign metadata     |
//! | `State(id)`     | `CampaignState` | Mutable campaign state          |
//! | `Donations(id)` | `Vec<Donation>` | Recorded donations, append-only |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! ## Why split Meta and State?
//!
//! Donations are high-frequency writes. Writing the full `Campaign` struct
//! (title, description, image URL) on every donation is wasteful; `State`
//! holds only the numeric fields and the status, so the hot path rewrites a
//! small entry while the public API stays clean via the reconstructed
//! [`Campaign`] return type.

use soroban_sdk::{contracttype, panic_with_error, Env, Vec};

use crate::types::{Campaign, CampaignMeta, CampaignState, Config, Donation};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys (`Config`, `CampaignCount`) live as long as the
/// contract and are extended together. Persistent-tier keys (`Meta`,
/// `State`, `Donations`) hold per-campaign data with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable protocol configuration (Instance).
    Config,
    /// Global auto-increment counter for campaign IDs (Instance).
    CampaignCount,
    /// Immutable campaign metadata keyed by ID (Persistent).
    Meta(u64),
    /// Mutable campaign state keyed by ID (Persistent).
    State(u64),
    /// Recorded donations keyed by ID (Persistent).
    Donations(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Return `true` once `init` has stored the protocol configuration.
pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Store the protocol configuration. Callable exactly once via `init`.
pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Retrieve the protocol configuration.
/// Panics with `NotInitialized` when `init` has not run.
pub fn get_config(env: &Env) -> Config {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Atomically reads, increments, and stores the campaign counter.
/// Returns the ID to use for the *current* campaign (pre-increment value).
pub fn get_and_increment_campaign_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(current + 1));
    current
}

/// Number of campaigns ever created. IDs run `0..count` and are never reused.
pub fn campaign_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save the immutable metadata, initial state, and empty donation list for
/// a newly created campaign.
pub fn save_campaign(env: &Env, meta: &CampaignMeta, state: &CampaignState) {
    let meta_key = DataKey::Meta(meta.id);
    let state_key = DataKey::State(meta.id);
    let donations_key = DataKey::Donations(meta.id);

    env.storage().persistent().set(&meta_key, meta);
    env.storage().persistent().set(&state_key, state);
    env.storage()
        .persistent()
        .set(&donations_key, &Vec::<Donation>::new(env));
    bump_persistent(env, &meta_key);
    bump_persistent(env, &state_key);
    bump_persistent(env, &donations_key);
}

/// Load the full `Campaign` by combining metadata and state.
/// Panics with `CampaignNotFound` if the campaign does not exist.
pub fn load_campaign(env: &Env, id: u64) -> Campaign {
    let meta = load_meta(env, id);
    let state = load_state(env, id);
    Campaign::from_parts(meta, state)
}

/// Load only the immutable campaign metadata.
pub fn load_meta(env: &Env, id: u64) -> CampaignMeta {
    let key = DataKey::Meta(id);
    let meta: CampaignMeta = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_persistent(env, &key);
    meta
}

/// Load only the mutable campaign state.
pub fn load_state(env: &Env, id: u64) -> CampaignState {
    let key = DataKey::State(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_persistent(env, &key);
    state
}

/// Save only the mutable campaign state (the donation/transition hot path).
pub fn save_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::State(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Load the recorded donations for a campaign.
/// The list is seeded empty by `save_campaign`, so a missing key means a
/// missing campaign.
pub fn load_donations(env: &Env, id: u64) -> Vec<Donation> {
    let key = DataKey::Donations(id);
    let donations: Vec<Donation> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_persistent(env, &key);
    donations
}

/// Save the donation list for a campaign.
pub fn save_donations(env: &Env, id: u64, donations: &Vec<Donation>) {
    let key = DataKey::Donations(id);
    env.storage().persistent().set(&key, donations);
    bump_persistent(env, &key);
}
