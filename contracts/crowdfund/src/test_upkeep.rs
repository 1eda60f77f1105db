extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use crate::{invariants, Category, CrowdFund, CrowdFundClient, Error, RefundMode, Status};

const DAY: u64 = 86_400;

fn setup() -> (Env, CrowdFundClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CrowdFund, ());
    let client = CrowdFundClient::new(&env, &contract_id);

    let fee_account = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token_address = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    client.init(&fee_account, &10u32, &token_address, &0u64, &RefundMode::OwnerOnly);
    (env, client, token_address)
}

fn create_campaign(
    env: &Env,
    client: &CrowdFundClient,
    owner: &Address,
    target: i128,
    deadline: u64,
) -> u64 {
    client
        .create_campaign(
            owner,
            &Category::Charity,
            &String::from_str(env, "Test Title"),
            &String::from_str(env, "Test Description"),
            &target,
            &deadline,
            &String::from_str(env, "image1.jpeg"),
        )
        .id
}

fn mint(env: &Env, token_address: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token_address).mint(to, &amount);
}

fn advance_time(env: &Env, by: u64) {
    env.ledger().with_mut(|li| li.timestamp += by);
}

#[test]
fn upkeep_reverts_expired_open_campaign() {
    let (env, client, _token) = setup();
    let owner = Address::generate(&env);
    let deadline = env.ledger().timestamp() + DAY;
    let id = create_campaign(&env, &client, &owner, 1_000, deadline);

    advance_time(&env, 2 * DAY);
    client.perform_upkeep();

    assert_eq!(client.get_status(&id), Status::Reverted);
    assert!(!client.get_refunded(&id));
    invariants::assert_valid_status_transition(&Status::Open, &Status::Reverted);
}

#[test]
fn upkeep_is_idempotent() {
    let (env, client, _token) = setup();
    let owner = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + DAY);

    advance_time(&env, 2 * DAY);
    client.perform_upkeep();
    client.perform_upkeep();

    assert_eq!(client.get_status(&id), Status::Reverted);
}

#[test]
fn upkeep_skips_unexpired_and_approved_campaigns() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let now = env.ledger().timestamp();

    let expiring = create_campaign(&env, &client, &owner, 1_000, now + DAY);
    let long_lived = create_campaign(&env, &client, &owner, 1_000, now + 30 * DAY);
    let funded = create_campaign(&env, &client, &owner, 1_000, now + DAY);
    mint(&env, &token_address, &donator, 1_000);
    client.donate_to_campaign(&funded, &donator, &1_000);

    advance_time(&env, 2 * DAY);
    client.perform_upkeep();

    assert_eq!(client.get_status(&expiring), Status::Reverted);
    assert_eq!(client.get_status(&long_lived), Status::Open);
    // The approved campaign keeps its status past the deadline.
    assert_eq!(client.get_status(&funded), Status::Approved);
}

#[test]
fn upkeep_with_no_campaigns_is_a_noop() {
    let (_env, client, _token) = setup();
    client.perform_upkeep();
    assert_eq!(client.campaign_count(), 0);
}

#[test]
fn donate_past_deadline_rejected_before_upkeep_runs() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + DAY);
    mint(&env, &token_address, &donator, 500);

    advance_time(&env, 2 * DAY);

    // Upkeep has not run yet, so the status is still Open — the deadline
    // check alone must reject the donation.
    assert_eq!(client.get_status(&id), Status::Open);
    let result = client.try_donate_to_campaign(&id, &donator, &500);
    assert_eq!(result, Err(Ok(Error::InvalidDeadline)));
    assert_eq!(client.get_campaign(&id).amount_collected, 0);
}

#[test]
fn donate_past_deadline_rejected_after_upkeep_runs() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + DAY);
    mint(&env, &token_address, &donator, 500);

    advance_time(&env, 2 * DAY);
    client.perform_upkeep();

    let result = client.try_donate_to_campaign(&id, &donator, &500);
    assert_eq!(result, Err(Ok(Error::InvalidStatus)));
}

#[test]
fn withdraw_approved_campaign_after_deadline() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + DAY);
    mint(&env, &token_address, &donator, 1_000);
    client.donate_to_campaign(&id, &donator, &1_000);

    advance_time(&env, 2 * DAY);
    client.perform_upkeep();
    client.withdraw_campaign(&id, &owner);

    assert_eq!(client.get_status(&id), Status::Paid);
}

// ─────────────────────────────────────────────────────────
// Reviving expired campaigns
// ─────────────────────────────────────────────────────────

#[test]
fn update_reopens_expired_campaign() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + 7 * DAY);

    advance_time(&env, 8 * DAY);
    client.perform_upkeep();
    assert_eq!(client.get_status(&id), Status::Reverted);

    let new_deadline = env.ledger().timestamp() + 2 * DAY;
    client.update_campaign(&id, &owner, &2_000, &new_deadline);

    let campaign = client.get_campaign(&id);
    assert_eq!(campaign.status, Status::Open);
    assert_eq!(campaign.target, 2_000);
    assert_eq!(campaign.deadline, new_deadline);
    invariants::assert_valid_status_transition(&Status::Reverted, &Status::Open);

    // The reopened campaign accepts donations again.
    mint(&env, &token_address, &donator, 500);
    client.donate_to_campaign(&id, &donator, &500);
    assert_eq!(client.get_campaign(&id).amount_collected, 500);
}

#[test]
fn update_keeps_earlier_donations() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + DAY);
    mint(&env, &token_address, &donator, 500);
    client.donate_to_campaign(&id, &donator, &500);

    advance_time(&env, 2 * DAY);
    client.perform_upkeep();
    client.update_campaign(&id, &owner, &1_000, &(env.ledger().timestamp() + DAY));

    // Donations made before the expiry still count toward the new target.
    let campaign = client.get_campaign(&id);
    assert_eq!(campaign.amount_collected, 500);
    invariants::assert_donations_consistent(&client.get_donators(&id), 500);
}

#[test]
fn update_requires_owner() {
    let (env, client, _token) = setup();
    let owner = Address::generate(&env);
    let stranger = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + DAY);

    advance_time(&env, 2 * DAY);
    client.perform_upkeep();

    let new_deadline = env.ledger().timestamp() + DAY;
    let result = client.try_update_campaign(&id, &stranger, &2_000, &new_deadline);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
}

#[test]
fn update_rejects_backdated_deadline() {
    let (env, client, _token) = setup();
    let owner = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + DAY);

    advance_time(&env, 2 * DAY);
    client.perform_upkeep();

    let stale_deadline = env.ledger().timestamp() - DAY;
    let result = client.try_update_campaign(&id, &owner, &2_000, &stale_deadline);
    assert_eq!(result, Err(Ok(Error::InvalidDeadline)));
}

#[test]
fn update_rejects_non_positive_target() {
    let (env, client, _token) = setup();
    let owner = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + DAY);

    advance_time(&env, 2 * DAY);
    client.perform_upkeep();

    let new_deadline = env.ledger().timestamp() + DAY;
    let result = client.try_update_campaign(&id, &owner, &0, &new_deadline);
    assert_eq!(result, Err(Ok(Error::RequiredField)));
}

#[test]
fn refund_after_expiry() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + DAY);
    mint(&env, &token_address, &donator, 500);
    client.donate_to_campaign(&id, &donator, &500);

    advance_time(&env, 2 * DAY);
    client.perform_upkeep();
    client.refund_campaign(&id, &owner);

    let campaign = client.get_campaign(&id);
    assert_eq!(campaign.status, Status::Reverted);
    assert!(campaign.refunded);
    assert_eq!(
        token::Client::new(&env, &token_address).balance(&donator),
        500
    );
}
