extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{
    CampaignApproved, CampaignCanceled, CampaignCreated, CampaignPaidOut, CampaignRefunded,
    CampaignReverted, CampaignUpdated, DonationReceived,
};
use crate::{Category, CrowdFund, CrowdFundClient, RefundMode};

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
            &Category::Web3,
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

#[test]
fn created_event() {
    let (env, client, _token) = setup();
    let owner = Address::generate(&env);
    let deadline = env.ledger().timestamp() + DAY;

    let id = create_campaign(&env, &client, &owner, 5_000, deadline);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    // Topic: (symbol_short!("created"), campaign_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id: id,
            owner: owner.clone(),
            target: 5_000,
            deadline,
        }
    );
}

#[test]
fn donated_event() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 5_000, env.ledger().timestamp() + DAY);
    mint(&env, &token_address, &donator, 1_000);

    client.donate_to_campaign(&id, &donator, &1_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("donated").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: DonationReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonationReceived {
            campaign_id: id,
            donator: donator.clone(),
            amount: 1_000,
        }
    );
}

#[test]
fn approved_event_follows_goal_reaching_donation() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + DAY);
    mint(&env, &token_address, &donator, 1_500);

    client.donate_to_campaign(&id, &donator, &1_500);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    // The approval event is published after the donation event.
    let expected_topics = vec![
        &env,
        symbol_short!("approved").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignApproved = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignApproved {
            campaign_id: id,
            amount_collected: 1_500,
        }
    );
}

#[test]
fn canceled_event() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 5_000, env.ledger().timestamp() + DAY);
    mint(&env, &token_address, &donator, 700);
    client.donate_to_campaign(&id, &donator, &700);

    client.cancel_campaign(&id, &owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    let expected_topics = vec![
        &env,
        symbol_short!("canceled").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCanceled = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCanceled {
            campaign_id: id,
            owner: owner.clone(),
            refunded_total: 700,
        }
    );
}

#[test]
fn paidout_event_carries_fee_split() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 1_000, env.ledger().timestamp() + DAY);
    mint(&env, &token_address, &donator, 2_500);
    client.donate_to_campaign(&id, &donator, &2_500);

    client.withdraw_campaign(&id, &owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    let expected_topics = vec![
        &env,
        symbol_short!("paidout").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignPaidOut = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignPaidOut {
            campaign_id: id,
            owner: owner.clone(),
            payout: 2_250,
            fee: 250,
        }
    );
}

#[test]
fn refunded_event() {
    let (env, client, token_address) = setup();
    let owner = Address::generate(&env);
    let donator = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 5_000, env.ledger().timestamp() + DAY);
    mint(&env, &token_address, &donator, 900);
    client.donate_to_campaign(&id, &donator, &900);

    client.refund_campaign(&id, &owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    let expected_topics = vec![
        &env,
        symbol_short!("refunded").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignRefunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignRefunded {
            campaign_id: id,
            caller: owner.clone(),
            total: 900,
        }
    );
}

#[test]
fn reverted_event_from_upkeep() {
    let (env, client, _token) = setup();
    let owner = Address::generate(&env);
    let deadline = env.ledger().timestamp() + DAY;
    let id = create_campaign(&env, &client, &owner, 5_000, deadline);

    env.ledger().with_mut(|li| li.timestamp += 2 * DAY);
    client.perform_upkeep();

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    let expected_topics = vec![
        &env,
        symbol_short!("reverted").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignReverted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignReverted {
            campaign_id: id,
            deadline,
        }
    );
}

#[test]
fn updated_event() {
    let (env, client, _token) = setup();
    let owner = Address::generate(&env);
    let id = create_campaign(&env, &client, &owner, 5_000, env.ledger().timestamp() + DAY);

    env.ledger().with_mut(|li| li.timestamp += 2 * DAY);
    client.perform_upkeep();
    let new_deadline = env.ledger().timestamp() + 3 * DAY;

    client.update_campaign(&id, &owner, &8_000, &new_deadline);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    let expected_topics = vec![
        &env,
        symbol_short!("updated").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignUpdated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignUpdated {
            campaign_id: id,
            new_target: 8_000,
            new_deadline,
        }
    );
}
