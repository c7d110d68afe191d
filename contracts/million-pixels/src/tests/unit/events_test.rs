use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

const ASK: u128 = 123_000_000_000_000_000_000_000;

// Every successful market/ownership mutation emits exactly one event.

#[test]
fn initial_buy_emits_bought() {
    let mut contract = new_contract();

    testing_env!(context_with_deposit(buyer(), INITIAL_SALE_PRICE.as_yoctonear()).build());
    contract.initial_buy(7).unwrap();

    let logs = get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].starts_with("EVENT_JSON:"));
    assert!(logs[0].contains("\"operation\":\"bought\""));
    assert!(logs[0].contains(&INITIAL_SALE_PRICE.as_yoctonear().to_string()));
}

#[test]
fn transfer_emits_transfer() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    as_caller(seller());
    contract.transfer(buyer(), 1).unwrap();

    let logs = get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("\"operation\":\"transfer\""));
    assert!(logs[0].contains(seller().as_str()));
    assert!(logs[0].contains(buyer().as_str()));
}

#[test]
fn approve_emits_approval_with_delegate() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    as_caller(seller());
    contract.approve(1, delegate()).unwrap();

    let logs = get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("\"operation\":\"approval\""));
    assert!(logs[0].contains(delegate().as_str()));
}

#[test]
fn remove_approval_emits_even_when_nothing_standing() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    as_caller(seller());
    contract.remove_approval(1).unwrap();

    let logs = get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("\"operation\":\"approval\""));
    assert!(!logs[0].contains("\"approved\""));
}

#[test]
fn sell_block_emits_up_for_sale() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    as_caller(seller());
    contract.sell_block(1, U128(ASK)).unwrap();

    let logs = get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("\"operation\":\"up_for_sale\""));
    assert!(logs[0].contains(&ASK.to_string()));
}

#[test]
fn remove_from_sale_emits_only_when_offer_cleared() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);
    list_block(&mut contract, &seller(), 1, ASK);

    as_caller(seller());
    contract.remove_from_sale(1).unwrap();
    assert_eq!(get_logs().len(), 1);
    assert!(get_logs()[0].contains("\"operation\":\"sale_offer_removed\""));

    // No offer standing: the call succeeds silently.
    as_caller(seller());
    contract.remove_from_sale(1).unwrap();
    assert!(get_logs().is_empty());
}

#[test]
fn buy_block_emits_bought_with_price() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);
    list_block(&mut contract, &seller(), 1, ASK);

    testing_env!(context_with_deposit(buyer(), ASK).build());
    contract.buy_block(1).unwrap();

    let logs = get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("\"operation\":\"bought\""));
    assert!(logs[0].contains(buyer().as_str()));
    assert!(logs[0].contains(&ASK.to_string()));
}

#[test]
fn failed_mutation_emits_nothing() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    as_caller(buyer());
    let _ = contract.transfer(delegate(), 1).unwrap_err();
    assert!(get_logs().is_empty());
}
