use crate::tests::test_utils::*;
use crate::*;

const COLORS: &str = "109D3C6A80476A1D6AE8E9ED0251A6DD4FFC008F676435D86CAD5CB107D94079";

#[test]
fn owner_can_set_pixels_colors() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    as_caller(seller());
    contract.set_pixels_colors(1, COLORS.to_string()).unwrap();

    assert_eq!(contract.pixels_colors_of(1), COLORS);
}

#[test]
fn owner_can_set_description() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    as_caller(seller());
    contract
        .set_description(1, "This is a description for the block.".to_string())
        .unwrap();

    assert_eq!(
        contract.description_of(1),
        "This is a description for the block."
    );
}

#[test]
fn owner_can_set_link() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    as_caller(seller());
    contract
        .set_link(1, "https://example.com/".to_string())
        .unwrap();

    assert_eq!(contract.link_of(1), "https://example.com/");
}

#[test]
fn metadata_overwrites_unconditionally() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    as_caller(seller());
    contract.set_pixels_colors(1, COLORS.to_string()).unwrap();
    contract.set_pixels_colors(1, "ff0000".to_string()).unwrap();

    assert_eq!(contract.pixels_colors_of(1), "ff0000");
    // Other fields are untouched by a colors update.
    assert_eq!(contract.description_of(1), "");
}

#[test]
fn non_owner_cannot_set_metadata() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    as_caller(buyer());
    let err = contract
        .set_pixels_colors(1, COLORS.to_string())
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotOwner(_)));
    let err = contract.set_description(1, "x".to_string()).unwrap_err();
    assert!(matches!(err, RegistryError::NotOwner(_)));
    let err = contract.set_link(1, "x".to_string()).unwrap_err();
    assert!(matches!(err, RegistryError::NotOwner(_)));

    assert_eq!(contract.pixels_colors_of(1), "");
}

#[test]
fn metadata_on_unissued_block_fails() {
    let mut contract = new_contract();

    as_caller(seller());
    let err = contract
        .set_pixels_colors(1, COLORS.to_string())
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}

#[test]
fn getters_default_to_empty() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    assert_eq!(contract.pixels_colors_of(1), "");
    assert_eq!(contract.description_of(1), "");
    assert_eq!(contract.link_of(1), "");
}

#[test]
fn metadata_survives_ownership_change() {
    let mut contract = new_contract();
    issue_block(&mut contract, &seller(), 1);

    as_caller(seller());
    contract.set_pixels_colors(1, COLORS.to_string()).unwrap();
    contract.transfer(buyer(), 1).unwrap();

    // Display fields stay with the block; only the editor changes.
    assert_eq!(contract.pixels_colors_of(1), COLORS);

    as_caller(buyer());
    contract.set_pixels_colors(1, "00ff00".to_string()).unwrap();
    assert_eq!(contract.pixels_colors_of(1), "00ff00");
}
