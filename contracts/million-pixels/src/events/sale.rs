use near_sdk::AccountId;

use super::SALE;
use super::builder::EventBuilder;
use crate::TokenId;

/// Covers both initial issuance and marketplace purchases.
pub fn emit_bought(buyer_id: &AccountId, at_price: u128, token_id: TokenId) {
    EventBuilder::new(SALE, "bought", buyer_id)
        .field("by", buyer_id)
        .field("at_price", at_price)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_up_for_sale(owner_id: &AccountId, price: u128, token_id: TokenId) {
    EventBuilder::new(SALE, "up_for_sale", owner_id)
        .field("price", price)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_sale_offer_removed(owner_id: &AccountId, token_id: TokenId) {
    EventBuilder::new(SALE, "sale_offer_removed", owner_id)
        .field("token_id", token_id)
        .emit();
}
