use near_sdk::AccountId;

use super::TOKEN;
use super::builder::EventBuilder;
use crate::TokenId;

pub fn emit_transfer(from: &AccountId, to: &AccountId, token_id: TokenId) {
    EventBuilder::new(TOKEN, "transfer", from)
        .field("from", from)
        .field("to", to)
        .field("token_id", token_id)
        .emit();
}

/// `approved = None` means the standing approval (if any) is now empty.
pub fn emit_approval(owner_id: &AccountId, approved_id: Option<&AccountId>, token_id: TokenId) {
    EventBuilder::new(TOKEN, "approval", owner_id)
        .field("owner", owner_id)
        .field_opt("approved", approved_id)
        .field("token_id", token_id)
        .emit();
}
