use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk::near;

/// Index of one pixel block on the canvas; valid ids are `0..BLOCK_SUPPLY`.
pub type TokenId = u32;

/// Owner-editable display fields. Opaque to the registry: no format
/// validation is applied.
#[near(serializers = [borsh, json])]
#[derive(Clone, Default)]
pub struct BlockMetadata {
    pub colors: String,
    pub description: String,
    pub link: String,
}

/// Aggregate per-block view for explorers.
#[near(serializers = [json])]
pub struct BlockInfo {
    pub token_id: TokenId,
    pub owner_id: AccountId,
    pub approved_account_id: Option<AccountId>,
    pub sale_price: Option<U128>,
    pub colors: String,
    pub description: String,
    pub link: String,
}
