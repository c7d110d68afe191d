use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(operator_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            operator_id,
            blocks_by_id: IterableMap::new(StorageKey::BlocksById),
            blocks_per_owner: LookupMap::new(StorageKey::BlocksPerOwner),
            approved_by_id: LookupMap::new(StorageKey::ApprovedById),
            listings_by_id: IterableMap::new(StorageKey::ListingsById),
            ledger_balances: LookupMap::new(StorageKey::LedgerBalances),
            metadata_by_id: LookupMap::new(StorageKey::MetadataById),
        }
    }

    pub fn get_operator(&self) -> &AccountId {
        &self.operator_id
    }
}
