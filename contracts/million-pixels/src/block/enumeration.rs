//! Supply and per-owner enumeration views.

use crate::*;

#[near]
impl Contract {
    /// Number of issued blocks.
    pub fn total_supply(&self) -> u64 {
        self.blocks_by_id.len() as u64
    }

    /// Number of blocks owned by the account (0 if none).
    pub fn balance_of(&self, account_id: AccountId) -> u64 {
        self.blocks_per_owner
            .get(&account_id)
            .map(|blocks| blocks.len() as u64)
            .unwrap_or(0)
    }

    /// Block ids currently owned by the account. Order is stable across
    /// repeated queries but carries no meaning.
    pub fn tokens_of(&self, account_id: AccountId) -> Vec<TokenId> {
        self.blocks_per_owner
            .get(&account_id)
            .map(|blocks| blocks.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn block_info(&self, token_id: TokenId) -> Option<BlockInfo> {
        self.blocks_by_id
            .get(&token_id)
            .map(|owner_id| self.make_block_info(token_id, owner_id.clone()))
    }

    /// Paginated list of all issued blocks.
    pub fn blocks(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<BlockInfo> {
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100) as usize;

        self.blocks_by_id
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, owner_id)| self.make_block_info(*token_id, owner_id.clone()))
            .collect()
    }
}

impl Contract {
    fn make_block_info(&self, token_id: TokenId, owner_id: AccountId) -> BlockInfo {
        let metadata = self
            .metadata_by_id
            .get(&token_id)
            .cloned()
            .unwrap_or_default();
        BlockInfo {
            token_id,
            owner_id,
            approved_account_id: self.approved_by_id.get(&token_id).cloned(),
            sale_price: self.listings_by_id.get(&token_id).map(|p| U128(*p)),
            colors: metadata.colors,
            description: metadata.description,
            link: metadata.link,
        }
    }
}
