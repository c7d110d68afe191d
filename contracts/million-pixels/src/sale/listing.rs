//! Fixed-price sale offers, set and cleared only by the current owner.

use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn sell_block(&mut self, token_id: TokenId, price: U128) -> Result<(), RegistryError> {
        let seller_id = env::predecessor_account_id();
        self.check_block_owner(token_id, &seller_id, "put it up for sale")?;
        if price.0 == 0 {
            return Err(RegistryError::InvalidInput(
                "Asking price must be greater than 0".into(),
            ));
        }

        self.listings_by_id.insert(token_id, price.0);

        events::emit_up_for_sale(&seller_id, price.0, token_id);
        Ok(())
    }

    /// No-op-safe: succeeds on an unlisted block, but the removal event
    /// fires only when an offer was actually cleared.
    #[handle_result]
    pub fn remove_from_sale(&mut self, token_id: TokenId) -> Result<(), RegistryError> {
        let seller_id = env::predecessor_account_id();
        self.check_block_owner(token_id, &seller_id, "remove it from sale")?;

        if self.listings_by_id.remove(&token_id).is_some() {
            events::emit_sale_offer_removed(&seller_id, token_id);
        }
        Ok(())
    }

    pub fn sale_price_of(&self, token_id: TokenId) -> Option<U128> {
        self.listings_by_id.get(&token_id).map(|price| U128(*price))
    }
}

impl Contract {
    /// Unconditional clear, used by every ownership-change path.
    pub(crate) fn clear_listing(&mut self, token_id: TokenId) {
        self.listings_by_id.remove(&token_id);
    }
}
