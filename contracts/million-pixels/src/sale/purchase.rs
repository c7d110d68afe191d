//! Paid operations: one-time initial issuance and marketplace purchase.
//!
//! Both validate completely before the first state mutation, so a failed
//! call leaves ownership, offers, and balances untouched.

use crate::*;

#[near]
impl Contract {
    /// One-time purchase of a never-owned block at the fixed price. The
    /// proceeds are credited to the operator's withdrawable ledger.
    #[payable]
    #[handle_result]
    pub fn initial_buy(&mut self, token_id: TokenId) -> Result<(), RegistryError> {
        crate::guards::check_token_id(token_id)?;
        if self.blocks_by_id.contains_key(&token_id) {
            return Err(RegistryError::AlreadyIssued(format!(
                "Block {} already has an owner",
                token_id
            )));
        }

        let deposit = env::attached_deposit();
        if deposit != INITIAL_SALE_PRICE {
            return Err(RegistryError::InvalidPayment(format!(
                "Initial sale price is exactly {} yoctoNEAR, got {}",
                INITIAL_SALE_PRICE.as_yoctonear(),
                deposit.as_yoctonear()
            )));
        }

        let buyer_id = env::predecessor_account_id();
        if buyer_id == env::current_account_id() {
            return Err(RegistryError::InvalidRecipient(
                "The registry account cannot hold blocks".into(),
            ));
        }

        let operator_id = self.operator_id.clone();
        self.blocks_by_id.insert(token_id, buyer_id.clone());
        self.add_block_to_owner(&buyer_id, token_id);
        self.credit_ledger(&operator_id, deposit.as_yoctonear())?;

        events::emit_bought(&buyer_id, deposit.as_yoctonear(), token_id);
        Ok(())
    }

    /// Accept a standing sale offer at exactly the asking price.
    #[payable]
    #[handle_result]
    pub fn buy_block(&mut self, token_id: TokenId) -> Result<(), RegistryError> {
        // The seller is resolved before the ownership change, so the
        // ledger credit target is stable no matter what else moves.
        let seller_id = self.owner_of(token_id)?;
        let price = *self
            .listings_by_id
            .get(&token_id)
            .ok_or_else(|| RegistryError::NotListed("Block is not up for sale".into()))?;

        let buyer_id = env::predecessor_account_id();
        if buyer_id == seller_id {
            return Err(RegistryError::SelfPurchase(
                "Cannot buy a block you already own".into(),
            ));
        }
        if buyer_id == env::current_account_id() {
            return Err(RegistryError::InvalidRecipient(
                "The registry account cannot hold blocks".into(),
            ));
        }

        let paid = env::attached_deposit().as_yoctonear();
        if paid != price {
            return Err(RegistryError::InvalidPayment(format!(
                "Asking price is exactly {} yoctoNEAR, got {}",
                price, paid
            )));
        }

        // The offer is consumed first: the same ask can never settle twice.
        self.clear_listing(token_id);
        self.credit_ledger(&seller_id, paid)?;
        self.transfer_ownership(token_id, &seller_id, &buyer_id)?;
        self.clear_approval(token_id);

        events::emit_bought(&buyer_id, paid, token_id);
        Ok(())
    }
}
