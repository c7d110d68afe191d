//! Delegated transfer approvals: at most one standing delegate per block.

use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn approve(
        &mut self,
        token_id: TokenId,
        account_id: AccountId,
    ) -> Result<(), RegistryError> {
        let owner_id = env::predecessor_account_id();
        self.check_block_owner(token_id, &owner_id, "approve a delegate")?;
        if account_id == owner_id {
            return Err(RegistryError::SelfApproval(
                "Owner cannot approve themselves".into(),
            ));
        }

        // Overwrites any prior delegate.
        self.approved_by_id.insert(token_id, account_id.clone());

        events::emit_approval(&owner_id, Some(&account_id), token_id);
        Ok(())
    }

    #[handle_result]
    pub fn remove_approval(&mut self, token_id: TokenId) -> Result<(), RegistryError> {
        let owner_id = env::predecessor_account_id();
        self.check_block_owner(token_id, &owner_id, "remove the approval")?;

        // The event fires even when no delegate was standing; consumers
        // read it as "the approval slot is now empty".
        self.clear_approval(token_id);

        events::emit_approval(&owner_id, None, token_id);
        Ok(())
    }

    pub fn approved_for(&self, token_id: TokenId) -> Option<&AccountId> {
        self.approved_by_id.get(&token_id)
    }
}

impl Contract {
    /// Unconditional and idempotent; every ownership-change path calls this.
    pub(crate) fn clear_approval(&mut self, token_id: TokenId) {
        self.approved_by_id.remove(&token_id);
    }

    pub(crate) fn is_approved_or_owner(
        &self,
        token_id: TokenId,
        account_id: &AccountId,
    ) -> Result<bool, RegistryError> {
        let owner_id = self.owner_of(token_id)?;
        Ok(&owner_id == account_id || self.approved_by_id.get(&token_id) == Some(account_id))
    }
}
