//! Block ownership index: the bottom-most authority for "who owns what".

use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn owner_of(&self, token_id: TokenId) -> Result<AccountId, RegistryError> {
        crate::guards::check_token_id(token_id)?;
        self.blocks_by_id
            .get(&token_id)
            .cloned()
            .ok_or_else(|| RegistryError::block_not_found(token_id))
    }
}

impl Contract {
    pub(crate) fn add_block_to_owner(&mut self, owner_id: &AccountId, token_id: TokenId) {
        if !self.blocks_per_owner.contains_key(owner_id) {
            self.blocks_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::BlocksPerOwnerInner {
                    account_id_hash: crate::guards::hash_account_id(owner_id),
                }),
            );
        }
        self.blocks_per_owner
            .get_mut(owner_id)
            .unwrap()
            .insert(token_id);
    }

    pub(crate) fn remove_block_from_owner(&mut self, owner_id: &AccountId, token_id: TokenId) {
        if let Some(owner_blocks) = self.blocks_per_owner.get_mut(owner_id) {
            owner_blocks.remove(&token_id);
            if owner_blocks.is_empty() {
                self.blocks_per_owner.remove(owner_id);
            }
        }
    }

    /// The single primitive every ownership change goes through. Does not
    /// touch approvals or listings; callers clear them alongside.
    pub(crate) fn transfer_ownership(
        &mut self,
        token_id: TokenId,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), RegistryError> {
        let owner_id = self.owner_of(token_id)?;
        if &owner_id != from {
            return Err(RegistryError::only_block_owner("transfer it"));
        }
        if to == &env::current_account_id() {
            return Err(RegistryError::InvalidRecipient(
                "The registry account cannot hold blocks".into(),
            ));
        }

        self.remove_block_from_owner(from, token_id);
        self.add_block_to_owner(to, token_id);
        self.blocks_by_id.insert(token_id, to.clone());
        Ok(())
    }
}
