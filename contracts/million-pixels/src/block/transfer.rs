use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        let sender_id = env::predecessor_account_id();
        self.check_block_owner(token_id, &sender_id, "transfer it")?;

        self.move_block(token_id, &sender_id, &receiver_id)
    }

    /// Delegated transfer: `from` is the pre-move owner, not the caller.
    #[handle_result]
    pub fn transfer_from(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        if !self.is_approved_or_owner(token_id, &actor_id)? {
            return Err(RegistryError::NotApprovedOrOwner(
                "Caller is neither the owner nor the approved delegate".into(),
            ));
        }
        let from = self.owner_of(token_id)?;

        self.move_block(token_id, &from, &receiver_id)
    }
}

impl Contract {
    /// Ownership move plus the clearing every path must perform together:
    /// approval and sale offer die with the old ownership.
    pub(crate) fn move_block(
        &mut self,
        token_id: TokenId,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), RegistryError> {
        self.transfer_ownership(token_id, from, to)?;
        self.clear_approval(token_id);
        self.clear_listing(token_id);

        events::emit_transfer(from, to, token_id);
        Ok(())
    }
}
