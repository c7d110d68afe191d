use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_token_id(token_id: TokenId) -> Result<(), RegistryError> {
    if token_id >= BLOCK_SUPPLY {
        return Err(RegistryError::InvalidInput(format!(
            "Block id {} is outside the canvas (max {})",
            token_id,
            BLOCK_SUPPLY - 1
        )));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_block_owner(
        &self,
        token_id: TokenId,
        account_id: &AccountId,
        action: &str,
    ) -> Result<(), RegistryError> {
        let owner_id = self.owner_of(token_id)?;
        if &owner_id != account_id {
            return Err(RegistryError::only_block_owner(action));
        }
        Ok(())
    }
}
