//! Owner-gated display metadata. Values are opaque to the registry and
//! overwritten unconditionally; getters return `""` when never set.

use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn set_pixels_colors(
        &mut self,
        token_id: TokenId,
        colors: String,
    ) -> Result<(), RegistryError> {
        let metadata = self.metadata_for_update(token_id, "set the pixel colors")?;
        metadata.colors = colors;
        Ok(())
    }

    #[handle_result]
    pub fn set_description(
        &mut self,
        token_id: TokenId,
        description: String,
    ) -> Result<(), RegistryError> {
        let metadata = self.metadata_for_update(token_id, "set the description")?;
        metadata.description = description;
        Ok(())
    }

    #[handle_result]
    pub fn set_link(&mut self, token_id: TokenId, link: String) -> Result<(), RegistryError> {
        let metadata = self.metadata_for_update(token_id, "set the link")?;
        metadata.link = link;
        Ok(())
    }

    pub fn pixels_colors_of(&self, token_id: TokenId) -> String {
        self.metadata_by_id
            .get(&token_id)
            .map(|m| m.colors.clone())
            .unwrap_or_default()
    }

    pub fn description_of(&self, token_id: TokenId) -> String {
        self.metadata_by_id
            .get(&token_id)
            .map(|m| m.description.clone())
            .unwrap_or_default()
    }

    pub fn link_of(&self, token_id: TokenId) -> String {
        self.metadata_by_id
            .get(&token_id)
            .map(|m| m.link.clone())
            .unwrap_or_default()
    }
}

impl Contract {
    fn metadata_for_update(
        &mut self,
        token_id: TokenId,
        action: &str,
    ) -> Result<&mut BlockMetadata, RegistryError> {
        let caller_id = env::predecessor_account_id();
        self.check_block_owner(token_id, &caller_id, action)?;

        if !self.metadata_by_id.contains_key(&token_id) {
            self.metadata_by_id
                .insert(token_id, BlockMetadata::default());
        }
        Ok(self.metadata_by_id.get_mut(&token_id).unwrap())
    }
}
