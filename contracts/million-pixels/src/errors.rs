//! Typed error handling for the registry contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(RegistryError::Xxx)`, the SDK calls `env::panic_str()` with the
//! Display message — same on-wire behaviour as raw panics, but with
//! structured, testable codes.
//!
//! Every variant except `InternalError` is a caller-recoverable
//! precondition failure: operations validate completely before their
//! first state mutation, so a failed call leaves all state untouched.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum RegistryError {
    /// Block was never issued.
    NotFound(String),
    /// Block already has an owner; initial purchase is one-time.
    AlreadyIssued(String),
    /// Caller is not the block owner.
    NotOwner(String),
    /// Caller is neither the owner nor the standing delegate.
    NotApprovedOrOwner(String),
    /// Owner attempted to approve themselves.
    SelfApproval(String),
    /// Owner attempted to buy their own block.
    SelfPurchase(String),
    /// Recipient cannot hold blocks.
    InvalidRecipient(String),
    /// Attached amount does not match the fixed price.
    InvalidPayment(String),
    /// Block has no sale offer.
    NotListed(String),
    /// Invalid parameters or ids from the caller.
    InvalidInput(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::AlreadyIssued(msg) => write!(f, "Already issued: {}", msg),
            Self::NotOwner(msg) => write!(f, "Not owner: {}", msg),
            Self::NotApprovedOrOwner(msg) => write!(f, "Not approved or owner: {}", msg),
            Self::SelfApproval(msg) => write!(f, "Self approval: {}", msg),
            Self::SelfPurchase(msg) => write!(f, "Self purchase: {}", msg),
            Self::InvalidRecipient(msg) => write!(f, "Invalid recipient: {}", msg),
            Self::InvalidPayment(msg) => write!(f, "Invalid payment: {}", msg),
            Self::NotListed(msg) => write!(f, "Not listed: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl RegistryError {
    pub fn block_not_found(token_id: crate::TokenId) -> Self {
        Self::NotFound(format!("Block {} was never issued", token_id))
    }
    pub fn only_block_owner(action: &str) -> Self {
        Self::NotOwner(format!("Only the block owner can {}", action))
    }
}
