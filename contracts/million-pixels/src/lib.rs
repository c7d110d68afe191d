//! Million Pixels — pixel-block registry with fixed-price marketplace and pull-payment ledger, JSON events.
//!
//! A fixed canvas of 1,000,000 pixels is divided into 10,000 tradable
//! blocks. Each block has one owner, at most one delegated transfer
//! approval, an optional fixed-price sale offer, and opaque display
//! metadata. Sale proceeds accumulate in a withdrawable ledger and are
//! released only when the beneficiary withdraws them.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;

mod block;
mod ledger;
mod sale;

mod admin;

#[cfg(test)]
mod tests;

pub use block::types::{BlockInfo, BlockMetadata, TokenId};
pub use constants::*;
pub use errors::RegistryError;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    BlocksById,
    BlocksPerOwner,
    BlocksPerOwnerInner { account_id_hash: Vec<u8> },
    ApprovedById,
    ListingsById,
    LedgerBalances,
    MetadataById,
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// From Cargo.toml; updated on each migration.
    pub version: String,

    /// Receiver of initial-issuance proceeds; injected at init so tests
    /// can use a distinct operator.
    pub operator_id: AccountId,

    /// Ownership authority: block id -> current owner. `len()` is the
    /// issued-block count.
    pub blocks_by_id: IterableMap<TokenId, AccountId>,
    pub(crate) blocks_per_owner: LookupMap<AccountId, IterableSet<TokenId>>,

    /// At most one delegated transfer approval per block.
    pub(crate) approved_by_id: LookupMap<TokenId, AccountId>,

    /// Fixed-price sale offers in yoctoNEAR; absent = not for sale.
    pub listings_by_id: IterableMap<TokenId, u128>,

    /// Withdrawable sale proceeds per account, in yoctoNEAR. Credited by
    /// settled sales, zeroed only by the account's own withdrawal.
    pub(crate) ledger_balances: LookupMap<AccountId, u128>,

    pub(crate) metadata_by_id: LookupMap<TokenId, BlockMetadata>,
}
