mod builder;
mod types;

mod sale;
mod token;

pub use sale::*;
pub use token::*;

pub(crate) const STANDARD: &str = "million-pixels";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const TOKEN: &str = "TOKEN_UPDATE";
pub(crate) const SALE: &str = "SALE_UPDATE";
