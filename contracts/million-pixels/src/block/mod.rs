mod approval;
mod enumeration;
mod metadata;
mod ownership;
mod transfer;
pub mod types;
