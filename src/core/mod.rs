//! Core business logic module
//!
//! This module contains the account lifecycle component:
//! - `account_store` - Account mapping, number assignment, and the
//!   flush-on-mutation persistence contract

pub mod account_store;

pub use account_store::AccountStore;
