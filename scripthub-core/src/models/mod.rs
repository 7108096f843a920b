//! Catalog entities and their insert payloads
//!
//! Stored entities carry an id assigned by the storage layer. Insert payloads
//! (`New*`) are everything the caller supplies; defaults are applied on insert.

pub mod category;
pub mod script;
pub mod user;

pub use category::{Category, NewCategory};
pub use script::{NewScript, Script};
pub use user::{NewUser, User};

/// Entity id, assigned sequentially per collection starting at 1
pub type Id = i64;

/// Treat empty strings the same as a missing value.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
