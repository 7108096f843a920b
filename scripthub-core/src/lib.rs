//! scripthub-core: catalog storage for user-submitted scripts
//!
//! A small repository interface ([`Storage`]) over users, scripts and
//! categories, with an in-memory implementation ([`MemStorage`]) seeded with a
//! sample catalog.

pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use config::{CatalogConfig, OutputFormat};
pub use error::{CatalogError, OptionExt, Result};
pub use models::{Category, Id, NewCategory, NewScript, NewUser, Script, User};
pub use storage::{MemStorage, Storage};
