//! Storage layer - the catalog repository interface and its in-memory backend
//!
//! # Contract
//!
//! - Lookups return `Option`; absence is never an error
//! - Counter increments on unknown ids are silent no-ops
//! - No validation: uniqueness, slug references and input shape are the
//!   caller's concern
//! - Ids are assigned sequentially per collection and never reused

pub mod memory;
mod seed;

use async_trait::async_trait;

use crate::models::{Category, Id, NewCategory, NewScript, NewUser, Script, User};

pub use memory::MemStorage;

/// Repository over the catalog's users, scripts and categories.
///
/// Implementations must be shareable across tasks; consumers take
/// `&dyn Storage` or `Arc<dyn Storage>` rather than reaching for a global.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Look up a user by id.
    async fn get_user(&self, id: Id) -> Option<User>;

    /// First user with this exact username, in insertion order.
    async fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Store a user under the next id and return the stored value.
    async fn create_user(&self, user: NewUser) -> User;

    /// List scripts, most viewed first.
    ///
    /// - `category`: exact match on the script's category slug. `None`, an
    ///   empty string and `"all"` disable the filter.
    /// - `search`: case-insensitive substring match on name or description.
    ///   `None` or empty disables the filter.
    ///
    /// Scripts with equal views keep their id order.
    async fn get_scripts(&self, category: Option<&str>, search: Option<&str>) -> Vec<Script>;

    /// Look up a script by id.
    async fn get_script(&self, id: Id) -> Option<Script>;

    /// Store a script under the next id with zeroed counters and default flags.
    async fn create_script(&self, script: NewScript) -> Script;

    /// Add one view to a script. Unknown ids are ignored.
    async fn increment_script_views(&self, id: Id);

    /// Add one download to a script. Unknown ids are ignored.
    async fn increment_script_downloads(&self, id: Id);

    /// Featured scripts in id order.
    async fn get_featured_scripts(&self) -> Vec<Script>;

    /// Popular scripts, most viewed first.
    async fn get_popular_scripts(&self) -> Vec<Script>;

    /// All categories in insertion order.
    async fn get_categories(&self) -> Vec<Category>;

    /// First category with this exact slug.
    async fn get_category(&self, slug: &str) -> Option<Category>;

    /// Store a category under the next id.
    async fn create_category(&self, category: NewCategory) -> Category;
}
