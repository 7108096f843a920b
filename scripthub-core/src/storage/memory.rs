//! In-memory storage backend
//!
//! Three ordered tables behind one `RwLock`. Every operation takes the lock
//! once and never awaits while holding it, so mutations cannot interleave.
//! Nothing survives the process.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, trace};

use super::{seed, Storage};
use crate::config::StorageConfig;
use crate::models::category::ALL_CATEGORIES;
use crate::models::{Category, Id, NewCategory, NewScript, NewUser, Script, User};

/// Rows keyed by id. `BTreeMap` iteration order is id order, which is also
/// insertion order because ids only grow.
struct Table<T> {
    rows: BTreeMap<Id, T>,
    next_id: Id,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Build a row with the next id, store it and return a copy.
    fn insert_with(&mut self, build: impl FnOnce(Id) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    /// Store a row that already carries its id, keeping the counter ahead of it.
    fn restore(&mut self, id: Id, row: T) {
        self.next_id = self.next_id.max(id + 1);
        self.rows.insert(id, row);
    }

    fn get(&self, id: Id) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

struct Collections {
    users: Table<User>,
    scripts: Table<Script>,
    categories: Table<Category>,
}

/// Most viewed first; equal view counts keep their relative order.
fn sort_by_views_desc(scripts: &mut [Script]) {
    scripts.sort_by(|a, b| b.views.cmp(&a.views));
}

/// Process-local catalog storage.
pub struct MemStorage {
    inner: RwLock<Collections>,
}

impl MemStorage {
    /// Storage pre-populated with the sample catalog.
    pub fn new() -> Self {
        let mut collections = Collections {
            users: Table::new(),
            scripts: Table::new(),
            categories: Table::new(),
        };

        for category in seed::categories() {
            collections.categories.restore(category.id, category);
        }
        for script in seed::scripts() {
            collections.scripts.restore(script.id, script);
        }

        debug!(
            categories = collections.categories.rows.len(),
            scripts = collections.scripts.rows.len(),
            "Seeded in-memory catalog"
        );

        Self {
            inner: RwLock::new(collections),
        }
    }

    /// Storage with no rows at all.
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(Collections {
                users: Table::new(),
                scripts: Table::new(),
                categories: Table::new(),
            }),
        }
    }

    /// Seeded or empty, per `[storage] seed`.
    pub fn from_config(config: &StorageConfig) -> Self {
        if config.seed {
            Self::new()
        } else {
            debug!("Seeding disabled, starting with an empty catalog");
            Self::empty()
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: Id) -> Option<User> {
        self.inner.read().await.users.get(id)
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    async fn create_user(&self, user: NewUser) -> User {
        let mut inner = self.inner.write().await;
        let created = inner.users.insert_with(|id| User::from_new(id, user));
        debug!(id = created.id, username = %created.username, "Created user");
        created
    }

    async fn get_scripts(&self, category: Option<&str>, search: Option<&str>) -> Vec<Script> {
        let category = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
        let needle = search.filter(|s| !s.is_empty()).map(str::to_lowercase);

        let mut scripts: Vec<Script> = self
            .inner
            .read()
            .await
            .scripts
            .values()
            .filter(|script| category.map_or(true, |c| script.category == c))
            .filter(|script| needle.as_deref().map_or(true, |n| script.matches_search(n)))
            .cloned()
            .collect();

        sort_by_views_desc(&mut scripts);
        scripts
    }

    async fn get_script(&self, id: Id) -> Option<Script> {
        self.inner.read().await.scripts.get(id)
    }

    async fn create_script(&self, script: NewScript) -> Script {
        let mut inner = self.inner.write().await;
        let created = inner.scripts.insert_with(|id| Script::from_new(id, script));
        debug!(id = created.id, category = %created.category, "Created script");
        created
    }

    async fn increment_script_views(&self, id: Id) {
        match self.inner.write().await.scripts.get_mut(id) {
            Some(script) => {
                script.views += 1;
                debug!(id, views = script.views, "Recorded script view");
            }
            None => trace!(id, "View for unknown script ignored"),
        }
    }

    async fn increment_script_downloads(&self, id: Id) {
        match self.inner.write().await.scripts.get_mut(id) {
            Some(script) => {
                script.downloads += 1;
                debug!(id, downloads = script.downloads, "Recorded script download");
            }
            None => trace!(id, "Download for unknown script ignored"),
        }
    }

    async fn get_featured_scripts(&self) -> Vec<Script> {
        self.inner
            .read()
            .await
            .scripts
            .values()
            .filter(|script| script.is_featured)
            .cloned()
            .collect()
    }

    async fn get_popular_scripts(&self) -> Vec<Script> {
        let mut scripts: Vec<Script> = self
            .inner
            .read()
            .await
            .scripts
            .values()
            .filter(|script| script.is_popular)
            .cloned()
            .collect();

        sort_by_views_desc(&mut scripts);
        scripts
    }

    async fn get_categories(&self) -> Vec<Category> {
        self.inner.read().await.categories.values().cloned().collect()
    }

    async fn get_category(&self, slug: &str) -> Option<Category> {
        self.inner
            .read()
            .await
            .categories
            .values()
            .find(|category| category.slug == slug)
            .cloned()
    }

    async fn create_category(&self, category: NewCategory) -> Category {
        let mut inner = self.inner.write().await;
        let created = inner.categories.insert_with(|id| Category::from_new(id, category));
        debug!(id = created.id, slug = %created.slug, "Created category");
        created
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(scripts: &[Script]) -> Vec<&str> {
        scripts.iter().map(|s| s.name.as_str()).collect()
    }

    #[tokio::test]
    async fn unfiltered_listing_sorted_by_views() {
        let storage = MemStorage::new();
        let scripts = storage.get_scripts(None, None).await;

        assert_eq!(scripts.len(), 9);
        assert_eq!(scripts[0].name, "Universal Script Hub");
        assert_eq!(scripts[0].views, 15200);
        assert_eq!(scripts[8].name, "Admin Commands Hub");
        assert_eq!(scripts[8].views, 892);
        assert!(scripts.windows(2).all(|w| w[0].views >= w[1].views));
    }

    #[tokio::test]
    async fn category_filter_exact_match() {
        let storage = MemStorage::new();

        let admin = storage.get_scripts(Some("admin"), None).await;
        assert_eq!(names(&admin), ["Admin Commands Hub"]);

        let game = storage.get_scripts(Some("game"), None).await;
        assert_eq!(names(&game), ["Aimbot System", "Infinite Jump Script"]);

        assert!(storage.get_scripts(Some("Admin"), None).await.is_empty());
    }

    #[tokio::test]
    async fn all_and_empty_category_bypass_filter() {
        let storage = MemStorage::new();

        assert_eq!(storage.get_scripts(Some("all"), None).await.len(), 9);
        assert_eq!(storage.get_scripts(Some(""), None).await.len(), 9);
    }

    #[tokio::test]
    async fn dangling_category_still_listed() {
        let storage = MemStorage::new();

        let universal = storage.get_scripts(Some("universal"), None).await;
        assert_eq!(names(&universal), ["R4D Hub"]);
        assert!(storage.get_category("universal").await.is_none());
    }

    #[tokio::test]
    async fn search_matches_name_or_description() {
        let storage = MemStorage::new();

        let esp = storage.get_scripts(None, Some("esp")).await;
        assert_eq!(names(&esp), ["Universal ESP GUI"]);

        // "parkour" only appears in a description
        let parkour = storage.get_scripts(None, Some("PARKOUR")).await;
        assert_eq!(names(&parkour), ["Infinite Jump Script"]);

        // Code is not searched
        assert!(storage.get_scripts(None, Some("UserInputService")).await.is_empty());
    }

    #[tokio::test]
    async fn search_lowercases_non_ascii() {
        let storage = MemStorage::new();

        let hits = storage.get_scripts(None, Some("ПОПУЛЯРНЫЙ")).await;
        assert_eq!(names(&hits), ["R4D Hub"]);
    }

    #[tokio::test]
    async fn category_and_search_combine() {
        let storage = MemStorage::new();

        let hits = storage.get_scripts(Some("exploit"), Some("advanced")).await;
        assert_eq!(names(&hits), ["Advanced Exploit Suite"]);

        assert!(storage.get_scripts(Some("admin"), Some("esp")).await.is_empty());
    }

    #[tokio::test]
    async fn equal_views_keep_id_order() {
        let storage = MemStorage::empty();
        for name in ["first", "second", "third"] {
            storage
                .create_script(NewScript::new(name, "", "game", ""))
                .await;
        }
        storage.increment_script_views(3).await;

        let scripts = storage.get_scripts(None, None).await;
        assert_eq!(names(&scripts), ["third", "first", "second"]);
    }

    #[tokio::test]
    async fn featured_in_collection_order() {
        let storage = MemStorage::new();

        let featured = storage.get_featured_scripts().await;
        assert_eq!(names(&featured), ["Universal Script Hub", "Advanced Exploit Suite"]);
    }

    #[tokio::test]
    async fn popular_sorted_by_views() {
        let storage = MemStorage::new();

        let popular = storage.get_popular_scripts().await;
        assert_eq!(
            names(&popular),
            [
                "Universal Script Hub",
                "R4D Hub",
                "Advanced Exploit Suite",
                "Noclip Toggle",
                "Speed Boost Utility",
                "Infinite Jump Script",
            ]
        );
    }

    #[tokio::test]
    async fn increments_visible_to_later_reads() {
        let storage = MemStorage::new();

        storage.increment_script_views(4).await;
        storage.increment_script_downloads(4).await;
        storage.increment_script_downloads(4).await;

        let script = storage.get_script(4).await.unwrap();
        assert_eq!(script.views, 1801);
        assert_eq!(script.downloads, 974);
    }

    #[tokio::test]
    async fn increments_on_unknown_id_are_noops() {
        let storage = MemStorage::new();
        let before = storage.get_scripts(None, None).await;

        storage.increment_script_views(999).await;
        storage.increment_script_downloads(-1).await;

        assert_eq!(storage.get_scripts(None, None).await, before);
    }

    #[tokio::test]
    async fn create_script_continues_after_seed() {
        let storage = MemStorage::new();

        let created = storage
            .create_script(NewScript::new("Fly", "Fly anywhere", "game", "-- fly"))
            .await;

        assert_eq!(created.id, 10);
        assert_eq!(storage.get_script(10).await, Some(created));
    }

    #[tokio::test]
    async fn categories_in_insertion_order() {
        let storage = MemStorage::new();
        storage
            .create_category(NewCategory::new("Misc", "misc", "fas fa-box"))
            .await;

        let categories = storage.get_categories().await;
        let ids: Vec<Id> = categories.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(categories[6].description, None);
    }

    #[tokio::test]
    async fn get_category_first_match_wins() {
        let storage = MemStorage::new();
        storage
            .create_category(NewCategory::new("Duplicate", "gui", "fas fa-copy"))
            .await;

        let gui = storage.get_category("gui").await.unwrap();
        assert_eq!(gui.id, 6);
        assert_eq!(gui.name, "GUI скрипты");

        let all = storage.get_category("all").await.unwrap();
        assert_eq!(all.id, 1);
    }

    #[tokio::test]
    async fn users_start_empty_and_number_from_one() {
        let storage = MemStorage::new();
        assert!(storage.get_user(1).await.is_none());

        let alice = storage.create_user(NewUser::new("alice", "pw")).await;
        let bob = storage.create_user(NewUser::new("bob", "pw")).await;

        assert_eq!((alice.id, bob.id), (1, 2));
        assert_eq!(storage.get_user(2).await, Some(bob));
    }

    #[tokio::test]
    async fn duplicate_usernames_resolve_to_first() {
        let storage = MemStorage::new();
        let first = storage.create_user(NewUser::new("sam", "one")).await;
        storage.create_user(NewUser::new("sam", "two")).await;

        assert_eq!(storage.get_user_by_username("sam").await, Some(first));
        assert!(storage.get_user_by_username("Sam").await.is_none());
    }

    #[tokio::test]
    async fn empty_storage_has_no_rows() {
        let storage = MemStorage::empty();

        assert!(storage.get_scripts(None, None).await.is_empty());
        assert!(storage.get_categories().await.is_empty());

        let created = storage
            .create_category(NewCategory::new("First", "first", "fas fa-1"))
            .await;
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn from_config_respects_seed_flag() {
        let seeded = MemStorage::from_config(&StorageConfig { seed: true });
        let bare = MemStorage::from_config(&StorageConfig { seed: false });

        assert_eq!(seeded.get_categories().await.len(), 6);
        assert!(bare.get_categories().await.is_empty());
    }
}
