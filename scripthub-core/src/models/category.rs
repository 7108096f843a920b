//! Script categories, addressed externally by slug

use serde::{Deserialize, Serialize};

use super::{non_empty, Id};

/// Slug that `get_scripts` treats as "no category filter".
///
/// A seeded category row also uses this slug, so it is reachable through
/// `get_category` but can never narrow a script listing.
pub const ALL_CATEGORIES: &str = "all";

/// Stored category. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
    pub slug: String,
    pub icon: String,
    pub description: Option<String>,
}

impl Category {
    pub(crate) fn from_new(id: Id, new: NewCategory) -> Self {
        Self {
            id,
            name: new.name,
            slug: new.slug,
            icon: new.icon,
            description: non_empty(new.description),
        }
    }
}

/// Fields supplied when creating a category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub icon: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, slug: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            icon: icon.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_becomes_none() {
        let category = Category::from_new(1, NewCategory::new("Misc", "misc", "fas fa-box").with_description(""));
        assert_eq!(category.description, None);
    }

    #[test]
    fn description_kept_when_present() {
        let category = Category::from_new(
            2,
            NewCategory::new("Misc", "misc", "fas fa-box").with_description("Everything else"),
        );
        assert_eq!(category.description.as_deref(), Some("Everything else"));
    }
}
