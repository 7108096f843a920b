//! Catalog scripts with view/download counters

use serde::{Deserialize, Serialize};

use super::{non_empty, Id};

/// Status assigned to scripts created without one
pub const DEFAULT_STATUS: &str = "active";

/// Stored script.
///
/// `category` holds a category slug by convention only; nothing checks that
/// the slug exists. Only `views` and `downloads` change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub category: String,
    pub code: String,
    pub image: Option<String>,
    pub views: u64,
    pub downloads: u64,
    /// Tenths of a star, e.g. 49 is 4.9
    pub rating: i32,
    pub is_popular: bool,
    pub is_new: bool,
    pub is_featured: bool,
    pub status: String,
}

impl Script {
    /// Build a freshly submitted script: zeroed counters, flagged new.
    pub(crate) fn from_new(id: Id, new: NewScript) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            category: new.category,
            code: new.code,
            image: non_empty(new.image),
            views: 0,
            downloads: 0,
            rating: 0,
            is_popular: false,
            is_new: true,
            is_featured: false,
            status: non_empty(new.status).unwrap_or_else(|| DEFAULT_STATUS.to_owned()),
        }
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

/// Fields supplied when submitting a script
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewScript {
    pub name: String,
    pub description: String,
    pub category: String,
    pub code: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl NewScript {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            code: code.into(),
            image: None,
            status: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
