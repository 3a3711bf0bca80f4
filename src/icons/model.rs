//! Icon domain types shared by key derivation, the caches and warm-up.

use serde::{Deserialize, Serialize};

use crate::cache::{json_weight, Weigh};

// == Icon Ref ==
/// Identity of an icon: its name within a library.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRef {
    pub icon_name: String,
    pub library: String,
}

impl IconRef {
    pub fn new(icon_name: impl Into<String>, library: impl Into<String>) -> Self {
        Self {
            icon_name: icon_name.into(),
            library: library.into(),
        }
    }
}

// == Render Params ==
/// Everything besides identity that changes a rendered artifact's bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderParams {
    /// Edge length in pixels
    pub size: u32,
    /// Foreground color, e.g. `#000000`
    pub color: String,
    /// Background color, `None` for transparent
    #[serde(default)]
    pub background_color: Option<String>,
    /// Padding in pixels, `None` for no padding
    #[serde(default)]
    pub padding: Option<u32>,
}

impl RenderParams {
    pub fn new(size: u32, color: impl Into<String>) -> Self {
        Self {
            size,
            color: color.into(),
            background_color: None,
            padding: None,
        }
    }

    #[must_use]
    pub fn with_background(mut self, background_color: impl Into<String>) -> Self {
        self.background_color = Some(background_color.into());
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }
}

// == Search Query ==
/// Filters and pagination of an icon search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub library: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn library(mut self, library: impl Into<String>) -> Self {
        self.library = Some(library.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn page(mut self, limit: usize, offset: usize) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

// == Icon Metadata ==
/// Descriptive data about one icon, cached in the metadata cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconMetadata {
    pub name: String,
    pub library: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Weigh for IconMetadata {
    fn weight(&self) -> usize {
        json_weight(self)
    }
}

// == Search Results ==
/// One page of search results, cached in the search cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub icons: Vec<IconMetadata>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl Weigh for SearchResults {
    fn weight(&self) -> usize {
        json_weight(self)
    }
}
