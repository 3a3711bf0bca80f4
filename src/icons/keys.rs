//! Cache Key Derivation
//!
//! Pure functions turning an icon identity and its render parameters into
//! the string keys used by the four caches.
//!
//! Keys are `:`-delimited. Free-text fields are escaped (`%` as `%25`, `:`
//! as `%3A`) so no field value can forge a delimiter, and absent optional
//! fields are written as the same sentinel as their explicit default.

use crate::error::{CacheError, Result};
use crate::icons::{RenderParams, SearchQuery};

pub const SVG_PREFIX: &str = "svg";
pub const PNG_PREFIX: &str = "png";
pub const METADATA_PREFIX: &str = "meta";
pub const SEARCH_PREFIX: &str = "search";

/// Written for a missing background color.
pub const NO_BACKGROUND: &str = "none";
/// Written for a missing search filter.
pub const ALL_FILTER: &str = "all";
// A literal "all" filter; `escape` never emits `%a`
const LITERAL_ALL: &str = "%all";
/// Page size used when a search does not specify one.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

const DELIMITER: char = ':';

/// Key for the SVG cache, e.g. `svg:lucide:Home:24:#000:none:0`.
pub fn svg_cache_key(icon_name: &str, library: &str, params: &RenderParams) -> Result<String> {
    render_key(SVG_PREFIX, icon_name, library, params)
}

/// Key for the PNG cache; same shape as the SVG key with its own prefix.
pub fn png_cache_key(icon_name: &str, library: &str, params: &RenderParams) -> Result<String> {
    render_key(PNG_PREFIX, icon_name, library, params)
}

/// Key for the metadata cache. Render parameters do not affect metadata.
pub fn metadata_cache_key(icon_name: &str, library: &str) -> Result<String> {
    Ok(format!(
        "{}{d}{}{d}{}",
        METADATA_PREFIX,
        escape(require("library", library)?),
        escape(require("icon name", icon_name)?),
        d = DELIMITER
    ))
}

/// Key for the search cache, e.g. `search:home:lucide:all:50:0`.
pub fn search_cache_key(search: &SearchQuery) -> String {
    format!(
        "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
        SEARCH_PREFIX,
        filter(search.query.as_deref()),
        filter(search.library.as_deref()),
        filter(search.category.as_deref()),
        search.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        search.offset.unwrap_or(0),
        d = DELIMITER
    )
}

/// Prefix shared by every SVG key of one icon, whatever its render parameters.
pub fn svg_key_prefix(icon_name: &str, library: &str) -> Result<String> {
    identity_prefix(SVG_PREFIX, icon_name, library)
}

/// Prefix shared by every PNG key of one icon, whatever its render parameters.
pub fn png_key_prefix(icon_name: &str, library: &str) -> Result<String> {
    identity_prefix(PNG_PREFIX, icon_name, library)
}

fn render_key(prefix: &str, icon_name: &str, library: &str, params: &RenderParams) -> Result<String> {
    if params.size == 0 {
        return Err(CacheError::InvalidKey(format!(
            "size must be positive for {}/{}",
            library, icon_name
        )));
    }
    let color = require("color", &params.color)?;
    let background = match params.background_color.as_deref() {
        None | Some("") => NO_BACKGROUND,
        Some(bg) => bg,
    };

    Ok(format!(
        "{}{}{d}{}{d}{}{d}{}",
        identity_prefix(prefix, icon_name, library)?,
        params.size,
        escape(color),
        escape(background),
        params.padding.unwrap_or(0),
        d = DELIMITER
    ))
}

// Trailing delimiter keeps `Home` from matching `HomeAlt`
fn identity_prefix(prefix: &str, icon_name: &str, library: &str) -> Result<String> {
    Ok(format!(
        "{}{d}{}{d}{}{d}",
        prefix,
        escape(require("library", library)?),
        escape(require("icon name", icon_name)?),
        d = DELIMITER
    ))
}

fn require<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(CacheError::InvalidKey(format!("{} is required", field)))
    } else {
        Ok(value)
    }
}

fn filter(value: Option<&str>) -> String {
    match value {
        None | Some("") => ALL_FILTER.to_string(),
        Some(ALL_FILTER) => LITERAL_ALL.to_string(),
        Some(v) => escape(v),
    }
}

fn escape(field: &str) -> String {
    if !field.contains(|c| c == '%' || c == DELIMITER) {
        return field.to_string();
    }
    field.replace('%', "%25").replace(DELIMITER, "%3A")
}
