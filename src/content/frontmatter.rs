//! YAML frontmatter parsing for markdown documents.
//!
//! A document looks like:
//!
//! ```markdown
//! ---
//! title: "Hello World"
//! date: "2024-06-01"
//! author: "Alice"
//! category: "rust"
//! tags: ["rust", "blog"]
//! description: "A first post"
//! ---
//!
//! Body text...
//! ```
//!
//! The header is decoded into [`FrontMatter`] with a typed serde decode
//! that fails closed: a missing required field or a wrong-shaped value
//! rejects the whole document instead of letting a malformed record
//! through to downstream consumers.

use crate::content::error::ContentError;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Typed frontmatter header of a post document.
///
/// Every field without a `default` is required; deserialization fails if
/// it is absent. `tags` must be present but may be an empty list.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    /// Publication date as written, expected `YYYY-MM-DD`. Kept as text;
    /// the index sorts lexicographically (see `PostIndex`).
    pub date: String,
    pub author: String,
    pub category: String,
    pub description: String,
    /// Accepts a YAML sequence of strings or a single comma-separated
    /// string. Anything else fails the decode.
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    /// Explicit cover image override. Absent means downstream consumers
    /// fall back to convention-based lookup.
    #[serde(default)]
    pub image: Option<String>,
}

/// Split a document into its frontmatter header and body, then decode
/// the header.
///
/// Returns the typed header and the body text (leading blank lines
/// stripped).
pub fn parse(path: &Path, text: &str) -> Result<(FrontMatter, String), ContentError> {
    let (header, body) =
        split(text).ok_or_else(|| ContentError::MissingFrontmatter(path.to_path_buf()))?;

    let meta: FrontMatter = serde_yaml::from_str(header)
        .map_err(|err| ContentError::Frontmatter(path.to_path_buf(), err))?;

    Ok((meta, body.trim_start_matches('\n').to_string()))
}

/// Split raw text into `(header, body)` at the `---` delimiters.
///
/// Returns `None` when the document does not start with a delimiter or
/// the closing delimiter is missing.
fn split(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("---")?;
    let end = rest.find("\n---")?;

    let header = &rest[..end];
    // Skip past "\n---" and the remainder of the delimiter line
    let after = &rest[end + 4..];
    let body = match after.find('\n') {
        Some(pos) => &after[pos + 1..],
        None => "",
    };

    Some((header, body))
}

/// Deserialize `tags` as either a string list or a comma-separated string.
///
/// Entries are trimmed and empty entries dropped, so `tags: ""` and
/// `tags: []` both decode to an empty (but present) list.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTags {
        List(Vec<String>),
        Csv(String),
    }

    let tags = match RawTags::deserialize(deserializer)? {
        RawTags::List(items) => items,
        RawTags::Csv(s) => s.split(',').map(str::to_string).collect(),
    };

    Ok(tags
        .into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect())
}
