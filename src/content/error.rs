//! Content pipeline error types.
//!
//! These errors never cross the loader boundary: `PostStore` absorbs them
//! into diagnostics and degraded results (empty index, `None` lookup).
//! The `check` command surfaces them per-document for operators.

use std::path::PathBuf;
use thiserror::Error;

/// Per-document failures during loading.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` has no frontmatter block")]
    MissingFrontmatter(PathBuf),

    #[error("invalid frontmatter in `{0}`: {1}")]
    Frontmatter(PathBuf, #[source] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_display_names_file() {
        let err = ContentError::Io(
            PathBuf::from("content/hello.md"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("content/hello.md"));
    }

    #[test]
    fn test_missing_frontmatter_display() {
        let err = ContentError::MissingFrontmatter(PathBuf::from("bare.md"));
        assert!(err.to_string().contains("no frontmatter"));
    }

    #[test]
    fn test_frontmatter_display_carries_cause() {
        let yaml_err = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err = ContentError::Frontmatter(PathBuf::from("bad.md"), yaml_err);
        assert!(err.to_string().contains("bad.md"));
    }
}
