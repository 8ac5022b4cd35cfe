//! Markdown content pipeline.
//!
//! Turns the content store (a directory of markdown files with YAML
//! frontmatter) into the validated, date-descending [`PostIndex`] that
//! every consumer (listing, feeds, sitemap) reads.
//!
//! # Failure policy
//!
//! One bad post must never take down the whole pipeline:
//!
//! - a missing or unreadable store logs a store-level diagnostic and
//!   yields an **empty index**;
//! - an unreadable or malformed document is **skipped** with a logged
//!   diagnostic naming the file; siblings are unaffected;
//! - a single-post lookup of an absent or invalid document yields `None`
//!   so callers can render a not-found state.
//!
//! Nothing in this module panics or propagates an error to its callers.

pub mod error;
pub mod frontmatter;
pub mod post;

pub use post::{Post, PostIndex};

use crate::{config::SiteConfig, log};
use error::ContentError;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Recognized content file extension. Everything else in the store is
/// ignored silently.
const CONTENT_EXT: &str = "md";

/// Loader over the content store.
///
/// Stateless apart from the config reference: every `load_all` call
/// re-reads and re-parses the store, so concurrent invocations only share
/// the read-only directory.
pub struct PostStore<'a> {
    config: &'a SiteConfig,
}

impl<'a> PostStore<'a> {
    pub const fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Load every valid document and return the index, newest first.
    ///
    /// Ties on equal dates keep the filename enumeration order (stable
    /// sort over a sorted candidate list), which also makes repeated
    /// calls against an unchanged store yield identical sequences.
    pub fn load_all(&self) -> PostIndex {
        let candidates = match self.candidates() {
            Ok(paths) => paths,
            Err(err) => {
                log!("error"; "content store unavailable: {err}");
                return PostIndex::default();
            }
        };

        let mut items: Vec<Post> = candidates
            .par_iter()
            .filter_map(|path| match self.read_post(path) {
                Ok(post) => Some(post),
                Err(err) => {
                    log!("content"; "skipping document: {err}");
                    None
                }
            })
            .collect();

        items.sort_by(|a, b| b.date.cmp(&a.date));

        PostIndex { items }
    }

    /// Load a single post by id.
    ///
    /// The expected filename is constructed from the id; an absent or
    /// invalid document yields `None` with the same diagnostics as the
    /// bulk loader.
    pub fn load_post(&self, id: &str) -> Option<Post> {
        let path = self
            .config
            .build
            .content
            .join(format!("{id}.{CONTENT_EXT}"));

        if !path.is_file() {
            return None;
        }

        match self.read_post(&path) {
            Ok(post) => Some(post),
            Err(err) => {
                log!("content"; "skipping document: {err}");
                None
            }
        }
    }

    /// Enumerate candidate documents, sorted by filename for determinism.
    ///
    /// Fails only when the store directory itself is missing or
    /// unreadable; the walk stays at depth 1 since ids map to filenames.
    pub(crate) fn candidates(&self) -> Result<Vec<PathBuf>, ContentError> {
        let dir = &self.config.build.content;

        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| ContentError::Io(dir.clone(), err.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            if path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(CONTENT_EXT))
            {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Read and validate one document.
    pub(crate) fn read_post(&self, path: &Path) -> Result<Post, ContentError> {
        let raw = fs::read_to_string(path)
            .map_err(|err| ContentError::Io(path.to_path_buf(), err))?;

        let (meta, body) = frontmatter::parse(path, &raw)?;

        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Post::from_parts(
            id,
            meta,
            &body,
            self.config.build.words_per_minute,
        ))
    }
}
