//! Read-only inspection commands: `list`, `tags` and `check`.

use crate::{
    config::SiteConfig,
    content::{Post, PostStore},
    log,
};
use anyhow::{Result, anyhow};

/// Print the post index, optionally filtered to a single tag.
pub fn list_posts(config: &'static SiteConfig, tag: Option<&str>) -> Result<()> {
    let index = PostStore::new(config).load_all();
    let posts: Vec<&Post> = match tag {
        Some(tag) => index.by_tag(tag),
        None => index.iter().collect(),
    };

    if posts.is_empty() {
        log!("list"; "no posts");
        return Ok(());
    }

    for post in posts {
        log!("list"; "{}  {:<28} {} ({})", post.date, post.id, post.title, post.read_time);
    }
    Ok(())
}

/// Print every distinct tag with its post count, then every category.
pub fn list_tags(config: &'static SiteConfig) -> Result<()> {
    let index = PostStore::new(config).load_all();

    for tag in index.tags() {
        log!("tags"; "{tag} ({} posts)", index.by_tag(tag).len());
    }
    for category in index.categories() {
        log!("category"; "{category}");
    }
    Ok(())
}

/// Validate every candidate document and report the outcome per file.
///
/// Unlike `load_all`, this surfaces a store-level failure to the caller
/// so the process exits non-zero when the content directory is missing.
pub fn check_store(config: &'static SiteConfig) -> Result<()> {
    let store = PostStore::new(config);
    let candidates = store
        .candidates()
        .map_err(|err| anyhow!("content store unavailable: {err}"))?;

    let mut valid = 0usize;
    let mut skipped = 0usize;
    for path in &candidates {
        match store.read_post(path) {
            Ok(post) => {
                valid += 1;
                log!("check"; "ok {} ({})", post.id, post.date);
            }
            Err(err) => {
                skipped += 1;
                log!("error"; "{err}");
            }
        }
    }

    log!("check"; "{valid} valid, {skipped} skipped, {} documents total", candidates.len());
    Ok(())
}
