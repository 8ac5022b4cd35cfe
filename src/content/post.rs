//! Post records and the in-memory index with its derived views.
//!
//! A [`Post`] is the validated, typed representation of one markdown
//! document. The [`PostIndex`] is the date-descending collection produced
//! by a single loader pass; every derived view (tags, categories, tag
//! filter, id lookup) is a pure read-only projection over it.

use crate::content::frontmatter::FrontMatter;

/// Validated in-memory representation of one blog post.
///
/// | Field         | Source                                |
/// |---------------|---------------------------------------|
/// | `id`          | filename stem, unique per store       |
/// | `date`        | frontmatter, sortable `YYYY-MM-DD` text |
/// | `read_time`   | derived from body word count          |
/// | everything else | frontmatter                         |
#[derive(Debug, Clone)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub date: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Human-readable reading-time estimate, e.g. "5 min read".
    pub read_time: String,
    pub image: Option<String>,
}

impl Post {
    /// Assemble a record from its parsed header and body.
    pub fn from_parts(id: String, meta: FrontMatter, body: &str, words_per_minute: u32) -> Self {
        Self {
            id,
            title: meta.title,
            date: meta.date,
            author: meta.author,
            category: meta.category,
            description: meta.description,
            tags: meta.tags,
            read_time: reading_time(body, words_per_minute),
            image: meta.image,
        }
    }
}

/// Estimate reading time from body word count.
///
/// Words are whitespace-separated tokens. The estimate rounds up and is
/// never below one minute, so an empty body still reads "1 min read".
pub fn reading_time(body: &str, words_per_minute: u32) -> String {
    let words = body.split_whitespace().count();
    let wpm = words_per_minute.max(1) as usize;
    let minutes = words.div_ceil(wpm).max(1);
    format!("{minutes} min read")
}

/// The post index: all valid records of one loader pass, newest first.
#[derive(Debug, Default)]
pub struct PostIndex {
    pub items: Vec<Post>,
}

impl PostIndex {
    /// Get iterator over posts in date-descending order.
    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.items.iter()
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All distinct tags, in order of first appearance across the index.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for post in &self.items {
            for tag in &post.tags {
                if !tags.contains(&tag.as_str()) {
                    tags.push(tag);
                }
            }
        }
        tags
    }

    /// All distinct categories, in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for post in &self.items {
            if !categories.contains(&post.category.as_str()) {
                categories.push(&post.category);
            }
        }
        categories
    }

    /// All posts carrying `tag` (case-sensitive exact match), preserving
    /// the index order. An unknown tag yields an empty list, not an error.
    pub fn by_tag(&self, tag: &str) -> Vec<&Post> {
        self.items
            .iter()
            .filter(|post| post.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Look up a single post by id (case-sensitive exact match).
    pub fn get(&self, id: &str) -> Option<&Post> {
        self.items.iter().find(|post| post.id == id)
    }
}
