//! rss feed generation.
//!
//! Maps the post index onto an rss channel: one item per post with
//! title, permalink, description, categories and pub date.

use crate::{
    config::SiteConfig,
    content::{Post, PostIndex},
    log,
    utils::date::DateTimeUtc,
};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, sync::LazyLock};

/// Build rss feed if enabled in config.
pub fn build_rss(config: &SiteConfig, index: &PostIndex) -> Result<()> {
    if config.build.rss.enable {
        RssFeed::build(config, index).write(config)?;
    }
    Ok(())
}

/// rss feed builder
struct RssFeed<'a> {
    config: &'a SiteConfig,
    posts: Vec<&'a Post>,
}

impl<'a> RssFeed<'a> {
    /// Build rss feed over the already-sorted index.
    fn build(config: &'a SiteConfig, index: &'a PostIndex) -> Self {
        let posts: Vec<_> = index.iter().collect();
        Self { config, posts }
    }

    /// Generate rss xml string
    fn into_xml(self) -> Result<String> {
        let items: Vec<_> = self
            .posts
            .iter()
            .filter_map(|post| post_to_rss_item(post, self.config))
            .collect();

        let copyright = (!self.config.base.copyright.is_empty())
            .then(|| self.config.base.copyright.clone());

        let channel = ChannelBuilder::default()
            .title(&self.config.base.title)
            .link(self.config.base_url())
            .description(&self.config.base.description)
            .language(self.config.base.language.clone())
            .copyright(copyright)
            .generator("inkpress".to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    /// Write rss feed to file
    fn write(self, config: &SiteConfig) -> Result<()> {
        let xml = self.into_xml()?;
        let rss_path = &config.build.rss.path;

        if let Some(parent) = rss_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(rss_path, &xml)?;

        log!("rss"; "{}", rss_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

/// Convert a post to an rss item.
///
/// A post whose date does not parse as a calendar value is left out of
/// the feed (with a diagnostic); it stays in the index.
fn post_to_rss_item(post: &Post, config: &SiteConfig) -> Option<rss::Item> {
    let Some(pub_date) = DateTimeUtc::parse(&post.date).map(DateTimeUtc::to_rfc2822) else {
        log!("rss"; "skipping `{}`: date `{}` is not a calendar date", post.id, post.date);
        return None;
    };

    let link = config.post_url(&post.id);
    let author = normalize_rss_author(&post.author, config);

    // Category first, then tags, matching the feed-reader convention of
    // treating the leading category as primary.
    let categories: Vec<rss::Category> = std::iter::once(&post.category)
        .chain(post.tags.iter())
        .map(|name| CategoryBuilder::default().name(name.clone()).build())
        .collect();

    Some(
        ItemBuilder::default()
            .title(post.title.clone())
            .link(Some(link.clone()))
            .guid(GuidBuilder::default().permalink(true).value(link).build())
            .description(post.description.clone())
            .categories(categories)
            .pub_date(pub_date)
            .author(author)
            .build(),
    )
}

/// Normalize author field to rss format: "email@example.com (Name)"
///
/// Priority:
/// 1. Post author if already in valid format
/// 2. Site config author if in valid format
/// 3. Combine site config email and the post author name
fn normalize_rss_author(author: &str, config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.to_string());
    }

    let site_author = &config.base.author;
    if RE_VALID_AUTHOR.is_match(site_author) {
        return Some(site_author.clone());
    }

    Some(format!("{} ({})", config.base.email, author))
}
