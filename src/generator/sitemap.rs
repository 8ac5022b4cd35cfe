//! Sitemap generation.
//!
//! Generates a sitemap.xml listing the site root, the blog listing, every
//! post page and every tag page.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/hello-world/</loc>
//!     <lastmod>2024-06-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, content::PostIndex, log, utils::date::DateTimeUtc};
use anyhow::{Context, Result};
use std::fs;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled in config.
pub fn build_sitemap(config: &SiteConfig, index: &PostIndex) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::from_index(config, index);
        sitemap.write(config)?;
    }
    Ok(())
}

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (optional, YYYY-MM-DD format)
    lastmod: Option<String>,
}

impl Sitemap {
    /// Build sitemap entries from the post index.
    ///
    /// Post entries get a `lastmod` only when their date parses as a
    /// calendar value; tag pages and static entries carry none.
    fn from_index(config: &SiteConfig, index: &PostIndex) -> Self {
        let mut urls = vec![
            UrlEntry {
                loc: format!("{}/", config.base_url()),
                lastmod: None,
            },
            UrlEntry {
                loc: config.blog_url(),
                lastmod: None,
            },
        ];

        urls.extend(index.iter().map(|post| UrlEntry {
            loc: config.post_url(&post.id),
            lastmod: DateTimeUtc::parse(&post.date).map(DateTimeUtc::to_ymd),
        }));

        urls.extend(index.tags().into_iter().map(|tag| UrlEntry {
            loc: config.tag_url(tag),
            lastmod: None,
        }));

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = &config.build.sitemap.path;
        let xml = self.into_xml();

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(sitemap_path, &xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.url = Some("https://example.com".to_string());
        config
    }

    fn make_post(id: &str, date: &str, tags: &[&str]) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Title {id}"),
            date: date.to_string(),
            author: "Alice".to_string(),
            category: "rust".to_string(),
            description: "desc".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            read_time: "1 min read".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty_index_has_static_entries() {
        let config = make_config();
        let xml = Sitemap::from_index(&config, &PostIndex::default()).into_xml();

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog/</loc>"));
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn test_sitemap_posts_with_lastmod() {
        let config = make_config();
        let index = PostIndex {
            items: vec![make_post("hello-world", "2024-06-01", &[])],
        };
        let xml = Sitemap::from_index(&config, &index).into_xml();

        assert!(xml.contains("<loc>https://example.com/blog/hello-world/</loc>"));
        assert!(xml.contains("<lastmod>2024-06-01</lastmod>"));
    }

    #[test]
    fn test_sitemap_bad_date_omits_lastmod() {
        let config = make_config();
        let index = PostIndex {
            items: vec![make_post("odd", "Jan 5, 2024", &[])],
        };
        let xml = Sitemap::from_index(&config, &index).into_xml();

        assert!(xml.contains("<loc>https://example.com/blog/odd/</loc>"));
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_sitemap_tag_pages() {
        let config = make_config();
        let index = PostIndex {
            items: vec![
                make_post("a", "2024-06-01", &["rust", "web dev"]),
                make_post("b", "2024-01-01", &["rust"]),
            ],
        };
        let xml = Sitemap::from_index(&config, &index).into_xml();

        // deduplicated tag pages, percent-encoded
        assert_eq!(
            xml.matches("<loc>https://example.com/blog/tag/rust/</loc>")
                .count(),
            1
        );
        assert!(xml.contains("<loc>https://example.com/blog/tag/web%20dev/</loc>"));
        // root + blog + 2 posts + 2 tags
        assert_eq!(xml.matches("<url>").count(), 6);
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let config = make_config();
        let index = PostIndex {
            items: vec![make_post("hello", "2024-06-01", &[])],
        };
        let xml = Sitemap::from_index(&config, &index).into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }
}
