//! `[build]` section configuration.
//!
//! Content and output paths plus the rss/sitemap generator toggles.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in inkpress.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"
/// output = "public"
/// words_per_minute = 180
///
/// [build.rss]
/// enable = true
/// path = "rss.xml"
///
/// [build.sitemap]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (set from CLI, never read from the file)
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Content store directory holding the markdown documents.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Output directory for generated files.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Reading-speed constant used for the derived reading-time estimate.
    #[serde(default = "defaults::build::words_per_minute")]
    #[educe(Default = defaults::build::words_per_minute())]
    pub words_per_minute: u32,

    /// Rss feed generation settings.
    #[serde(default)]
    pub rss: RssConfig,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// `[build.rss]` subsection.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    /// Whether to generate the rss feed on `build`.
    #[serde(default = "defaults::build::enable")]
    #[educe(Default = defaults::build::enable())]
    pub enable: bool,

    /// Feed file path, relative to the output directory.
    #[serde(default = "defaults::build::rss_path")]
    #[educe(Default = defaults::build::rss_path())]
    pub path: PathBuf,
}

/// `[build.sitemap]` subsection.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    /// Whether to generate the sitemap on `build`.
    #[serde(default = "defaults::build::enable")]
    #[educe(Default = defaults::build::enable())]
    pub enable: bool,

    /// Sitemap file path, relative to the output directory.
    #[serde(default = "defaults::build::sitemap_path")]
    #[educe(Default = defaults::build::sitemap_path())]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.words_per_minute, 200);
        assert!(config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("rss.xml"));
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
    }

    #[test]
    fn test_build_config_overrides() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"

            [build]
            content = "posts"
            output = "dist"
            words_per_minute = 180

            [build.rss]
            enable = false

            [build.sitemap]
            path = "sitemap-index.xml"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.content, PathBuf::from("posts"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.words_per_minute, 180);
        assert!(!config.build.rss.enable);
        assert_eq!(
            config.build.sitemap.path,
            PathBuf::from("sitemap-index.xml")
        );
    }

    #[test]
    fn test_build_config_unknown_field() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"

            [build]
            minify = true
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
