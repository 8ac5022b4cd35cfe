//! Default values for configuration fields.
//!
//! Kept as free functions so they can be shared between serde `default`
//! attributes and `educe` struct defaults.

pub mod base {
    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn email() -> String {
        "user@noreply.inkpress".into()
    }

    pub fn url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

pub mod build {
    use std::path::PathBuf;

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    /// Reading-speed constant for the derived reading-time estimate.
    pub fn words_per_minute() -> u32 {
        200
    }

    pub fn rss_path() -> PathBuf {
        "rss.xml".into()
    }

    pub fn sitemap_path() -> PathBuf {
        "sitemap.xml".into()
    }

    pub fn enable() -> bool {
        true
    }
}
