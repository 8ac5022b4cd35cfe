//! Output generators consuming the post index.

pub mod rss;
pub mod sitemap;
