//! Single-slot web page cache
//!
//! Fetches a page once, derives its title, visible text, and links at parse
//! time, and serves repeated reads from the cached views. Intended as a
//! helper for feeding page content to an LLM.
//!
//! ## Architecture
//!
//! ```text
//! URL → PageFetcher → HTML → extract_page → title / text / links
//!                                                 ↓
//!                                       PageCache slot (last URL only)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut cache = PageCache::new(PageCacheConfig::default())?;
//! let text = cache.fetch_text("https://example.com").await?;
//! let links = cache.fetch_links("https://example.com").await?;
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;

pub use cache::PageCache;
pub use config::PageCacheConfig;
pub use error::FetchError;
pub use extract::{extract_page, truncate_chars, ExtractedPage, NO_BODY_CONTENT, NO_TITLE};
pub use fetcher::PageFetcher;
