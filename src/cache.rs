//! Single-slot page cache
//!
//! Owns the most recently fetched page and serves the two derived views,
//! fetching at most once per distinct URL in immediate succession. The slot
//! is overwritten wholesale on each fetch; a failed fetch leaves it
//! untouched.

use tracing::{debug, info};

use crate::config::PageCacheConfig;
use crate::error::FetchError;
use crate::extract::{extract_page, truncate_chars};
use crate::fetcher::PageFetcher;

/// Cached record of the most recently fetched page
#[derive(Debug, Clone)]
struct CachedPage {
    url: String,
    title: String,
    content: String,
    links: Vec<String>,
}

/// Single-slot cache over a page fetcher
///
/// Owned by the caller; both read operations take `&mut self` so the slot
/// cannot be observed mid-update.
pub struct PageCache {
    fetcher: PageFetcher,
    max_chars: usize,
    slot: Option<CachedPage>,
}

impl PageCache {
    /// Create an empty cache with the given configuration
    pub fn new(config: PageCacheConfig) -> Result<Self, FetchError> {
        let fetcher = PageFetcher::new(&config)?;
        Ok(Self {
            fetcher,
            max_chars: config.max_chars,
            slot: None,
        })
    }

    /// Title and visible text of the page, truncated to the configured limit
    ///
    /// Returns `title + "\n\n" + content` cut to at most `max_chars`
    /// characters. Fetches only when the slot is empty or holds a different
    /// URL; repeated calls for the same URL are served from the slot.
    pub async fn fetch_text(&mut self, url: &str) -> Result<String, FetchError> {
        let max_chars = self.max_chars;
        let page = self.page(url).await?;
        let text = format!("{}\n\n{}", page.title, page.content);
        Ok(truncate_chars(&text, max_chars))
    }

    /// Raw `href` values of all anchors on the page, in document order
    ///
    /// Duplicates are preserved; relative URLs are not resolved. Cache
    /// behavior is identical to [`fetch_text`](Self::fetch_text).
    pub async fn fetch_links(&mut self, url: &str) -> Result<Vec<String>, FetchError> {
        Ok(self.page(url).await?.links.clone())
    }

    /// URL currently held in the cache slot, if any
    pub fn last_url(&self) -> Option<&str> {
        self.slot.as_ref().map(|page| page.url.as_str())
    }

    /// Return the cached page for `url`, fetching and repopulating the slot
    /// on a miss. The slot is only written after a successful fetch.
    async fn page(&mut self, url: &str) -> Result<&CachedPage, FetchError> {
        let hit = self.slot.as_ref().is_some_and(|page| page.url == url);
        if hit {
            debug!("page cache hit for: {}", url);
        } else {
            let body = self.fetcher.fetch(url).await?;
            let extracted = extract_page(&body);
            info!(
                "cached {} ({} bytes of text, {} links)",
                url,
                extracted.content.len(),
                extracted.links.len()
            );
            self.slot = Some(CachedPage {
                url: url.to_string(),
                title: extracted.title,
                content: extracted.content,
                links: extracted.links,
            });
        }
        Ok(self.slot.as_ref().expect("slot populated on miss"))
    }
}
