//! Page source port: where menu pages come from.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::menu::domain::{MaxPages, PageView, Renderable, SelectOption};

/// Result type for page source operations.
pub type PageSourceResult<T> = Result<T, PageSourceError>;

/// Lazily evaluated, optionally filterable sequence of pages.
///
/// A source is owned by exactly one session. Filter state may only be
/// mutated from inside a custom control activation, after which the
/// session calls [`PageSource::prepare`] before showing the first page.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Opaque page key handed from [`PageSource::get_page`] to
    /// [`PageSource::format_page`].
    type Page: Send + Sync;

    /// Rebuilds the item list from the current filter state.
    ///
    /// # Errors
    ///
    /// Returns [`PageSourceError::NoContent`] when the filters match
    /// nothing.
    async fn prepare(&mut self) -> PageSourceResult<()> {
        Ok(())
    }

    /// Returns the page count, or [`MaxPages::Unknown`] for sources that
    /// cannot bound themselves cheaply.
    fn max_pages(&self) -> MaxPages;

    /// Fetches the page at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PageSourceError::OutOfRange`] when `index` addresses no
    /// page, or [`PageSourceError::NoContent`] when the page is empty.
    async fn get_page(&self, index: usize) -> PageSourceResult<Self::Page>;

    /// Turns a fetched page into message content.
    ///
    /// # Errors
    ///
    /// Returns a [`PageSourceError`] when formatting needs data that could
    /// not be obtained.
    async fn format_page(&self, view: &PageView, page: Self::Page)
    -> PageSourceResult<Renderable>;

    /// Returns the jump-to-page capability, when the source offers one.
    fn select_provider(&self) -> Option<&dyn SelectProvider> {
        None
    }
}

/// Optional capability of a [`PageSource`]: a dropdown listing its items.
pub trait SelectProvider: Send + Sync {
    /// Returns every option in page order. The session shows a window of
    /// at most 25 of them.
    fn select_options(&self) -> &[SelectOption];

    /// Maps a picked option value to a page index.
    ///
    /// The default treats the value as the page index itself.
    fn page_for_value(&self, value: &str) -> Option<usize> {
        value.parse().ok()
    }

    /// Returns the dropdown placeholder text.
    fn placeholder(&self) -> Option<String> {
        None
    }
}

/// Errors raised by page sources.
#[derive(Debug, Clone, Error)]
pub enum PageSourceError {
    /// The requested index addresses no page.
    #[error("page {index} is out of range")]
    OutOfRange {
        /// Requested index.
        index: usize,
    },

    /// The source has nothing to show for the current filters.
    #[error("no content: {reason}")]
    NoContent {
        /// Human-readable explanation rendered in place of the page.
        reason: String,
    },

    /// Fetching data for the page failed.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl PageSourceError {
    /// Creates a no-content error with the given explanation.
    pub fn no_content(reason: impl Into<String>) -> Self {
        Self::NoContent {
            reason: reason.into(),
        }
    }

    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
