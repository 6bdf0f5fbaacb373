//! Page source over a fixed, pre-built list.

use async_trait::async_trait;
use std::sync::Arc;

use crate::menu::{
    domain::{MaxPages, PageView, Renderable, SelectOption},
    ports::{PageSource, PageSourceError, PageSourceResult, SelectProvider},
};

/// Formatter turning one list item into message content.
pub type PageFormatter<T> = Arc<dyn Fn(&PageView, &T) -> Renderable + Send + Sync>;

/// One page per list item, with an optional jump-to-page dropdown.
pub struct ListPageSource<T> {
    items: Vec<T>,
    formatter: PageFormatter<T>,
    options: Option<Vec<SelectOption>>,
    placeholder: Option<String>,
}

impl<T> ListPageSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a source over `items` rendered by `formatter`.
    #[must_use]
    pub fn new(
        items: Vec<T>,
        formatter: impl Fn(&PageView, &T) -> Renderable + Send + Sync + 'static,
    ) -> Self {
        Self {
            items,
            formatter: Arc::new(formatter),
            options: None,
            placeholder: None,
        }
    }

    /// Adds a dropdown with one `Page N` option per item.
    #[must_use]
    pub fn with_page_options(mut self) -> Self {
        self.options = Some((0..self.items.len()).map(SelectOption::for_page).collect());
        self
    }

    /// Adds a dropdown with caller-supplied options.
    #[must_use]
    pub fn with_select_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the dropdown placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Returns the items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl ListPageSource<String> {
    /// Creates a plain-text source, one line of content per page.
    #[must_use]
    pub fn lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self::new(lines.into_iter().map(Into::into).collect(), |_, line| {
            Renderable::text(line.clone())
        })
    }
}

#[async_trait]
impl<T> PageSource for ListPageSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Page = T;

    fn max_pages(&self) -> MaxPages {
        MaxPages::Known(self.items.len())
    }

    async fn get_page(&self, index: usize) -> PageSourceResult<T> {
        self.items
            .get(index)
            .cloned()
            .ok_or(PageSourceError::OutOfRange { index })
    }

    async fn format_page(&self, view: &PageView, page: T) -> PageSourceResult<Renderable> {
        Ok((self.formatter)(view, &page))
    }

    fn select_provider(&self) -> Option<&dyn SelectProvider> {
        self.options
            .as_ref()
            .map(|_| self as &dyn SelectProvider)
    }
}

impl<T> SelectProvider for ListPageSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn select_options(&self) -> &[SelectOption] {
        self.options.as_deref().unwrap_or_default()
    }

    fn placeholder(&self) -> Option<String> {
        self.placeholder.clone()
    }
}
