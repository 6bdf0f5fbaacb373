//! Pages over embeds built ahead of time.

use async_trait::async_trait;

use crate::menu::{
    domain::{Embed, MaxPages, PageView, Renderable, SelectOption},
    ports::{PageSource, PageSourceError, PageSourceResult, SelectProvider},
};

/// One pre-built embed per page. The footer is stamped with the page
/// position when shown.
#[derive(Debug, Clone)]
pub struct EmbedPages {
    embeds: Vec<Embed>,
    options: Vec<SelectOption>,
}

impl EmbedPages {
    /// Creates pages over `embeds`, offering a `Page N` dropdown described
    /// by each embed's title.
    #[must_use]
    pub fn new(embeds: Vec<Embed>) -> Self {
        let options = embeds
            .iter()
            .enumerate()
            .map(|(index, embed)| {
                let mut option = SelectOption::for_page(index);
                if let Some(title) = embed.title.as_deref() {
                    option = option.with_description(title);
                }
                option
            })
            .collect();
        Self { embeds, options }
    }
}

#[async_trait]
impl PageSource for EmbedPages {
    type Page = Embed;

    fn max_pages(&self) -> MaxPages {
        MaxPages::Known(self.embeds.len())
    }

    async fn get_page(&self, index: usize) -> PageSourceResult<Embed> {
        self.embeds
            .get(index)
            .cloned()
            .ok_or(PageSourceError::OutOfRange { index })
    }

    async fn format_page(&self, view: &PageView, mut page: Embed) -> PageSourceResult<Renderable> {
        page.set_footer(view.footer());
        Ok(Renderable::Embed(page))
    }

    fn select_provider(&self) -> Option<&dyn SelectProvider> {
        Some(self)
    }
}

impl SelectProvider for EmbedPages {
    fn select_options(&self) -> &[SelectOption] {
        &self.options
    }
}
