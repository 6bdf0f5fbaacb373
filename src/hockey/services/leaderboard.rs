//! Pick'ems leaderboard pages.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::menu::{
    domain::{Embed, MaxPages, PageView, Renderable},
    ports::{PageSource, PageSourceError, PageSourceResult},
};

/// Lines per leaderboard page when the caller does not choose.
pub const DEFAULT_LINES_PER_PAGE: usize = 10;

/// Where a leaderboard is shown and which one it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardHeader {
    /// Guild display name.
    pub guild_name: String,
    /// Guild icon URL.
    pub guild_icon: Option<String>,
    /// Leaderboard kind, e.g. `Season` or `Weekly`.
    pub style: String,
    /// When the standings were computed.
    pub generated_at: DateTime<Utc>,
}

/// Pre-ranked leaderboard lines chunked into pages.
#[derive(Debug, Clone)]
pub struct LeaderboardSource {
    header: LeaderboardHeader,
    pages: Vec<Vec<String>>,
}

impl LeaderboardSource {
    /// Chunks `lines` into pages of at most `per_page` entries.
    #[must_use]
    pub fn new(header: LeaderboardHeader, lines: &[String], per_page: usize) -> Self {
        let pages = lines
            .chunks(per_page.max(1))
            .map(<[String]>::to_vec)
            .collect();
        Self { header, pages }
    }
}

#[async_trait]
impl PageSource for LeaderboardSource {
    type Page = Vec<String>;

    fn max_pages(&self) -> MaxPages {
        MaxPages::Known(self.pages.len())
    }

    async fn get_page(&self, index: usize) -> PageSourceResult<Vec<String>> {
        if self.pages.is_empty() {
            return Err(PageSourceError::no_content(format!(
                "There is no {} leaderboard yet.",
                self.header.style
            )));
        }
        self.pages
            .get(index)
            .cloned()
            .ok_or(PageSourceError::OutOfRange { index })
    }

    async fn format_page(
        &self,
        view: &PageView,
        page: Vec<String>,
    ) -> PageSourceResult<Renderable> {
        let mut embed = Embed::new()
            .with_author(
                format!(
                    "{} Pickems {} Leaderboard",
                    self.header.guild_name, self.header.style
                ),
                self.header.guild_icon.clone(),
            )
            .with_description(page.join("\n"))
            .with_footer(view.footer())
            .with_timestamp(self.header.generated_at);
        if let Some(icon) = &self.header.guild_icon {
            embed = embed.with_thumbnail(icon.clone());
        }
        Ok(Renderable::Embed(embed))
    }
}
