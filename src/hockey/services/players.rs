//! Player pages fetched one profile at a time.

use async_trait::async_trait;
use std::sync::Arc;

use crate::hockey::{
    domain::{PlayerProfile, team_by_name},
    ports::{FeedError, PlayerDirectory},
};
use crate::menu::{
    domain::{Embed, MaxPages, PageView, Renderable, SelectOption},
    ports::{PageSource, PageSourceError, PageSourceResult, SelectProvider},
};

/// One page per player id; profiles are fetched when a page is shown.
pub struct PlayerSource<D> {
    directory: Arc<D>,
    season: String,
    ids: Vec<u64>,
    options: Vec<SelectOption>,
}

impl<D> PlayerSource<D>
where
    D: PlayerDirectory,
{
    /// Creates a source over `(id, full name)` pairs for one season.
    #[must_use]
    pub fn new(directory: Arc<D>, season: impl Into<String>, players: &[(u64, String)]) -> Self {
        let options = players
            .iter()
            .enumerate()
            .map(|(index, (id, name))| {
                SelectOption::new(format!("Page {}", index.saturating_add(1)), id.to_string())
                    .with_description(name)
            })
            .collect();
        Self {
            directory,
            season: season.into(),
            ids: players.iter().map(|(id, _)| *id).collect(),
            options,
        }
    }

    /// Returns the season shown.
    #[must_use]
    pub fn season(&self) -> &str {
        &self.season
    }
}

fn profile_embed(view: &PageView, profile: &PlayerProfile) -> Embed {
    let player = &profile.player;
    let mut line = Vec::new();
    if let Some(number) = player.number {
        line.push(format!("#{number}"));
    }
    line.push(player.position.clone());
    if let Some(team) = &player.team {
        line.push(team.clone());
    }
    let mut embed = Embed::new()
        .with_title(player.full_name.clone())
        .with_description(line.join(" "))
        .with_footer(view.footer());
    if let Some(team) = player.team.as_deref().and_then(team_by_name) {
        embed = embed.with_colour(team.colour);
    }
    let Some(stats) = profile.stats else {
        return embed.with_field(
            "Season",
            format!("No stats recorded for {}", profile.season),
            false,
        );
    };
    embed
        .with_field("Season", profile.season.clone(), false)
        .with_field("Games", stats.games.to_string(), true)
        .with_field("Goals", stats.goals.to_string(), true)
        .with_field("Assists", stats.assists.to_string(), true)
        .with_field("Points", stats.points().to_string(), true)
        .with_field("+/-", stats.plus_minus.to_string(), true)
        .with_field("PIM", stats.penalty_minutes.to_string(), true)
}

#[async_trait]
impl<D> PageSource for PlayerSource<D>
where
    D: PlayerDirectory,
{
    type Page = u64;

    fn max_pages(&self) -> MaxPages {
        MaxPages::Known(self.ids.len())
    }

    async fn get_page(&self, index: usize) -> PageSourceResult<u64> {
        self.ids
            .get(index)
            .copied()
            .ok_or(PageSourceError::OutOfRange { index })
    }

    async fn format_page(&self, view: &PageView, page: u64) -> PageSourceResult<Renderable> {
        let profile = self
            .directory
            .player(page, &self.season)
            .await
            .map_err(|err| match err {
                FeedError::NotFound(what) => {
                    PageSourceError::no_content(format!("No information found for {what}."))
                }
                FeedError::Transport(inner) => PageSourceError::Transport(inner),
            })?;
        Ok(Renderable::Embed(profile_embed(view, &profile)))
    }

    fn select_provider(&self) -> Option<&dyn SelectProvider> {
        Some(self)
    }
}

impl<D> SelectProvider for PlayerSource<D>
where
    D: PlayerDirectory,
{
    fn select_options(&self) -> &[SelectOption] {
        &self.options
    }

    fn page_for_value(&self, value: &str) -> Option<usize> {
        let id: u64 = value.parse().ok()?;
        self.ids.iter().position(|candidate| *candidate == id)
    }

    fn placeholder(&self) -> Option<String> {
        Some("Pick a player".to_owned())
    }
}
