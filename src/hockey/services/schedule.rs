//! Schedule pages: one game per page over a week-long search window.

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use serde_json::json;
use std::sync::Arc;

use crate::hockey::{
    domain::{GameStatus, ScheduledGame, Visualization, humanize_list, team_by_name},
    ports::ScheduleFeed,
};
use crate::menu::{
    domain::{Embed, MaxPages, PageView, Renderable, SelectOption},
    ports::{PageSource, PageSourceError, PageSourceResult, SelectProvider},
    services::render_text,
};

/// Days searched from the anchor date, inclusive of the anchor.
const SEARCH_DAYS: u64 = 7;

const NO_SCHEDULE_TEMPLATE: &str = "No schedule could be found \
{% if teams %}for {{ teams }} {% endif %}in dates between {{ from }} and {{ to }}";

/// Games around an anchor date, optionally filtered to some clubs.
///
/// The game list is fetched by [`PageSource::prepare`], so changing the
/// filters only takes effect once the session prepares the source again.
pub struct ScheduleSource<F> {
    feed: Arc<F>,
    anchor: NaiveDate,
    teams: Vec<String>,
    visualization: Visualization,
    games: Vec<ScheduledGame>,
    options: Vec<SelectOption>,
    last_searched: Option<(NaiveDate, NaiveDate)>,
}

impl<F> ScheduleSource<F>
where
    F: ScheduleFeed,
{
    /// Creates a source searching the week starting at `anchor`.
    #[must_use]
    pub fn new(feed: Arc<F>, anchor: NaiveDate) -> Self {
        Self {
            feed,
            anchor,
            teams: Vec::new(),
            visualization: Visualization::default(),
            games: Vec::new(),
            options: Vec::new(),
            last_searched: None,
        }
    }

    /// Restricts the search to games involving these club names.
    #[must_use]
    pub fn with_teams(mut self, teams: Vec<String>) -> Self {
        self.teams = teams;
        self
    }

    /// Returns the club names being searched; empty means every club.
    #[must_use]
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Replaces the club filter. Takes effect on the next prepare.
    pub fn set_teams(&mut self, teams: Vec<String>) {
        self.teams = teams;
    }

    /// Returns the first searched day.
    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Moves the search window. Takes effect on the next prepare.
    pub const fn set_anchor(&mut self, anchor: NaiveDate) {
        self.anchor = anchor;
    }

    /// Moves the search window one window later. Takes effect on the next
    /// prepare.
    pub fn skip_forward(&mut self) {
        if let Some(anchor) = self.anchor.checked_add_days(Days::new(SEARCH_DAYS)) {
            self.anchor = anchor;
        }
    }

    /// Moves the search window one window earlier. Takes effect on the
    /// next prepare.
    pub fn skip_back(&mut self) {
        if let Some(anchor) = self.anchor.checked_sub_days(Days::new(SEARCH_DAYS)) {
            self.anchor = anchor;
        }
    }

    /// Returns the chart selection.
    #[must_use]
    pub const fn visualization(&self) -> &Visualization {
        &self.visualization
    }

    /// Returns the chart selection for modification.
    pub const fn visualization_mut(&mut self) -> &mut Visualization {
        &mut self.visualization
    }

    /// Returns the games found by the last prepare.
    #[must_use]
    pub fn games(&self) -> &[ScheduledGame] {
        &self.games
    }

    /// Returns the window searched by the last prepare.
    #[must_use]
    pub const fn last_searched(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.last_searched
    }

    fn window(&self) -> (NaiveDate, NaiveDate) {
        let last = self
            .anchor
            .checked_add_days(Days::new(SEARCH_DAYS.saturating_sub(1)))
            .unwrap_or(self.anchor);
        (self.anchor, last)
    }

    /// Explains an empty search for the current filters.
    #[must_use]
    pub fn no_schedule_message(&self) -> String {
        let (from, to) = self.last_searched.unwrap_or_else(|| self.window());
        let teams = if self.teams.is_empty() {
            String::new()
        } else {
            humanize_list(self.teams.as_slice())
        };
        let context = json!({
            "teams": teams,
            "from": from.to_string(),
            "to": to.to_string(),
        });
        render_text(NO_SCHEDULE_TEMPLATE, context).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "no schedule template failed to render");
            format!("No schedule could be found in dates between {from} and {to}")
        })
    }

    fn game_embed(&self, view: &PageView, game: &ScheduledGame) -> Embed {
        let mut embed = Embed::new()
            .with_author(format!("{} {}", game.matchup(), game.status), None)
            .with_timestamp(game.start)
            .with_footer(view.footer());
        if let Some(home) = team_by_name(&game.home_team) {
            embed = embed.with_colour(home.colour);
        }
        if let Some(url) = game.stats_url() {
            embed = embed
                .with_description(format!("[Natural Stat Trick]({url})"))
                .with_url(url);
        }
        embed = match game.status {
            GameStatus::Preview => embed
                .with_field("Puck Drop", game.start.format("%Y-%m-%d %H:%M UTC").to_string(), true)
                .with_field("Game Type", game.game_type.as_str(), true),
            GameStatus::Live | GameStatus::Final => embed
                .with_field(
                    &game.away_team,
                    format!("Goals: **{}**\nShots: **{}**", game.away_score, game.away_shots),
                    true,
                )
                .with_field(
                    &game.home_team,
                    format!("Goals: **{}**\nShots: **{}**", game.home_score, game.home_shots),
                    true,
                ),
        };
        if let Some(url) = game.chart_url(&self.visualization) {
            embed = embed.with_image(url);
        }
        embed
    }
}

fn game_option(game: &ScheduledGame) -> SelectOption {
    SelectOption::new(game.matchup(), game.game_id.to_string()).with_description(format!(
        "{} {}",
        game.start.format("%Y-%m-%d"),
        game.status
    ))
}

#[async_trait]
impl<F> PageSource for ScheduleSource<F>
where
    F: ScheduleFeed,
{
    type Page = ScheduledGame;

    async fn prepare(&mut self) -> PageSourceResult<()> {
        let (from, to) = self.window();
        self.last_searched = Some((from, to));
        let games = self
            .feed
            .games(from, to, &self.teams)
            .await
            .map_err(PageSourceError::transport)?;
        tracing::debug!(
            from = %from,
            to = %to,
            teams = self.teams.len(),
            games = games.len(),
            "schedule prepared"
        );
        self.options = games.iter().map(game_option).collect();
        self.games = games;
        if self.games.is_empty() {
            return Err(PageSourceError::no_content(self.no_schedule_message()));
        }
        Ok(())
    }

    fn max_pages(&self) -> MaxPages {
        MaxPages::Known(self.games.len())
    }

    async fn get_page(&self, index: usize) -> PageSourceResult<ScheduledGame> {
        if self.games.is_empty() {
            return Err(PageSourceError::no_content(self.no_schedule_message()));
        }
        self.games
            .get(index)
            .cloned()
            .ok_or(PageSourceError::OutOfRange { index })
    }

    async fn format_page(
        &self,
        view: &PageView,
        page: ScheduledGame,
    ) -> PageSourceResult<Renderable> {
        Ok(Renderable::Embed(self.game_embed(view, &page)))
    }

    fn select_provider(&self) -> Option<&dyn SelectProvider> {
        Some(self)
    }
}

impl<F> SelectProvider for ScheduleSource<F>
where
    F: ScheduleFeed,
{
    fn select_options(&self) -> &[SelectOption] {
        &self.options
    }

    fn page_for_value(&self, value: &str) -> Option<usize> {
        let game_id: u64 = value.parse().ok()?;
        self.games.iter().position(|game| game.game_id == game_id)
    }

    fn placeholder(&self) -> Option<String> {
        Some("Pick a game".to_owned())
    }
}
