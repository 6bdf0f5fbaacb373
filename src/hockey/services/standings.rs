//! Standings pages for each grouping.

use async_trait::async_trait;

use crate::hockey::domain::{Standing, StandingsGroup, StandingsView, team_by_name};
use crate::menu::{
    domain::{Embed, MaxPages, PageView, Renderable, SelectOption},
    ports::{PageSource, PageSourceError, PageSourceResult, SelectProvider},
};

/// Standings split into pages by a [`StandingsView`].
#[derive(Debug, Clone)]
pub struct StandingsSource {
    view: StandingsView,
    groups: Vec<StandingsGroup>,
    options: Vec<SelectOption>,
}

impl StandingsSource {
    /// Groups `rows` for `view`.
    #[must_use]
    pub fn new(rows: &[Standing], view: StandingsView) -> Self {
        let groups = view.group(rows);
        let options = if matches!(view, StandingsView::All) {
            Vec::new()
        } else {
            groups
                .iter()
                .enumerate()
                .map(|(index, group)| SelectOption::new(group.title.clone(), index.to_string()))
                .collect()
        };
        Self {
            view,
            groups,
            options,
        }
    }

    /// Returns the grouping.
    #[must_use]
    pub const fn view(&self) -> StandingsView {
        self.view
    }

    fn team_embed(view: &PageView, row: &Standing) -> Embed {
        let mut embed = Embed::new()
            .with_title(row.team.clone())
            .with_field("Record", row.record(), true)
            .with_field("Points", row.points.to_string(), true)
            .with_field("Games Played", row.games_played.to_string(), true)
            .with_field("Streak", row.streak.clone(), true)
            .with_field("Division", row.division.clone(), true)
            .with_field("Conference", row.conference.clone(), true)
            .with_footer(view.footer());
        if let Some(team) = team_by_name(&row.team) {
            embed = embed.with_colour(team.colour);
        }
        embed
    }

    fn table_embed(view: &PageView, group: &StandingsGroup) -> Embed {
        let lines: Vec<String> = group.rows.iter().map(Standing::table_line).collect();
        Embed::new()
            .with_title(group.title.clone())
            .with_description(lines.join("\n"))
            .with_footer(view.footer())
    }
}

#[async_trait]
impl PageSource for StandingsSource {
    type Page = StandingsGroup;

    fn max_pages(&self) -> MaxPages {
        MaxPages::Known(self.groups.len())
    }

    async fn get_page(&self, index: usize) -> PageSourceResult<StandingsGroup> {
        if self.groups.iter().all(|group| group.rows.is_empty()) {
            return Err(PageSourceError::no_content("No standings are available."));
        }
        self.groups
            .get(index)
            .cloned()
            .ok_or(PageSourceError::OutOfRange { index })
    }

    async fn format_page(
        &self,
        view: &PageView,
        page: StandingsGroup,
    ) -> PageSourceResult<Renderable> {
        let embed = match (self.view, page.rows.as_slice()) {
            (StandingsView::Team, [row]) => Self::team_embed(view, row),
            _ => Self::table_embed(view, &page),
        };
        Ok(Renderable::Embed(embed))
    }

    fn select_provider(&self) -> Option<&dyn SelectProvider> {
        if self.options.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl SelectProvider for StandingsSource {
    fn select_options(&self) -> &[SelectOption] {
        &self.options
    }
}
