//! League standings rows and the groupings menus page through.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One club's line in the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Club name.
    pub team: String,
    /// Conference name.
    pub conference: String,
    /// Division name.
    pub division: String,
    /// Games played.
    pub games_played: u32,
    /// Regulation and overtime wins.
    pub wins: u32,
    /// Regulation losses.
    pub losses: u32,
    /// Overtime and shootout losses.
    pub ot_losses: u32,
    /// Standings points.
    pub points: u32,
    /// League-wide rank.
    pub league_rank: u32,
    /// Current streak, e.g. `W3`.
    pub streak: String,
}

impl Standing {
    /// Returns the `W-L-OT` record.
    #[must_use]
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.ot_losses)
    }

    /// Returns the one-line table entry used on grouped pages.
    #[must_use]
    pub fn table_line(&self) -> String {
        format!(
            "{}. {} ({}) {} pts",
            self.league_rank,
            self.team,
            self.record(),
            self.points
        )
    }
}

/// How standings are split across pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandingsView {
    /// The whole league on one page.
    #[default]
    All,
    /// One page per conference.
    Conference,
    /// One page per division.
    Division,
    /// One page per club.
    Team,
}

/// A titled page of standings rows, sorted by league rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsGroup {
    /// Page heading.
    pub title: String,
    /// Rows in rank order.
    pub rows: Vec<Standing>,
}

impl StandingsView {
    /// Splits `rows` into pages for this view.
    ///
    /// Grouped views order pages by group name so the page order is stable
    /// across refreshes.
    #[must_use]
    pub fn group(self, rows: &[Standing]) -> Vec<StandingsGroup> {
        let mut sorted = rows.to_vec();
        sorted.sort_by_key(|row| row.league_rank);
        match self {
            Self::All => vec![StandingsGroup {
                title: "League Standings".to_owned(),
                rows: sorted,
            }],
            Self::Conference => grouped(sorted, |row| format!("{} Conference", row.conference)),
            Self::Division => grouped(sorted, |row| format!("{} Division", row.division)),
            Self::Team => sorted
                .into_iter()
                .map(|row| StandingsGroup {
                    title: row.team.clone(),
                    rows: vec![row],
                })
                .collect(),
        }
    }
}

fn grouped(rows: Vec<Standing>, key: impl Fn(&Standing) -> String) -> Vec<StandingsGroup> {
    let mut groups: BTreeMap<String, Vec<Standing>> = BTreeMap::new();
    for row in rows {
        groups.entry(key(&row)).or_default().push(row);
    }
    groups
        .into_iter()
        .map(|(title, group_rows)| StandingsGroup {
            title,
            rows: group_rows,
        })
        .collect()
}
