//! League team table and free-text team matching.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// One league club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Team {
    /// League team identifier.
    pub id: u32,
    /// Full club name.
    pub name: &'static str,
    /// Three-letter code, e.g. `TOR`.
    pub tri_code: &'static str,
    /// Short names fans use for the club.
    pub nicknames: &'static [&'static str],
    /// Home jersey colour as `0xRRGGBB`.
    pub colour: u32,
}

const fn team(
    id: u32,
    name: &'static str,
    tri_code: &'static str,
    nicknames: &'static [&'static str],
    colour: u32,
) -> Team {
    Team {
        id,
        name,
        tri_code,
        nicknames,
        colour,
    }
}

/// Every club in the league.
pub static TEAMS: [Team; 32] = [
    team(24, "Anaheim Ducks", "ANA", &["Ducks"], 0x00F4_7A38),
    team(53, "Arizona Coyotes", "ARI", &["Yotes"], 0x008C_2633),
    team(6, "Boston Bruins", "BOS", &["Bs"], 0x00FF_B81C),
    team(7, "Buffalo Sabres", "BUF", &["Sabres"], 0x0000_2654),
    team(20, "Calgary Flames", "CGY", &["Flames"], 0x00C8_102E),
    team(12, "Carolina Hurricanes", "CAR", &["Canes"], 0x00CC_0000),
    team(16, "Chicago Blackhawks", "CHI", &["Hawks"], 0x00CF_0A2C),
    team(21, "Colorado Avalanche", "COL", &["Avs"], 0x006F_263D),
    team(29, "Columbus Blue Jackets", "CBJ", &["Jackets"], 0x0000_2654),
    team(25, "Dallas Stars", "DAL", &["Stars"], 0x0000_6847),
    team(17, "Detroit Red Wings", "DET", &["Wings"], 0x00CE_1126),
    team(22, "Edmonton Oilers", "EDM", &["Oilers"], 0x0004_1E42),
    team(13, "Florida Panthers", "FLA", &["Cats"], 0x00C8_102E),
    team(26, "Los Angeles Kings", "LAK", &["Kings"], 0x0011_1111),
    team(30, "Minnesota Wild", "MIN", &["Wild"], 0x0015_4734),
    team(8, "Montréal Canadiens", "MTL", &["Habs"], 0x00AF_1E2D),
    team(18, "Nashville Predators", "NSH", &["Preds"], 0x00FF_B81C),
    team(1, "New Jersey Devils", "NJD", &["Devils"], 0x00CE_1126),
    team(2, "New York Islanders", "NYI", &["Isles"], 0x0000_539B),
    team(3, "New York Rangers", "NYR", &["Blueshirts"], 0x0000_38A8),
    team(9, "Ottawa Senators", "OTT", &["Sens"], 0x00C5_2032),
    team(4, "Philadelphia Flyers", "PHI", &["Flyers"], 0x00F7_4902),
    team(5, "Pittsburgh Penguins", "PIT", &["Pens"], 0x00FC_B514),
    team(28, "San Jose Sharks", "SJS", &["Sharks"], 0x0000_6D75),
    team(55, "Seattle Kraken", "SEA", &["Kraken"], 0x0000_1628),
    team(19, "St. Louis Blues", "STL", &["Blues"], 0x0000_2F87),
    team(14, "Tampa Bay Lightning", "TBL", &["Bolts"], 0x0000_2868),
    team(10, "Toronto Maple Leafs", "TOR", &["Leafs"], 0x0000_205B),
    team(23, "Vancouver Canucks", "VAN", &["Nucks"], 0x0000_205B),
    team(54, "Vegas Golden Knights", "VGK", &["Knights"], 0x00B4_975A),
    team(15, "Washington Capitals", "WSH", &["Caps"], 0x00C8_102E),
    team(52, "Winnipeg Jets", "WPG", &["Jets"], 0x0004_1E42),
];

/// Looks a club up by its full name.
#[must_use]
pub fn team_by_name(name: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|team| team.name == name)
}

/// Looks a club up by its three-letter code, ignoring case.
#[must_use]
pub fn team_by_tri_code(tri_code: &str) -> Option<&'static Team> {
    TEAMS
        .iter()
        .find(|team| team.tri_code.eq_ignore_ascii_case(tri_code))
}

static TEAM_PATTERNS: LazyLock<Vec<(&'static Team, Regex)>> = LazyLock::new(|| {
    TEAMS
        .iter()
        .filter_map(|team| match Regex::new(&team_pattern(team)) {
            Ok(pattern) => Some((team, pattern)),
            Err(err) => {
                tracing::warn!(team = team.name, error = %err, "team pattern failed to compile");
                None
            }
        })
        .collect()
});

fn team_pattern(team: &Team) -> String {
    let alternatives: Vec<String> = std::iter::once(team.tri_code)
        .chain(team.name.split_whitespace())
        .chain(team.nicknames.iter().copied())
        .map(|word| format!(r"\b{}\b", regex::escape(word)))
        .collect();
    format!("(?i){}", alternatives.join("|"))
}

/// Finds every club mentioned in free text.
///
/// Each whitespace-separated word is matched against club codes, the
/// words of club names and nicknames, ignoring case. Clubs are returned
/// in table order without duplicates.
///
/// # Examples
///
/// ```
/// use cog_menus::hockey::domain::match_teams;
///
/// let names: Vec<&str> = match_teams("habs vs TOR").iter().map(|team| team.name).collect();
/// assert_eq!(names, ["Montréal Canadiens", "Toronto Maple Leafs"]);
/// ```
#[must_use]
pub fn match_teams(text: &str) -> Vec<&'static Team> {
    let words: Vec<&str> = text.split_whitespace().collect();
    TEAM_PATTERNS
        .iter()
        .filter(|(_, pattern)| words.iter().any(|word| pattern.is_match(word)))
        .map(|(team, _)| *team)
        .collect()
}
