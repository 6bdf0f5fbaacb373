//! Tests for team matching, dates, chart links and standings grouping.

use rstest::rstest;

use super::fixtures::{classic, standing};
use crate::hockey::domain::{
    ChartMode, Gameflow, GameflowMetric, HeatmapStyle, ScheduledGame, StandingsView, Strength,
    Visualization, humanize_list, match_teams, parse_date, team_by_tri_code,
};

fn matched(text: &str) -> Vec<&'static str> {
    match_teams(text).iter().map(|team| team.tri_code).collect()
}

#[rstest]
#[case("habs vs TOR", vec!["MTL", "TOR"])]
#[case("leafs", vec!["TOR"])]
#[case("Go Rangers go", vec!["NYR"])]
#[case("OILERS and flames", vec!["CGY", "EDM"])]
#[case("tor", vec!["TOR"])]
#[case("new", vec!["NJD", "NYI", "NYR"])]
#[case("nothing relevant", vec![])]
fn matches_teams_from_free_text(#[case] text: &str, #[case] expected: Vec<&str>) {
    assert_eq!(matched(text), expected);
}

#[rstest]
fn tri_code_lookup_ignores_case() {
    let team = team_by_tri_code("vgk").expect("vegas");
    assert_eq!(team.name, "Vegas Golden Knights");
}

#[rstest]
#[case("2021-03-07", Some((2021, 3, 7)))]
#[case("show me 2021.3.7", Some((2021, 3, 7)))]
#[case("2021 03 07", Some((2021, 3, 7)))]
#[case("1999/12/31", Some((1999, 12, 31)))]
#[case("2021/02/30", None)]
#[case("next tuesday", None)]
fn parses_dates(#[case] text: &str, #[case] expected: Option<(i32, u32, u32)>) {
    let wanted = expected.and_then(|(y, m, d)| chrono::NaiveDate::from_ymd_opt(y, m, d));
    assert_eq!(parse_date(text), wanted);
}

#[rstest]
#[case(vec![], "")]
#[case(vec!["Boston"], "Boston")]
#[case(vec!["Boston", "Toronto"], "Boston and Toronto")]
#[case(vec!["Boston", "Toronto", "Ottawa"], "Boston, Toronto, and Ottawa")]
fn humanizes_lists(#[case] items: Vec<&str>, #[case] expected: &str) {
    assert_eq!(humanize_list(items.as_slice()), expected);
}

#[rstest]
fn game_ids_split_into_season_and_number(classic: ScheduledGame) {
    assert_eq!(classic.season().as_deref(), Some("20202021"));
    assert_eq!(classic.game_number().as_deref(), Some("20474"));
    assert_eq!(
        classic.stats_url().as_deref(),
        Some(
            "https://www.naturalstattrick.com/game.php?season=20202021&game=20474&view=limited#gameflow"
        )
    );
}

#[rstest]
#[case(HeatmapStyle::All, "20202021-20474-all.png")]
#[case(HeatmapStyle::ScoreAdjusted, "20202021-20474-sva.png")]
#[case(HeatmapStyle::HomePowerPlay, "20202021-20474-TOR-5v4.png")]
#[case(HeatmapStyle::AwayPowerPlay, "20202021-20474-MTL-5v4.png")]
fn heatmap_urls_name_style(classic: ScheduledGame, #[case] style: HeatmapStyle, #[case] file: &str) {
    let expected = format!("https://www.naturalstattrick.com/heatmaps/games/20202021/{file}");
    assert_eq!(classic.heatmap_url(style), Some(expected));
}

#[rstest]
fn gameflow_url_names_metric_and_strength(classic: ScheduledGame) {
    let gameflow = Gameflow {
        metric: GameflowMetric::ExpectedGoals,
        strength: Strength::FiveOnFive,
    };
    assert_eq!(
        classic.gameflow_url(gameflow).as_deref(),
        Some("https://www.naturalstattrick.com/graphs/20202021-20474-xgdiff-5v5.png")
    );
}

#[rstest]
fn plain_visualization_has_no_chart(classic: ScheduledGame) {
    assert_eq!(classic.chart_url(&Visualization::default()), None);
}

#[rstest]
fn first_heatmap_press_only_enables() {
    let mut visualization = Visualization::default();
    visualization.press_heatmap();
    assert_eq!(visualization.mode(), ChartMode::Heatmap);
    assert_eq!(visualization.heatmap_label(), "Heatmap all");

    visualization.press_heatmap();
    assert_eq!(visualization.heatmap_label(), "Heatmap ev");
}

#[rstest]
fn heatmap_cycle_wraps_after_away_power_play() {
    let mut style = HeatmapStyle::All;
    let mut seen = Vec::new();
    for _ in 0..6 {
        style = style.next();
        seen.push(style.as_str());
    }
    assert_eq!(seen, ["ev", "5v5", "sva", "home5v4", "away5v4", "all"]);
}

#[rstest]
fn gameflow_flips_metric_after_score_adjusted() {
    let mut visualization = Visualization::default();
    visualization.press_gameflow();
    let labels: Vec<String> = (0..5)
        .map(|_| {
            visualization.press_gameflow();
            visualization.gameflow_label()
        })
        .collect();
    assert_eq!(
        labels,
        [
            "Gameflow Corsi ev",
            "Gameflow Corsi 5v5",
            "Gameflow Corsi sva",
            "Gameflow Expected Goals all",
            "Gameflow Expected Goals ev",
        ]
    );
}

#[rstest]
fn switching_charts_keeps_each_setting() {
    let mut visualization = Visualization::default();
    visualization.press_heatmap();
    visualization.press_heatmap();
    visualization.press_gameflow();
    assert_eq!(visualization.mode(), ChartMode::Gameflow);
    assert_eq!(visualization.heatmap(), HeatmapStyle::EvenStrength);

    visualization.press_heatmap();
    assert_eq!(visualization.mode(), ChartMode::Heatmap);
    assert_eq!(visualization.heatmap(), HeatmapStyle::EvenStrength);
}

#[rstest]
fn conference_view_groups_by_name_in_rank_order() {
    let rows = vec![
        standing("Toronto Maple Leafs", "Eastern", "Atlantic", 3),
        standing("Edmonton Oilers", "Western", "Pacific", 2),
        standing("Boston Bruins", "Eastern", "Atlantic", 1),
    ];
    let groups = StandingsView::Conference.group(&rows);

    let titles: Vec<&str> = groups.iter().map(|group| group.title.as_str()).collect();
    assert_eq!(titles, ["Eastern Conference", "Western Conference"]);
    let eastern: Vec<&str> = groups
        .first()
        .map(|group| group.rows.iter().map(|row| row.team.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(eastern, ["Boston Bruins", "Toronto Maple Leafs"]);
}

#[rstest]
fn team_view_gives_one_page_per_club() {
    let rows = vec![
        standing("Toronto Maple Leafs", "Eastern", "North", 2),
        standing("Edmonton Oilers", "Western", "North", 1),
    ];
    let groups = StandingsView::Team.group(&rows);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups.first().map(|group| group.title.as_str()), Some("Edmonton Oilers"));
    assert_eq!(
        standing("Toronto Maple Leafs", "Eastern", "North", 2).table_line(),
        "2. Toronto Maple Leafs (12-6-2) 26 pts"
    );
}
