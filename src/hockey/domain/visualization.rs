//! Game chart selection: heatmaps and gameflow graphs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shot heatmap flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatmapStyle {
    /// All situations.
    #[default]
    All,
    /// Even strength.
    EvenStrength,
    /// Five on five.
    FiveOnFive,
    /// Score and venue adjusted.
    ScoreAdjusted,
    /// Home team power play.
    HomePowerPlay,
    /// Away team power play.
    AwayPowerPlay,
}

impl HeatmapStyle {
    /// Returns the chart site's code for the style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::EvenStrength => "ev",
            Self::FiveOnFive => "5v5",
            Self::ScoreAdjusted => "sva",
            Self::HomePowerPlay => "home5v4",
            Self::AwayPowerPlay => "away5v4",
        }
    }

    /// Returns the style after this one in the button cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::EvenStrength,
            Self::EvenStrength => Self::FiveOnFive,
            Self::FiveOnFive => Self::ScoreAdjusted,
            Self::ScoreAdjusted => Self::HomePowerPlay,
            Self::HomePowerPlay => Self::AwayPowerPlay,
            Self::AwayPowerPlay => Self::All,
        }
    }
}

impl fmt::Display for HeatmapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game strength filter for gameflow graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    /// All situations.
    #[default]
    All,
    /// Even strength.
    EvenStrength,
    /// Five on five.
    FiveOnFive,
    /// Score and venue adjusted.
    ScoreAdjusted,
}

impl Strength {
    /// Returns the chart site's code for the strength.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::EvenStrength => "ev",
            Self::FiveOnFive => "5v5",
            Self::ScoreAdjusted => "sva",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Differential plotted by a gameflow graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameflowMetric {
    /// Shot attempt differential.
    #[default]
    Corsi,
    /// Expected goals differential.
    ExpectedGoals,
}

impl GameflowMetric {
    /// Returns the chart site's code for the metric.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Corsi => "cfdiff",
            Self::ExpectedGoals => "xgdiff",
        }
    }

    /// Returns the button label for the metric.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Corsi => "Corsi",
            Self::ExpectedGoals => "Expected Goals",
        }
    }
}

/// Metric and strength of a gameflow graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gameflow {
    /// Plotted differential.
    pub metric: GameflowMetric,
    /// Strength filter.
    pub strength: Strength,
}

impl Gameflow {
    /// Returns the graph after this one in the button cycle: strengths
    /// advance first, and the metric flips after score-adjusted.
    #[must_use]
    pub const fn next(self) -> Self {
        let (metric, strength) = match self.strength {
            Strength::All => (self.metric, Strength::EvenStrength),
            Strength::EvenStrength => (self.metric, Strength::FiveOnFive),
            Strength::FiveOnFive => (self.metric, Strength::ScoreAdjusted),
            Strength::ScoreAdjusted => match self.metric {
                GameflowMetric::Corsi => (GameflowMetric::ExpectedGoals, Strength::All),
                GameflowMetric::ExpectedGoals => (GameflowMetric::Corsi, Strength::All),
            },
        };
        Self { metric, strength }
    }
}

/// Which chart, if any, accompanies each game page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartMode {
    /// No chart.
    #[default]
    Plain,
    /// Shot heatmap.
    Heatmap,
    /// Gameflow graph.
    Gameflow,
}

/// Chart selection for schedule pages.
///
/// Both chart kinds remember their last setting while the other one is
/// shown. The first press of a chart button switches to it unchanged;
/// later presses advance its cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Visualization {
    mode: ChartMode,
    heatmap: HeatmapStyle,
    gameflow: Gameflow,
}

impl Visualization {
    /// Returns the active chart kind.
    #[must_use]
    pub const fn mode(&self) -> ChartMode {
        self.mode
    }

    /// Returns the remembered heatmap style.
    #[must_use]
    pub const fn heatmap(&self) -> HeatmapStyle {
        self.heatmap
    }

    /// Returns the remembered gameflow graph.
    #[must_use]
    pub const fn gameflow(&self) -> Gameflow {
        self.gameflow
    }

    /// Handles a heatmap button press.
    pub const fn press_heatmap(&mut self) {
        if matches!(self.mode, ChartMode::Heatmap) {
            self.heatmap = self.heatmap.next();
        } else {
            self.mode = ChartMode::Heatmap;
        }
    }

    /// Handles a gameflow button press.
    pub const fn press_gameflow(&mut self) {
        if matches!(self.mode, ChartMode::Gameflow) {
            self.gameflow = self.gameflow.next();
        } else {
            self.mode = ChartMode::Gameflow;
        }
    }

    /// Returns the heatmap button label.
    #[must_use]
    pub fn heatmap_label(&self) -> String {
        format!("Heatmap {}", self.heatmap)
    }

    /// Returns the gameflow button label.
    #[must_use]
    pub fn gameflow_label(&self) -> String {
        format!(
            "Gameflow {} {}",
            self.gameflow.metric.label(),
            self.gameflow.strength
        )
    }
}
