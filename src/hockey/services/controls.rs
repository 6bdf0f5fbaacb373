//! Schedule controls: club and date filters, week skipping, and chart
//! cycling.

use async_trait::async_trait;

use crate::hockey::{
    domain::{match_teams, parse_date},
    ports::ScheduleFeed,
    services::ScheduleSource,
};
use crate::menu::{
    domain::Button,
    ports::{ControlOutcome, CustomControl, FollowUpPrompt},
};

/// Asks for club names and filters the schedule to the clubs mentioned.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickTeamControl;

#[async_trait]
impl<F> CustomControl<ScheduleSource<F>> for PickTeamControl
where
    F: ScheduleFeed,
{
    fn id(&self) -> &str {
        "pick_team"
    }

    fn button(&self, _source: &ScheduleSource<F>) -> Button {
        Button::custom("pick_team", "Pick Team")
    }

    async fn activate(
        &self,
        source: &mut ScheduleSource<F>,
        prompt: &dyn FollowUpPrompt,
    ) -> ControlOutcome {
        let Some(reply) = prompt
            .ask("Enter the team you would like to filter for.")
            .await
        else {
            return ControlOutcome::Unchanged;
        };
        let teams: Vec<String> = match_teams(&reply)
            .into_iter()
            .map(|team| team.name.to_owned())
            .collect();
        if teams.is_empty() {
            tracing::debug!(reply = %reply, "reply named no known club");
            return ControlOutcome::Unchanged;
        }
        source.set_teams(teams);
        ControlOutcome::Refiltered
    }
}

/// Asks for a date and moves the schedule search window to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickDateControl;

#[async_trait]
impl<F> CustomControl<ScheduleSource<F>> for PickDateControl
where
    F: ScheduleFeed,
{
    fn id(&self) -> &str {
        "pick_date"
    }

    fn button(&self, _source: &ScheduleSource<F>) -> Button {
        Button::custom("pick_date", "Change Date")
    }

    async fn activate(
        &self,
        source: &mut ScheduleSource<F>,
        prompt: &dyn FollowUpPrompt,
    ) -> ControlOutcome {
        let Some(reply) = prompt
            .ask("Enter the date you would like to see `YYYY-MM-DD` format is accepted.")
            .await
        else {
            return ControlOutcome::Unchanged;
        };
        let Some(anchor) = parse_date(&reply) else {
            tracing::debug!(reply = %reply, "reply held no date");
            return ControlOutcome::Unchanged;
        };
        source.set_anchor(anchor);
        ControlOutcome::Refiltered
    }
}

/// Jumps the schedule to the previous search window.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipBackControl;

#[async_trait]
impl<F> CustomControl<ScheduleSource<F>> for SkipBackControl
where
    F: ScheduleFeed,
{
    fn id(&self) -> &str {
        "skip_back"
    }

    fn button(&self, _source: &ScheduleSource<F>) -> Button {
        Button::custom("skip_back", "Previous Week").with_emoji("\u{23ee}\u{fe0f}")
    }

    async fn activate(
        &self,
        source: &mut ScheduleSource<F>,
        _prompt: &dyn FollowUpPrompt,
    ) -> ControlOutcome {
        source.skip_back();
        ControlOutcome::Refiltered
    }
}

/// Jumps the schedule to the next search window.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipForwardControl;

#[async_trait]
impl<F> CustomControl<ScheduleSource<F>> for SkipForwardControl
where
    F: ScheduleFeed,
{
    fn id(&self) -> &str {
        "skip_forward"
    }

    fn button(&self, _source: &ScheduleSource<F>) -> Button {
        Button::custom("skip_forward", "Next Week").with_emoji("\u{23ed}\u{fe0f}")
    }

    async fn activate(
        &self,
        source: &mut ScheduleSource<F>,
        _prompt: &dyn FollowUpPrompt,
    ) -> ControlOutcome {
        source.skip_forward();
        ControlOutcome::Refiltered
    }
}

/// Shows shot heatmaps, cycling the style on repeated presses.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeatmapControl;

#[async_trait]
impl<F> CustomControl<ScheduleSource<F>> for HeatmapControl
where
    F: ScheduleFeed,
{
    fn id(&self) -> &str {
        "heatmap"
    }

    fn button(&self, source: &ScheduleSource<F>) -> Button {
        Button::custom("heatmap", source.visualization().heatmap_label())
    }

    async fn activate(
        &self,
        source: &mut ScheduleSource<F>,
        _prompt: &dyn FollowUpPrompt,
    ) -> ControlOutcome {
        source.visualization_mut().press_heatmap();
        ControlOutcome::Restyled
    }
}

/// Shows gameflow graphs, cycling metric and strength on repeated presses.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameflowControl;

#[async_trait]
impl<F> CustomControl<ScheduleSource<F>> for GameflowControl
where
    F: ScheduleFeed,
{
    fn id(&self) -> &str {
        "gameflow"
    }

    fn button(&self, source: &ScheduleSource<F>) -> Button {
        Button::custom("gameflow", source.visualization().gameflow_label())
    }

    async fn activate(
        &self,
        source: &mut ScheduleSource<F>,
        _prompt: &dyn FollowUpPrompt,
    ) -> ControlOutcome {
        source.visualization_mut().press_gameflow();
        ControlOutcome::Restyled
    }
}
