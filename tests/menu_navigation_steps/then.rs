//! Then steps for menu navigation BDD scenarios.

use super::world::{MenuWorld, run_async};
use cog_menus::menu::{
    adapters::memory::SinkEvent,
    domain::{Renderable, SelectOption, UserId},
};
use rstest_bdd_macros::then;

#[then(r#"the menu shows "{text}""#)]
fn menu_shows(world: &mut MenuWorld, text: String) -> Result<(), eyre::Report> {
    let payload = world.on_screen()?;
    let shown = payload.body().and_then(Renderable::as_text);
    if shown != Some(text.as_str()) {
        return Err(eyre::eyre!("expected menu to show {text:?}, found {shown:?}"));
    }
    Ok(())
}

#[then("the current page is {page:usize}")]
fn current_page_is(world: &mut MenuWorld, page: usize) -> Result<(), eyre::Report> {
    let state = run_async(world.handle()?.snapshot());
    if state.current_page() != page {
        return Err(eyre::eyre!(
            "expected page {page}, found {}",
            state.current_page()
        ));
    }
    Ok(())
}

#[then(r#"the page picker offers {count:usize} options starting at "{value}""#)]
fn picker_window(world: &mut MenuWorld, count: usize, value: String) -> Result<(), eyre::Report> {
    let state = run_async(world.handle()?.snapshot());
    let select = state
        .controls()
        .select()
        .ok_or_else(|| eyre::eyre!("menu has no page picker"))?;
    let first = select.options().first().map(SelectOption::value);
    if select.options().len() != count || first != Some(value.as_str()) {
        return Err(eyre::eyre!(
            "expected {count} options from {value:?}, found {} from {first:?}",
            select.options().len()
        ));
    }
    Ok(())
}

#[then(r#"user {user:u64} receives the notice "{text}""#)]
fn user_receives_notice(world: &mut MenuWorld, user: u64, text: String) -> Result<(), eyre::Report> {
    let events = world
        .sink
        .events()
        .map_err(|err| eyre::eyre!("sink state unavailable: {err}"))?;
    let recipient = UserId::new(user);
    let delivered = events.iter().any(|event| {
        matches!(event, SinkEvent::Notified { user: to, text: sent } if *to == recipient && *sent == text)
    });
    if !delivered {
        return Err(eyre::eyre!("no notice {text:?} for user {user}"));
    }
    Ok(())
}

#[then("the menu message is deleted")]
fn message_deleted(world: &mut MenuWorld) -> Result<(), eyre::Report> {
    let events = world
        .sink
        .events()
        .map_err(|err| eyre::eyre!("sink state unavailable: {err}"))?;
    let deletions = events
        .iter()
        .filter(|event| matches!(event, SinkEvent::Deleted { .. }))
        .count();
    if deletions != 1 {
        return Err(eyre::eyre!("expected one deletion, found {deletions}"));
    }
    let edits_after_delete = events
        .iter()
        .skip_while(|event| !matches!(event, SinkEvent::Deleted { .. }))
        .filter(|event| matches!(event, SinkEvent::Edited { .. }))
        .count();
    if edits_after_delete != 0 {
        return Err(eyre::eyre!("menu was edited after deletion"));
    }
    Ok(())
}

#[then(r#"the menu is "{phase}""#)]
fn menu_phase(world: &mut MenuWorld, phase: String) -> Result<(), eyre::Report> {
    let state = run_async(world.handle()?.snapshot());
    if state.phase().as_str() != phase {
        return Err(eyre::eyre!("expected phase {phase}, found {}", state.phase()));
    }
    Ok(())
}

#[then("the menu has no controls")]
fn menu_has_no_controls(world: &mut MenuWorld) -> Result<(), eyre::Report> {
    let payload = world.on_screen()?;
    if !payload.controls().is_empty() {
        return Err(eyre::eyre!("controls still attached: {:?}", payload.controls()));
    }
    Ok(())
}

#[then("navigation is disabled")]
fn navigation_disabled(world: &mut MenuWorld) -> Result<(), eyre::Report> {
    let payload = world.on_screen()?;
    if !payload.controls().navigation_disabled() {
        return Err(eyre::eyre!("navigation controls are live on a single page"));
    }
    Ok(())
}
