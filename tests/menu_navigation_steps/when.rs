//! When steps for menu navigation BDD scenarios.

use super::world::{MenuWorld, run_async};
use cog_menus::menu::domain::UserId;
use rstest_bdd_macros::when;

#[when(r#"user {user:u64} presses "{key}""#)]
fn user_presses(world: &mut MenuWorld, user: u64, key: String) -> Result<(), eyre::Report> {
    let handle = world.handle()?.clone();
    world.last_transition = Some(run_async(handle.interact_component(
        UserId::new(user),
        &key,
        &[],
    )));
    Ok(())
}

#[when(r#"user {user:u64} picks the option "{value}""#)]
fn user_picks(world: &mut MenuWorld, user: u64, value: String) -> Result<(), eyre::Report> {
    let handle = world.handle()?.clone();
    world.last_transition = Some(run_async(handle.interact_component(
        UserId::new(user),
        "select",
        &[value],
    )));
    Ok(())
}

#[when("the menu times out")]
fn menu_times_out(world: &mut MenuWorld) -> Result<(), eyre::Report> {
    run_async(world.handle()?.expire()).map_err(|err| eyre::eyre!("expiry failed: {err}"))?;
    Ok(())
}
