//! Given steps for menu navigation BDD scenarios.

use super::world::{MenuWorld, run_async};
use cog_menus::menu::{
    adapters::memory::ListPageSource,
    domain::{ChannelId, Destination, Invocation, MenuConfig, UserId},
    services::{MenuSession, SessionHandle},
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use std::sync::Arc;

#[given("a menu over {count:usize} lines opened by user {user:u64}")]
fn a_menu_over_lines(world: &mut MenuWorld, count: usize, user: u64) -> Result<(), eyre::Report> {
    let source = ListPageSource::lines((1..=count).map(|n| format!("line {n}")))
        .with_page_options();
    let invocation = Invocation::new(UserId::new(user), Destination::channel(ChannelId::new(3)));
    let session = run_async(MenuSession::start(
        source,
        Arc::clone(&world.sink),
        Arc::new(DefaultClock),
        MenuConfig::default(),
        invocation,
    ))
    .wrap_err("open menu for scenario")?;
    world.handle = Some(SessionHandle::new(session));
    Ok(())
}
