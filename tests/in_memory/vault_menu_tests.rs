//! Vault browsing against the in-memory catalogue.

use crate::in_memory::helpers::{OWNER, on_screen, runtime, sink};
use cog_menus::catalog::{
    adapters::memory::InMemoryItemCatalog,
    domain::{ItemDefinition, ItemHash, VaultEntry},
    services::VaultPages,
};
use cog_menus::menu::{
    adapters::memory::InMemoryMessageSink,
    domain::{
        ChannelId, Destination, Invocation, MenuConfig, SelectOption, SessionPhase, Transition,
    },
    services::{MenuSession, SessionHandle},
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Stops an ephemeral vault menu, which keeps the message but drops its
/// controls.
#[rstest]
fn ephemeral_vault_menu_stops_in_place(
    runtime: io::Result<Runtime>,
    sink: Arc<InMemoryMessageSink>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let catalog = Arc::new(InMemoryItemCatalog::new());
    catalog.insert_definition(ItemDefinition::named(ItemHash::new(11), "Thorn"))?;
    catalog.insert_definition(ItemDefinition::named(ItemHash::new(12), "Lumina"))?;
    let entries = vec![
        VaultEntry {
            item_hash: ItemHash::new(11),
            instance: None,
        },
        VaultEntry {
            item_hash: ItemHash::new(12),
            instance: None,
        },
    ];
    let invocation = Invocation::new(OWNER, Destination::ephemeral(ChannelId::new(12)));

    rt.block_on(async {
        let session = MenuSession::start(
            VaultPages::new(catalog, entries),
            Arc::clone(&sink),
            Arc::new(DefaultClock),
            MenuConfig::default(),
            invocation,
        )
        .await?;
        let handle = SessionHandle::new(session);

        let state = handle.snapshot().await;
        let names: Vec<Option<&str>> = state
            .controls()
            .select()
            .ok_or("vault menu has no picker")?
            .options()
            .iter()
            .map(SelectOption::description)
            .collect();
        assert_eq!(names, [Some("Thorn"), Some("Lumina")]);

        assert_eq!(handle.stop().await?, Transition::Stopped);
        assert_eq!(handle.snapshot().await.phase(), SessionPhase::Stopped);
        let remaining = on_screen(&handle, &sink).await?;
        assert!(remaining.controls().is_empty());
        assert!(remaining.body().is_some());
        assert_eq!(sink.deletions()?, 0);
        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    })
}
