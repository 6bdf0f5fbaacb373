//! Tests for embed and vault pages.

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;

use crate::catalog::{
    adapters::memory::InMemoryItemCatalog,
    domain::{InstanceId, ItemDefinition, ItemHash, ItemPerk, VaultEntry},
    services::{EmbedPages, VaultPages},
};
use crate::menu::{
    adapters::memory::InMemoryMessageSink,
    domain::{
        ChannelId, Destination, Embed, Intent, Interaction, Invocation, MaxPages, MenuConfig,
        PageView, Renderable, SelectOption, Transition, UserId,
    },
    ports::{PageSource, PageSourceError},
    services::MenuSession,
};

const GUARDIAN: UserId = UserId::new(99);
const ACE: ItemHash = ItemHash::new(347_366_834);
const GJALLARHORN: ItemHash = ItemHash::new(1_363_886_209);
const FIREFLY: ItemHash = ItemHash::new(3_824_106_094);
const MEMENTO: ItemHash = ItemHash::new(1_840_239_774);
const ROLL: InstanceId = InstanceId::new(6_917_529_123_456);

#[fixture]
fn catalog() -> Arc<InMemoryItemCatalog> {
    let catalog = InMemoryItemCatalog::new();
    let definitions = [
        ItemDefinition {
            hash: ACE,
            name: Some("Ace of Spades".to_owned()),
            icon: Some("/common/icons/ace.jpg".to_owned()),
            screenshot: Some("/common/screens/ace.jpg".to_owned()),
        },
        ItemDefinition::named(GJALLARHORN, "Gjallarhorn"),
        ItemDefinition::named(FIREFLY, "Firefly"),
        ItemDefinition::named(MEMENTO, "Memento Mori"),
    ];
    for definition in definitions {
        catalog.insert_definition(definition).expect("catalog state");
    }
    catalog
        .insert_perks(
            GUARDIAN,
            ROLL,
            vec![
                ItemPerk {
                    perk_hash: MEMENTO,
                    is_active: true,
                },
                ItemPerk {
                    perk_hash: FIREFLY,
                    is_active: true,
                },
            ],
        )
        .expect("catalog state");
    Arc::new(catalog)
}

fn vault() -> Vec<VaultEntry> {
    vec![
        VaultEntry {
            item_hash: ACE,
            instance: Some(ROLL),
        },
        VaultEntry {
            item_hash: GJALLARHORN,
            instance: None,
        },
    ]
}

fn view(index: usize, max_pages: MaxPages) -> PageView {
    PageView::new(index, max_pages, GUARDIAN, "Page x")
}

async fn rendered(source: &VaultPages<InMemoryItemCatalog>, index: usize) -> Embed {
    let entry = source.get_page(index).await.expect("vault entry");
    source
        .format_page(&view(index, source.max_pages()), entry)
        .await
        .expect("vault page")
        .as_embed()
        .cloned()
        .expect("embed page")
}

#[rstest]
#[tokio::test]
async fn instanced_items_list_their_perks(catalog: Arc<InMemoryItemCatalog>) {
    let source = VaultPages::new(catalog, vault());
    let embed = rendered(&source, 0).await;

    assert_eq!(embed.title.as_deref(), Some("Ace of Spades"));
    assert_eq!(
        embed.thumbnail.as_deref(),
        Some("https://bungie.net/common/icons/ace.jpg")
    );
    assert_eq!(
        embed.image.as_deref(),
        Some("https://bungie.net/common/screens/ace.jpg")
    );
    assert_eq!(embed.description.as_deref(), Some("Memento Mori\nFirefly"));
    assert_eq!(embed.footer.as_deref(), Some("Page x"));
}

#[rstest]
#[tokio::test]
async fn plain_items_have_no_perk_list(catalog: Arc<InMemoryItemCatalog>) {
    let source = VaultPages::new(catalog, vault());
    let embed = rendered(&source, 1).await;

    assert_eq!(embed.title.as_deref(), Some("Gjallarhorn"));
    assert_eq!(embed.description, None);
    assert_eq!(embed.thumbnail, None);
}

#[rstest]
#[tokio::test]
async fn prepare_names_dropdown_options_in_one_lookup(catalog: Arc<InMemoryItemCatalog>) {
    let mut source = VaultPages::new(Arc::clone(&catalog), vault());
    source.prepare().await.expect("prepare vault");

    let descriptions: Vec<Option<&str>> = source
        .select_provider()
        .expect("item picker")
        .select_options()
        .iter()
        .map(SelectOption::description)
        .collect();
    assert_eq!(descriptions, [Some("Ace of Spades"), Some("Gjallarhorn")]);
    assert_eq!(catalog.lookups().expect("catalog state"), 1);
}

#[rstest]
#[tokio::test]
async fn unreachable_catalog_keeps_plain_options(catalog: Arc<InMemoryItemCatalog>) {
    catalog.set_unavailable(true).expect("catalog state");
    let mut source = VaultPages::new(Arc::clone(&catalog), vault());

    source.prepare().await.expect("prepare tolerates lookup failure");

    let labels: Vec<&str> = source
        .select_provider()
        .expect("item picker")
        .select_options()
        .iter()
        .map(SelectOption::label)
        .collect();
    assert_eq!(labels, ["Page 1", "Page 2"]);
    let entry = source.get_page(0).await.expect("vault entry");
    let page = source.format_page(&view(0, source.max_pages()), entry).await;
    assert!(matches!(page, Err(PageSourceError::Transport(_))));
}

#[rstest]
#[tokio::test]
async fn empty_vault_is_no_content(catalog: Arc<InMemoryItemCatalog>) {
    let mut source = VaultPages::new(catalog, Vec::new());
    assert!(matches!(
        source.prepare().await,
        Err(PageSourceError::NoContent { .. })
    ));
}

#[rstest]
#[tokio::test]
async fn unknown_item_is_no_content(catalog: Arc<InMemoryItemCatalog>) {
    let source = VaultPages::new(
        catalog,
        vec![VaultEntry {
            item_hash: ItemHash::new(1),
            instance: None,
        }],
    );
    let page = source
        .format_page(
            &view(0, source.max_pages()),
            VaultEntry {
                item_hash: ItemHash::new(1),
                instance: None,
            },
        )
        .await;
    assert!(matches!(page, Err(PageSourceError::NoContent { .. })));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn embed_pages_stamp_footer_and_jump_by_dropdown() {
    let embeds = vec![
        Embed::new().with_title("Loadouts"),
        Embed::new().with_title("Vendors"),
        Embed::new().with_title("Milestones"),
    ];
    let sink = Arc::new(InMemoryMessageSink::new());
    let mut session = MenuSession::start(
        EmbedPages::new(embeds),
        Arc::clone(&sink),
        Arc::new(DefaultClock),
        MenuConfig::default(),
        Invocation::new(GUARDIAN, Destination::ephemeral(ChannelId::new(5))),
    )
    .await
    .expect("menu should start");

    let select = session.state().controls().select().expect("page picker");
    let described: Vec<Option<&str>> = select
        .options()
        .iter()
        .map(SelectOption::description)
        .collect();
    assert_eq!(described, [Some("Loadouts"), Some("Vendors"), Some("Milestones")]);

    let jumped = session
        .interact(&Interaction::new(GUARDIAN, Intent::Select("2".to_owned())))
        .await
        .expect("jump");
    assert_eq!(jumped, Transition::Shown(2));
    let footer = sink
        .edits()
        .expect("sink state")
        .last()
        .and_then(|payload| payload.body().and_then(Renderable::as_embed).cloned())
        .and_then(|embed| embed.footer);
    assert_eq!(footer.as_deref(), Some("Page 3/3"));
}
