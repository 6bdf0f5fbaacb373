//! Vault pages: one owned item per page, definitions fetched on demand.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::{
    domain::{InstanceId, ItemDefinition, ItemHash, VaultEntry},
    ports::{CatalogError, ItemCatalog},
};
use crate::menu::{
    domain::{Embed, MaxPages, PageView, Renderable, SelectOption, UserId},
    ports::{PageSource, PageSourceError, PageSourceResult, SelectProvider},
};

/// Browses the items in a vault.
///
/// Item names for the dropdown are looked up in one batch when the
/// session prepares the source. A failed batch only costs the option
/// descriptions.
pub struct VaultPages<C> {
    catalog: Arc<C>,
    entries: Vec<VaultEntry>,
    options: Vec<SelectOption>,
}

impl<C> VaultPages<C>
where
    C: ItemCatalog,
{
    /// Creates pages over `entries`.
    #[must_use]
    pub fn new(catalog: Arc<C>, entries: Vec<VaultEntry>) -> Self {
        let options = (0..entries.len()).map(SelectOption::for_page).collect();
        Self {
            catalog,
            entries,
            options,
        }
    }

    /// Returns the vault entries.
    #[must_use]
    pub fn entries(&self) -> &[VaultEntry] {
        &self.entries
    }

    async fn definition(&self, hash: ItemHash) -> PageSourceResult<ItemDefinition> {
        self.catalog
            .definitions(&[hash])
            .await
            .map_err(PageSourceError::transport)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                PageSourceError::no_content(format!("Item {hash} is not in the catalogue."))
            })
    }

    async fn perk_list(&self, owner: UserId, instance: InstanceId) -> PageSourceResult<String> {
        let perks = match self.catalog.instance_perks(owner, instance).await {
            Ok(perks) => perks,
            Err(CatalogError::NotFound(what)) => {
                tracing::debug!(instance = %instance, missing = %what, "instance has no perk data");
                return Ok(String::new());
            }
            Err(err) => return Err(PageSourceError::transport(err)),
        };
        let hashes: Vec<ItemHash> = perks.iter().map(|perk| perk.perk_hash).collect();
        let names: Vec<String> = self
            .catalog
            .definitions(&hashes)
            .await
            .map_err(PageSourceError::transport)?
            .iter()
            .map(|definition| definition.display_name().to_owned())
            .collect();
        Ok(names.join("\n"))
    }
}

#[async_trait]
impl<C> PageSource for VaultPages<C>
where
    C: ItemCatalog,
{
    type Page = VaultEntry;

    async fn prepare(&mut self) -> PageSourceResult<()> {
        if self.entries.is_empty() {
            return Err(PageSourceError::no_content("The vault is empty."));
        }
        let hashes: Vec<ItemHash> = self.entries.iter().map(|entry| entry.item_hash).collect();
        let names: HashMap<ItemHash, String> = match self.catalog.definitions(&hashes).await {
            Ok(definitions) => definitions
                .into_iter()
                .map(|definition| (definition.hash, definition.display_name().to_owned()))
                .collect(),
            Err(err) => {
                tracing::warn!(error = %err, "vault item names unavailable");
                return Ok(());
            }
        };
        self.options = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut option = SelectOption::for_page(index);
                if let Some(name) = names.get(&entry.item_hash) {
                    option = option.with_description(name);
                }
                option
            })
            .collect();
        Ok(())
    }

    fn max_pages(&self) -> MaxPages {
        MaxPages::Known(self.entries.len())
    }

    async fn get_page(&self, index: usize) -> PageSourceResult<VaultEntry> {
        self.entries
            .get(index)
            .copied()
            .ok_or(PageSourceError::OutOfRange { index })
    }

    async fn format_page(&self, view: &PageView, page: VaultEntry) -> PageSourceResult<Renderable> {
        let definition = self.definition(page.item_hash).await?;
        let mut embed = Embed::new()
            .with_title(definition.display_name())
            .with_footer(view.footer());
        if let Some(icon) = definition.icon_url() {
            embed = embed.with_thumbnail(icon);
        }
        if let Some(screenshot) = definition.screenshot_url() {
            embed = embed.with_image(screenshot);
        }
        if let Some(instance) = page.instance {
            let perks = self.perk_list(view.viewer(), instance).await?;
            if !perks.is_empty() {
                embed = embed.with_description(perks);
            }
        }
        Ok(Renderable::Embed(embed))
    }

    fn select_provider(&self) -> Option<&dyn SelectProvider> {
        Some(self)
    }
}

impl<C> SelectProvider for VaultPages<C>
where
    C: ItemCatalog,
{
    fn select_options(&self) -> &[SelectOption] {
        &self.options
    }
}
