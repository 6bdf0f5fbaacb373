//! Catalogue page sources.

mod embed_pages;
mod vault_pages;

pub use embed_pages::EmbedPages;
pub use vault_pages::VaultPages;
