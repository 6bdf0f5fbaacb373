//! Game item catalogue menus: pre-built embed pages and vault browsing
//! backed by an [`ports::ItemCatalog`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
