//! Catalog browsing core: loading, filtering, pagination and rendering
//! contracts shared by the CLI and desktop front ends.

pub mod controller;
pub mod debounce;
pub mod filter;
pub mod loader;
pub mod pagination;
pub mod render;
pub mod settings;

pub use controller::{CatalogView, CatalogViewController, LoadState};
pub use debounce::Debouncer;
pub use loader::{load_catalog, CatalogSource, HttpCatalogSource};
pub use pagination::PageWindow;
pub use render::{format_price, ProductCard, Renderer, TextRenderer};
pub use settings::{load_settings_from, ClientSettings, SettingsError};

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[cfg(test)]
#[path = "tests/fixtures.rs"]
pub(crate) mod fixtures;
