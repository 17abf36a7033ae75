//! UI layer for the desktop catalog browser.

pub mod app;

pub use app::CatalogBrowserApp;
