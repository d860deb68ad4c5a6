pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod rendering;
pub mod ui;

// Curated re-exports
pub use app::site::SitePlugin;
pub use app::state::{HomePhase, Route};
pub use core::config::SiteConfig;
