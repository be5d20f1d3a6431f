//! Host-independent behavior of the site scripts
//!
//! Everything here is plain Rust with no DOM access, so it runs and is
//! tested natively. The `ui` module adapts it to the browser.

pub mod accordion;
pub mod config;
pub mod counter;
pub mod effects;
pub mod error;
pub mod form;
pub mod links;
pub mod menu;
pub mod navbar;
pub mod notification;
pub mod reveal;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use reveal::{RevealHandle, RevealHost, RevealOrchestrator};
