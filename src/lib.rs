//! Headless behavior engine for the FerrisFolio portfolio page.
//!
//! The page's markup and styling live elsewhere; this crate owns everything
//! the page *does*: menu toggling, smooth scrolling, theme persistence,
//! form validation, reveal-on-scroll and friends. The host builds a [`Page`]
//! model, wires [`Behaviors`] once, then feeds it events and clock ticks.
//!
//! # Structure
//!
//! - `page` - owned element tree, geometry and scroll state
//! - `events` - the typed event vocabulary hosts feed into the engine
//! - `config` - element ids, class names and style literals in one place
//! - `controllers/` - one controller per page feature
//! - `motion` - easing math and the fallback scroll animation
//! - `prefs` - the persisted theme preference
//! - `engine` - wiring, dispatch and the frame clock

pub mod config;
pub mod controllers;
pub mod engine;
pub mod error;
pub mod events;
pub mod motion;
pub mod page;
pub mod prefs;

// Re-exports for convenient external access
pub use config::Bindings;
pub use engine::{Behaviors, Feature};
pub use error::{BehaviorError, Result};
pub use events::Event;
pub use motion::{Motion, ScrollAnimation};
pub use page::{Element, Page};
pub use prefs::{DiskStore, MemoryStore, PreferenceStore, Preferences, Theme};
