//! nexora-core — content model and view-state machine for the Nexora blog reader.
//!
//! This crate holds everything that is not presentation: the read-only article
//! store, the content block parser, the search filter, the listing/detail view
//! controller, the light/dark display mode, and configuration.
//!
//! # Architecture
//!
//! ```text
//! ArticleStore ──► search::filter(query) ──► listing
//!       │
//!       └──► ViewController::open_article ──► content::parse ──► detail
//! ```
//!
//! Everything here is synchronous and single-threaded. The store is never
//! mutated after it is built; the only mutable state is [`ViewState`] and the
//! [`DisplayMode`], both owned by the caller.

pub mod config;
pub mod content;
pub mod date;
pub mod display;
pub mod error;
pub mod search;
pub mod store;
pub mod types;
pub mod view;

pub use display::{DisplayMode, ModePreference};
pub use error::{ParseModeError, StoreError, ViewError};
pub use store::ArticleStore;
pub use types::{Article, ContentBlock};
pub use view::{View, ViewController, ViewEvent, ViewMode, ViewState};
