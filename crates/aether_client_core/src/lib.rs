//! Aether Events client core: everything the UI needs that is not UI.
//!
//! The Dioxus frontend holds an [`EventStore`] and a [`View`] at the top of
//! its tree and drives a [`CreateEventForm`] against a [`GenerationClient`].
//! None of these types depend on a UI runtime, so they are tested directly.

pub mod config;
pub mod error;
pub mod format;
pub mod form;
pub mod generation;
pub mod ids;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod models;
pub mod router;
pub mod store;

pub use config::GenerationConfig;
pub use error::{ConfigError, FormError, GenerationError, ValidationError};
pub use form::{CreateEventForm, Draft, PLACEHOLDER_IMAGE_URL};
pub use generation::{GeneratedImage, GenerationClient, Generator};
pub use ids::EventId;
pub use models::{Event, ImageRef, NewEvent};
pub use router::{Action, Page, View};
pub use store::EventStore;
