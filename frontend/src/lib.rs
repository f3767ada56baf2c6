//! Aether Events frontend library: app shell, screens, widgets, theme.
//! Everything that is not rendering lives in `aether_client_core`.

#[cfg(any(feature = "web", feature = "desktop"))]
pub mod app;
#[cfg(any(feature = "web", feature = "desktop"))]
pub mod screens;
pub mod theme;
#[cfg(any(feature = "web", feature = "desktop"))]
pub mod widgets;
