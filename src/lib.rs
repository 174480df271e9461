//! Named color palettes with an observable, persisted theme selection.

pub mod config;
pub mod logger;
pub mod store;
pub mod theme;

pub use store::{SelectionState, SubscriptionId, ThemeStore};
pub use theme::{get_theme, get_theme_names, Palette, ThemeName};
