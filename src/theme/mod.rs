//! Palette registry for theme-store
//!
//! Every registered theme maps to a statically defined palette. All palettes
//! define the same color roles, so consumers can read any role without caring
//! which theme is active.

pub mod models;
pub mod parser;
mod presets;


use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use models::{Colors, Palette};
pub use parser::{parse_color, ColorParseError, ColorValue};

/// Registered theme identifiers, in registration order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    RosePine,
    Gruvbox,
    Ruis,
}

impl ThemeName {
    /// The exact text persisted and shown for this theme
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::RosePine => "rose-pine",
            ThemeName::Gruvbox => "gruvbox",
            ThemeName::Ruis => "ruis",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Unknown theme name: {0}")]
pub struct UnknownThemeName(pub String);

impl FromStr for ThemeName {
    type Err = UnknownThemeName;

    /// Exact, case-sensitive match against the registered names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all::<ThemeName>()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownThemeName(s.to_string()))
    }
}

/// Palette registered under `name`
pub fn get_theme(name: ThemeName) -> &'static Palette {
    match name {
        ThemeName::RosePine => &presets::ROSE_PINE,
        ThemeName::Gruvbox => &presets::GRUVBOX,
        ThemeName::Ruis => &presets::RUIS,
    }
}

/// All registered theme names, in registration order
pub fn get_theme_names() -> Vec<ThemeName> {
    all::<ThemeName>().collect()
}
