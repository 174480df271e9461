//! Palette data models

use serde::{Deserialize, Serialize};

use super::parser::ColorValue;
use super::ThemeName;

/// A named, immutable color palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name: ThemeName,
    pub colors: Colors,
}

/// Declares `Colors` and its camelCase role table from a single field list.
macro_rules! color_roles {
    ($( $(#[$meta:meta])* $field:ident => $role:literal ),+ $(,)?) => {
        /// Every color role a palette defines. All palettes share this exact set.
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct Colors {
            $( $(#[$meta])* pub $field: ColorValue, )+
        }

        impl Colors {
            /// Role names in declaration order
            pub const ROLE_NAMES: &'static [&'static str] = &[$( $role ),+];

            /// Iterate `(role name, value)` pairs in declaration order
            pub fn roles(&self) -> impl Iterator<Item = (&'static str, ColorValue)> {
                [$( ($role, self.$field) ),+].into_iter()
            }

            /// Look up a role by its camelCase name
            pub fn get(&self, role: &str) -> Option<ColorValue> {
                match role {
                    $( $role => Some(self.$field), )+
                    _ => None,
                }
            }
        }
    };
}

color_roles! {
    // Base hue scale
    base => "base",
    surface => "surface",
    overlay => "overlay",
    muted => "muted",
    subtle => "subtle",
    text => "text",
    // Accent slots
    love => "love",
    gold => "gold",
    rose => "rose",
    pine => "pine",
    foam => "foam",
    iris => "iris",

    // Surfaces
    background => "background",
    surface_background => "surfaceBackground",
    card_background => "cardBackground",
    border_color => "borderColor",
    text_primary => "textPrimary",
    text_secondary => "textSecondary",
    text_muted => "textMuted",

    // Interactive states, each a base/hover pair
    primary => "primary",
    primary_hover => "primaryHover",
    secondary => "secondary",
    secondary_hover => "secondaryHover",
    success => "success",
    success_hover => "successHover",
    warning => "warning",
    warning_hover => "warningHover",
    error => "error",
    error_hover => "errorHover",

    // Buttons
    button_primary => "buttonPrimary",
    button_primary_hover => "buttonPrimaryHover",
    button_secondary => "buttonSecondary",
    button_secondary_hover => "buttonSecondaryHover",
    button_clear => "buttonClear",
    button_clear_hover => "buttonClearHover",

    // Embedded code editor
    editor_background => "editorBackground",
    editor_border => "editorBorder",

    /// Alpha-blended
    shadow_primary => "shadowPrimary",
    /// Alpha-blended
    shadow_secondary => "shadowSecondary",
    /// Alpha-blended
    shadow_card => "shadowCard",
}
