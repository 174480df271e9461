//! Built-in palettes

use super::models::{Colors, Palette};
use super::parser::ColorValue;
use super::ThemeName;

const fn hex(rgb: u32) -> ColorValue {
    ColorValue::hex(rgb)
}

const fn rgba(r: u8, g: u8, b: u8, a: f32) -> ColorValue {
    ColorValue::rgba(r, g, b, a)
}

pub(super) static ROSE_PINE: Palette = Palette {
    name: ThemeName::RosePine,
    colors: Colors {
        base: hex(0x191724),
        surface: hex(0x1f1d2e),
        overlay: hex(0x26233a),
        muted: hex(0x6e6a86),
        subtle: hex(0x908caa),
        text: hex(0xe0def4),
        love: hex(0xeb6f92),
        gold: hex(0xf6c177),
        rose: hex(0xebbcba),
        pine: hex(0x31748f),
        foam: hex(0x9ccfd8),
        iris: hex(0xc4a7e7),

        background: hex(0x191724),
        surface_background: hex(0x1f1d2e),
        card_background: hex(0x26233a),
        border_color: hex(0x403d52),
        text_primary: hex(0xe0def4),
        text_secondary: hex(0x908caa),
        text_muted: hex(0x6e6a86),

        primary: hex(0xc4a7e7),
        primary_hover: hex(0xb794f6),
        secondary: hex(0x31748f),
        secondary_hover: hex(0x3e8fb0),
        success: hex(0x9ccfd8),
        success_hover: hex(0x7dd3fc),
        warning: hex(0xf6c177),
        warning_hover: hex(0xfbbf24),
        error: hex(0xeb6f92),
        error_hover: hex(0xf87171),

        button_primary: hex(0xc4a7e7),
        button_primary_hover: hex(0xb794f6),
        button_secondary: hex(0x31748f),
        button_secondary_hover: hex(0x3e8fb0),
        button_clear: hex(0x6e6a86),
        button_clear_hover: hex(0x908caa),

        editor_background: hex(0x1f1d2e),
        editor_border: hex(0x403d52),

        shadow_primary: rgba(196, 167, 231, 0.3),
        shadow_secondary: rgba(49, 116, 143, 0.3),
        shadow_card: rgba(0, 0, 0, 0.3),
    },
};

pub(super) static GRUVBOX: Palette = Palette {
    name: ThemeName::Gruvbox,
    colors: Colors {
        base: hex(0x282828),
        surface: hex(0x3c3836),
        overlay: hex(0x504945),
        muted: hex(0x665c54),
        subtle: hex(0x7c6f64),
        text: hex(0xebdbb2),
        love: hex(0xfb4934),
        gold: hex(0xfabd2f),
        rose: hex(0xfe8019),
        pine: hex(0x689d6a),
        foam: hex(0x8ec07c),
        iris: hex(0xd3869b),

        background: hex(0x282828),
        surface_background: hex(0x3c3836),
        card_background: hex(0x504945),
        border_color: hex(0x665c54),
        text_primary: hex(0xebdbb2),
        text_secondary: hex(0xa89984),
        text_muted: hex(0x7c6f64),

        primary: hex(0x83a598),
        primary_hover: hex(0x458588),
        secondary: hex(0x689d6a),
        secondary_hover: hex(0x98971a),
        success: hex(0xb8bb26),
        success_hover: hex(0x689d6a),
        warning: hex(0xfabd2f),
        warning_hover: hex(0xd79921),
        error: hex(0xfb4934),
        error_hover: hex(0xcc241d),

        button_primary: hex(0x83a598),
        button_primary_hover: hex(0x458588),
        button_secondary: hex(0x689d6a),
        button_secondary_hover: hex(0x98971a),
        button_clear: hex(0x7c6f64),
        button_clear_hover: hex(0xa89984),

        editor_background: hex(0x3c3836),
        editor_border: hex(0x665c54),

        shadow_primary: rgba(131, 165, 152, 0.3),
        shadow_secondary: rgba(104, 157, 106, 0.3),
        shadow_card: rgba(0, 0, 0, 0.4),
    },
};

// Light theme; `base` carries the brand color rather than the darkest shade.
pub(super) static RUIS: Palette = Palette {
    name: ThemeName::Ruis,
    colors: Colors {
        base: hex(0x7c3aed),
        surface: hex(0xf8fafc),
        overlay: hex(0xf1f5f9),
        muted: hex(0x64748b),
        subtle: hex(0x94a3b8),
        text: hex(0x0f172a),
        love: hex(0xef4444),
        gold: hex(0xf59e0b),
        rose: hex(0xec4899),
        pine: hex(0x0d9488),
        foam: hex(0x3b82f6),
        iris: hex(0x7c3aed),

        background: hex(0xffffff),
        surface_background: hex(0xf8fafc),
        card_background: hex(0xffffff),
        border_color: hex(0xe2e8f0),
        text_primary: hex(0x0f172a),
        text_secondary: hex(0x334155),
        text_muted: hex(0x64748b),

        primary: hex(0x7c3aed),
        primary_hover: hex(0x6d28d9),
        secondary: hex(0x0d9488),
        secondary_hover: hex(0x0f766e),
        success: hex(0x10b981),
        success_hover: hex(0x047857),
        warning: hex(0xf59e0b),
        warning_hover: hex(0xd97706),
        error: hex(0xef4444),
        error_hover: hex(0xdc2626),

        button_primary: hex(0x7c3aed),
        button_primary_hover: hex(0x6d28d9),
        button_secondary: hex(0x0d9488),
        button_secondary_hover: hex(0x0f766e),
        button_clear: hex(0x64748b),
        button_clear_hover: hex(0x334155),

        editor_background: hex(0xf8fafc),
        editor_border: hex(0xe2e8f0),

        shadow_primary: rgba(124, 58, 237, 0.3),
        shadow_secondary: rgba(13, 148, 136, 0.3),
        shadow_card: rgba(0, 0, 0, 0.1),
    },
};
