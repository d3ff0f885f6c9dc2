//! The canonical light and dark token sets.
//!
//! Both sets share one scale table ([`with_scales`]) so that spacing, radii,
//! typography and motion can never drift between modes; only colors and
//! shadow strengths differ.

use super::color::Color;
use super::tokens::{Shadow, TokenSet};

const SHADOW_COLOR: Color = Color::hex(0x000000);

pub(crate) fn light() -> TokenSet {
    let tokens = TokenSet::new("light")
        .add_color("primary", Color::hex(0xE53935))
        .add_color("primaryLight", Color::hex(0xFF6659))
        .add_color("primaryDark", Color::hex(0xAB000D))
        .add_color("secondary", Color::hex(0x3949AB))
        .add_color("secondaryLight", Color::hex(0x6F74DD))
        .add_color("secondaryDark", Color::hex(0x00227B))
        .add_color("background", Color::hex(0xFAFAFA))
        .add_color("surface", Color::hex(0xFFFFFF))
        .add_color("surfaceVariant", Color::hex(0xF5F5F5))
        .add_color("text", Color::hex(0x212121))
        .add_color("textSecondary", Color::hex(0x616161))
        .add_color("textTertiary", Color::hex(0x9E9E9E))
        .add_color("border", Color::hex(0xE0E0E0))
        .add_color("borderLight", Color::hex(0xF0F0F0))
        .add_color("card", Color::hex(0xFFFFFF))
        .add_color("success", Color::hex(0x43A047))
        .add_color("successLight", Color::hex(0x76D275))
        .add_color("warning", Color::hex(0xFB8C00))
        .add_color("warningLight", Color::hex(0xFFCC02))
        .add_color("error", Color::hex(0xD32F2F))
        .add_color("errorLight", Color::hex(0xFF6659))
        .add_color("info", Color::hex(0x2196F3))
        .add_color("infoLight", Color::hex(0x64B5F6))
        .add_color("shadow", SHADOW_COLOR)
        .add_color("buttonText", Color::hex(0xFFFFFF))
        .add_color("overlay", Color::rgba(0, 0, 0, 0.5))
        .add_color("disabled", Color::hex(0xBDBDBD))
        .add_color("placeholder", Color::hex(0x9E9E9E))
        .add_shadow("none", Shadow::NONE)
        .add_shadow("small", Shadow::new(SHADOW_COLOR, 2.0, 0.15, 3.84, 3))
        .add_shadow("medium", Shadow::new(SHADOW_COLOR, 4.0, 0.2, 4.65, 6))
        .add_shadow("large", Shadow::new(SHADOW_COLOR, 6.0, 0.3, 6.27, 10))
        .add_shadow("extraLarge", Shadow::new(SHADOW_COLOR, 10.0, 0.35, 8.84, 15));
    with_scales(tokens)
}

pub(crate) fn dark() -> TokenSet {
    let tokens = TokenSet::new("dark")
        .add_color("primary", Color::hex(0xFF5252))
        .add_color("primaryLight", Color::hex(0xFF867C))
        .add_color("primaryDark", Color::hex(0xC50E29))
        .add_color("secondary", Color::hex(0x7986CB))
        .add_color("secondaryLight", Color::hex(0xAAB6FE))
        .add_color("secondaryDark", Color::hex(0x49599A))
        .add_color("background", Color::hex(0x121212))
        .add_color("surface", Color::hex(0x1E1E1E))
        .add_color("surfaceVariant", Color::hex(0x2C2C2C))
        .add_color("text", Color::hex(0xFFFFFF))
        .add_color("textSecondary", Color::hex(0xB0B0B0))
        .add_color("textTertiary", Color::hex(0x757575))
        .add_color("border", Color::hex(0x2C2C2C))
        .add_color("borderLight", Color::hex(0x3C3C3C))
        .add_color("card", Color::hex(0x1E1E1E))
        .add_color("success", Color::hex(0x66BB6A))
        .add_color("successLight", Color::hex(0x98EE99))
        .add_color("warning", Color::hex(0xFFA726))
        .add_color("warningLight", Color::hex(0xFFD95A))
        .add_color("error", Color::hex(0xEF5350))
        .add_color("errorLight", Color::hex(0xFF867C))
        .add_color("info", Color::hex(0x42A5F5))
        .add_color("infoLight", Color::hex(0x80D6FF))
        .add_color("shadow", SHADOW_COLOR)
        .add_color("buttonText", Color::hex(0xFFFFFF))
        .add_color("overlay", Color::rgba(0, 0, 0, 0.7))
        .add_color("disabled", Color::hex(0x424242))
        .add_color("placeholder", Color::hex(0x757575))
        .add_shadow("none", Shadow::NONE)
        .add_shadow("small", Shadow::new(SHADOW_COLOR, 2.0, 0.25, 3.84, 5))
        .add_shadow("medium", Shadow::new(SHADOW_COLOR, 4.0, 0.3, 4.65, 8))
        .add_shadow("large", Shadow::new(SHADOW_COLOR, 6.0, 0.35, 6.27, 12))
        .add_shadow("extraLarge", Shadow::new(SHADOW_COLOR, 10.0, 0.4, 8.84, 18));
    with_scales(tokens)
}

/// Mode-independent scales.
fn with_scales(tokens: TokenSet) -> TokenSet {
    tokens
        .add_spacing("xs", 4.0)
        .add_spacing("sm", 8.0)
        .add_spacing("md", 16.0)
        .add_spacing("lg", 24.0)
        .add_spacing("xl", 32.0)
        .add_spacing("xxl", 48.0)
        .add_border_radius("xs", 4.0)
        .add_border_radius("sm", 8.0)
        .add_border_radius("md", 12.0)
        .add_border_radius("lg", 16.0)
        .add_border_radius("xl", 24.0)
        .add_border_radius("full", 9999.0)
        .add_font_size("xs", 12.0)
        .add_font_size("sm", 14.0)
        .add_font_size("md", 16.0)
        .add_font_size("lg", 18.0)
        .add_font_size("xl", 24.0)
        .add_font_size("xxl", 32.0)
        .add_font_size("xxxl", 40.0)
        .add_font_weight("light", "300")
        .add_font_weight("normal", "400")
        .add_font_weight("medium", "500")
        .add_font_weight("semibold", "600")
        .add_font_weight("bold", "700")
        .add_font_weight("extraBold", "800")
        .add_line_height("tight", 1.2)
        .add_line_height("normal", 1.4)
        .add_line_height("relaxed", 1.6)
        .add_opacity("disabled", 0.38)
        .add_opacity("hover", 0.04)
        .add_opacity("focus", 0.12)
        .add_opacity("selected", 0.08)
        .add_opacity("pressed", 0.16)
        .add_animation("fast", 150)
        .add_animation("normal", 300)
        .add_animation("slow", 500)
        .add_breakpoint("sm", 576)
        .add_breakpoint("md", 768)
        .add_breakpoint("lg", 992)
        .add_breakpoint("xl", 1200)
}
