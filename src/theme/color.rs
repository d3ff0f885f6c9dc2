//! Color values used by token sets.
//!
//! Colors are written the way stylesheet consumers expect them: `#RRGGBB`
//! (or the short `#RGB`) for opaque colors and `rgba(r, g, b, a)` for
//! translucent ones. Parsing is strict; anything else is a
//! [`ColorParseError`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An sRGB color with optional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Opaque color, written as `#RRGGBB`.
    Hex(u8, u8, u8),
    /// Color with alpha in `0.0..=1.0`, written as `rgba(r, g, b, a)`.
    Rgba(u8, u8, u8, f32),
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{input}': {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: &'static str,
}

impl Color {
    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Color::Hex((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba(r, g, b, a)
    }

    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        input.parse()
    }

    /// Red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match *self {
            Color::Hex(r, g, b) | Color::Rgba(r, g, b, _) => (r, g, b),
        }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Hex(..) => 1.0,
            Color::Rgba(.., a) => a,
        }
    }

    /// Returns this color at the given opacity.
    ///
    /// Colors that already carry alpha are returned unchanged. `opacity` is
    /// clamped to `0.0..=1.0`; NaN is treated as fully opaque.
    pub fn with_opacity(&self, opacity: f32) -> Color {
        let alpha = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        match *self {
            Color::Hex(r, g, b) => Color::Rgba(r, g, b, alpha),
            rgba @ Color::Rgba(..) => rgba,
        }
    }

    /// Nearest entry in the 256-color terminal palette.
    pub fn to_ansi256(&self) -> u8 {
        let (r, g, b) = self.rgb();
        if r == g && g == b {
            // 24-step gray ramp, with the cube corners for the extremes
            return match r {
                0..=7 => 16,
                249..=255 => 231,
                v => 232 + ((u16::from(v) - 8) * 24 / 247) as u8,
            };
        }
        let level = |c: u8| (u16::from(c) * 5 / 255) as u8;
        16 + 36 * level(r) + 6 * level(g) + level(b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hex(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fail = |reason| ColorParseError {
            input: input.to_string(),
            reason,
        };
        let s = input.trim();

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(fail("non-hex digit"));
            }
            let channel =
                |pair: &str| u8::from_str_radix(pair, 16).map_err(|_| fail("bad channel"));
            return match hex.len() {
                6 => Ok(Color::Hex(
                    channel(&hex[0..2])?,
                    channel(&hex[2..4])?,
                    channel(&hex[4..6])?,
                )),
                3 => {
                    let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                    Ok(Color::Hex(short(0)?, short(1)?, short(2)?))
                }
                _ => Err(fail("expected 3 or 6 hex digits")),
            };
        }

        if let Some(body) = s.strip_prefix("rgba(").and_then(|b| b.strip_suffix(')')) {
            let parts: Vec<&str> = body.split(',').map(str::trim).collect();
            if parts.len() != 4 {
                return Err(fail("rgba() takes four components"));
            }
            let channel = |p: &str| p.parse::<u8>().map_err(|_| fail("channel out of range"));
            let alpha: f32 = parts[3].parse().map_err(|_| fail("alpha is not a number"))?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(fail("alpha outside 0..=1"));
            }
            return Ok(Color::Rgba(
                channel(parts[0])?,
                channel(parts[1])?,
                channel(parts[2])?,
                alpha,
            ));
        }

        Err(fail("expected #hex or rgba()"))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
