//! MiniJinja filter registration for theme previews.

use console::Style;
use minijinja::{Environment, Error, ErrorKind};
use unicode_width::UnicodeWidthStr;

use crate::theme::Color;

/// Registers the preview filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, use_color: bool) {
    // {{ "#E53935" | swatch }} renders a two-cell block in that color
    env.add_filter("swatch", move |value: String| -> Result<String, Error> {
        let color = Color::parse(&value)
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;
        if !use_color {
            return Ok("[]".to_string());
        }
        Ok(Style::new()
            .on_color256(color.to_ansi256())
            .force_styling(true)
            .apply_to("  ")
            .to_string())
    });

    // {{ name | pad(16) }} right-pads to a display width
    env.add_filter("pad", |value: String, width: usize| -> String {
        let fill = width.saturating_sub(value.width());
        format!("{}{}", value, " ".repeat(fill))
    });
}
