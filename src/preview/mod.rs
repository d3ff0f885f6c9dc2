//! Terminal preview of a resolved theme.

mod filters;

use minijinja::{Environment, Error};

use crate::theme::ResolvedTheme;
use filters::register_filters;

const PREVIEW_TEMPLATE: &str = "\
{{ tokens.name }} theme ({{ mode }}{% if pinned %}, pinned{% endif %}, status bar {{ statusBar }})

colors
{% for key, value in tokens.colors|items %}  {{ key | pad(16) }} {{ value | swatch }} {{ value }}
{% endfor %}
navigation
{% for key, value in navigation.colors|items %}  {{ key | pad(16) }} {{ value | swatch }} {{ value }}
{% endfor %}
fonts
{% for key, font in navigation.fonts|items %}  {{ key | pad(16) }} {{ font.fontFamily }} {{ font.fontWeight }}
{% endfor %}";

/// Renders swatch sheets for resolved themes.
///
/// # Example
///
/// ```rust
/// use tinted::platform::{ColorScheme, ManualAppearance};
/// use tinted::{ThemePreview, ThemeShell};
///
/// let shell = ThemeShell::start(&ManualAppearance::new(ColorScheme::Dark)).unwrap();
/// let sheet = ThemePreview::new(false).render(&shell.current()).unwrap();
/// assert!(sheet.starts_with("dark theme"));
/// ```
pub struct ThemePreview {
    env: Environment<'static>,
}

impl ThemePreview {
    /// Creates a preview renderer; `use_color` enables ANSI swatches.
    pub fn new(use_color: bool) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, use_color);
        Self { env }
    }

    /// Creates a preview renderer that colors output when stdout supports it.
    pub fn auto() -> Self {
        Self::new(console::Term::stdout().features().colors_supported())
    }

    pub fn render(&self, theme: &ResolvedTheme) -> Result<String, Error> {
        self.env.render_str(PREVIEW_TEMPLATE, theme)
    }
}
