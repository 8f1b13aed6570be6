//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use crate::theme::Theme;

/// Registers the styling filters on a minijinja environment.
///
/// - `ansi(descriptor)` wraps the value with an inline descriptor
/// - `style(name)` paints the value with a named theme entry
///
/// Both follow the theme's [`ColorMode`](crate::ColorMode).
///
/// # Example
///
/// ```rust
/// use minijinja::{context, Environment};
/// use stylecode::{register_filters, ColorMode, Theme};
///
/// let theme = Theme::with_mode(ColorMode::Always).add("title", "white+b");
/// let mut env = Environment::new();
/// register_filters(&mut env, theme);
///
/// let out = env
///     .render_str(r#"{{ "Hi" | style("title") }} {{ "there" | ansi("red") }}"#, context! {})
///     .unwrap();
/// assert_eq!(out, "\x1b[1;37mHi\x1b[0m \x1b[31mthere\x1b[0m");
/// ```
pub fn register_filters(env: &mut Environment<'_>, theme: Theme) {
    let styler = theme.styler();

    env.add_filter("ansi", move |value: Value, descriptor: String| -> String {
        styler.wrap(&value.to_string(), &descriptor)
    });

    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.paint(&name, &value.to_string())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ColorMode;
    use serde::Serialize;

    #[derive(Serialize)]
    struct SimpleData {
        message: String,
    }

    fn render(theme: Theme, template: &str) -> String {
        let mut env = Environment::new();
        register_filters(&mut env, theme);
        env.render_str(
            template,
            SimpleData {
                message: "hi".into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_ansi_filter() {
        let out = render(
            Theme::with_mode(ColorMode::Always),
            r#"{{ message | ansi("red+b:white") }}"#,
        );
        assert_eq!(out, "\x1b[1;31;47mhi\x1b[0m");
    }

    #[test]
    fn test_ansi_filter_empty_descriptor() {
        let out = render(Theme::with_mode(ColorMode::Always), r#"{{ message | ansi("") }}"#);
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_style_filter() {
        let theme = Theme::with_mode(ColorMode::Always).add("ok", "green+u");
        let out = render(theme, r#"{{ message | style("ok") }}"#);
        assert_eq!(out, "\x1b[4;32mhi\x1b[0m");
    }

    #[test]
    fn test_style_filter_unknown_name() {
        let out = render(
            Theme::with_mode(ColorMode::Always),
            r#"{{ message | style("nope") }}"#,
        );
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_filters_never_mode() {
        let theme = Theme::with_mode(ColorMode::Never).add("ok", "green");
        let out = render(theme, r#"{{ message | style("ok") }}/{{ message | ansi("red") }}"#);
        assert_eq!(out, "hi/hi");
    }
}
