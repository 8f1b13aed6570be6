//! Theme struct for building collections of compiled styles.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::error::ThemeError;
use crate::mode::ColorMode;
use crate::styler::{Painter, Styler};

/// A named collection of descriptors, each compiled to a [`Painter`].
///
/// Lookups are as permissive as the encoder: painting with an unknown
/// name returns the text unchanged.
///
/// # Example
///
/// ```rust
/// use stylecode::{ColorMode, Theme};
///
/// let theme = Theme::with_mode(ColorMode::Always)
///     .add("error", "red+b")
///     .add("timestamp", "black+h");
///
/// assert_eq!(theme.paint("error", "boom"), "\x1b[1;31mboom\x1b[0m");
/// assert_eq!(theme.paint("unknown", "boom"), "boom");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Theme {
    mode: ColorMode,
    entries: HashMap<String, Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    descriptor: String,
    painter: Painter,
}

impl Theme {
    /// Creates an empty theme following the process-wide switch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty theme whose painters use `mode`.
    pub fn with_mode(mode: ColorMode) -> Self {
        Self {
            mode,
            entries: HashMap::new(),
        }
    }

    /// Adds a named descriptor, returning an updated theme for chaining.
    ///
    /// The descriptor is compiled immediately. Re-adding a name replaces it.
    pub fn add(mut self, name: &str, descriptor: &str) -> Self {
        self.insert(name, descriptor);
        self
    }

    /// Adds or replaces a named descriptor in place.
    pub fn insert(&mut self, name: &str, descriptor: &str) {
        let painter = self.styler().compile(descriptor);
        self.entries.insert(
            name.to_string(),
            Entry {
                descriptor: descriptor.to_string(),
                painter,
            },
        );
    }

    /// Returns a copy of this theme recompiled under `mode`.
    pub fn into_mode(self, mode: ColorMode) -> Self {
        let mut themed = Self::with_mode(mode);
        for (name, entry) in self.entries {
            themed.insert(&name, &entry.descriptor);
        }
        themed
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Returns a [`Styler`] using this theme's mode.
    pub fn styler(&self) -> Styler {
        Styler::new(self.mode)
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the descriptor registered under `name`.
    pub fn descriptor(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|e| e.descriptor.as_str())
    }

    /// Returns the compiled painter registered under `name`.
    pub fn painter(&self, name: &str) -> Option<&Painter> {
        self.entries.get(name).map(|e| &e.painter)
    }

    /// Paints `text` with the named style, or returns it unchanged.
    pub fn paint(&self, name: &str, text: &str) -> String {
        match self.painter(name) {
            Some(painter) => painter.paint(text),
            None => text.to_string(),
        }
    }

    /// Loads a theme from a YAML map of `name: descriptor`.
    ///
    /// ```rust
    /// use stylecode::Theme;
    ///
    /// let theme = Theme::from_yaml("title: white+bh\nmuted: black+h\n").unwrap();
    /// assert_eq!(theme.descriptor("title"), Some("white+bh"));
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_yaml::from_str(source)?;
        tracing::debug!(styles = theme.len(), "loaded YAML theme");
        Ok(theme)
    }

    /// Loads a theme from a JSON object of `"name": "descriptor"`.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(source)?;
        tracing::debug!(styles = theme.len(), "loaded JSON theme");
        Ok(theme)
    }
}

impl From<BTreeMap<String, String>> for Theme {
    fn from(map: BTreeMap<String, String>) -> Self {
        let mut theme = Theme::new();
        for (name, descriptor) in &map {
            theme.insert(name, descriptor);
        }
        theme
    }
}

impl From<Theme> for BTreeMap<String, String> {
    fn from(theme: Theme) -> Self {
        theme
            .entries
            .into_iter()
            .map(|(name, entry)| (name, entry.descriptor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_add_and_paint() {
        let theme = Theme::with_mode(ColorMode::Always).add("ok", "green");
        assert!(theme.has("ok"));
        assert_eq!(theme.paint("ok", "done"), "\x1b[32mdone\x1b[0m");
    }

    #[test]
    fn test_theme_unknown_name_passes_through() {
        let theme = Theme::with_mode(ColorMode::Always);
        assert_eq!(theme.paint("missing", "text"), "text");
        assert!(theme.painter("missing").is_none());
    }

    #[test]
    fn test_theme_never_mode() {
        let theme = Theme::with_mode(ColorMode::Never).add("ok", "green");
        assert_eq!(theme.paint("ok", "done"), "done");
    }

    #[test]
    fn test_theme_replace_entry() {
        let theme = Theme::with_mode(ColorMode::Always)
            .add("x", "red")
            .add("x", "blue");
        assert_eq!(theme.len(), 1);
        assert_eq!(theme.descriptor("x"), Some("blue"));
        assert_eq!(theme.paint("x", "t"), "\x1b[34mt\x1b[0m");
    }

    #[test]
    fn test_theme_empty_descriptor_is_identity() {
        let theme = Theme::with_mode(ColorMode::Always).add("plain", "");
        assert!(theme.painter("plain").unwrap().is_identity());
        assert_eq!(theme.paint("plain", "t"), "t");
    }

    #[test]
    fn test_theme_into_mode_recompiles() {
        let theme = Theme::with_mode(ColorMode::Never).add("e", "red");
        assert_eq!(theme.paint("e", "t"), "t");
        let theme = theme.into_mode(ColorMode::Always);
        assert_eq!(theme.mode(), ColorMode::Always);
        assert_eq!(theme.paint("e", "t"), "\x1b[31mt\x1b[0m");
    }

    #[test]
    fn test_theme_from_yaml() {
        let theme = Theme::from_yaml("error: red+b\nnote: cyan:black+h\n").unwrap();
        assert_eq!(theme.mode(), ColorMode::Global);
        assert_eq!(theme.len(), 2);
        assert_eq!(theme.descriptor("note"), Some("cyan:black+h"));
        let theme = theme.into_mode(ColorMode::Always);
        assert_eq!(theme.painter("error").unwrap().code(), "\x1b[1;31m");
    }

    #[test]
    fn test_theme_from_json() {
        let theme = Theme::from_json(r#"{"warn": "yellow+h", "odd": "mauve+zz"}"#)
            .unwrap()
            .into_mode(ColorMode::Always);
        assert_eq!(theme.painter("warn").unwrap().code(), "\x1b[93m");
        // Unknown colors and flags are accepted, not rejected.
        assert_eq!(theme.painter("odd").unwrap().code(), "\x1b[30m");
    }

    #[test]
    fn test_theme_from_yaml_malformed() {
        assert!(matches!(
            Theme::from_yaml("- not\n- a map\n"),
            Err(ThemeError::Yaml(_))
        ));
        assert!(matches!(Theme::from_json("[1, 2]"), Err(ThemeError::Json(_))));
    }

    #[test]
    fn test_theme_serializes_descriptors() {
        let theme = Theme::new().add("b", "blue").add("a", "red+u");
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(json, r#"{"a":"red+u","b":"blue"}"#);
    }
}
