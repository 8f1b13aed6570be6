//! Encoding and wrapping text under a [`ColorMode`].
//!
//! [`Styler`] is the explicit context: it carries the mode so callers can
//! thread the enable decision through their own code. The crate-level
//! [`encode`](crate::encode), [`wrap`](crate::wrap) and
//! [`compile`](crate::compile) functions use [`Styler::global`].

use std::fmt;

use crate::mode::ColorMode;
use crate::style::{Descriptor, RESET};

/// Applies descriptors to text under a given [`ColorMode`].
///
/// # Example
///
/// ```rust
/// use stylecode::{ColorMode, Styler};
///
/// let styler = Styler::new(ColorMode::Always);
/// assert_eq!(styler.encode("red+b:white"), "\x1b[1;31;47m");
/// assert_eq!(styler.wrap("hi", "green"), "\x1b[32mhi\x1b[0m");
///
/// let plain = Styler::new(ColorMode::Never);
/// assert_eq!(plain.wrap("hi", "green"), "hi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Styler {
    mode: ColorMode,
}

impl Styler {
    pub const fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    /// A styler that follows the process-wide switch.
    pub const fn global() -> Self {
        Self::new(ColorMode::Global)
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Returns whether this styler currently emits escape sequences.
    pub fn is_enabled(&self) -> bool {
        self.mode.is_enabled()
    }

    /// Returns the escape sequence for `descriptor`.
    ///
    /// Empty when disabled or when `descriptor` is empty; `"reset"` yields
    /// [`RESET`].
    pub fn encode(&self, descriptor: &str) -> String {
        if descriptor.is_empty() || !self.is_enabled() {
            return String::new();
        }
        Descriptor::parse(descriptor).escape_code()
    }

    /// Surrounds `text` with the escape sequence for `descriptor` and a reset.
    pub fn wrap(&self, text: &str, descriptor: &str) -> String {
        if descriptor.is_empty() || !self.is_enabled() {
            return text.to_string();
        }
        let code = Descriptor::parse(descriptor).escape_code();
        format!("{}{}{}", code, text, RESET)
    }

    /// Encodes `descriptor` once and returns a reusable [`Painter`].
    ///
    /// An empty descriptor compiles to the identity painter, which never
    /// styles, whatever the mode later says.
    pub fn compile(&self, descriptor: &str) -> Painter {
        if descriptor.is_empty() {
            return Painter::identity();
        }
        let code = self.encode(descriptor);
        tracing::trace!(descriptor, code = ?code, "compiled painter");
        Painter {
            code: Some(code),
            mode: self.mode,
        }
    }
}

/// A precompiled escape sequence that wraps text on demand.
///
/// Created by [`compile`](crate::compile) or [`Styler::compile`]. The
/// descriptor is parsed once, so painting many strings with the same style
/// costs only the concatenation.
///
/// # Example
///
/// ```rust
/// use stylecode::{ColorMode, Styler};
///
/// let lime = Styler::new(ColorMode::Always).compile("green+h:black");
/// assert_eq!(lime.paint("80s"), "\x1b[92;40m80s\x1b[0m");
/// assert_eq!(format!("[{}]", lime.apply_to("ok")), "[\x1b[92;40mok\x1b[0m]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Painter {
    code: Option<String>,
    mode: ColorMode,
}

impl Painter {
    /// A painter that returns text unchanged.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Returns `true` if this painter was compiled from an empty descriptor.
    pub fn is_identity(&self) -> bool {
        self.code.is_none()
    }

    /// Returns the cached escape sequence (empty for the identity painter).
    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }

    /// Wraps `text` with the cached sequence and a reset.
    ///
    /// Returns `text` unchanged when it is empty or the mode is disabled.
    pub fn paint(&self, text: &str) -> String {
        self.apply_to(text).to_string()
    }

    /// Returns a [`Display`](fmt::Display) adapter that paints `text` when
    /// formatted.
    pub fn apply_to<'a>(&'a self, text: &'a str) -> Painted<'a> {
        Painted {
            painter: self,
            text,
        }
    }

    fn active_code(&self, text: &str) -> Option<&str> {
        let code = self.code.as_deref()?;
        if text.is_empty() || !self.mode.is_enabled() {
            return None;
        }
        Some(code)
    }
}

/// Text borrowed together with the [`Painter`] that styles it.
#[derive(Debug, Clone, Copy)]
pub struct Painted<'a> {
    painter: &'a Painter,
    text: &'a str,
}

impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.painter.active_code(self.text) {
            Some(code) => write!(f, "{}{}{}", code, self.text, RESET),
            None => f.write_str(self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ON: Styler = Styler::new(ColorMode::Always);
    const OFF: Styler = Styler::new(ColorMode::Never);

    #[test]
    fn test_encode_examples() {
        assert_eq!(ON.encode("red"), "\x1b[31m");
        assert_eq!(ON.encode("red+b"), "\x1b[1;31m");
        assert_eq!(ON.encode("red+b:white"), "\x1b[1;31;47m");
        assert_eq!(ON.encode("reset"), RESET);
        assert_eq!(ON.encode(""), "");
    }

    #[test]
    fn test_encode_disabled() {
        assert_eq!(OFF.encode("red"), "");
        assert_eq!(OFF.encode("reset"), "");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(ON.wrap("foo", "red"), "\x1b[31mfoo\x1b[0m");
        assert_eq!(ON.wrap("foo", ""), "foo");
        assert_eq!(OFF.wrap("foo", "red"), "foo");
    }

    #[test]
    fn test_wrap_empty_text_is_still_styled() {
        assert_eq!(ON.wrap("", "red"), "\x1b[31m\x1b[0m");
    }

    #[test]
    fn test_compiled_matches_one_shot() {
        for d in ["red", "red+bh", "blue:white+h", "reset", "nope+x"] {
            let painter = ON.compile(d);
            assert_eq!(painter.paint("text"), ON.wrap("text", d), "descriptor {:?}", d);
        }
    }

    #[test]
    fn test_compiled_skips_empty_text() {
        let painter = ON.compile("red");
        assert_eq!(painter.paint(""), "");
    }

    #[test]
    fn test_compile_empty_is_identity() {
        let painter = ON.compile("");
        assert!(painter.is_identity());
        assert_eq!(painter.code(), "");
        assert_eq!(painter.paint("hello"), "hello");
    }

    #[test]
    fn test_compile_under_disabled_mode() {
        let painter = OFF.compile("red");
        assert!(!painter.is_identity());
        assert_eq!(painter.code(), "");
        assert_eq!(painter.paint("hello"), "hello");
    }

    #[test]
    fn test_apply_to_display() {
        let painter = ON.compile("cyan+u");
        let rendered = format!("<{}>", painter.apply_to("x"));
        assert_eq!(rendered, "<\x1b[4;36mx\x1b[0m>");
    }

    #[test]
    fn test_styler_reports_mode() {
        assert_eq!(Styler::global().mode(), ColorMode::Global);
        assert!(ON.is_enabled());
        assert!(!OFF.is_enabled());
    }
}
