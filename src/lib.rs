//! # Stylecode - compact descriptors for ANSI-styled text
//!
//! `stylecode` turns short style descriptors such as `"red+b:white"` into
//! terminal escape sequences and wraps text with them.
//!
//! ## Descriptor format
//!
//! ```text
//! descriptor := "reset" | "" | fg_part [ ":" bg_part ]
//! fg_part    := color [ "+" flags ]
//! bg_part    := color [ "+" flags ]
//! color      := black | red | green | yellow | blue | magenta | cyan | white
//! flags      := b (bold) | B (blink) | u (underline) | h (high intensity) | i (inverse)
//! ```
//!
//! Flags may appear in any order and may repeat. On the background only `h`
//! has an effect. Nothing is ever rejected: unknown colors take code 0 and
//! unknown flags are ignored.
//!
//! ## Quick start
//!
//! ```rust
//! // One-shot: parse and wrap
//! let msg = stylecode::wrap("foo", "red+b:white");
//! assert_eq!(msg, "\x1b[1;31;47mfoo\x1b[0m");
//!
//! // Compile once, paint many times
//! let phosphor = stylecode::compile("green+h:black");
//! assert_eq!(phosphor.paint("Bring back the 80s!"), "\x1b[92;40mBring back the 80s!\x1b[0m");
//!
//! // Cache codes and build strings by hand
//! let lime = stylecode::encode("green+h:black");
//! let msg = format!("{}{}{}", lime, "fastest", stylecode::RESET);
//! # assert!(msg.ends_with("\x1b[0m"));
//! ```
//!
//! ## Disabling styling
//!
//! [`set_disabled`] flips a process-wide switch read by [`encode`], [`wrap`]
//! and every painter returned by [`compile`]. Code that prefers not to rely
//! on global state can use a [`Styler`] with an explicit [`ColorMode`].
//!
//! ## Themes and templates
//!
//! A [`Theme`] maps names to compiled descriptors and can be loaded from
//! YAML or JSON. [`register_filters`] exposes `ansi` and `style` filters to
//! MiniJinja templates.

mod filters;
mod mode;
pub mod style;
mod styler;
mod theme;

pub use filters::register_filters;
pub use mode::{is_disabled, set_disabled, ColorMode};
pub use style::{
    color_code, Attributes, Color, Descriptor, Layer, StyleSpec, COLOR_NAMES, CSI, RESET,
};
pub use styler::{Painted, Painter, Styler};
pub use theme::{Theme, ThemeError};

/// Returns the escape sequence for `descriptor`.
///
/// Returns an empty string when styling is disabled or `descriptor` is
/// empty, and [`RESET`] for `"reset"`.
///
/// ```rust
/// assert_eq!(stylecode::encode("red"), "\x1b[31m");
/// assert_eq!(stylecode::encode("red+b"), "\x1b[1;31m");
/// assert_eq!(stylecode::encode("reset"), stylecode::RESET);
/// ```
pub fn encode(descriptor: &str) -> String {
    Styler::global().encode(descriptor)
}

/// Surrounds `text` with the escape sequence for `descriptor` and a reset.
///
/// Returns `text` unchanged when styling is disabled or `descriptor` is
/// empty.
pub fn wrap(text: &str, descriptor: &str) -> String {
    Styler::global().wrap(text, descriptor)
}

/// Encodes `descriptor` once and returns a reusable [`Painter`].
///
/// The painter consults the process-wide switch each time it paints. An
/// empty descriptor yields the identity painter, which never styles.
pub fn compile(descriptor: &str) -> Painter {
    Styler::global().compile(descriptor)
}
