//! SGR parameter constants used when building escape sequences.

/// Control Sequence Introducer that opens every escape sequence.
pub const CSI: &str = "\x1b[";

/// Escape sequence that returns the terminal to its default styling.
pub const RESET: &str = "\x1b[0m";

pub(crate) const NORMAL_INTENSITY_FG: u8 = 30;
pub(crate) const HIGH_INTENSITY_FG: u8 = 90;
pub(crate) const NORMAL_INTENSITY_BG: u8 = 40;
pub(crate) const HIGH_INTENSITY_BG: u8 = 100;

pub(crate) const BOLD: &str = "1";
pub(crate) const BLINK: &str = "5";
pub(crate) const UNDERLINE: &str = "4";
pub(crate) const INVERSE: &str = "7";
