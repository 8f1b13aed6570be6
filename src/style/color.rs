//! The eight base colors and the name table used by descriptors.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One of the eight base terminal colors.
///
/// The discriminant is the color's offset from the intensity base, so
/// `Color::Red.code() + 30` is the SGR parameter for a red foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

/// Every supported color name, ordered by color code.
///
/// Exposed so tooling can enumerate all combinations.
pub const COLOR_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

const ALL: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

static COLOR_TABLE: Lazy<HashMap<&'static str, Color>> =
    Lazy::new(|| COLOR_NAMES.into_iter().zip(ALL).collect());

impl Color {
    /// Returns all colors in code order.
    pub fn all() -> [Color; 8] {
        ALL
    }

    /// Looks up a color by its exact lowercase name.
    pub fn from_name(name: &str) -> Option<Color> {
        COLOR_TABLE.get(name).copied()
    }

    /// Looks up a color by name, falling back to [`Color::Black`].
    ///
    /// Descriptors never reject unknown names; they take the table's
    /// lowest code instead.
    pub fn lookup(name: &str) -> Color {
        Self::from_name(name).unwrap_or_default()
    }

    /// Returns the color code in `0..=7`.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the descriptor name of this color.
    pub fn name(self) -> &'static str {
        COLOR_NAMES[self as usize]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the color code for `name`, or 0 when the name is unknown.
pub fn color_code(name: &str) -> u8 {
    Color::lookup(name).code()
}
