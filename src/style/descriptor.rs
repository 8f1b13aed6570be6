//! Parsing of style descriptors and escape-sequence emission.
//!
//! A descriptor has the form `fg[+flags][:bg[+flags]]`, for example
//! `"red+b:white+h"`. Parsing never fails: unknown color names take code 0
//! and unknown flag characters are dropped.

use std::convert::Infallible;
use std::str::FromStr;

use super::attributes::Attributes;
use super::codes::{
    BLINK, BOLD, CSI, HIGH_INTENSITY_BG, HIGH_INTENSITY_FG, INVERSE, NORMAL_INTENSITY_BG,
    NORMAL_INTENSITY_FG, RESET, UNDERLINE,
};
use super::color::Color;

/// Descriptor text that stands for the reset sequence.
pub const RESET_KEYWORD: &str = "reset";

/// A color together with its attribute flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Layer {
    pub color: Color,
    pub attrs: Attributes,
}

impl Layer {
    /// Splits `part` on `+` into a color name and flags.
    fn parse(part: &str) -> (&str, Layer) {
        let (name, flags) = first_two(part, '+');
        let flags = flags.unwrap_or("");
        let layer = Layer {
            color: Color::lookup(name),
            attrs: Attributes::parse(flags),
        };
        (name, layer)
    }
}

/// Returns the text before the first `sep` and the section between the
/// first and second `sep`. Any further sections are dropped.
fn first_two(s: &str, sep: char) -> (&str, Option<&str>) {
    let mut sections = s.split(sep);
    let head = sections.next().unwrap_or("");
    (head, sections.next())
}

/// Parsed form of a styling descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleSpec {
    pub fg: Layer,
    pub bg: Option<Layer>,
}

impl StyleSpec {
    /// Parses `fg[+flags][:bg[+flags]]`.
    ///
    /// The background is only present when it names a color; `"red:"` and
    /// `"red:+h"` style the foreground alone.
    pub fn parse(descriptor: &str) -> StyleSpec {
        let (fg_part, bg_part) = first_two(descriptor, ':');
        let (_, fg) = Layer::parse(fg_part);
        let bg = bg_part
            .map(Layer::parse)
            .and_then(|(name, layer)| (!name.is_empty()).then_some(layer));
        StyleSpec { fg, bg }
    }

    /// Returns the SGR parameters this style emits, in output order.
    pub fn segments(&self) -> Vec<String> {
        const FG_FLAGS: [(Attributes, &str); 4] = [
            (Attributes::BOLD, BOLD),
            (Attributes::BLINK, BLINK),
            (Attributes::UNDERLINE, UNDERLINE),
            (Attributes::INVERSE, INVERSE),
        ];

        let mut segments: Vec<String> = FG_FLAGS
            .iter()
            .filter(|(flag, _)| self.fg.attrs.contains(*flag))
            .map(|(_, code)| (*code).to_string())
            .collect();

        let fg_base = if self.fg.attrs.is_high_intensity() {
            HIGH_INTENSITY_FG
        } else {
            NORMAL_INTENSITY_FG
        };
        segments.push((fg_base + self.fg.color.code()).to_string());

        if let Some(bg) = self.bg {
            let bg_base = if bg.attrs.is_high_intensity() {
                HIGH_INTENSITY_BG
            } else {
                NORMAL_INTENSITY_BG
            };
            segments.push((bg_base + bg.color.code()).to_string());
        }

        segments
    }

    /// Renders the full escape sequence, e.g. `"\x1b[1;31;47m"`.
    pub fn escape_code(&self) -> String {
        format!("{}{}m", CSI, self.segments().join(";"))
    }
}

/// A classified descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// The empty descriptor: no styling at all.
    Empty,
    /// The `"reset"` sentinel.
    Reset,
    Style(StyleSpec),
}

impl Descriptor {
    pub fn parse(descriptor: &str) -> Descriptor {
        match descriptor {
            "" => Descriptor::Empty,
            RESET_KEYWORD => Descriptor::Reset,
            other => Descriptor::Style(StyleSpec::parse(other)),
        }
    }

    /// Returns the escape sequence for this descriptor, ignoring any
    /// enable switch. Empty descriptors produce an empty string.
    pub fn escape_code(&self) -> String {
        match self {
            Descriptor::Empty => String::new(),
            Descriptor::Reset => RESET.to_string(),
            Descriptor::Style(spec) => spec.escape_code(),
        }
    }
}

impl FromStr for Descriptor {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Descriptor::parse(s))
    }
}

impl FromStr for StyleSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StyleSpec::parse(s))
    }
}
