//! Attribute flags parsed from the `+flags` part of a descriptor.

use bitflags::bitflags;

bitflags! {
    /// Attribute flags attached to a foreground or background color.
    ///
    /// Flags are parsed one character at a time, so order and repetition
    /// don't matter. Unknown characters are ignored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        /// `b`
        const BOLD = 1 << 0;
        /// `B`
        const BLINK = 1 << 1;
        /// `u`
        const UNDERLINE = 1 << 2;
        /// `h`, selects the high-intensity base offset.
        const HIGH_INTENSITY = 1 << 3;
        /// `i`
        const INVERSE = 1 << 4;
    }
}

impl Attributes {
    /// Parses a flag string such as `"bu"` or `"hB"`.
    pub fn parse(flags: &str) -> Attributes {
        flags.chars().fold(Attributes::empty(), |acc, c| {
            acc | match c {
                'b' => Attributes::BOLD,
                'B' => Attributes::BLINK,
                'u' => Attributes::UNDERLINE,
                'h' => Attributes::HIGH_INTENSITY,
                'i' => Attributes::INVERSE,
                _ => Attributes::empty(),
            }
        })
    }

    /// Returns `true` if the high-intensity flag is set.
    pub fn is_high_intensity(self) -> bool {
        self.contains(Attributes::HIGH_INTENSITY)
    }
}

impl std::fmt::Display for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const CHARS: [(Attributes, char); 5] = [
            (Attributes::BOLD, 'b'),
            (Attributes::BLINK, 'B'),
            (Attributes::UNDERLINE, 'u'),
            (Attributes::HIGH_INTENSITY, 'h'),
            (Attributes::INVERSE, 'i'),
        ];
        for (flag, c) in CHARS {
            if self.contains(flag) {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_flag() {
        assert_eq!(Attributes::parse("b"), Attributes::BOLD);
        assert_eq!(Attributes::parse("B"), Attributes::BLINK);
        assert_eq!(Attributes::parse("u"), Attributes::UNDERLINE);
        assert_eq!(Attributes::parse("h"), Attributes::HIGH_INTENSITY);
        assert_eq!(Attributes::parse("i"), Attributes::INVERSE);
    }

    #[test]
    fn test_parse_order_and_repeats() {
        assert_eq!(Attributes::parse("bu"), Attributes::parse("ub"));
        assert_eq!(Attributes::parse("bbb"), Attributes::BOLD);
    }

    #[test]
    fn test_parse_ignores_unknown() {
        assert_eq!(Attributes::parse("xyz"), Attributes::empty());
        assert_eq!(Attributes::parse("b?h"), Attributes::BOLD | Attributes::HIGH_INTENSITY);
        assert_eq!(Attributes::parse(""), Attributes::empty());
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Attributes::parse("hub").to_string(), "buh");
        assert_eq!(Attributes::empty().to_string(), "");
    }
}
