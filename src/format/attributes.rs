//! The nine toggleable text attributes as one bitmask.

use bitflags::bitflags;

use super::ansi;

bitflags! {
    /// Attribute set of a [`Format`](super::Format).
    ///
    /// Stored as a bitmask so a tag body can be applied with a single XOR:
    /// an attribute used an odd number of times across the open tags is on,
    /// an even number of times is off.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u16 {
        const REVERSED = 1 << 0;
        const BLINK = 1 << 1;
        const BOLD = 1 << 2;
        const ITALIC = 1 << 3;
        const UNDERLINE = 1 << 4;
        const OVERLINE = 1 << 5;
        const DOUBLE_UNDERLINE = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
        const DIM = 1 << 8;
    }
}

/// Attributes in the order their SGR codes are emitted.
const RENDER_ORDER: [(Attributes, u8); 9] = [
    (Attributes::BOLD, ansi::BOLD),
    (Attributes::DIM, ansi::DIM),
    (Attributes::ITALIC, ansi::ITALIC),
    (Attributes::UNDERLINE, ansi::UNDERLINE),
    (Attributes::BLINK, ansi::BLINK),
    (Attributes::REVERSED, ansi::REVERSED),
    (Attributes::STRIKETHROUGH, ansi::STRIKETHROUGH),
    (Attributes::DOUBLE_UNDERLINE, ansi::DOUBLE_UNDERLINE),
    (Attributes::OVERLINE, ansi::OVERLINE),
];

const NAMES: [(Attributes, &str); 9] = [
    (Attributes::REVERSED, "reversed"),
    (Attributes::BLINK, "blink"),
    (Attributes::BOLD, "bold"),
    (Attributes::ITALIC, "italic"),
    (Attributes::UNDERLINE, "underline"),
    (Attributes::OVERLINE, "overline"),
    (Attributes::DOUBLE_UNDERLINE, "double underline"),
    (Attributes::STRIKETHROUGH, "strikethrough"),
    (Attributes::DIM, "dim"),
];

impl Attributes {
    /// Human-readable name of a single attribute, `None` for other sets.
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|&(_, name)| name)
    }

    /// SGR codes of the set attributes, in fixed rendering order.
    pub fn sgr_codes(self) -> impl Iterator<Item = u8> {
        RENDER_ORDER
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, code)| code)
    }
}
