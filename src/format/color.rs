//! The eight base hues plus the two sentinels a tag can name.

/// A color slot value.
///
/// `Black`..`White` map to SGR offsets 0-7 and `Default` to offset 9 (the
/// terminal's own default color). `Current` means "inherit from the enclosing
/// style" and only appears in a relative spec; it never reaches the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    #[default]
    Default,
    Current,
}

impl Color {
    /// Base hues in tag-letter order (`krgybmcw`).
    pub const HUES: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// SGR offset of the terminal's default color (39 / 49).
    pub const DEFAULT_OFFSET: u8 = 9;

    /// Offset added to the SGR foreground/background base.
    ///
    /// Returns `None` for [`Color::Current`], which has no code of its own.
    pub const fn sgr_offset(self) -> Option<u8> {
        match self {
            Color::Black => Some(0),
            Color::Red => Some(1),
            Color::Green => Some(2),
            Color::Yellow => Some(3),
            Color::Blue => Some(4),
            Color::Magenta => Some(5),
            Color::Cyan => Some(6),
            Color::White => Some(7),
            Color::Default => Some(Self::DEFAULT_OFFSET),
            Color::Current => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Default => "default",
            Color::Current => "current",
        }
    }

    /// True for every value allowed in an absolute snapshot.
    pub const fn is_concrete(self) -> bool {
        !matches!(self, Color::Current)
    }
}
