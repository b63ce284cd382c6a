//! Backslash escapes (enabled with `--escape`).

/// Starts an escape sequence.
pub const ESCAPE_CHAR: u8 = b'\\';
/// `\#` drops all whitespace that follows it.
pub const TRIM_ESCAPE: u8 = b'#';

/// What an escape sequence resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// Emit this byte.
    Byte(u8),
    /// Start skipping whitespace.
    Trim,
    /// Not an escape: emit the backslash and the byte unchanged.
    Verbatim(u8),
}

impl Escape {
    pub fn resolve(byte: u8) -> Escape {
        match byte {
            ESCAPE_CHAR => Escape::Byte(ESCAPE_CHAR),
            b'a' => Escape::Byte(0x07),
            b'b' => Escape::Byte(0x08),
            b'r' => Escape::Byte(b'\r'),
            b'n' => Escape::Byte(b'\n'),
            b'f' => Escape::Byte(0x0c),
            b't' => Escape::Byte(b'\t'),
            b'v' => Escape::Byte(0x0b),
            TRIM_ESCAPE => Escape::Trim,
            other => Escape::Verbatim(other),
        }
    }
}

/// Whitespace as consumed by `\#`: space, tab, newline, vertical tab,
/// form feed and carriage return.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
