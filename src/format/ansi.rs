//! SGR (Select Graphic Rendition) codes used when rendering a [`Format`].
//!
//! [`Format`]: super::Format

/// Escape sequence introducer (`ESC [`).
pub const CSI: &str = "\x1b[";
/// Final byte of an SGR sequence.
pub const SGR_END: char = 'm';
/// Parameter separator.
pub const SEP: char = ';';

/// Base code for foreground colors (30-37, 39 for default).
pub const FG_BASE: u8 = 30;
/// Base code for background colors (40-47, 49 for default).
pub const BG_BASE: u8 = 40;
/// Added on top of the base for bright colors (90-97, 100-107).
pub const BRIGHT_OFFSET: u8 = 60;

pub const RESET: u8 = 0;
pub const BOLD: u8 = 1;
pub const DIM: u8 = 2;
pub const ITALIC: u8 = 3;
pub const UNDERLINE: u8 = 4;
/// Rapid blink. Slow blink (5) is ignored by enough terminals that 6 is used.
pub const BLINK: u8 = 6;
pub const REVERSED: u8 = 7;
pub const STRIKETHROUGH: u8 = 9;
pub const DOUBLE_UNDERLINE: u8 = 21;
pub const OVERLINE: u8 = 53;

/// Upper bound for a fully rendered sequence: `ESC [` + 12 codes + `m`.
pub const MAX_SEQ_LEN: usize = 48;
