//! Tag body parsing: the characters between the open delimiter and the
//! open terminator.

use crate::format::{Attributes, Color, Format};

/// Color letters in hue order; uppercase selects the bright variant.
pub const COLOR_CHARS: &[u8; 8] = b"krgybmcw";
pub const COLOR_DEFAULT: u8 = b'd';
pub const COLOR_CURRENT: u8 = b';';
pub const RESET_CHAR: u8 = b'0';

/// Attribute characters, in legend order.
pub const ATTRIBUTE_CHARS: [(u8, Attributes); 9] = [
    (b'^', Attributes::OVERLINE),
    (b'_', Attributes::UNDERLINE),
    (b'*', Attributes::BOLD),
    (b'/', Attributes::ITALIC),
    (b'.', Attributes::DIM),
    (b'%', Attributes::REVERSED),
    (b'!', Attributes::BLINK),
    (b'=', Attributes::DOUBLE_UNDERLINE),
    (b'~', Attributes::STRIKETHROUGH),
];

/// At most a foreground and a background per tag.
const MAX_COLORS: u8 = 2;

/// Why a tag body was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BodyError {
    #[error("more than two colors")]
    TooManyColors,
    #[error("attribute '{}' used twice", as_char(.0))]
    DuplicateAttribute(u8),
    #[error("unexpected byte {0:#04x}")]
    Unexpected(u8),
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

/// A single recognized body character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Color { color: Color, bright: bool },
    Attribute(Attributes),
    Reset,
}

impl Token {
    pub fn classify(byte: u8) -> Option<Token> {
        if let Some(i) = COLOR_CHARS.iter().position(|&c| c == byte) {
            return Some(Token::Color {
                color: Color::HUES[i],
                bright: false,
            });
        }
        if let Some(i) = COLOR_CHARS
            .iter()
            .position(|&c| c.to_ascii_uppercase() == byte)
        {
            return Some(Token::Color {
                color: Color::HUES[i],
                bright: true,
            });
        }
        match byte {
            COLOR_DEFAULT => Some(Token::Color {
                color: Color::Default,
                bright: false,
            }),
            COLOR_CURRENT => Some(Token::Color {
                color: Color::Current,
                bright: false,
            }),
            RESET_CHAR => Some(Token::Reset),
            _ => ATTRIBUTE_CHARS
                .iter()
                .find(|(c, _)| *c == byte)
                .map(|(_, attr)| Token::Attribute(*attr)),
        }
    }
}

/// Accumulates one relative spec.
#[derive(Debug, Clone)]
pub struct TagBody {
    spec: Format,
    colors: u8,
    used: Attributes,
}

impl TagBody {
    pub fn new() -> Self {
        Self {
            spec: Format::empty(),
            colors: 0,
            used: Attributes::empty(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The relative spec parsed so far.
    pub fn spec(&self) -> &Format {
        &self.spec
    }

    /// Apply one body byte.
    pub fn accept(&mut self, byte: u8) -> Result<(), BodyError> {
        match Token::classify(byte).ok_or(BodyError::Unexpected(byte))? {
            Token::Color { color, bright } => {
                if self.colors >= MAX_COLORS {
                    return Err(BodyError::TooManyColors);
                }
                if self.colors == 0 {
                    self.spec.set_fg(color, bright);
                } else {
                    self.spec.set_bg(color, bright);
                }
                self.colors += 1;
            }
            Token::Attribute(attr) => {
                if self.used.contains(attr) {
                    return Err(BodyError::DuplicateAttribute(byte));
                }
                self.used |= attr;
                self.spec.set_attributes(self.spec.attributes() | attr);
            }
            Token::Reset => self.spec.reset = true,
        }
        Ok(())
    }

    /// Apply a run of body bytes, stopping at the first rejected one.
    pub fn accept_all(&mut self, bytes: &[u8]) -> Result<(), BodyError> {
        bytes.iter().try_for_each(|&b| self.accept(b))
    }
}

impl Default for TagBody {
    fn default() -> Self {
        Self::new()
    }
}
