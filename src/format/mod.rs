//! Terminal style records.
//!
//! A [`Format`] plays two roles:
//!
//! - **Absolute snapshot**: a fully resolved style, as stored on the
//!   [`FormatStack`](crate::stack::FormatStack) and rendered to the terminal.
//!   Colors are always concrete ([`Color::Default`] at worst).
//! - **Relative spec**: the parsed body of one tag. Colors may be
//!   [`Color::Current`] ("inherit"), attributes are toggles and `reset` asks to
//!   start over from [`Format::initial`] before applying the rest.
//!
//! Both roles share one representation; only relative specs may hold
//! `Color::Current`.

pub mod ansi;
mod attributes;
mod color;

pub use attributes::Attributes;
pub use color::Color;

use std::fmt::Write as _;

/// One terminal style: two colors, nine attributes and two control bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    pub fg: Color,
    pub fg_bright: bool,
    pub bg: Color,
    pub bg_bright: bool,
    pub attributes: Attributes,
    /// Relative spec: discard the inherited style first.
    /// Absolute snapshot: always set, rendering starts from SGR 0.
    pub reset: bool,
    valid: bool,
}

impl Format {
    /// The terminal's baseline: default colors, no attributes.
    pub const fn initial() -> Self {
        Self {
            fg: Color::Default,
            fg_bright: false,
            bg: Color::Default,
            bg_bright: false,
            attributes: Attributes::empty(),
            reset: true,
            valid: true,
        }
    }

    /// Seed for a tag body: inherits both colors and toggles nothing.
    pub const fn empty() -> Self {
        Self {
            fg: Color::Current,
            fg_bright: false,
            bg: Color::Current,
            bg_bright: false,
            attributes: Attributes::empty(),
            reset: false,
            valid: true,
        }
    }

    pub fn set_fg(&mut self, color: Color, bright: bool) {
        self.fg = color;
        self.fg_bright = bright;
    }

    pub fn set_bg(&mut self, color: Color, bright: bool) {
        self.bg = color;
        self.bg_bright = bright;
    }

    /// All nine attributes as one bitmask.
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// True when neither color slot holds [`Color::Current`].
    pub fn is_absolute(&self) -> bool {
        self.fg.is_concrete() && self.bg.is_concrete()
    }

    /// Render as a complete SGR sequence.
    ///
    /// The output always starts with a reset and then states every attribute
    /// and both colors explicitly, so it is correct regardless of what the
    /// terminal had active before.
    pub fn to_ansi(&self) -> String {
        debug_assert!(self.valid, "rendering an invalid format");
        debug_assert!(self.is_absolute(), "rendering a relative spec: {self:?}");

        let mut out = String::with_capacity(ansi::MAX_SEQ_LEN);
        out.push_str(ansi::CSI);
        let _ = write!(out, "{}", ansi::RESET);
        for code in self.attributes.sgr_codes() {
            let _ = write!(out, "{}{}", ansi::SEP, code);
        }
        let fg = color_code(ansi::FG_BASE, self.fg, self.fg_bright);
        let bg = color_code(ansi::BG_BASE, self.bg, self.bg_bright);
        let _ = write!(out, "{}{}{}{}", ansi::SEP, fg, ansi::SEP, bg);
        out.push(ansi::SGR_END);
        out
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::initial()
    }
}

fn color_code(base: u8, color: Color, bright: bool) -> u8 {
    // Current never reaches rendering in release builds; treat it as default.
    let offset = color.sgr_offset().unwrap_or(Color::DEFAULT_OFFSET);
    let bright = if bright { ansi::BRIGHT_OFFSET } else { 0 };
    base + offset + bright
}
