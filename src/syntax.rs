//! Tag delimiter configuration.
//!
//! A [`TagSyntax`] names the three delimiters of the tag micro-language:
//!
//! ```text
//! {r*--bold red text--}
//! ^   ^^              ^^^
//! |   open_end        close
//! open
//! ```
//!
//! The grammar inside a tag body does not depend on the syntax; only the
//! delimiters change.

use std::borrow::Cow;
use std::fmt;

/// Errors raised while building or selecting a [`TagSyntax`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Custom syntax needs a non-empty {part} delimiter")]
    EmptyDelimiter { part: &'static str },

    #[error("Unknown syntax '{name}' (available: {available})")]
    UnknownPreset { name: String, available: String },
}

/// Delimiters of the tag language. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSyntax {
    name: Cow<'static, str>,
    open: Cow<'static, str>,
    open_end: Cow<'static, str>,
    close: Cow<'static, str>,
}

impl TagSyntax {
    /// `{<format>--text--}`
    pub const CLASSIC: TagSyntax = TagSyntax::preset("classic", "{", "--", "--}");
    /// `[<format>]text[/]`
    pub const BRACKET: TagSyntax = TagSyntax::preset("bracket", "[", "]", "[/]");
    /// `<<format>>text</>`
    pub const XML: TagSyntax = TagSyntax::preset("xml", "<", ">", "</>");

    const fn preset(
        name: &'static str,
        open: &'static str,
        open_end: &'static str,
        close: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            open: Cow::Borrowed(open),
            open_end: Cow::Borrowed(open_end),
            close: Cow::Borrowed(close),
        }
    }

    /// Build a syntax from caller-supplied delimiters. None may be empty.
    pub fn custom(
        open: impl Into<String>,
        open_end: impl Into<String>,
        close: impl Into<String>,
    ) -> Result<Self, SyntaxError> {
        let (open, open_end, close) = (open.into(), open_end.into(), close.into());
        for (part, value) in [("opening", &open), ("separator", &open_end), ("closing", &close)] {
            if value.is_empty() {
                return Err(SyntaxError::EmptyDelimiter { part });
            }
        }
        Ok(Self {
            name: Cow::Borrowed("custom"),
            open: Cow::Owned(open),
            open_end: Cow::Owned(open_end),
            close: Cow::Owned(close),
        })
    }

    /// Look up a preset by name.
    pub fn find(name: &str) -> Result<&'static TagSyntax, SyntaxError> {
        PRESETS
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| SyntaxError::UnknownPreset {
                name: name.to_string(),
                available: Self::preset_names().collect::<Vec<_>>().join(", "),
            })
    }

    /// All preset syntaxes.
    pub fn presets() -> &'static [TagSyntax] {
        &PRESETS
    }

    /// Names of all presets, in table order.
    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(TagSyntax::name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start of an opening tag (`{`).
    pub fn open(&self) -> &str {
        &self.open
    }

    /// End of an opening tag, between the format and the text (`--`).
    pub fn open_end(&self) -> &str {
        &self.open_end
    }

    /// Closing tag (`--}`).
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Longest delimiter, which bounds the automaton's pending buffer.
    pub fn max_delimiter_len(&self) -> usize {
        self.open.len().max(self.open_end.len()).max(self.close.len())
    }

    /// Wrap `text` in a tag with the given format body.
    pub fn wrap(&self, format: &str, text: &str) -> String {
        format!(
            "{}{}{}{}{}",
            self.open, format, self.open_end, text, self.close
        )
    }
}

impl Default for TagSyntax {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl fmt::Display for TagSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.wrap("<format>", "text"))
    }
}

static PRESETS: [TagSyntax; 3] = [TagSyntax::CLASSIC, TagSyntax::BRACKET, TagSyntax::XML];
