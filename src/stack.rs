//! The format stack: turns relative tag specs into absolute snapshots.

use tracing::trace;

use crate::format::{Color, Format};

/// LIFO of absolute snapshots.
///
/// Never empty: the bottom entry is [`Format::initial`] and stays for the
/// lifetime of the stack, so closing more tags than were opened is harmless.
#[derive(Debug, Clone)]
pub struct FormatStack {
    entries: Vec<Format>,
}

impl FormatStack {
    pub fn new() -> Self {
        Self {
            entries: vec![Format::initial()],
        }
    }

    /// Currently active style.
    pub fn top(&self) -> &Format {
        // The bottom entry is never popped.
        &self.entries[self.entries.len() - 1]
    }

    /// Number of entries, including the bottom one.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// True when at least one tag is open.
    pub fn has_open_tags(&self) -> bool {
        self.entries.len() > 1
    }

    /// Apply a relative spec on top of the current style and push the result.
    ///
    /// Returns the rendered SGR sequence of the new top.
    pub fn push(&mut self, spec: &Format) -> String {
        debug_assert!(spec.is_valid());

        let mut format = if spec.reset {
            Format::initial()
        } else {
            *self.top()
        };

        format.set_attributes(format.attributes() ^ spec.attributes());

        if spec.fg != Color::Current {
            format.set_fg(spec.fg, spec.fg_bright);
        }
        if spec.bg != Color::Current {
            format.set_bg(spec.bg, spec.bg_bright);
        }

        trace!(depth = self.entries.len() + 1, format = ?format, "push");
        self.entries.push(format);
        format.to_ansi()
    }

    /// Close the innermost tag, if any.
    ///
    /// Returns the rendered SGR sequence of the new top; at the bottom this
    /// re-emits the initial style without changing anything.
    pub fn pop(&mut self) -> String {
        if self.entries.len() > 1 {
            self.entries.pop();
            trace!(depth = self.entries.len(), "pop");
        } else {
            trace!("pop at bottom ignored");
        }
        self.top().to_ansi()
    }
}

impl Default for FormatStack {
    fn default() -> Self {
        Self::new()
    }
}
