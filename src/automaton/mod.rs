//! The tag automaton.
//!
//! Consumes input one byte at a time and writes literal text plus SGR
//! sequences to an output sink. All state lives in one [`TagAutomaton`]:
//! the [`FormatStack`], a pending buffer of bytes that may still turn out to
//! be part of a delimiter, and the body of the tag currently being parsed.
//!
//! The pending buffer is bounded by the syntax: bytes that can no longer
//! extend a delimiter match are written out immediately.

mod body;
mod escape;
mod matcher;

pub use body::{
    BodyError, TagBody, Token, ATTRIBUTE_CHARS, COLOR_CHARS, COLOR_CURRENT, COLOR_DEFAULT, RESET_CHAR,
};
pub use escape::{is_whitespace, Escape, ESCAPE_CHAR, TRIM_ESCAPE};
pub use matcher::Matcher;

use std::io::{self, Write};

use tracing::debug;

use crate::format::Format;
use crate::stack::FormatStack;
use crate::syntax::TagSyntax;

/// Per-run switches supplied by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Parse tags but emit no control codes.
    pub strip: bool,
    /// Enable backslash escapes and `\#` whitespace trimming.
    pub escape: bool,
    /// Emit the initial style when the automaton finishes.
    pub sanitize: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strip: false,
            escape: false,
            sanitize: true,
        }
    }
}

/// Parser states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Plain text; the pending buffer holds a partial close delimiter.
    Default,
    /// After a backslash in escape mode.
    Escape,
    /// Matching a multi-byte open delimiter.
    OpeningTag,
    /// Inside a tag body, waiting for the open terminator.
    OpeningSpec,
    /// The tag so far is also a prefix of the close delimiter.
    ClosingTag,
    /// Dropping whitespace after `\#`.
    SkipWhitespace,
}

/// Streaming tag-to-SGR transformer for one unit of input.
///
/// Create one per stream or argument, feed it with [`accept`], then call
/// [`finish`]. Dropping an unfinished automaton finishes it on a best-effort
/// basis, ignoring write errors.
///
/// [`accept`]: TagAutomaton::accept
/// [`finish`]: TagAutomaton::finish
pub struct TagAutomaton<'s, W: Write> {
    out: W,
    syntax: &'s TagSyntax,
    options: Options,
    state: State,
    buffer: Vec<u8>,
    stack: FormatStack,
    body: TagBody,
    /// Trailing tag bytes that currently match a prefix of the open terminator.
    window: usize,
    /// The buffered tag may still be a close delimiter (close starts with open).
    close_candidate: bool,
    close: Matcher,
    open_end: Matcher,
    finished: bool,
}

impl<'s, W: Write> TagAutomaton<'s, W> {
    /// Create an automaton and emit the initial style as a known baseline.
    pub fn new(out: W, syntax: &'s TagSyntax, options: Options) -> io::Result<Self> {
        let mut automaton = Self {
            out,
            syntax,
            options,
            state: State::Default,
            buffer: Vec::with_capacity(syntax.max_delimiter_len() * 2),
            stack: FormatStack::new(),
            body: TagBody::new(),
            window: 0,
            close_candidate: false,
            close: Matcher::new(syntax.close()),
            open_end: Matcher::new(syntax.open_end()),
            finished: false,
        };
        let baseline = automaton.stack.top().to_ansi();
        automaton.emit_ansi(&baseline)?;
        Ok(automaton)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn stack(&self) -> &FormatStack {
        &self.stack
    }

    /// Bytes held back because they may still belong to a delimiter.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Process one input byte.
    pub fn accept(&mut self, byte: u8) -> io::Result<()> {
        if self.options.escape && byte == ESCAPE_CHAR && self.state != State::Escape {
            self.flush_buffer()?;
            self.body.reset();
            self.buffer.push(byte);
            self.state = State::Escape;
            return Ok(());
        }
        self.dispatch(byte)
    }

    /// Process a run of input bytes.
    pub fn accept_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        bytes.iter().try_for_each(|&b| self.accept(b))
    }

    /// Flush pending text and, when sanitizing, restore the initial style.
    pub fn finish(mut self) -> io::Result<()> {
        self.finalize()
    }

    fn finalize(&mut self) -> io::Result<()> {
        self.finished = true;
        self.flush_buffer()?;
        if self.options.sanitize {
            self.emit_ansi(&Format::initial().to_ansi())?;
        }
        self.out.flush()
    }

    fn dispatch(&mut self, byte: u8) -> io::Result<()> {
        match self.state {
            State::Default => self.on_default(byte),
            State::Escape => self.on_escape(byte),
            State::OpeningTag => self.on_opening_tag(byte),
            State::OpeningSpec => self.on_opening_spec(byte),
            State::ClosingTag => self.on_closing_tag(byte),
            State::SkipWhitespace => {
                if is_whitespace(byte) {
                    return Ok(());
                }
                self.state = State::Default;
                self.accept(byte)
            }
        }
    }

    fn on_default(&mut self, byte: u8) -> io::Result<()> {
        // In this state the buffer is exactly the matched part of the close delimiter.
        let matched = self.close.step(self.buffer.len(), byte);
        let closes = matched == self.close.len();

        if closes && self.stack.has_open_tags() {
            self.buffer.clear();
            return self.pop();
        }

        let syntax = self.syntax;
        let open = syntax.open().as_bytes();
        if byte == open[0] {
            self.flush_buffer()?;
            self.buffer.push(byte);
            if self.buffer == open {
                return self.opened();
            }
            self.state = State::OpeningTag;
            return Ok(());
        }

        self.buffer.push(byte);
        let keep = if closes {
            self.close.full_border()
        } else {
            matched
        };
        self.flush_prefix(self.buffer.len() - keep)
    }

    fn on_opening_tag(&mut self, byte: u8) -> io::Result<()> {
        let syntax = self.syntax;
        let open = syntax.open().as_bytes();
        self.buffer.push(byte);
        if self.buffer == open {
            return self.opened();
        }
        if open.starts_with(&self.buffer) {
            return Ok(());
        }
        self.flush_buffer()?;
        self.state = State::Default;
        Ok(())
    }

    /// The buffer holds a complete open delimiter.
    fn opened(&mut self) -> io::Result<()> {
        let syntax = self.syntax;
        let (open, close) = (syntax.open(), syntax.close());

        // Identical delimiters: closing wins while something is open.
        if open == close && self.stack.has_open_tags() {
            self.buffer.clear();
            return self.pop();
        }

        self.body.reset();
        self.window = 0;
        self.close_candidate = close.len() > open.len() && close.starts_with(open);
        self.state = State::OpeningSpec;
        Ok(())
    }

    fn on_opening_spec(&mut self, byte: u8) -> io::Result<()> {
        self.buffer.push(byte);

        if self.close_candidate {
            let syntax = self.syntax;
            let close = syntax.close().as_bytes();
            if close.starts_with(&self.buffer) {
                if self.buffer.len() == close.len() {
                    return self.closed();
                }
                self.state = State::ClosingTag;
                return Ok(());
            }
            self.close_candidate = false;
        }

        let matched = self.open_end.step(self.window, byte);
        if matched == self.open_end.len() {
            let code = self.stack.push(self.body.spec());
            self.buffer.clear();
            self.body.reset();
            self.window = 0;
            self.state = State::Default;
            return self.emit_ansi(&code);
        }

        // A byte that may belong to the terminator is held, never parsed.
        self.window = matched;
        if matched > 0 {
            return Ok(());
        }
        match self.body.accept(byte) {
            Ok(()) => Ok(()),
            Err(reason) => self.abandon(reason),
        }
    }

    fn on_closing_tag(&mut self, byte: u8) -> io::Result<()> {
        let syntax = self.syntax;
        let close = syntax.close().as_bytes();
        self.buffer.push(byte);
        if self.buffer == close {
            return self.closed();
        }
        if close.starts_with(&self.buffer) {
            return Ok(());
        }
        self.reevaluate_as_open()
    }

    /// The buffer holds a complete close delimiter reached through a tag start.
    fn closed(&mut self) -> io::Result<()> {
        self.state = State::Default;
        if self.stack.has_open_tags() {
            self.buffer.clear();
            return self.pop();
        }
        // Nothing to close: the delimiter is plain text.
        self.flush_buffer()
    }

    /// A would-be close delimiter diverged: parse the same bytes as a tag body.
    fn reevaluate_as_open(&mut self) -> io::Result<()> {
        let open_len = self.syntax.open().len();
        let replay = self.buffer.split_off(open_len);
        self.body.reset();
        self.window = 0;
        self.close_candidate = false;
        self.state = State::OpeningSpec;
        replay.into_iter().try_for_each(|b| self.dispatch(b))
    }

    /// Give up on the tag being parsed and print it verbatim.
    fn abandon(&mut self, reason: BodyError) -> io::Result<()> {
        debug!(
            tag = %String::from_utf8_lossy(&self.buffer),
            %reason,
            "abandoning malformed tag"
        );
        self.body.reset();
        self.window = 0;
        self.state = State::Default;
        self.flush_buffer()
    }

    fn on_escape(&mut self, byte: u8) -> io::Result<()> {
        self.buffer.clear();
        self.state = State::Default;
        match Escape::resolve(byte) {
            Escape::Byte(b) => self.out.write_all(&[b]),
            Escape::Trim => {
                self.state = State::SkipWhitespace;
                Ok(())
            }
            Escape::Verbatim(b) => self.out.write_all(&[ESCAPE_CHAR, b]),
        }
    }

    fn pop(&mut self) -> io::Result<()> {
        self.state = State::Default;
        let code = self.stack.pop();
        self.emit_ansi(&code)
    }

    fn emit_ansi(&mut self, code: &str) -> io::Result<()> {
        if self.options.strip {
            return Ok(());
        }
        self.out.write_all(code.as_bytes())
    }

    fn flush_buffer(&mut self) -> io::Result<()> {
        self.flush_prefix(self.buffer.len())
    }

    /// Write out the first `len` pending bytes as literal text.
    fn flush_prefix(&mut self, len: usize) -> io::Result<()> {
        if len == 0 {
            return Ok(());
        }
        self.out.write_all(&self.buffer[..len])?;
        self.buffer.drain(..len);
        Ok(())
    }
}

impl<W: Write> Drop for TagAutomaton<'_, W> {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.finalize();
        }
    }
}
