//! tagfmt library
//!
//! Streams text through a byte-level state machine that replaces inline
//! style tags such as `{r*--bold red--}` with ANSI SGR sequences.

pub mod automaton;
pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod stack;
pub mod stream;
pub mod syntax;
pub mod texts;

pub use automaton::{Options, State, TagAutomaton};
pub use config::{Config, ConfigError};
pub use format::{Attributes, Color, Format};
pub use stack::FormatStack;
pub use stream::{format_bytes, format_reader, format_units};
pub use syntax::{SyntaxError, TagSyntax};
