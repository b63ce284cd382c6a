//! Drivers that run whole units of input through a fresh [`TagAutomaton`].
//!
//! A unit is either a reader (stdin, the demo text) or one positional
//! argument. Every unit starts from the initial style and is finished, and
//! therefore sanitized, before the next one begins.

use std::io::{self, BufRead, BufReader, Read, Write};

use tracing::debug;

use crate::automaton::{Options, TagAutomaton};
use crate::syntax::TagSyntax;

/// Separator written between positional arguments.
pub const UNIT_SEPARATOR: &[u8] = b" ";

/// Format everything readable from `reader` into `out`.
pub fn format_reader<R: Read, W: Write>(
    reader: R,
    out: W,
    syntax: &TagSyntax,
    options: Options,
) -> io::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut automaton = TagAutomaton::new(out, syntax, options)?;
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        automaton.accept_all(chunk)?;
        reader.consume(len);
    }
    automaton.finish()
}

/// Format each unit independently, separated by a single space.
pub fn format_units<I, W>(
    units: I,
    mut out: W,
    syntax: &TagSyntax,
    options: Options,
) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
    W: Write,
{
    for (index, unit) in units.into_iter().enumerate() {
        if index > 0 {
            out.write_all(UNIT_SEPARATOR)?;
        }
        let unit = unit.as_ref();
        debug!(index, len = unit.len(), "formatting argument");
        let mut automaton = TagAutomaton::new(&mut out, syntax, options)?;
        automaton.accept_all(unit)?;
        automaton.finish()?;
    }
    out.flush()
}

/// Format an in-memory buffer and return the produced bytes.
pub fn format_bytes(input: &[u8], syntax: &TagSyntax, options: Options) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() + 32);
    format_units([input], &mut out, syntax, options)?;
    Ok(out)
}
