//! Test helper utilities

#![allow(dead_code)]

use tagfmt::{format_bytes, Options, TagSyntax};

/// SGR sequence of the initial style, emitted first and on sanitize.
pub const INITIAL: &str = "\x1b[0;39;49m";

/// Format `input` and return the output as text.
pub fn render(input: &str, syntax: &TagSyntax, options: Options) -> String {
    let out = format_bytes(input.as_bytes(), syntax, options).expect("writing to a Vec");
    String::from_utf8(out).expect("output is UTF-8")
}

/// Format with the classic syntax and default options.
pub fn classic(input: &str) -> String {
    render(input, &TagSyntax::CLASSIC, Options::default())
}

/// Format with the classic syntax in strip mode.
pub fn stripped(input: &str) -> String {
    render(input, &TagSyntax::CLASSIC, strip())
}

/// Format with the classic syntax in strip mode with escapes enabled.
pub fn escaped(input: &str) -> String {
    render(
        input,
        &TagSyntax::CLASSIC,
        Options {
            escape: true,
            ..strip()
        },
    )
}

pub fn strip() -> Options {
    Options {
        strip: true,
        ..Options::default()
    }
}

/// Wrap an expected body in the baseline and the final reset.
pub fn framed(body: &str) -> String {
    format!("{INITIAL}{body}{INITIAL}")
}
