//! Unit tests for the tag automaton

use std::io;

use tagfmt::{Options, State, TagAutomaton, TagSyntax};

use crate::helpers::{classic, framed, render, strip, stripped, INITIAL};

const RED: &str = "\x1b[0;31;49m";
const BOLD: &str = "\x1b[0;1;39;49m";

// ============================================================================
// Basic scenarios
// ============================================================================

#[test]
fn red_tag_renders_push_and_pop() {
    let expected = framed(&format!("{RED}red{INITIAL}"));
    assert_eq!(classic("{r--red--}"), expected);
}

#[test]
fn strip_mode_drops_tags() {
    assert_eq!(stripped("{r--red--}"), "red");
}

#[test]
fn duplicate_attribute_prints_tag_verbatim() {
    assert_eq!(stripped("{**--text--}"), "{**--text--}");
    assert_eq!(classic("{**--text--}"), framed("{**--text--}"));
}

#[test]
fn plain_text_passes_through() {
    let text = "no tags here, just - dashes -- and } braces";
    assert_eq!(stripped(text), text);
}

#[test]
fn non_utf8_bytes_pass_through() {
    let out = tagfmt::format_bytes(b"\xff{r--\xfe--}", &TagSyntax::CLASSIC, strip()).unwrap();
    assert_eq!(out, b"\xff\xfe");
}

// ============================================================================
// Colors and attributes
// ============================================================================

#[test]
fn attributes_toggle_against_the_current_style() {
    let out = classic("{*--a{*--b--}c--}");
    let expected = framed(&format!("{BOLD}a{INITIAL}b{BOLD}c{INITIAL}"));
    assert_eq!(out, expected);
}

#[test]
fn current_color_keeps_the_foreground() {
    let out = classic("{r--a{;y--b--}--}");
    let expected = framed(&format!("{RED}a\x1b[0;31;43mb{RED}{INITIAL}"));
    assert_eq!(out, expected);
}

#[test]
fn uppercase_selects_bright_colors() {
    let out = classic("{RB--x--}");
    assert_eq!(out, framed(&format!("\x1b[0;91;104mx{INITIAL}")));
}

#[test]
fn colors_and_attributes_may_interleave() {
    let out = classic("{R*_B--x--}");
    assert_eq!(out, framed(&format!("\x1b[0;1;4;91;104mx{INITIAL}")));
}

#[test]
fn reset_starts_from_initial_style() {
    let out = classic("{r*--a{0g--b--}--}");
    let expected = framed(&format!(
        "\x1b[0;1;31;49ma\x1b[0;32;49mb\x1b[0;1;31;49m{INITIAL}"
    ));
    assert_eq!(out, expected);
}

#[test]
fn default_color_restores_terminal_colors() {
    let out = classic("{ry--{dd--x--}--}");
    let expected = framed(&format!("\x1b[0;31;43m{INITIAL}x\x1b[0;31;43m{INITIAL}"));
    assert_eq!(out, expected);
}

#[test]
fn every_attribute_has_a_code() {
    let out = classic("{%!*/_^=~.--x--}");
    assert_eq!(
        out,
        framed(&format!("\x1b[0;1;2;3;4;6;7;9;21;53;39;49mx{INITIAL}"))
    );
}

#[test]
fn empty_body_pushes_unchanged_style() {
    let out = classic("{r--{--x--}--}");
    assert_eq!(out, framed(&format!("{RED}{RED}x{RED}{INITIAL}")));
}

#[test]
fn dashes_inside_body_are_held_not_parsed() {
    assert_eq!(stripped("{-r-*--x--}"), "x");
    let expected = framed(&format!("\x1b[0;1;31;49mx{INITIAL}"));
    assert_eq!(classic("{r-*--x--}"), expected);
}

#[test]
fn third_color_abandons_tag() {
    assert_eq!(stripped("{rgb--x--}"), "{rgb--x--}");
}

#[test]
fn unknown_body_character_abandons_tag() {
    assert_eq!(stripped("{ not a tag --}"), "{ not a tag --}");
    assert_eq!(stripped("{x--y--}"), "{x--y--}");
}

// ============================================================================
// Unbalanced input
// ============================================================================

#[test]
fn close_without_open_is_literal() {
    assert_eq!(stripped("a--}b"), "a--}b");
    assert_eq!(classic("a--}b"), framed("a--}b"));
}

#[test]
fn extra_closes_are_literal_once_stack_is_empty() {
    assert_eq!(stripped("{r--x--}--}"), "x--}");
}

#[test]
fn unclosed_tag_is_sanitized_at_end() {
    assert_eq!(classic("{r--x"), framed(&format!("{RED}x")));
}

#[test]
fn no_sanitize_leaves_style_active() {
    let options = Options {
        sanitize: false,
        ..Options::default()
    };
    let out = render("{r--x", &TagSyntax::CLASSIC, options);
    assert_eq!(out, format!("{INITIAL}{RED}x"));
}

#[test]
fn incomplete_tag_at_end_is_flushed() {
    assert_eq!(stripped("abc{r-"), "abc{r-");
    assert_eq!(stripped("abc{"), "abc{");
    assert_eq!(stripped("x-"), "x-");
}

#[test]
fn dash_runs_stay_literal() {
    assert_eq!(stripped("a------b"), "a------b");
    assert_eq!(stripped("{r--a------}b--}"), "a----b--}");
}

// ============================================================================
// Other syntaxes
// ============================================================================

#[test]
fn bracket_syntax_round_trip() {
    let out = render("[r]red[/] plain", &TagSyntax::BRACKET, strip());
    assert_eq!(out, "red plain");
}

#[test]
fn xml_syntax_round_trip() {
    let out = render("<g*>green</> plain", &TagSyntax::XML, strip());
    assert_eq!(out, "green plain");
}

#[test]
fn xml_close_prefix_reparsed_as_open_tag() {
    let out = render("</*>x</>", &TagSyntax::XML, Options::default());
    assert_eq!(out, framed(&format!("\x1b[0;1;3;39;49mx{INITIAL}")));
}

#[test]
fn xml_lone_close_is_literal() {
    let out = render("a</>b", &TagSyntax::XML, strip());
    assert_eq!(out, "a</>b");
}

#[test]
fn xml_comparison_is_not_a_tag() {
    let out = render("if a < b && c > d", &TagSyntax::XML, strip());
    assert_eq!(out, "if a < b && c > d");
}

#[test]
fn identical_open_and_close_prefer_closing() {
    let syntax = TagSyntax::custom("|", ":", "|").unwrap();
    let out = render("|r:red| |g:green|", &syntax, strip());
    assert_eq!(out, "red green");
}

#[test]
fn multi_byte_custom_delimiters() {
    let syntax = TagSyntax::custom("<<", "::", ">>").unwrap();
    let out = render("a <<r::b>> c < d", &syntax, strip());
    assert_eq!(out, "a b c < d");
}

// ============================================================================
// Automaton API
// ============================================================================

#[test]
fn state_reflects_tag_progress() -> io::Result<()> {
    let mut out = Vec::new();
    let syntax = TagSyntax::CLASSIC;
    let mut automaton = TagAutomaton::new(&mut out, &syntax, strip())?;

    assert_eq!(automaton.state(), State::Default);
    automaton.accept(b'{')?;
    assert_eq!(automaton.state(), State::OpeningSpec);
    automaton.accept_all(b"r--")?;
    assert_eq!(automaton.state(), State::Default);
    assert_eq!(automaton.stack().depth(), 2);
    automaton.accept_all(b"x--}")?;
    assert_eq!(automaton.stack().depth(), 1);
    automaton.finish()?;

    assert_eq!(out, b"x");
    Ok(())
}

#[test]
fn failing_sink_reports_error() {
    struct Closed;

    impl io::Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let syntax = TagSyntax::CLASSIC;
    let err = TagAutomaton::new(Closed, &syntax, Options::default())
        .err()
        .expect("baseline write fails");
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
