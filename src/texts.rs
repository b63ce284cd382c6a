//! Built-in texts: the formatting legend and the demo input.
//!
//! Both are generated for a given [`TagSyntax`] so they show the delimiters
//! that are actually in effect.

use std::fmt::Write;

use crate::automaton::{ATTRIBUTE_CHARS, COLOR_CHARS, COLOR_CURRENT, COLOR_DEFAULT, RESET_CHAR};
use crate::format::Color;
use crate::syntax::TagSyntax;

/// Color letters with their names, base hues only.
fn color_rows() -> impl Iterator<Item = (char, &'static str)> {
    COLOR_CHARS
        .iter()
        .zip(Color::HUES)
        .map(|(&key, hue)| (char::from(key), hue.name()))
}

/// Attribute letters with their names, followed by the reset token.
fn attribute_rows() -> impl Iterator<Item = (char, &'static str)> {
    ATTRIBUTE_CHARS
        .iter()
        .map(|&(key, attr)| (char::from(key), attr.name().unwrap_or_default()))
        .chain([(char::from(RESET_CHAR), "reset all formatting")])
}

/// Compact reference of the tag language, printed by `--legend`.
pub fn legend(syntax: &TagSyntax) -> String {
    let mut out = String::new();
    let tag = syntax.wrap("<format>", "text");
    let example = syntax.wrap("%Yc*_", "foo");

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Tag ({}):  {tag}   e.g. {example}", syntax.name());
    out.push('\n');
    out.push_str("Colors                 Options\n");
    let colors = color_rows().chain([
        (char::from(COLOR_CURRENT), Color::Current.name()),
        (char::from(COLOR_DEFAULT), Color::Default.name()),
    ]);
    for ((key, name), (attr, attr_name)) in colors.zip(attribute_rows()) {
        let color = format!("[{key}] {name}");
        let _ = writeln!(out, "  {color:<20} [{attr}] {attr_name}");
    }
    out.push_str("  CAPS = bright\n");
    out.push('\n');
    out.push_str("Escapes (-e)\n");
    out.push_str("  \\# trim following whitespace\n");
    out.push_str("  \\\\ \\a \\b \\r \\n \\f \\t \\v\n");
    out.push('\n');
    out.push_str("Rules\n");
    out.push_str("  1st color is the foreground, 2nd the background\n");
    out.push_str("  [;] is the color on top of the stack\n");
    out.push_str("  [d] is the terminal's default color\n");
    out.push_str("  options toggle (XOR) against the current style\n");
    out.push_str("  a malformed tag is printed as-is\n");
    out.push_str("  unclosed tags are reset at the end (unless -S)\n");
    out
}

/// Demo input exercising every color, attribute and escape.
pub fn demo(syntax: &TagSyntax) -> String {
    let w = |format: &str, text: &str| syntax.wrap(format, text);
    let mut out = String::new();

    for (key, name) in color_rows() {
        let upper = key.to_ascii_uppercase();
        let fg_on = if key == 'k' { "w" } else { ";" };
        let bg_on = if key == 'k' { ";" } else { "k" };
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            w(&format!("{key}{fg_on}"), &format!("{name:<8} fg ")),
            w(&format!("{upper}{fg_on}"), &format!("{name:<8} bright fg ")),
            w(&format!("{bg_on}{key}"), &format!("{name:<8} bg ")),
            w(&format!("{bg_on}{upper}"), &format!("{name:<8} bright bg ")),
        );
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "| {} |",
        w(
            "rk",
            &format!("red context  {}  red context", w(";w*", "white bg, current fg, bold"))
        )
    );
    let _ = writeln!(
        out,
        "| {} |",
        w(
            "ry",
            &format!("red context  {}  red context", w("dd", "default fg and bg"))
        )
    );
    out.push('\n');

    // A leading `;` keeps a lone `/` body from reading as a close delimiter.
    for (key, name) in attribute_rows() {
        let _ = writeln!(out, "| ({key}) {} |", w(&format!(";{key}"), &format!("{name:<22}")));
    }
    out.push('\n');

    let nested = [
        ("*", "bold"),
        (";/", "italic"),
        ("_", "underline"),
        (".", "dim"),
        ("%", "reverse"),
        ("~", "crossed"),
        ("!", "blink"),
    ]
    .iter()
    .rev()
    .fold(String::from("innermost"), |inner, &(key, name)| {
        w(key, &format!("{name} {inner} /{name}"))
    });
    let _ = writeln!(out, "| stack: {}", w("", &format!("normal {nested} /normal")));
    let _ = writeln!(
        out,
        "| toggle: {}",
        w("_", &format!("+under {} +under", w("_", "-under")))
    );
    out.push('\n');

    out.push_str("| UTF-8:\n");
    let _ = writeln!(out, "|   {}", w("%", &format!("你好，{}", w("*", "世界"))));
    let _ = writeln!(
        out,
        "|   {}",
        w(
            "r",
            &format!(
                "∮ E⋅da = Q, {}, ∑ f(i) = ∏ g(i), {} α ∧ ¬β",
                w("b", "n → ∞"),
                w("g", "∀x∈ ℝ :")
            )
        )
    );
    out.push('\n');

    out.push_str("| escapes (only with -e); (X) means the escape did not apply, (O) that it did\n");
    out.push_str("| \\\\\\\\ backslash: \\\\\n");
    out.push_str("| \\\\n newline:\\n^^^^^^^^\n");
    out.push_str("| \\\\a alert \\a\n");
    out.push_str("| \\\\b backspace: (X\\bO)\n");
    out.push_str("| \\\\r: (X) carriage return\\r| \\\\r: (O)\n");
    out.push_str("| \\\\t tab: a\\tb\\tc\\td\n");
    out.push_str("| \\\\# trim: (\\#          trimmed\\#          )\n");
    out
}
