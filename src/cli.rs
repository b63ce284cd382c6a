//! CLI definitions for tagfmt
//!
//! The clap structure lives here rather than in main.rs so xtask can render
//! man pages and the flag reference from it.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::builder::PossibleValuesParser;
use clap::Parser;
use clap_complete::Shell as CompletionShell;

use crate::syntax::TagSyntax;

/// Build clap styles for help and error output.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version line printed by `-v`: the crate version, plus the commit for dev builds.
pub fn version_string() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !sha.is_empty() => {
            let short = sha.get(..7).unwrap_or(sha);
            format!("tagfmt {} ({short})", env!("CARGO_PKG_VERSION"))
        }
        _ => format!("tagfmt {}", env!("CARGO_PKG_VERSION")),
    }
}

#[derive(Debug, Parser)]
#[command(name = "tagfmt")]
#[command(about = "Translate inline style tags into ANSI terminal formatting")]
#[command(
    long_about = "Translate inline style tags like '{<format>--' and '--}' into ANSI formatting.

With no STRINGS, input is read from stdin. Otherwise each string is translated
on its own and the results are separated by one space. Quote arguments that
contain spaces or shell metacharacters.

Formats live on a stack, but tags do not have to be balanced. Every tag is
translated as soon as it is read, so a missing closing tag leaves its style
active until the final reset. Anything that does not parse as a tag is
printed unchanged.

EXAMPLES:
    tagfmt '{r--red--} {R--BRIGHT RED--}'
    tagfmt '{RB*--bright red on bright blue, bold--}'
    tagfmt '{r--red text {;y--on yellow--} and red again--}'
    tagfmt -s '{*--bold--} in a terminal, plain in a file' > out.txt
    tagfmt -e 'no padding:\\#    <trimmed>'
    tagfmt --syntax xml '<g>green</> text'
    echo '{/--piped--}' | tagfmt

Run with -l for the full legend, or --demo to see every style.
Settings can be stored in ~/.config/tagfmt/config.toml."
)]
#[command(disable_version_flag = true)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Print version string
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Show formatting legend
    #[arg(short, long)]
    pub legend: bool,

    /// Strip formatting tags from input
    #[arg(short, long)]
    pub strip: bool,

    /// Enable C-like escape sequences (\a \b \r \n \f \t \v \\ and \# to trim)
    #[arg(short, long)]
    pub escape: bool,

    /// Do not insert a format reset at the end of input
    #[arg(short = 'S', long)]
    pub no_sanitize: bool,

    /// Format the built-in demo text
    #[arg(long, conflicts_with = "strings")]
    pub demo: bool,

    /// Tag syntax preset
    #[arg(long, value_name = "NAME", value_parser = PossibleValuesParser::new(TagSyntax::preset_names()))]
    pub syntax: Option<String>,

    /// Custom tag delimiters
    #[arg(
        long,
        num_args = 3,
        value_names = ["OPEN", "OPEN_END", "CLOSE"],
        conflicts_with = "syntax"
    )]
    pub custom_syntax: Option<Vec<String>>,

    /// Print shell completions
    #[arg(long, value_name = "SHELL", value_enum, hide = true)]
    pub completions: Option<CompletionShell>,

    /// Strings to format; stdin is read when none are given
    #[arg(value_parser = clap::value_parser!(OsString))]
    pub strings: Vec<OsString>,
}

/// Bytes of one command-line argument, as passed by the OS where possible.
#[cfg(unix)]
fn arg_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(arg.as_bytes())
}

#[cfg(not(unix))]
fn arg_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    match arg.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

impl Cli {
    /// Positional strings as raw bytes, invalid UTF-8 included.
    pub fn string_units(&self) -> impl Iterator<Item = Cow<'_, [u8]>> {
        self.strings.iter().map(|s| arg_bytes(s))
    }

    /// Syntax chosen on the command line, if any.
    pub fn syntax_override(&self) -> Option<Result<TagSyntax, crate::syntax::SyntaxError>> {
        // clap enforces exactly three values
        if let Some([open, open_end, close]) = self.custom_syntax.as_deref() {
            return Some(TagSyntax::custom(open.as_str(), open_end.as_str(), close.as_str()));
        }
        self.syntax
            .as_deref()
            .map(|name| TagSyntax::find(name).cloned())
    }
}
