//! Decode emitted SGR sequences with a terminal parser and check the style
//! attached to every printed character.

use tagfmt::{format_bytes, Options, TagSyntax};
use vte::{Params, Parser, Perform};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Style {
    fg: Option<u16>,
    bg: Option<u16>,
    bold: bool,
    dim: bool,
    italic: bool,
    underline: bool,
    strike: bool,
}

#[derive(Default)]
struct Screen {
    style: Style,
    cells: Vec<(char, Style)>,
    sequences: usize,
}

impl Screen {
    fn apply_sgr(&mut self, params: &[u16]) {
        for &param in params {
            match param {
                0 => self.style = Style::default(),
                1 => self.style.bold = true,
                2 => self.style.dim = true,
                3 => self.style.italic = true,
                4 => self.style.underline = true,
                9 => self.style.strike = true,
                30..=37 | 90..=97 => self.style.fg = Some(param),
                39 => self.style.fg = None,
                40..=47 | 100..=107 => self.style.bg = Some(param),
                49 => self.style.bg = None,
                _ => {}
            }
        }
    }

    fn style_of(&self, c: char) -> Style {
        self.cells
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, style)| *style)
            .unwrap_or_else(|| panic!("'{c}' was not printed"))
    }

    fn text(&self) -> String {
        self.cells.iter().map(|(c, _)| c).collect()
    }
}

impl Perform for Screen {
    fn print(&mut self, c: char) {
        self.cells.push((c, self.style));
    }

    fn csi_dispatch(&mut self, params: &Params, _intermediates: &[u8], _ignore: bool, action: char) {
        if action != 'm' {
            return;
        }
        self.sequences += 1;
        let params: Vec<u16> = params
            .iter()
            .map(|p| p.first().copied().unwrap_or(0))
            .collect();
        self.apply_sgr(&params);
    }
}

fn decode(input: &str, syntax: &TagSyntax) -> Screen {
    let out = format_bytes(input.as_bytes(), syntax, Options::default()).unwrap();
    let mut screen = Screen::default();
    let mut parser = Parser::new();
    parser.advance(&mut screen, &out);
    screen
}

#[test]
fn printed_text_matches_stripped_text() {
    let screen = decode("a{r--b{*--c--}d--}e", &TagSyntax::CLASSIC);
    assert_eq!(screen.text(), "abcde");
}

#[test]
fn nested_styles_apply_per_character() {
    let screen = decode("a{r--b{*_--c--}d--}e", &TagSyntax::CLASSIC);

    assert_eq!(screen.style_of('a'), Style::default());
    assert_eq!(screen.style_of('b').fg, Some(31));
    assert!(!screen.style_of('b').bold);

    let c = screen.style_of('c');
    assert_eq!(c.fg, Some(31));
    assert!(c.bold && c.underline);

    assert_eq!(screen.style_of('d'), screen.style_of('b'));
    assert_eq!(screen.style_of('e'), Style::default());
}

#[test]
fn background_only_tag_keeps_foreground() {
    let screen = decode("{G--x{;m--y--}--}", &TagSyntax::BRACKET);
    // Classic tags mean nothing to the bracket syntax.
    assert_eq!(screen.text(), "{G--x{;m--y--}--}");

    let screen = decode("[G]x[;m]y[/][/]", &TagSyntax::BRACKET);
    assert_eq!(screen.style_of('x').fg, Some(92));
    let y = screen.style_of('y');
    assert_eq!(y.fg, Some(92));
    assert_eq!(y.bg, Some(45));
}

#[test]
fn toggled_attributes_clear_on_the_terminal() {
    let screen = decode("<*/>p<*>q</>r</>", &TagSyntax::XML);
    let p = screen.style_of('p');
    assert!(p.bold && p.italic);
    let q = screen.style_of('q');
    assert!(!q.bold && q.italic);
    assert_eq!(screen.style_of('r'), p);
}

#[test]
fn output_ends_in_initial_style() {
    let screen = decode("{r*~--unclosed", &TagSyntax::CLASSIC);
    assert_eq!(screen.style, Style::default());
    assert!(screen.style_of('u').strike);
    // baseline, one push, final reset
    assert_eq!(screen.sequences, 3);
}
