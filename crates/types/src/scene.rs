//! Scene: an abstract grid of styled pixels.
//!
//! A scene says *what* a cell shows (a symbol and two colors) and leaves the
//! glyph and escape-code choice to the terminal layer.

/// What a single pixel depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A text character, one terminal column wide
    Char(char),
    /// Empty field cell
    Space,
    /// Snake body segment
    Circle,
    /// Snake head
    Head,
    Apple,
    /// Border block
    Square,
}

impl Symbol {
    /// Field symbols take a full field cell; text takes a single column.
    pub fn is_text(&self) -> bool {
        matches!(self, Symbol::Char(_))
    }
}

/// Named terminal colors used by scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
}

/// One styled cell of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub symbol: Symbol,
    pub fg: Color,
    pub bg: Color,
}

impl Pixel {
    pub const fn new(symbol: Symbol, fg: Color) -> Self {
        Self {
            symbol,
            fg,
            bg: Color::Default,
        }
    }

    pub const fn text(ch: char, fg: Color) -> Self {
        Self::new(Symbol::Char(ch), fg)
    }
}

/// Rows of pixels making up one renderable frame.
///
/// Rows may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    rows: Vec<Vec<Pixel>>,
}

impl Scene {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn push_row(&mut self, row: Vec<Pixel>) {
        self.rows.push(row);
    }

    pub fn push_blank(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Append a row holding `text` in a single color.
    pub fn push_text(&mut self, text: &str, fg: Color) {
        self.rows.push(text_pixels(text, fg));
    }

    /// The text content of a row, field symbols as `?`.
    ///
    /// Mostly useful for assertions.
    pub fn row_text(&self, y: usize) -> String {
        self.rows
            .get(y)
            .map(|row| {
                row.iter()
                    .map(|p| match p.symbol {
                        Symbol::Char(c) => c,
                        Symbol::Space => ' ',
                        _ => '?',
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether any row's text contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.rows.len()).any(|y| self.row_text(y).contains(needle))
    }
}

/// Convert a string into text pixels.
pub fn text_pixels(text: &str, fg: Color) -> Vec<Pixel> {
    text.chars().map(|ch| Pixel::text(ch, fg)).collect()
}
