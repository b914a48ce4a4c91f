//! SceneView: maps an abstract [`Scene`] onto a [`FrameBuffer`].
//!
//! This is the symbol/color table of the render path. Text pixels take one
//! terminal column; field pixels (snake, apple, border, empty) take
//! `cell_w` columns so that a square font shows square cells.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, Pixel, Scene, Symbol};

#[derive(Debug, Clone, Copy)]
pub struct SceneView {
    /// Terminal columns per field pixel.
    pub cell_w: u16,
}

impl Default for SceneView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl SceneView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Columns a pixel occupies.
    pub fn pixel_width(&self, pixel: &Pixel) -> u16 {
        if pixel.symbol.is_text() {
            1
        } else {
            self.cell_w
        }
    }

    /// Columns needed to show `row`.
    pub fn row_width(&self, row: &[Pixel]) -> u16 {
        row.iter()
            .fold(0u16, |w, p| w.saturating_add(self.pixel_width(p)))
    }

    /// Framebuffer size that fits the whole scene.
    pub fn size_of(&self, scene: &Scene) -> (u16, u16) {
        let w = scene
            .rows()
            .iter()
            .map(|row| self.row_width(row))
            .max()
            .unwrap_or(0);
        let h = u16::try_from(scene.height()).unwrap_or(u16::MAX);
        (w, h)
    }

    /// Render `scene` into `fb`, resizing it to fit.
    pub fn render_into(&self, scene: &Scene, fb: &mut FrameBuffer) {
        let (w, h) = self.size_of(scene);
        fb.resize(w, h);
        fb.clear(Default::default());

        for (y, row) in scene.rows().iter().enumerate() {
            let Ok(y) = u16::try_from(y) else { break };
            let mut x = 0u16;
            for pixel in row {
                let style = style_of(pixel);
                let width = self.pixel_width(pixel);
                match pixel.symbol {
                    Symbol::Char(ch) => fb.put_char(x, y, ch, style),
                    other => {
                        let ch = glyph(other);
                        for dx in 0..width {
                            fb.put_char(x.saturating_add(dx), y, ch, style);
                        }
                    }
                }
                x = x.saturating_add(width);
            }
        }
    }
}

/// Glyph repeated across a field pixel.
pub fn glyph(symbol: Symbol) -> char {
    match symbol {
        Symbol::Char(ch) => ch,
        Symbol::Space => ' ',
        Symbol::Circle => '█',
        Symbol::Head => '▓',
        Symbol::Apple => '●',
        Symbol::Square => '▀',
    }
}

pub fn rgb_of(color: Color, fallback: Rgb) -> Rgb {
    match color {
        Color::Default => fallback,
        Color::Black => Rgb::new(0, 0, 0),
        Color::Red => Rgb::new(205, 49, 49),
        Color::Green => Rgb::new(13, 188, 121),
        Color::Yellow => Rgb::new(229, 229, 16),
    }
}

fn style_of(pixel: &Pixel) -> CellStyle {
    CellStyle {
        fg: rgb_of(pixel.fg, CellStyle::DEFAULT_FG),
        bg: rgb_of(pixel.bg, CellStyle::DEFAULT_BG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::text_pixels;

    #[test]
    fn text_takes_one_column_field_takes_two() {
        let view = SceneView::default();
        let mut row = text_pixels("ab", Color::Default);
        row.push(Pixel::new(Symbol::Circle, Color::Green));
        assert_eq!(view.row_width(&row), 4);
    }

    #[test]
    fn render_paints_glyph_across_cell_width() {
        let view = SceneView::default();
        let mut scene = Scene::new();
        scene.push_row(vec![
            Pixel::new(Symbol::Head, Color::Green),
            Pixel::new(Symbol::Apple, Color::Red),
        ]);
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&scene, &mut fb);
        assert_eq!(fb.row_string(0), "▓▓●●");
        let apple = fb.get(3, 0).unwrap();
        assert_eq!(apple.style.fg, Rgb::new(205, 49, 49));
        assert_eq!(apple.style.bg, CellStyle::DEFAULT_BG);
    }

    #[test]
    fn ragged_rows_pad_with_blanks() {
        let view = SceneView::new(1);
        let mut scene = Scene::new();
        scene.push_text("long line", Color::Default);
        scene.push_text("x", Color::Default);
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&scene, &mut fb);
        assert_eq!((fb.width(), fb.height()), (9, 2));
        assert_eq!(fb.row_string(1), "x        ");
    }

    #[test]
    fn empty_scene_is_zero_sized() {
        let view = SceneView::default();
        assert_eq!(view.size_of(&Scene::new()), (0, 0));
    }
}
