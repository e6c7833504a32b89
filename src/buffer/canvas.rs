//! Canvas: the cell grid a chart is rasterised onto.
//!
//! Cells are stored contiguously in row-major order:
//! `index = y * width + x`.

use super::cell::{Cell, CellFlags};
use crate::error::{Result, TreemapError};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Replacement for graphemes that do not fit inline in a cell.
const REPLACEMENT: char = '\u{FFFD}';

/// A grid of cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Canvas {
    /// Create a canvas filled with [`Cell::EMPTY`].
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TreemapError::EmptyCanvas { width, height });
        }
        let size = usize::from(width) * usize::from(height);
        Ok(Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
        })
    }

    /// Get the canvas width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the canvas height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed canvas.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        match self.index_of(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill a rectangular area with a cell, clipped to the canvas.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, cell: Cell) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                if let Some(idx) = self.index_of(col, row) {
                    self.cells[idx] = cell;
                }
            }
        }
    }

    /// Write `text` starting at (x, y), using `style` for colours,
    /// modifiers and flags.
    ///
    /// At most `max_width` columns are written, and never past the right
    /// edge of the canvas. A wide grapheme that would straddle the limit
    /// is dropped. Returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Cell) -> u16 {
        if y >= self.height {
            return 0;
        }
        let limit = x.saturating_add(max_width).min(self.width);
        let mut col = x;

        for grapheme in text.graphemes(true) {
            let width = grapheme.width().min(2);
            if width == 0 {
                continue;
            }
            #[allow(clippy::cast_possible_truncation)]
            let width = width as u16;
            if col.saturating_add(width) > limit {
                break;
            }

            let cell = Cell::from_grapheme(grapheme)
                .unwrap_or_else(|| Cell::from_char(REPLACEMENT))
                .with_fg(style.fg())
                .with_bg(style.bg())
                .with_modifiers(style.modifiers())
                .with_flags(style.flags());
            self.set(col, y, cell);
            if width == 2 {
                self.set(col + 1, y, Cell::wide_continuation(style.bg()).with_flags(style.flags()));
            }
            col += width;
        }

        col - x
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width))
    }

    /// Count cells carrying the given flags.
    pub fn count_flagged(&self, flags: CellFlags) -> usize {
        self.cells.iter().filter(|c| c.flags().contains(flags)).count()
    }

    /// Render symbols only, one line per row.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + usize::from(self.height));
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for cell in row.iter().filter(|c| !c.is_wide_continuation()) {
                out.push_str(cell.symbol());
            }
        }
        out
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Display width of `text` in terminal columns.
pub fn text_width(text: &str) -> usize {
    text.width()
}

/// Longest prefix of `text` (on grapheme boundaries) that fits in
/// `max_width` columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let width = grapheme.width();
        if used + width > max_width {
            return &text[..offset];
        }
        used += width;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;

    #[test]
    fn test_canvas_new() {
        let canvas = Canvas::new(80, 24).unwrap();
        assert_eq!(canvas.width(), 80);
        assert_eq!(canvas.height(), 24);
        assert_eq!(canvas.len(), 80 * 24);
    }

    #[test]
    fn test_canvas_zero_size() {
        let err = Canvas::new(0, 24).unwrap_err();
        assert!(matches!(err, TreemapError::EmptyCanvas { width: 0, height: 24 }));
    }

    #[test]
    fn test_canvas_bounds() {
        let canvas = Canvas::new(80, 24).unwrap();
        assert!(canvas.get(79, 23).is_some());
        assert!(canvas.get(80, 23).is_none());
        assert!(canvas.get(79, 24).is_none());
        assert_eq!(canvas.index_of(5, 10), Some(10 * 80 + 5));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        let red = Cell::fill(Rgb::new(255, 0, 0));
        canvas.fill_rect(2, 1, 10, 10, red);
        assert_eq!(canvas.get(1, 1).unwrap().bg(), Rgb::BLACK);
        assert_eq!(canvas.get(2, 1).unwrap().bg(), Rgb::new(255, 0, 0));
        assert_eq!(canvas.get(3, 2).unwrap().bg(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_put_str() {
        let mut canvas = Canvas::new(10, 1).unwrap();
        let written = canvas.put_str(2, 0, "Vale", 10, Cell::EMPTY.with_fg(Rgb::BLACK));
        assert_eq!(written, 4);
        assert_eq!(canvas.to_plain_text(), "  Vale    ");
        assert_eq!(canvas.get(2, 0).unwrap().fg(), Rgb::BLACK);
    }

    #[test]
    fn test_put_str_limits_width() {
        let mut canvas = Canvas::new(6, 1).unwrap();
        assert_eq!(canvas.put_str(0, 0, "Petrobras", 4, Cell::EMPTY), 4);
        assert_eq!(canvas.to_plain_text(), "Petr  ");
        assert_eq!(canvas.put_str(4, 0, "Itaú", 10, Cell::EMPTY), 2);
        assert_eq!(canvas.to_plain_text(), "PetrIt");
    }

    #[test]
    fn test_put_str_wide() {
        let mut canvas = Canvas::new(5, 1).unwrap();
        assert_eq!(canvas.put_str(0, 0, "日本語", 5, Cell::EMPTY), 4);
        assert!(canvas.get(1, 0).unwrap().is_wide_continuation());
        assert_eq!(canvas.to_plain_text(), "日本 ");
    }

    #[test]
    fn test_put_str_oversized_grapheme() {
        let mut canvas = Canvas::new(3, 1).unwrap();
        canvas.put_str(0, 0, "a👨‍👩‍👧", 3, Cell::EMPTY);
        assert_eq!(canvas.get(0, 0).unwrap().symbol(), "a");
        assert_eq!(canvas.get(1, 0).unwrap().symbol(), "\u{FFFD}");
    }

    #[test]
    fn test_count_flagged() {
        let mut canvas = Canvas::new(8, 2).unwrap();
        canvas.put_str(0, 1, "Ambev", 8, Cell::EMPTY.with_flags(CellFlags::LABEL));
        assert_eq!(canvas.count_flagged(CellFlags::LABEL), 5);
        canvas.clear();
        assert_eq!(canvas.count_flagged(CellFlags::LABEL), 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Bradesco", 3), "Bra");
        assert_eq!(truncate_to_width("Itaú", 10), "Itaú");
        assert_eq!(truncate_to_width("日本", 3), "日");
        assert_eq!(text_width("日本"), 4);
    }
}
