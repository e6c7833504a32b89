//! `OutputBuffer`: Single-write output buffer for ANSI sequences.

use crate::buffer::{Canvas, Modifiers, Rgb};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use std::io::{self, Write};

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write_all`
/// so a chart never appears half drawn.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Create a buffer sized for a canvas, with headroom for colour codes.
    pub fn for_canvas(canvas: &Canvas) -> Self {
        Self::with_capacity(canvas.len() * 8)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string verbatim.
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        queue!(self.data, Print(s))
    }

    /// Hide cursor.
    pub fn cursor_hide(&mut self) -> io::Result<()> {
        queue!(self.data, Hide)
    }

    /// Show cursor.
    pub fn cursor_show(&mut self) -> io::Result<()> {
        queue!(self.data, Show)
    }

    /// Set foreground color (true color).
    pub fn set_fg(&mut self, color: Rgb) -> io::Result<()> {
        queue!(self.data, SetForegroundColor(to_color(color)))
    }

    /// Set background color (true color).
    pub fn set_bg(&mut self, color: Rgb) -> io::Result<()> {
        queue!(self.data, SetBackgroundColor(to_color(color)))
    }

    /// Reset attributes, then apply `modifiers`.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) -> io::Result<()> {
        queue!(self.data, SetAttribute(Attribute::Reset))?;
        for (flag, attribute) in [
            (Modifiers::BOLD, Attribute::Bold),
            (Modifiers::DIM, Attribute::Dim),
            (Modifiers::ITALIC, Attribute::Italic),
            (Modifiers::UNDERLINE, Attribute::Underlined),
            (Modifiers::REVERSED, Attribute::Reverse),
        ] {
            if modifiers.contains(flag) {
                queue!(self.data, SetAttribute(attribute))?;
            }
        }
        Ok(())
    }

    /// Reset all attributes and colours.
    pub fn reset_attrs(&mut self) -> io::Result<()> {
        queue!(self.data, SetAttribute(Attribute::Reset), ResetColor)
    }

    /// Clear the entire screen and home the cursor.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.data, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Flush to a writer in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Emit the whole canvas, row by row.
///
/// Colour and attribute sequences are only emitted when they change from
/// the previous cell. Rows end with a colour reset so backgrounds never
/// bleed past the right edge, and the cursor is hidden while drawing.
pub fn render_full(canvas: &Canvas, output: &mut OutputBuffer) -> io::Result<()> {
    output.cursor_hide()?;

    for (y, row) in canvas.rows().enumerate() {
        if y > 0 {
            output.write_str("\r\n")?;
        }

        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_mods: Option<Modifiers> = None;

        for cell in row.iter().filter(|c| !c.is_wide_continuation()) {
            if last_mods != Some(cell.modifiers()) {
                output.set_modifiers(cell.modifiers())?;
                last_mods = Some(cell.modifiers());
                // Attribute reset also clears colours.
                last_fg = None;
                last_bg = None;
            }
            if last_fg != Some(cell.fg()) {
                output.set_fg(cell.fg())?;
                last_fg = Some(cell.fg());
            }
            if last_bg != Some(cell.bg()) {
                output.set_bg(cell.bg())?;
                last_bg = Some(cell.bg());
            }
            output.write_str(cell.symbol())?;
        }

        output.reset_attrs()?;
    }

    output.cursor_show()?;
    tracing::debug!(
        width = canvas.width(),
        height = canvas.height(),
        bytes = output.len(),
        "rendered canvas"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Cell;

    fn rendered(canvas: &Canvas) -> String {
        let mut output = OutputBuffer::for_canvas(canvas);
        render_full(canvas, &mut output).unwrap();
        String::from_utf8(output.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_render_hides_and_restores_cursor() {
        let canvas = Canvas::new(3, 2).unwrap();
        let text = rendered(&canvas);
        assert!(text.starts_with("\x1b[?25l"));
        assert!(text.ends_with("\x1b[0m\x1b[?25h"));
        assert_eq!(text.matches("\r\n").count(), 1);
    }

    #[test]
    fn test_render_emits_truecolor_once_per_run() {
        let mut canvas = Canvas::new(4, 1).unwrap();
        canvas.fill_rect(0, 0, 4, 1, Cell::fill(Rgb::new(0x31, 0x82, 0xBD)));
        let text = rendered(&canvas);
        assert_eq!(text.matches("\x1b[48;2;49;130;189m").count(), 1);
    }

    #[test]
    fn test_render_contains_labels() {
        let mut canvas = Canvas::new(12, 1).unwrap();
        canvas.put_str(1, 0, "Petrobras", 12, Cell::EMPTY.with_modifiers(Modifiers::BOLD));
        let text = rendered(&canvas);
        assert!(text.contains("Petrobras"));
        assert!(text.contains("\x1b[1m"));
    }

    #[test]
    fn test_flush_to_writer() {
        let mut output = OutputBuffer::new();
        output.write_str("hello").unwrap();
        let mut sink = Vec::new();
        output.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"hello");
        output.clear();
        assert!(output.is_empty());
    }

    #[test]
    fn test_clear_screen_sequence() {
        let mut output = OutputBuffer::new();
        output.clear_screen().unwrap();
        assert_eq!(output.as_bytes(), b"\x1b[2J\x1b[1;1H");
    }
}
