//! Terminal module: ANSI output for rendered canvases.

mod output;

pub use output::{render_full, OutputBuffer};

/// Size used when the terminal cannot report its own.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Current terminal size in columns and rows, or [`FALLBACK_SIZE`] when
/// stdout is not a terminal.
pub fn size_or_default() -> (u16, u16) {
    match crossterm::terminal::size() {
        Ok((width, height)) if width > 0 && height > 0 => (width, height),
        Ok(_) => FALLBACK_SIZE,
        Err(err) => {
            tracing::debug!(%err, "terminal size unavailable, using fallback");
            FALLBACK_SIZE
        }
    }
}
