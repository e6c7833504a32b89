//! TreeMap chart: labelled, coloured tiles drawn onto a [`Canvas`].
//!
//! The chart owns the data, the parallel label list and a palette. It
//! lays the data out in chart units (`ChartConfig::region`), then scales
//! the tiles onto the canvas grid. Tile edges are snapped by rounding, and
//! neighbouring tiles share an edge value, so the snapped tiles also cover
//! the canvas without gaps.

use crate::buffer::{text_width, truncate_to_width, Canvas, Cell, CellFlags, Modifiers, Rgb};
use crate::error::{Result, TreemapError};
use crate::layout::{layout, Rect};
use crate::palette::Palette;
use crate::terminal::{render_full, OutputBuffer};
use std::io::Write;
use std::str::FromStr;

/// Configuration for chart layout and drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Region the data is laid out in, in chart units.
    pub region: Rect,
    /// Separator colour drawn on the far edge of each tile; `None`
    /// disables separators.
    pub border: Option<Rgb>,
    /// Label text style.
    pub label_style: Modifiers,
    /// Label colour; `None` picks black or white per tile.
    pub label_fg: Option<Rgb>,
    /// Append each value to its label.
    pub show_values: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            region: Rect::from_size(100.0, 100.0),
            border: Some(Rgb::BLACK),
            label_style: Modifiers::BOLD,
            label_fg: None,
            show_values: false,
        }
    }
}

impl ChartConfig {
    /// Set the layout region.
    #[must_use]
    pub const fn with_region(mut self, region: Rect) -> Self {
        self.region = region;
        self
    }

    /// Set or disable tile separators.
    #[must_use]
    pub const fn with_border(mut self, border: Option<Rgb>) -> Self {
        self.border = border;
        self
    }

    /// Show values next to labels.
    #[must_use]
    pub const fn with_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    /// Set the label style.
    #[must_use]
    pub const fn with_label_style(mut self, style: Modifiers) -> Self {
        self.label_style = style;
        self
    }

    /// Set a fixed label colour.
    #[must_use]
    pub const fn with_label_fg(mut self, fg: Option<Rgb>) -> Self {
        self.label_fg = fg;
        self
    }
}

/// A `label=value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Tile label.
    pub label: String,
    /// Tile weight.
    pub value: f64,
}

impl Entry {
    /// Create a new entry.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl FromStr for Entry {
    type Err = TreemapError;

    /// Parse `label=value`. The split is on the last `=`, so labels may
    /// contain `=` themselves.
    fn from_str(s: &str) -> Result<Self> {
        let (label, value) = s
            .rsplit_once('=')
            .ok_or_else(|| TreemapError::ParseEntry(s.to_string()))?;
        let label = label.trim();
        if label.is_empty() {
            return Err(TreemapError::ParseEntry(s.to_string()));
        }
        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|_| TreemapError::ParseEntry(s.to_string()))?;
        Ok(Self::new(label, value))
    }
}

/// One laid-out chart item.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Position in the input data.
    pub index: usize,
    /// Tile area in chart units.
    pub rect: Rect,
    /// Tile label.
    pub label: String,
    /// Tile weight.
    pub value: f64,
    /// Fill colour.
    pub color: Rgb,
}

/// A tile snapped to whole canvas cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    /// Left column.
    pub x: u16,
    /// Top row.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl CellSpan {
    /// Check if the span covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A proportional-area chart.
#[derive(Debug, Clone)]
pub struct TreeMap {
    data: Vec<f64>,
    labels: Vec<String>,
    palette: Palette,
    config: ChartConfig,
}

impl TreeMap {
    /// Create a chart from values and a parallel list of labels.
    ///
    /// Extra labels are ignored; fewer labels than values is an error.
    pub fn new<I, S>(data: Vec<f64>, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() < data.len() {
            return Err(TreemapError::LabelCount {
                values: data.len(),
                labels: labels.len(),
            });
        }
        Ok(Self {
            data,
            labels,
            palette: Palette::default(),
            config: ChartConfig::default(),
        })
    }

    /// Create a chart from `label=value` entries.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let (labels, data) = entries.into_iter().map(|e| (e.label, e.value)).unzip();
        Self {
            data,
            labels,
            palette: Palette::default(),
            config: ChartConfig::default(),
        }
    }

    /// Use a different palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Use a different configuration.
    #[must_use]
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Chart values.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Chart labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Active palette.
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Active configuration.
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Lay out the data and attach labels and colours.
    pub fn tiles(&self) -> Result<Vec<Tile>> {
        let rects = layout(self.config.region, &self.data)?;
        Ok(rects
            .into_iter()
            .enumerate()
            .map(|(index, rect)| Tile {
                index,
                rect,
                label: self.labels[index].clone(),
                value: self.data[index],
                color: self.palette.color(index),
            })
            .collect())
    }

    /// Snap chart-unit tiles onto a `width x height` grid.
    pub fn spans(&self, tiles: &[Tile], width: u16, height: u16) -> Vec<CellSpan> {
        let region = self.config.region;
        let sx = if region.width > 0.0 {
            f64::from(width) / region.width
        } else {
            0.0
        };
        let sy = if region.height > 0.0 {
            f64::from(height) / region.height
        } else {
            0.0
        };

        tiles
            .iter()
            .map(|tile| {
                let x0 = snap((tile.rect.x - region.x) * sx, width);
                let x1 = snap((tile.rect.right() - region.x) * sx, width);
                let y0 = snap((tile.rect.y - region.y) * sy, height);
                let y1 = snap((tile.rect.bottom() - region.y) * sy, height);
                CellSpan {
                    x: x0,
                    y: y0,
                    width: x1.saturating_sub(x0),
                    height: y1.saturating_sub(y0),
                }
            })
            .collect()
    }

    /// Draw the chart over the whole canvas.
    ///
    /// Each tile is filled with its colour and gets its label centred in
    /// it. Labels are truncated to fit; tiles too small for any text are
    /// left unlabelled.
    pub fn render(&self, canvas: &mut Canvas) -> Result<()> {
        let tiles = self.tiles()?;
        let spans = self.spans(&tiles, canvas.width(), canvas.height());

        for (tile, span) in tiles.iter().zip(&spans) {
            if span.is_empty() {
                tracing::debug!(index = tile.index, label = %tile.label, "tile too small to draw");
                continue;
            }
            canvas.fill_rect(span.x, span.y, span.width, span.height, Cell::fill(tile.color));
            let interior = self.draw_separator(canvas, *span);
            self.draw_label(canvas, tile, interior);
        }

        tracing::debug!(tiles = tiles.len(), "rendered treemap");
        Ok(())
    }

    /// Render into a fresh `width x height` canvas and write it out.
    pub fn plot<W: Write>(&self, writer: &mut W, width: u16, height: u16) -> Result<()> {
        let mut canvas = Canvas::new(width, height)?;
        self.render(&mut canvas)?;

        let mut output = OutputBuffer::for_canvas(&canvas);
        render_full(&canvas, &mut output)?;
        output.write_str("\r\n")?;
        output.flush_to(writer)?;
        Ok(())
    }

    /// Draw the separator on the far edge of a span, if it borders another
    /// tile. Returns the span left over for the label.
    fn draw_separator(&self, canvas: &mut Canvas, span: CellSpan) -> CellSpan {
        let Some(border) = self.config.border else {
            return span;
        };
        let mut interior = span;

        let right = span.x + span.width;
        if right < canvas.width() && span.width > 1 {
            interior.width -= 1;
            for row in span.y..span.y + span.height {
                let bg = canvas.get(right - 1, row).map_or(Rgb::BLACK, Cell::bg);
                canvas.set(right - 1, row, Cell::from_char('│').with_fg(border).with_bg(bg));
            }
        }

        let bottom = span.y + span.height;
        if bottom < canvas.height() && span.height > 1 {
            interior.height -= 1;
            for col in span.x..span.x + interior.width {
                let bg = canvas.get(col, bottom - 1).map_or(Rgb::BLACK, Cell::bg);
                canvas.set(col, bottom - 1, Cell::from_char('─').with_fg(border).with_bg(bg));
            }
        }

        interior
    }

    fn draw_label(&self, canvas: &mut Canvas, tile: &Tile, area: CellSpan) {
        if area.is_empty() {
            return;
        }

        let text = if self.config.show_values {
            format!("{} {:.2}", tile.label, tile.value)
        } else {
            tile.label.clone()
        };
        let text = truncate_to_width(&text, usize::from(area.width));
        if text.is_empty() {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let used = text_width(text) as u16;
        let x = area.x + (area.width - used) / 2;
        let y = area.y + (area.height - 1) / 2;
        let fg = self.config.label_fg.unwrap_or_else(|| tile.color.contrast_fg());
        let style = Cell::fill(tile.color)
            .with_fg(fg)
            .with_modifiers(self.config.label_style)
            .with_flags(CellFlags::LABEL);
        canvas.put_str(x, y, text, area.width, style);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn snap(value: f64, max: u16) -> u16 {
    value.round().clamp(0.0, f64::from(max)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocks() -> TreeMap {
        TreeMap::new(
            vec![38.12, 61.5, 33.9, 14.27, 12.8],
            ["Petrobras", "Vale", "Itaú", "Bradesco", "Ambev"],
        )
        .unwrap()
    }

    #[test]
    fn test_label_count_mismatch() {
        let err = TreeMap::new(vec![1.0, 2.0, 3.0], ["a", "b"]).unwrap_err();
        assert!(matches!(err, TreemapError::LabelCount { values: 3, labels: 2 }));
    }

    #[test]
    fn test_extra_labels_allowed() {
        let chart = TreeMap::new(vec![1.0], ["a", "b"]).unwrap();
        assert_eq!(chart.tiles().unwrap().len(), 1);
    }

    #[test]
    fn test_tiles_carry_labels_and_colors() {
        let chart = stocks();
        let tiles = chart.tiles().unwrap();
        assert_eq!(tiles.len(), 5);
        assert_eq!(tiles[1].label, "Vale");
        assert_eq!(tiles[1].value, 61.5);
        assert_eq!(tiles[1].color, crate::palette::TAB20C[1]);
        // Square default region slices top to bottom.
        for tile in &tiles {
            assert_eq!(tile.rect.width, 100.0);
        }
    }

    #[test]
    fn test_colors_wrap_around() {
        let palette = Palette::custom(vec![Rgb::WHITE, Rgb::BLACK]);
        let chart = TreeMap::new(vec![1.0; 3], ["a", "b", "c"]).unwrap().with_palette(palette);
        let tiles = chart.tiles().unwrap();
        assert_eq!(tiles[2].color, Rgb::WHITE);
    }

    #[test]
    fn test_zero_total_propagates() {
        let chart = TreeMap::new(vec![0.0, 0.0], ["a", "b"]).unwrap();
        assert!(matches!(chart.tiles(), Err(TreemapError::InvalidTotal { .. })));
        let mut canvas = Canvas::new(10, 10).unwrap();
        assert!(chart.render(&mut canvas).is_err());
    }

    #[test]
    fn test_empty_chart_renders_nothing() {
        let chart = TreeMap::new(Vec::new(), Vec::<String>::new()).unwrap();
        let mut canvas = Canvas::new(4, 4).unwrap();
        chart.render(&mut canvas).unwrap();
        assert_eq!(canvas, Canvas::new(4, 4).unwrap());
    }

    #[test]
    fn test_spans_tile_the_grid() {
        let chart = stocks();
        let tiles = chart.tiles().unwrap();
        let spans = chart.spans(&tiles, 80, 24);
        assert_eq!(spans[0].y, 0);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].y + pair[0].height, pair[1].y);
        }
        let last = spans.last().unwrap();
        assert_eq!(last.y + last.height, 24);
        assert!(spans.iter().all(|s| s.x == 0 && s.width == 80));
    }

    #[test]
    fn test_render_covers_canvas() {
        let chart = stocks().with_config(ChartConfig::default().with_border(None));
        let mut canvas = Canvas::new(80, 24).unwrap();
        chart.render(&mut canvas).unwrap();
        let colors = crate::palette::TAB20C;
        for cell in canvas.cells() {
            assert!(colors[..5].contains(&cell.bg()), "unpainted cell {cell:?}");
        }
    }

    #[test]
    fn test_render_centres_labels() {
        let chart = TreeMap::new(vec![1.0, 3.0], ["ab", "cd"])
            .unwrap()
            .with_config(
                ChartConfig::default()
                    .with_region(Rect::from_size(200.0, 50.0))
                    .with_border(None),
            );
        let mut canvas = Canvas::new(20, 3).unwrap();
        chart.render(&mut canvas).unwrap();
        // Tile 0 spans columns 0..5, tile 1 spans 5..20; labels sit on the middle row.
        let text = canvas.to_plain_text();
        let middle = text.lines().nth(1).unwrap();
        assert_eq!(middle.find("ab"), Some(1));
        assert_eq!(middle.find("cd"), Some(5 + 6));
        assert_eq!(canvas.count_flagged(CellFlags::LABEL), 4);
    }

    #[test]
    fn test_render_draws_separators() {
        let chart = TreeMap::new(vec![1.0, 1.0], ["x", "y"]).unwrap();
        let mut canvas = Canvas::new(10, 10).unwrap();
        chart.render(&mut canvas).unwrap();
        let text = canvas.to_plain_text();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[4], "──────────");
        assert_ne!(rows[9], "──────────");
    }

    #[test]
    fn test_label_truncated_to_tile() {
        let chart = TreeMap::new(vec![1.0], ["Petrobras"]).unwrap();
        let mut canvas = Canvas::new(4, 1).unwrap();
        chart.render(&mut canvas).unwrap();
        assert_eq!(canvas.to_plain_text(), "Petr");
    }

    #[test]
    fn test_show_values() {
        let chart = TreeMap::new(vec![61.5], ["Vale"])
            .unwrap()
            .with_config(ChartConfig::default().with_values(true));
        let mut canvas = Canvas::new(20, 1).unwrap();
        chart.render(&mut canvas).unwrap();
        assert!(canvas.to_plain_text().contains("Vale 61.50"));
    }

    #[test]
    fn test_plot_writes_ansi() {
        let chart = stocks();
        let mut out = Vec::new();
        chart.plot(&mut out, 40, 20).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Vale"));
        assert!(text.contains("\x1b[48;2;49;130;189m"));
        assert!(text.ends_with("\r\n"));
    }

    #[test]
    fn test_entry_parse() {
        let entry: Entry = "Vale=61.5".parse().unwrap();
        assert_eq!(entry, Entry::new("Vale", 61.5));

        let entry: Entry = "a=b = 2".parse().unwrap();
        assert_eq!(entry.label, "a=b");
        assert_eq!(entry.value, 2.0);

        assert!("Vale".parse::<Entry>().is_err());
        assert!("=3".parse::<Entry>().is_err());
        assert!("Vale=abc".parse::<Entry>().is_err());
    }

    #[test]
    fn test_from_entries() {
        let chart = TreeMap::from_entries(vec![Entry::new("a", 1.0), Entry::new("b", 2.0)]);
        assert_eq!(chart.data(), &[1.0, 2.0]);
        assert_eq!(chart.labels(), &["a".to_string(), "b".to_string()]);
    }
}
