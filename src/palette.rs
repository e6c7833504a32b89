//! Palette: constant colour tables for chart tiles.
//!
//! Tables are `const` data. A [`Palette`] borrows one (or owns a custom
//! list) and hands out colours by tile index, wrapping around.

use crate::buffer::Rgb;
use std::borrow::Cow;

/// Default 20-colour table: four shades each of blue, orange, green,
/// purple and grey, darkest first.
pub const TAB20C: [Rgb; 20] = [
    Rgb::from_u32(0x3182BD),
    Rgb::from_u32(0x6BAED6),
    Rgb::from_u32(0x9ECAE1),
    Rgb::from_u32(0xC6DBEF),
    Rgb::from_u32(0xE6550D),
    Rgb::from_u32(0xFD8D3C),
    Rgb::from_u32(0xFDAE6B),
    Rgb::from_u32(0xFDD0A2),
    Rgb::from_u32(0x31A354),
    Rgb::from_u32(0x74C476),
    Rgb::from_u32(0xA1D99B),
    Rgb::from_u32(0xC7E9C0),
    Rgb::from_u32(0x756BB1),
    Rgb::from_u32(0x9E9AC8),
    Rgb::from_u32(0xBCBDDC),
    Rgb::from_u32(0xDADAEB),
    Rgb::from_u32(0x636363),
    Rgb::from_u32(0x969696),
    Rgb::from_u32(0xBDBDBD),
    Rgb::from_u32(0xD9D9D9),
];

/// Eight evenly spaced greys, dark to light.
pub const GRAYSCALE: [Rgb; 8] = [
    Rgb::from_u32(0x252525),
    Rgb::from_u32(0x404040),
    Rgb::from_u32(0x5A5A5A),
    Rgb::from_u32(0x737373),
    Rgb::from_u32(0x8C8C8C),
    Rgb::from_u32(0xA6A6A6),
    Rgb::from_u32(0xBFBFBF),
    Rgb::from_u32(0xD9D9D9),
];

/// An ordered list of tile colours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Cow<'static, [Rgb]>,
}

impl Palette {
    /// Palette over a constant table.
    pub const fn from_static(colors: &'static [Rgb]) -> Self {
        Self {
            colors: Cow::Borrowed(colors),
        }
    }

    /// Palette over caller-supplied colours. An empty list falls back to
    /// [`TAB20C`].
    pub fn custom(colors: Vec<Rgb>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self {
            colors: Cow::Owned(colors),
        }
    }

    /// Colour for the tile at `index`, wrapping modulo the palette length.
    #[inline]
    pub fn color(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }

    /// Number of distinct colours.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Never true: empty palettes fall back to the default table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All colours in order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_static(&TAB20C)
    }
}

impl From<Vec<Rgb>> for Palette {
    fn from(colors: Vec<Rgb>) -> Self {
        Self::custom(colors)
    }
}
