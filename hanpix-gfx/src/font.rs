//! Font data model
//!
//! Three glyph representations share one [`Font`] wrapper:
//!
//! - [`Glyphs::Fixed`] - one fixed-size bitmap per code point, one `u16`
//!   scanline per row, MSB-first
//! - [`Glyphs::Variable`] - proportional glyphs with per-glyph metrics
//!   pointing into a shared bit-packed blob (the Adafruit-GFX layout)
//! - [`Glyphs::Combinable`] - Hangul jamo components, assembled into full
//!   syllable glyphs by [`crate::hangul::compose`]
//!
//! Fonts are immutable, `'static` tables; nothing here allocates. Any
//! persisted font asset must preserve the exact MSB-first bit order and,
//! for the variable layout, the per-glyph offset/advance semantics, to
//! stay bit-compatible with existing tables.

use crate::text::CodePoints;

/// Maximum number of fonts consulted in a [`FontSet`]
pub const MAX_FONTS: usize = 5;

/// Glyph storage, tagged by representation
#[derive(Debug, Clone, Copy)]
pub enum Glyphs {
    /// Row-packed scanlines, indexed `(cp - first) * height + row`
    Fixed(&'static [u16]),
    /// Proportional glyph records into a shared bitmap
    Variable(&'static VarFont),
    /// Combinable Hangul component glyphs
    Combinable(&'static CombFont),
}

/// One font: shared metadata plus its glyph storage
#[derive(Debug, Clone, Copy)]
pub struct Font {
    /// Nominal glyph width in pixels (cursor advance per character)
    pub width: u8,
    /// Glyph height in pixels
    pub height: u8,
    /// First code point covered
    pub first: u16,
    /// Last code point covered, inclusive
    pub last: u16,
    /// Glyph storage
    pub glyphs: Glyphs,
}

impl Font {
    /// Whether this font covers a code point
    pub fn contains(&self, cp: u16) -> bool {
        cp >= self.first && cp <= self.last
    }
}

/// Per-glyph record of a proportional font
#[derive(Debug, Clone, Copy)]
pub struct VarGlyph {
    /// Byte offset of this glyph's bits in [`VarFont::bitmap`]
    pub bitmap_offset: u32,
    /// Bitmap width in pixels
    pub width: u8,
    /// Bitmap height in pixels
    pub height: u8,
    /// Cursor advance in pixels
    pub x_advance: u8,
    /// Horizontal offset from the cursor to the bitmap's left edge
    pub x_offset: i8,
    /// Vertical offset (kept for table compatibility; not applied)
    pub y_offset: i8,
}

/// Proportional font: glyph records plus one shared bit-packed bitmap
#[derive(Debug)]
pub struct VarFont {
    /// Concatenated glyph bitmaps, MSB-first bitstream per glyph
    pub bitmap: &'static [u8],
    /// One record per code point in `first..=last`
    pub glyphs: &'static [VarGlyph],
    /// First code point covered
    pub first: u16,
    /// Last code point covered, inclusive
    pub last: u16,
    /// Newline distance in pixels
    pub y_advance: u8,
}

/// Combinable Hangul component font
///
/// The bitmap holds jamo component glyphs only, grouped by typographic
/// variant; see [`crate::hangul`] for the layout and the composition rules.
#[derive(Debug)]
pub struct CombFont {
    /// Component glyph blob
    pub bitmap: &'static [u8],
    /// First syllable covered (0xAC00 for the full syllable block)
    pub first: u16,
    /// Last syllable covered, inclusive
    pub last: u16,
    /// Newline distance in pixels
    pub y_advance: u8,
}

/// Pixel extents of a rendered string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StringSize {
    pub width: u16,
    pub height: u16,
}

/// Ordered font fallback list
///
/// Text layout tries each font in order and uses the first whose code
/// point range contains the character. This is what lets one string mix
/// Latin text (fixed font) and Hangul (combinable font).
#[derive(Debug, Clone, Copy)]
pub struct FontSet {
    /// Line width hint in pixels (widest member font)
    pub width: u16,
    /// Line height in pixels (newline advance)
    pub height: u16,
    /// Member fonts, tried in order; at most [`MAX_FONTS`] are consulted
    pub fonts: &'static [&'static Font],
}

impl FontSet {
    /// First member font covering `cp`, if any
    pub fn lookup(&self, cp: u16) -> Option<&'static Font> {
        self.fonts
            .iter()
            .take(MAX_FONTS)
            .find(|font| font.contains(cp))
            .copied()
    }

    /// Pixel size of `text` when rendered with this set at scale 1
    ///
    /// Uses the same decode and fallback rules as
    /// [`crate::text::TextDraw::put_string`]; characters no member font
    /// covers contribute no width.
    pub fn string_size(&self, text: &str) -> StringSize {
        let mut line_width: u16 = 0;
        let mut max_width: u16 = 0;
        let mut lines: u16 = 1;

        for cp in CodePoints::new(text) {
            if cp == u16::from(b'\n') {
                lines += 1;
                max_width = max_width.max(line_width);
                line_width = 0;
            } else if let Some(font) = self.lookup(cp) {
                line_width += font.width as u16;
            }
        }

        StringSize {
            width: max_width.max(line_width),
            height: lines * self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{COMBINE_16X16, FONT_7X10, FONT_SET_KR_16};

    #[test]
    fn lookup_falls_through_in_order() {
        // 'A' is covered by the Latin font, '가' only by the Hangul font.
        let latin = FONT_SET_KR_16.lookup(0x41).unwrap();
        assert!(core::ptr::eq(latin, &FONT_7X10));

        let hangul = FONT_SET_KR_16.lookup(0xAC00).unwrap();
        assert!(core::ptr::eq(hangul, &COMBINE_16X16));

        // Outside every member range
        assert!(FONT_SET_KR_16.lookup(0x2764).is_none());
    }

    #[test]
    fn string_size_mixes_fonts_and_lines() {
        // 'A' advances 7, '가' advances 16.
        let size = FONT_SET_KR_16.string_size("A가");
        assert_eq!(size, StringSize { width: 23, height: 16 });

        let size = FONT_SET_KR_16.string_size("AA\nA");
        assert_eq!(size, StringSize { width: 14, height: 32 });
    }

    #[test]
    fn uncovered_characters_add_no_width() {
        let size = FONT_SET_KR_16.string_size("\u{2764}");
        assert_eq!(size.width, 0);
    }
}
