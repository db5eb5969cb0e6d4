//! Built-in font tables
//!
//! The bitmap data in the submodules and the component blob are produced
//! by `tools/mkfonts.py`; the statics here wrap them in the [`Font`] model
//! and define the fallback presets.

use crate::font::{CombFont, Font, FontSet, Glyphs, VarFont};

mod font_7x10;
mod var_7x10;

/// Fixed-cell 7x10 ASCII font, 0x20..=0x7E
pub static FONT_7X10: Font = Font {
    width: 7,
    height: 10,
    first: 0x20,
    last: 0x7E,
    glyphs: Glyphs::Fixed(&font_7x10::FONT_7X10_DATA),
};

/// Backing tables of [`VAR_7X10`]
static VAR_7X10_FONT: VarFont = VarFont {
    bitmap: &var_7x10::VAR_7X10_BITMAP,
    glyphs: &var_7x10::VAR_7X10_GLYPHS,
    first: 0x20,
    last: 0x7E,
    y_advance: 12,
};

/// Proportional 7x10 ASCII font, 0x20..=0x7E
///
/// `width` is the widest advance, so fit checks stay conservative for
/// narrow glyphs.
pub static VAR_7X10: Font = Font {
    width: 7,
    height: 10,
    first: 0x20,
    last: 0x7E,
    glyphs: Glyphs::Variable(&VAR_7X10_FONT),
};

/// Combinable 16x16 Hangul component blob, full syllable block
pub static COMBINE_16X16_FONT: CombFont = CombFont {
    bitmap: include_bytes!("combine_16x16.dat"),
    first: 0xAC00,
    last: 0xD7A3,
    y_advance: 16,
};

/// Combinable 16x16 Hangul font, syllables 0xAC00..=0xD7A3
pub static COMBINE_16X16: Font = Font {
    width: 16,
    height: 16,
    first: 0xAC00,
    last: 0xD7A3,
    glyphs: Glyphs::Combinable(&COMBINE_16X16_FONT),
};

/// Latin-only preset, 10-pixel lines
pub static FONT_SET_10: FontSet = FontSet {
    width: 7,
    height: 10,
    fonts: &[&FONT_7X10],
};

/// Korean/Latin preset, 16-pixel lines
///
/// Latin text renders in the narrow fixed font, Hangul falls through to
/// the combinable font.
pub static FONT_SET_KR_16: FontSet = FontSet {
    width: 16,
    height: 16,
    fonts: &[&FONT_7X10, &COMBINE_16X16],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_table_covers_every_ascii_glyph() {
        match FONT_7X10.glyphs {
            Glyphs::Fixed(data) => {
                assert_eq!(data.len(), 95 * usize::from(FONT_7X10.height));
            }
            _ => panic!("wrong glyph storage"),
        }
    }

    #[test]
    fn proportional_records_stay_inside_the_bitmap() {
        for glyph in VAR_7X10_FONT.glyphs {
            let bits = usize::from(glyph.width) * usize::from(glyph.height);
            let end = glyph.bitmap_offset as usize + bits.div_ceil(8);
            assert!(end <= VAR_7X10_FONT.bitmap.len());
            assert!(glyph.height <= 10);
        }
        assert_eq!(VAR_7X10_FONT.glyphs.len(), 95);
    }

    #[test]
    fn component_blob_holds_all_variant_groups() {
        // 8 initial groups of 20 + 4 medial groups of 22 + 4 final groups
        // of 28, at 32 bytes per 16x16 component glyph.
        assert_eq!(COMBINE_16X16_FONT.bitmap.len(), (160 + 88 + 112) * 32);
    }
}
