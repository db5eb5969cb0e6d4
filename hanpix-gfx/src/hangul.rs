//! Hangul syllable decomposition and glyph composition
//!
//! Precomposed syllables are arranged arithmetically in Unicode:
//!
//! ```text
//! code point = {[(initial * 21) + medial] * 28} + final + 0xAC00
//! ```
//!
//! so a syllable splits into its jamo indices with two divisions. The
//! combinable font then stores each jamo in several *variant groups*,
//! because Korean typography draws a component differently depending on
//! its neighbors: an initial consonant over a horizontal vowel is wide and
//! flat, next to a vertical vowel it is tall and narrow, and everything
//! shrinks upward when a final consonant sits underneath. Which group to
//! use is a typographic rule with no closed form; the tables below encode
//! it, keyed by the medial vowel index.
//!
//! Component glyph blob layout (`gb` = glyph bytes = width*height/8,
//! slot 0 of every group unused - component indices are 1-based):
//!
//! ```text
//! 8 groups x 20 slots   initial consonants      offset (g*20 + cho) * gb
//! 4 groups x 22 slots   medial vowels           offset (160 + g*22 + jung) * gb
//! 4 groups x 28 slots   final consonants        offset (248 + g*28 + jong) * gb
//! ```

use crate::font::CombFont;

/// First code point of the precomposed syllable block ("가")
pub const SYLLABLE_FIRST: u16 = 0xAC00;

/// Number of precomposed syllables (19 * 21 * 28)
pub const SYLLABLE_COUNT: u16 = 11172;

/// Scratch buffer size for one composed glyph (16x16 / 8)
pub const GLYPH_BUF_LEN: usize = 32;

/// Initial-consonant variant group per medial index, syllables without a
/// final consonant. Index 0 unused (medial indices here are 1-based).
const CHO_OPEN: [u8; 22] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 3, 3, 1, 2, 4, 4, 4, 2, 1, 3, 0,
];

/// Initial-consonant variant group per medial index, with a final consonant
const CHO_CLOSED: [u8; 22] = [
    0, 5, 5, 5, 5, 5, 5, 5, 5, 6, 7, 7, 7, 6, 6, 7, 7, 7, 6, 6, 7, 5,
];

/// Final-consonant variant group per medial index
const JONG_GROUP: [u8; 22] = [
    0, 0, 2, 0, 2, 1, 2, 1, 2, 3, 0, 2, 1, 3, 3, 1, 2, 1, 3, 3, 1, 1,
];

/// Blob slot where the medial vowel groups start (8 groups * 20 slots)
const MEDIAL_BASE: usize = 160;

/// Blob slot where the final consonant groups start (+ 4 groups * 22 slots)
const FINAL_BASE: usize = 248;

/// Jamo indices of one syllable, all zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Syllable {
    /// Initial consonant index, 0..19
    pub initial: u8,
    /// Medial vowel index, 0..21
    pub medial: u8,
    /// Final consonant index, 0..28; 0 means no trailing consonant
    pub fin: u8,
}

/// Split a precomposed syllable code point into its jamo indices
///
/// Returns `None` for code points outside the syllable block.
pub fn decompose(cp: u16) -> Option<Syllable> {
    let offset = cp.checked_sub(SYLLABLE_FIRST)?;
    if offset >= SYLLABLE_COUNT {
        return None;
    }
    let fin = offset % 28;
    let rest = offset / 28;
    Some(Syllable {
        initial: (rest / 21) as u8,
        medial: (rest % 21) as u8,
        fin: fin as u8,
    })
}

/// Assemble the glyph for one syllable into `out`
///
/// Selects the variant group for each component, then overlays the initial
/// consonant, the medial vowel and - only when the syllable has one - the
/// final consonant into `out` with bitwise OR. Syllables without a final
/// consonant never touch the final-consonant tables at all.
///
/// `width`/`height` come from the wrapping [`crate::font::Font`]; only the
/// first `width * height / 8` bytes of `out` are written. Returns `false`
/// (leaving `out` untouched) if `cp` is outside the font's range.
pub fn compose(
    cp: u16,
    font: &CombFont,
    width: u8,
    height: u8,
    out: &mut [u8; GLYPH_BUF_LEN],
) -> bool {
    if cp < font.first || cp > font.last {
        return false;
    }
    let offset = cp - font.first;
    let jong = (offset % 28) as usize;
    let rest = offset / 28;
    // 1-based, matching both the variant tables and the blob slots
    let jung = (rest % 21) as usize + 1;
    let cho = (rest / 21) as usize + 1;

    let (cho_group, jung_group) = if jong == 0 {
        (CHO_OPEN[jung] as usize, if cho == 15 { 0 } else { 1 })
    } else {
        (CHO_CLOSED[jung] as usize, if cho == 15 { 2 } else { 3 })
    };

    let gb = width as usize * height as usize / 8;
    out[..gb].fill(0);

    overlay(&mut out[..gb], font.bitmap, (cho_group * 20 + cho) * gb);
    overlay(
        &mut out[..gb],
        font.bitmap,
        (MEDIAL_BASE + jung_group * 22 + jung) * gb,
    );
    if jong != 0 {
        let jong_group = JONG_GROUP[jung] as usize;
        overlay(
            &mut out[..gb],
            font.bitmap,
            (FINAL_BASE + jong_group * 28 + jong) * gb,
        );
    }
    true
}

fn overlay(out: &mut [u8], bitmap: &[u8], offset: usize) {
    for (dst, src) in out.iter_mut().zip(&bitmap[offset..]) {
        *dst |= *src;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::COMBINE_16X16_FONT;

    #[test]
    fn decompose_block_start() {
        // "가": first syllable, no final consonant
        assert_eq!(
            decompose(0xAC00),
            Some(Syllable { initial: 0, medial: 0, fin: 0 })
        );
        // "각": same initial/medial, final = 1
        assert_eq!(
            decompose(0xAC01),
            Some(Syllable { initial: 0, medial: 0, fin: 1 })
        );
    }

    #[test]
    fn decompose_arbitrary_syllable() {
        // "한" = ㅎ(18) ㅏ(0) ㄴ(4): (18*21 + 0)*28 + 4 + 0xAC00 = 0xD55C
        assert_eq!(
            decompose(0xD55C),
            Some(Syllable { initial: 18, medial: 0, fin: 4 })
        );
    }

    #[test]
    fn decompose_rejects_non_syllables() {
        assert_eq!(decompose(0xABFF), None);
        assert_eq!(decompose(0xD7A4), None);
        assert_eq!(decompose(0x0041), None);
    }

    #[test]
    fn compose_open_syllable_skips_final_overlay() {
        // "가" has no final consonant: the composed glyph must equal the
        // initial and medial component slots ORed together and nothing
        // else - no final-region bytes may be overlaid. Slots computed by
        // hand: cho 1 in open group 0, jung 1 in no-final group 1.
        let mut open = [0u8; GLYPH_BUF_LEN];
        assert!(compose(0xAC00, &COMBINE_16X16_FONT, 16, 16, &mut open));

        let blob = COMBINE_16X16_FONT.bitmap;
        let cho_slot = &blob[GLYPH_BUF_LEN..][..GLYPH_BUF_LEN];
        let jung_slot = &blob[(160 + 22 + 1) * GLYPH_BUF_LEN..][..GLYPH_BUF_LEN];
        for i in 0..GLYPH_BUF_LEN {
            assert_eq!(open[i], cho_slot[i] | jung_slot[i]);
        }
        assert!(open.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn compose_is_deterministic() {
        let mut a = [0u8; GLYPH_BUF_LEN];
        let mut b = [0xFFu8; GLYPH_BUF_LEN];
        assert!(compose(0xD55C, &COMBINE_16X16_FONT, 16, 16, &mut a));
        assert!(compose(0xD55C, &COMBINE_16X16_FONT, 16, 16, &mut b));
        assert_eq!(a, b);
        assert!(a.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn compose_rejects_out_of_range() {
        let mut buf = [0u8; GLYPH_BUF_LEN];
        assert!(!compose(0x0041, &COMBINE_16X16_FONT, 16, 16, &mut buf));
        assert!(buf.iter().all(|&byte| byte == 0));
    }
}
