//! Text layout: UTF-8 decode, glyph blitting, cursor management
//!
//! [`TextDraw`] is a blanket extension over every [`TextPlane`], the same
//! way [`crate::raster::Draw`] extends [`crate::plane::Plane`]. A string is
//! decoded code point by code point, each one resolved against the
//! [`FontSet`]'s ordered fallback list and blitted at the cursor, and the
//! cursor advances by the resolved font's nominal width.

use crate::font::{Font, FontSet, Glyphs, VarFont};
use crate::hangul::{self, GLYPH_BUF_LEN};
use crate::plane::{Cursor, TextPlane};
use crate::raster::{pixel_signed, Draw};

/// Code point iterator over a UTF-8 string
///
/// ASCII bytes pass through directly; any other lead byte is consumed as a
/// three-byte sequence. That covers the whole Basic Multilingual Plane
/// above U+07FF - Hangul, CJK, symbols - which is everything the `u16`
/// code-point space of the font tables can address. Two-byte sequences
/// (U+0080..=U+07FF) are outside that scope and decode to garbage rather
/// than being rejected; missing continuation bytes at the end of the
/// string read as zero.
pub struct CodePoints<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CodePoints<'a> {
    pub fn new(text: &'a str) -> Self {
        CodePoints {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }
}

impl Iterator for CodePoints<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let b0 = *self.bytes.get(self.pos)?;
        self.pos += 1;
        if b0 < 0x80 {
            return Some(u16::from(b0));
        }
        let b1 = self.bytes.get(self.pos).copied().unwrap_or(0);
        let b2 = self.bytes.get(self.pos + 1).copied().unwrap_or(0);
        self.pos += 2;
        Some(
            (u16::from(b0 & 0x0F) << 12)
                | (u16::from(b1 & 0x3F) << 6)
                | u16::from(b2 & 0x3F),
        )
    }
}

/// Text rendering over any [`TextPlane`]
pub trait TextDraw: TextPlane {
    /// Move the text cursor to panel coordinates `(x, y)`
    fn goto(&mut self, x: u16, y: u16) {
        self.set_cursor(Cursor { x, y });
    }

    /// Draw one character at the cursor
    ///
    /// Returns `false` without drawing when the font does not cover `cp`
    /// or when a full glyph cell of `scale * font.width` by
    /// `scale * font.height` pixels does not fit below and to the right of
    /// the cursor. The cursor never moves here;
    /// advancing is [`put_string`](TextDraw::put_string)'s job, so that a
    /// clipped character still keeps the rest of the line aligned.
    fn put_char(&mut self, cp: u16, font: &Font, color: Self::Color, scale: u16) -> bool {
        if !font.contains(cp) {
            return false;
        }
        let cursor = self.cursor();
        let cell_w = u32::from(scale) * u32::from(font.width);
        let cell_h = u32::from(scale) * u32::from(font.height);
        if u32::from(self.width()) <= u32::from(cursor.x) + cell_w
            || u32::from(self.height()) <= u32::from(cursor.y) + cell_h
        {
            return false;
        }

        match font.glyphs {
            Glyphs::Fixed(data) => blit_fixed(self, cursor, cp, font, data, color, scale),
            Glyphs::Variable(var) => blit_variable(self, cursor, cp, var, color, scale),
            Glyphs::Combinable(comb) => {
                let mut glyph = [0u8; GLYPH_BUF_LEN];
                if !hangul::compose(cp, comb, font.width, font.height, &mut glyph) {
                    return false;
                }
                blit_packed(self, cursor, font.width, font.height, &glyph, color, scale);
            }
        }
        true
    }

    /// Draw a string at the cursor, advancing it per character
    ///
    /// Characters are resolved against `set` in fallback order. A newline
    /// returns the cursor to the column where this call started and moves
    /// down one line. Characters no member font covers are skipped without
    /// advancing; characters that fail to fit still advance, so truncation
    /// at the right edge does not shift the remainder of the line.
    ///
    /// Returns the number of code points consumed, newlines included.
    fn put_string(&mut self, text: &str, set: &FontSet, color: Self::Color, scale: u16) -> usize {
        let line_start = self.cursor().x;
        let mut count = 0;

        for cp in CodePoints::new(text) {
            count += 1;
            if cp == u16::from(b'\n') {
                let cursor = self.cursor();
                self.set_cursor(Cursor {
                    x: line_start,
                    y: cursor.y.saturating_add(scale.saturating_mul(set.height)),
                });
                continue;
            }
            if let Some(font) = set.lookup(cp) {
                self.put_char(cp, font, color, scale);
                let mut cursor = self.cursor();
                cursor.x = cursor
                    .x
                    .saturating_add(scale.saturating_mul(u16::from(font.width)));
                self.set_cursor(cursor);
            }
        }
        count
    }
}

impl<P: TextPlane + ?Sized> TextDraw for P {}

/// One glyph pixel, magnified `scale` times
///
/// At scale 1 this is a single pixel. At larger scales the block is drawn
/// with an inclusive-extent rectangle, so adjacent blocks overlap by one
/// pixel; magnified glyphs come out slightly bolder than a pure nearest-
/// neighbor upscale.
fn scaled_pixel<P: TextPlane + ?Sized>(plane: &mut P, x: i32, y: i32, color: P::Color, scale: u16) {
    if scale <= 1 {
        pixel_signed(plane, x, y, color);
    } else if x >= 0 && y >= 0 {
        plane.fill_rect(x as u16, y as u16, scale, scale, color);
    }
}

fn blit_fixed<P: TextPlane + ?Sized>(
    plane: &mut P,
    cursor: Cursor,
    cp: u16,
    font: &Font,
    data: &[u16],
    color: P::Color,
    scale: u16,
) {
    let height = usize::from(font.height);
    let rows = &data[usize::from(cp - font.first) * height..][..height];

    for (yy, &row) in rows.iter().enumerate() {
        for xx in 0..u16::from(font.width) {
            if (row << xx) & 0x8000 != 0 {
                scaled_pixel(
                    plane,
                    i32::from(cursor.x) + i32::from(xx) * i32::from(scale),
                    i32::from(cursor.y) + yy as i32 * i32::from(scale),
                    color,
                    scale,
                );
            }
        }
    }
}

fn blit_variable<P: TextPlane + ?Sized>(
    plane: &mut P,
    cursor: Cursor,
    cp: u16,
    var: &VarFont,
    color: P::Color,
    scale: u16,
) {
    let glyph = &var.glyphs[usize::from(cp - var.first)];
    let mut offset = glyph.bitmap_offset as usize;
    let mut bit: u32 = 0;
    let mut byte: u8 = 0;

    // The glyph bitstream is continuous across rows; a byte is fetched
    // every eighth pixel, not per row. y_offset is carried in the tables
    // but not applied - glyph tops align with the cursor line.
    for yy in 0..i32::from(glyph.height) {
        for xx in 0..i32::from(glyph.width) {
            if bit & 7 == 0 {
                byte = var.bitmap[offset];
                offset += 1;
            }
            if byte & 0x80 != 0 {
                scaled_pixel(
                    plane,
                    i32::from(cursor.x) + (i32::from(glyph.x_offset) + xx) * i32::from(scale),
                    i32::from(cursor.y) + yy * i32::from(scale),
                    color,
                    scale,
                );
            }
            byte <<= 1;
            bit += 1;
        }
    }
}

fn blit_packed<P: TextPlane + ?Sized>(
    plane: &mut P,
    cursor: Cursor,
    width: u8,
    height: u8,
    glyph: &[u8],
    color: P::Color,
    scale: u16,
) {
    let row_bytes = usize::from(width / 8);

    for yy in 0..usize::from(height) {
        for (i, &byte) in glyph[yy * row_bytes..][..row_bytes].iter().enumerate() {
            for j in 0..8 {
                if (byte << j) & 0x80 != 0 {
                    scaled_pixel(
                        plane,
                        i32::from(cursor.x) + (i * 8 + j) as i32 * i32::from(scale),
                        i32::from(cursor.y) + yy as i32 * i32::from(scale),
                        color,
                        scale,
                    );
                }
            }
        }
    }
}
