// Generated by tools/mkfonts.py. Do not edit by hand.

use crate::font::VarGlyph;

/// Per-glyph records for the proportional 7x10 font.
#[rustfmt::skip]
pub(super) static VAR_7X10_GLYPHS: [VarGlyph; 95] = [
    VarGlyph { bitmap_offset: 0, width: 0, height: 0, x_advance: 3, x_offset: 0, y_offset: 0 }, // ' '
    VarGlyph { bitmap_offset: 0, width: 1, height: 10, x_advance: 2, x_offset: 3, y_offset: 0 }, // '!'
    VarGlyph { bitmap_offset: 2, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // '"'
    VarGlyph { bitmap_offset: 6, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '#'
    VarGlyph { bitmap_offset: 13, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '$'
    VarGlyph { bitmap_offset: 20, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '%'
    VarGlyph { bitmap_offset: 27, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '&'
    VarGlyph { bitmap_offset: 34, width: 1, height: 10, x_advance: 2, x_offset: 3, y_offset: 0 }, // '''
    VarGlyph { bitmap_offset: 36, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // '('
    VarGlyph { bitmap_offset: 40, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // ')'
    VarGlyph { bitmap_offset: 44, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '*'
    VarGlyph { bitmap_offset: 51, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '+'
    VarGlyph { bitmap_offset: 58, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // ','
    VarGlyph { bitmap_offset: 62, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '-'
    VarGlyph { bitmap_offset: 69, width: 2, height: 10, x_advance: 3, x_offset: 3, y_offset: 0 }, // '.'
    VarGlyph { bitmap_offset: 72, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '/'
    VarGlyph { bitmap_offset: 79, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '0'
    VarGlyph { bitmap_offset: 86, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // '1'
    VarGlyph { bitmap_offset: 90, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '2'
    VarGlyph { bitmap_offset: 97, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '3'
    VarGlyph { bitmap_offset: 104, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '4'
    VarGlyph { bitmap_offset: 111, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '5'
    VarGlyph { bitmap_offset: 118, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '6'
    VarGlyph { bitmap_offset: 125, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '7'
    VarGlyph { bitmap_offset: 132, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '8'
    VarGlyph { bitmap_offset: 139, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '9'
    VarGlyph { bitmap_offset: 146, width: 2, height: 10, x_advance: 3, x_offset: 3, y_offset: 0 }, // ':'
    VarGlyph { bitmap_offset: 149, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // ';'
    VarGlyph { bitmap_offset: 153, width: 4, height: 10, x_advance: 5, x_offset: 1, y_offset: 0 }, // '<'
    VarGlyph { bitmap_offset: 158, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '='
    VarGlyph { bitmap_offset: 165, width: 4, height: 10, x_advance: 5, x_offset: 2, y_offset: 0 }, // '>'
    VarGlyph { bitmap_offset: 170, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '?'
    VarGlyph { bitmap_offset: 177, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '@'
    VarGlyph { bitmap_offset: 184, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'A'
    VarGlyph { bitmap_offset: 191, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'B'
    VarGlyph { bitmap_offset: 198, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'C'
    VarGlyph { bitmap_offset: 205, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'D'
    VarGlyph { bitmap_offset: 212, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'E'
    VarGlyph { bitmap_offset: 219, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'F'
    VarGlyph { bitmap_offset: 226, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'G'
    VarGlyph { bitmap_offset: 233, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'H'
    VarGlyph { bitmap_offset: 240, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // 'I'
    VarGlyph { bitmap_offset: 244, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'J'
    VarGlyph { bitmap_offset: 251, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'K'
    VarGlyph { bitmap_offset: 258, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'L'
    VarGlyph { bitmap_offset: 265, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'M'
    VarGlyph { bitmap_offset: 272, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'N'
    VarGlyph { bitmap_offset: 279, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'O'
    VarGlyph { bitmap_offset: 286, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'P'
    VarGlyph { bitmap_offset: 293, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'Q'
    VarGlyph { bitmap_offset: 300, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'R'
    VarGlyph { bitmap_offset: 307, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'S'
    VarGlyph { bitmap_offset: 314, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'T'
    VarGlyph { bitmap_offset: 321, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'U'
    VarGlyph { bitmap_offset: 328, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'V'
    VarGlyph { bitmap_offset: 335, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'W'
    VarGlyph { bitmap_offset: 342, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'X'
    VarGlyph { bitmap_offset: 349, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'Y'
    VarGlyph { bitmap_offset: 356, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'Z'
    VarGlyph { bitmap_offset: 363, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // '['
    VarGlyph { bitmap_offset: 367, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '\'
    VarGlyph { bitmap_offset: 374, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // ']'
    VarGlyph { bitmap_offset: 378, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '^'
    VarGlyph { bitmap_offset: 385, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '_'
    VarGlyph { bitmap_offset: 392, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // '`'
    VarGlyph { bitmap_offset: 396, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'a'
    VarGlyph { bitmap_offset: 403, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'b'
    VarGlyph { bitmap_offset: 410, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'c'
    VarGlyph { bitmap_offset: 417, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'd'
    VarGlyph { bitmap_offset: 424, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'e'
    VarGlyph { bitmap_offset: 431, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'f'
    VarGlyph { bitmap_offset: 438, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'g'
    VarGlyph { bitmap_offset: 445, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'h'
    VarGlyph { bitmap_offset: 452, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // 'i'
    VarGlyph { bitmap_offset: 456, width: 4, height: 10, x_advance: 5, x_offset: 1, y_offset: 0 }, // 'j'
    VarGlyph { bitmap_offset: 461, width: 4, height: 10, x_advance: 5, x_offset: 1, y_offset: 0 }, // 'k'
    VarGlyph { bitmap_offset: 466, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // 'l'
    VarGlyph { bitmap_offset: 470, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'm'
    VarGlyph { bitmap_offset: 477, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'n'
    VarGlyph { bitmap_offset: 484, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'o'
    VarGlyph { bitmap_offset: 491, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'p'
    VarGlyph { bitmap_offset: 498, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'q'
    VarGlyph { bitmap_offset: 505, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'r'
    VarGlyph { bitmap_offset: 512, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 's'
    VarGlyph { bitmap_offset: 519, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 't'
    VarGlyph { bitmap_offset: 526, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'u'
    VarGlyph { bitmap_offset: 533, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'v'
    VarGlyph { bitmap_offset: 540, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'w'
    VarGlyph { bitmap_offset: 547, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'x'
    VarGlyph { bitmap_offset: 554, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'y'
    VarGlyph { bitmap_offset: 561, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // 'z'
    VarGlyph { bitmap_offset: 568, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // '{'
    VarGlyph { bitmap_offset: 572, width: 1, height: 10, x_advance: 2, x_offset: 3, y_offset: 0 }, // '|'
    VarGlyph { bitmap_offset: 574, width: 3, height: 10, x_advance: 4, x_offset: 2, y_offset: 0 }, // '}'
    VarGlyph { bitmap_offset: 578, width: 5, height: 10, x_advance: 6, x_offset: 1, y_offset: 0 }, // '~'
];

/// Shared bit-packed glyph bitmap (MSB-first bitstream per glyph).
#[rustfmt::skip]
pub(super) static VAR_7X10_BITMAP: [u8; 585] = [
    0x7D, 0x00, 0x16, 0xD0, 0x00, 0x00, 0x02, 0x95, 0xF5, 0x7D, 0x4A, 0x00, 0x00, 0x01, 0x1F, 0x47,
    0x17, 0xC4, 0x00, 0x00, 0x06, 0x32, 0x22, 0x22, 0x63, 0x00, 0x00, 0x03, 0x25, 0x44, 0x56, 0x4D,
    0x00, 0x00, 0x70, 0x00, 0x05, 0x49, 0x11, 0x00, 0x11, 0x12, 0x54, 0x00, 0x00, 0x09, 0x57, 0x54,
    0x80, 0x00, 0x00, 0x00, 0x08, 0x4F, 0x90, 0x80, 0x00, 0x00, 0x00, 0x00, 0xD4, 0x00, 0x00, 0x00,
    0x0F, 0x80, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x02, 0x22, 0x22, 0x00, 0x00, 0x00, 0x03,
    0xA3, 0x3A, 0xE6, 0x2E, 0x00, 0x00, 0x0B, 0x24, 0x97, 0x00, 0x03, 0xA2, 0x11, 0x11, 0x1F, 0x00,
    0x00, 0x07, 0xC4, 0x41, 0x06, 0x2E, 0x00, 0x00, 0x00, 0x8C, 0xA9, 0x7C, 0x42, 0x00, 0x00, 0x07,
    0xE1, 0xE0, 0x86, 0x2E, 0x00, 0x00, 0x01, 0x91, 0x0F, 0x46, 0x2E, 0x00, 0x00, 0x07, 0xC2, 0x22,
    0x21, 0x08, 0x00, 0x00, 0x03, 0xA3, 0x17, 0x46, 0x2E, 0x00, 0x00, 0x03, 0xA3, 0x17, 0x84, 0x4C,
    0x00, 0x00, 0x0F, 0x3C, 0x00, 0x01, 0xB0, 0xD4, 0x00, 0x01, 0x24, 0x84, 0x21, 0x00, 0x00, 0x01,
    0xF0, 0x7C, 0x00, 0x00, 0x00, 0x08, 0x42, 0x12, 0x48, 0x00, 0x03, 0xA2, 0x11, 0x10, 0x04, 0x00,
    0x00, 0x03, 0xA2, 0x16, 0xD6, 0xAE, 0x00, 0x00, 0x03, 0xA3, 0x1F, 0xC6, 0x31, 0x00, 0x00, 0x07,
    0xA3, 0x1F, 0x46, 0x3E, 0x00, 0x00, 0x03, 0xA3, 0x08, 0x42, 0x2E, 0x00, 0x00, 0x07, 0x25, 0x18,
    0xC6, 0x5C, 0x00, 0x00, 0x07, 0xE1, 0x0F, 0x42, 0x1F, 0x00, 0x00, 0x07, 0xE1, 0x0F, 0x42, 0x10,
    0x00, 0x00, 0x03, 0xA3, 0x0B, 0xC6, 0x2F, 0x00, 0x00, 0x04, 0x63, 0x1F, 0xC6, 0x31, 0x00, 0x00,
    0x1D, 0x24, 0x97, 0x00, 0x01, 0xC4, 0x21, 0x0A, 0x4C, 0x00, 0x00, 0x04, 0x65, 0x4C, 0x52, 0x51,
    0x00, 0x00, 0x04, 0x21, 0x08, 0x42, 0x1F, 0x00, 0x00, 0x04, 0x77, 0x5A, 0xC6, 0x31, 0x00, 0x00,
    0x04, 0x73, 0x59, 0xC6, 0x31, 0x00, 0x00, 0x03, 0xA3, 0x18, 0xC6, 0x2E, 0x00, 0x00, 0x07, 0xA3,
    0x1F, 0x42, 0x10, 0x00, 0x00, 0x03, 0xA3, 0x18, 0xD6, 0x4D, 0x00, 0x00, 0x07, 0xA3, 0x1F, 0x52,
    0x51, 0x00, 0x00, 0x03, 0xE1, 0x07, 0x04, 0x3E, 0x00, 0x00, 0x07, 0xC8, 0x42, 0x10, 0x84, 0x00,
    0x00, 0x04, 0x63, 0x18, 0xC6, 0x2E, 0x00, 0x00, 0x04, 0x63, 0x18, 0xC5, 0x44, 0x00, 0x00, 0x04,
    0x63, 0x1A, 0xD7, 0x71, 0x00, 0x00, 0x04, 0x62, 0xA2, 0x2A, 0x31, 0x00, 0x00, 0x04, 0x62, 0xA2,
    0x10, 0x84, 0x00, 0x00, 0x07, 0xC2, 0x22, 0x22, 0x1F, 0x00, 0x00, 0x1E, 0x49, 0x27, 0x00, 0x00,
    0x20, 0x82, 0x08, 0x20, 0x00, 0x00, 0x1C, 0x92, 0x4F, 0x00, 0x01, 0x15, 0x10, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x11, 0x10, 0x00, 0x00, 0x00, 0x00, 0xE0, 0xBE,
    0x2F, 0x00, 0x00, 0x04, 0x21, 0xE8, 0xC6, 0x3E, 0x00, 0x00, 0x00, 0x00, 0xE8, 0x42, 0x2E, 0x00,
    0x00, 0x00, 0x42, 0xF8, 0xC6, 0x2F, 0x00, 0x00, 0x00, 0x00, 0xE8, 0xFE, 0x0E, 0x00, 0x00, 0x01,
    0x92, 0x8E, 0x21, 0x08, 0x00, 0x00, 0x00, 0x1F, 0x18, 0xBC, 0x2E, 0x00, 0x00, 0x04, 0x21, 0xE8,
    0xC6, 0x31, 0x00, 0x00, 0x08, 0x64, 0x97, 0x00, 0x01, 0x03, 0x11, 0x96, 0x00, 0x08, 0x89, 0xAC,
    0xA9, 0x00, 0x19, 0x24, 0x97, 0x00, 0x00, 0x01, 0xAA, 0xD6, 0xB5, 0x00, 0x00, 0x00, 0x01, 0xE8,
    0xC6, 0x31, 0x00, 0x00, 0x00, 0x00, 0xE8, 0xC6, 0x2E, 0x00, 0x00, 0x00, 0x3D, 0x18, 0xFA, 0x10,
    0x00, 0x00, 0x00, 0x1F, 0x18, 0xBC, 0x21, 0x00, 0x00, 0x00, 0x01, 0x6C, 0xC2, 0x10, 0x00, 0x00,
    0x00, 0x00, 0xF8, 0x38, 0x3E, 0x00, 0x00, 0x02, 0x11, 0xC4, 0x21, 0x26, 0x00, 0x00, 0x00, 0x01,
    0x18, 0xC6, 0x2F, 0x00, 0x00, 0x00, 0x01, 0x18, 0xC5, 0x44, 0x00, 0x00, 0x00, 0x01, 0x1A, 0xD6,
    0xAA, 0x00, 0x00, 0x00, 0x01, 0x15, 0x11, 0x51, 0x00, 0x00, 0x00, 0x23, 0x17, 0x86, 0x2E, 0x00,
    0x00, 0x00, 0x01, 0xF1, 0x11, 0x1F, 0x00, 0x00, 0x05, 0x28, 0x91, 0x00, 0x7F, 0x00, 0x11, 0x22,
    0x94, 0x00, 0x00, 0x00, 0x8A, 0x88, 0x00, 0x00, 0x00,
];
