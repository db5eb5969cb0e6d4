// Generated by tools/mkfonts.py. Do not edit by hand.

/// Row-packed scanlines for the fixed 7x10 ASCII font.
///
/// One `u16` per scanline, MSB-first, 10 rows per glyph,
/// code points 0x20..=0x7E.
#[rustfmt::skip]
pub(super) static FONT_7X10_DATA: [u16; 950] = [
    // 0x20 'space'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 0x21 '!'
    0x0000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x0000, 0x1000, 0x0000, 0x0000,
    // 0x22 '"'
    0x0000, 0x2800, 0x2800, 0x2800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 0x23 '#'
    0x0000, 0x2800, 0x2800, 0x7C00, 0x2800, 0x7C00, 0x2800, 0x2800, 0x0000, 0x0000,
    // 0x24 '$'
    0x0000, 0x1000, 0x3C00, 0x5000, 0x3800, 0x1400, 0x7800, 0x1000, 0x0000, 0x0000,
    // 0x25 '%'
    0x0000, 0x6000, 0x6400, 0x0800, 0x1000, 0x2000, 0x4C00, 0x0C00, 0x0000, 0x0000,
    // 0x26 '&'
    0x0000, 0x3000, 0x4800, 0x5000, 0x2000, 0x5400, 0x4800, 0x3400, 0x0000, 0x0000,
    // 0x27 '''
    0x0000, 0x1000, 0x1000, 0x1000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 0x28 '('
    0x0000, 0x0800, 0x1000, 0x2000, 0x2000, 0x2000, 0x1000, 0x0800, 0x0000, 0x0000,
    // 0x29 ')'
    0x0000, 0x2000, 0x1000, 0x0800, 0x0800, 0x0800, 0x1000, 0x2000, 0x0000, 0x0000,
    // 0x2A '*'
    0x0000, 0x0000, 0x1000, 0x5400, 0x3800, 0x5400, 0x1000, 0x0000, 0x0000, 0x0000,
    // 0x2B '+'
    0x0000, 0x0000, 0x1000, 0x1000, 0x7C00, 0x1000, 0x1000, 0x0000, 0x0000, 0x0000,
    // 0x2C ','
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1800, 0x1000, 0x2000, 0x0000, 0x0000,
    // 0x2D '-'
    0x0000, 0x0000, 0x0000, 0x0000, 0x7C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 0x2E '.'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1800, 0x1800, 0x0000, 0x0000,
    // 0x2F '/'
    0x0000, 0x0000, 0x0400, 0x0800, 0x1000, 0x2000, 0x4000, 0x0000, 0x0000, 0x0000,
    // 0x30 '0'
    0x0000, 0x3800, 0x4400, 0x4C00, 0x5400, 0x6400, 0x4400, 0x3800, 0x0000, 0x0000,
    // 0x31 '1'
    0x0000, 0x1000, 0x3000, 0x1000, 0x1000, 0x1000, 0x1000, 0x3800, 0x0000, 0x0000,
    // 0x32 '2'
    0x0000, 0x3800, 0x4400, 0x0400, 0x0800, 0x1000, 0x2000, 0x7C00, 0x0000, 0x0000,
    // 0x33 '3'
    0x0000, 0x7C00, 0x0800, 0x1000, 0x0800, 0x0400, 0x4400, 0x3800, 0x0000, 0x0000,
    // 0x34 '4'
    0x0000, 0x0800, 0x1800, 0x2800, 0x4800, 0x7C00, 0x0800, 0x0800, 0x0000, 0x0000,
    // 0x35 '5'
    0x0000, 0x7C00, 0x4000, 0x7800, 0x0400, 0x0400, 0x4400, 0x3800, 0x0000, 0x0000,
    // 0x36 '6'
    0x0000, 0x1800, 0x2000, 0x4000, 0x7800, 0x4400, 0x4400, 0x3800, 0x0000, 0x0000,
    // 0x37 '7'
    0x0000, 0x7C00, 0x0400, 0x0800, 0x1000, 0x2000, 0x2000, 0x2000, 0x0000, 0x0000,
    // 0x38 '8'
    0x0000, 0x3800, 0x4400, 0x4400, 0x3800, 0x4400, 0x4400, 0x3800, 0x0000, 0x0000,
    // 0x39 '9'
    0x0000, 0x3800, 0x4400, 0x4400, 0x3C00, 0x0400, 0x0800, 0x3000, 0x0000, 0x0000,
    // 0x3A ':'
    0x0000, 0x0000, 0x1800, 0x1800, 0x0000, 0x1800, 0x1800, 0x0000, 0x0000, 0x0000,
    // 0x3B ';'
    0x0000, 0x0000, 0x1800, 0x1800, 0x0000, 0x1800, 0x1000, 0x2000, 0x0000, 0x0000,
    // 0x3C '<'
    0x0000, 0x0800, 0x1000, 0x2000, 0x4000, 0x2000, 0x1000, 0x0800, 0x0000, 0x0000,
    // 0x3D '='
    0x0000, 0x0000, 0x0000, 0x7C00, 0x0000, 0x7C00, 0x0000, 0x0000, 0x0000, 0x0000,
    // 0x3E '>'
    0x0000, 0x2000, 0x1000, 0x0800, 0x0400, 0x0800, 0x1000, 0x2000, 0x0000, 0x0000,
    // 0x3F '?'
    0x0000, 0x3800, 0x4400, 0x0400, 0x0800, 0x1000, 0x0000, 0x1000, 0x0000, 0x0000,
    // 0x40 '@'
    0x0000, 0x3800, 0x4400, 0x0400, 0x3400, 0x5400, 0x5400, 0x3800, 0x0000, 0x0000,
    // 0x41 'A'
    0x0000, 0x3800, 0x4400, 0x4400, 0x7C00, 0x4400, 0x4400, 0x4400, 0x0000, 0x0000,
    // 0x42 'B'
    0x0000, 0x7800, 0x4400, 0x4400, 0x7800, 0x4400, 0x4400, 0x7800, 0x0000, 0x0000,
    // 0x43 'C'
    0x0000, 0x3800, 0x4400, 0x4000, 0x4000, 0x4000, 0x4400, 0x3800, 0x0000, 0x0000,
    // 0x44 'D'
    0x0000, 0x7000, 0x4800, 0x4400, 0x4400, 0x4400, 0x4800, 0x7000, 0x0000, 0x0000,
    // 0x45 'E'
    0x0000, 0x7C00, 0x4000, 0x4000, 0x7800, 0x4000, 0x4000, 0x7C00, 0x0000, 0x0000,
    // 0x46 'F'
    0x0000, 0x7C00, 0x4000, 0x4000, 0x7800, 0x4000, 0x4000, 0x4000, 0x0000, 0x0000,
    // 0x47 'G'
    0x0000, 0x3800, 0x4400, 0x4000, 0x5C00, 0x4400, 0x4400, 0x3C00, 0x0000, 0x0000,
    // 0x48 'H'
    0x0000, 0x4400, 0x4400, 0x4400, 0x7C00, 0x4400, 0x4400, 0x4400, 0x0000, 0x0000,
    // 0x49 'I'
    0x0000, 0x3800, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x3800, 0x0000, 0x0000,
    // 0x4A 'J'
    0x0000, 0x1C00, 0x0800, 0x0800, 0x0800, 0x0800, 0x4800, 0x3000, 0x0000, 0x0000,
    // 0x4B 'K'
    0x0000, 0x4400, 0x4800, 0x5000, 0x6000, 0x5000, 0x4800, 0x4400, 0x0000, 0x0000,
    // 0x4C 'L'
    0x0000, 0x4000, 0x4000, 0x4000, 0x4000, 0x4000, 0x4000, 0x7C00, 0x0000, 0x0000,
    // 0x4D 'M'
    0x0000, 0x4400, 0x6C00, 0x5400, 0x5400, 0x4400, 0x4400, 0x4400, 0x0000, 0x0000,
    // 0x4E 'N'
    0x0000, 0x4400, 0x6400, 0x5400, 0x4C00, 0x4400, 0x4400, 0x4400, 0x0000, 0x0000,
    // 0x4F 'O'
    0x0000, 0x3800, 0x4400, 0x4400, 0x4400, 0x4400, 0x4400, 0x3800, 0x0000, 0x0000,
    // 0x50 'P'
    0x0000, 0x7800, 0x4400, 0x4400, 0x7800, 0x4000, 0x4000, 0x4000, 0x0000, 0x0000,
    // 0x51 'Q'
    0x0000, 0x3800, 0x4400, 0x4400, 0x4400, 0x5400, 0x4800, 0x3400, 0x0000, 0x0000,
    // 0x52 'R'
    0x0000, 0x7800, 0x4400, 0x4400, 0x7800, 0x5000, 0x4800, 0x4400, 0x0000, 0x0000,
    // 0x53 'S'
    0x0000, 0x3C00, 0x4000, 0x4000, 0x3800, 0x0400, 0x0400, 0x7800, 0x0000, 0x0000,
    // 0x54 'T'
    0x0000, 0x7C00, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x0000, 0x0000,
    // 0x55 'U'
    0x0000, 0x4400, 0x4400, 0x4400, 0x4400, 0x4400, 0x4400, 0x3800, 0x0000, 0x0000,
    // 0x56 'V'
    0x0000, 0x4400, 0x4400, 0x4400, 0x4400, 0x4400, 0x2800, 0x1000, 0x0000, 0x0000,
    // 0x57 'W'
    0x0000, 0x4400, 0x4400, 0x4400, 0x5400, 0x5400, 0x6C00, 0x4400, 0x0000, 0x0000,
    // 0x58 'X'
    0x0000, 0x4400, 0x4400, 0x2800, 0x1000, 0x2800, 0x4400, 0x4400, 0x0000, 0x0000,
    // 0x59 'Y'
    0x0000, 0x4400, 0x4400, 0x2800, 0x1000, 0x1000, 0x1000, 0x1000, 0x0000, 0x0000,
    // 0x5A 'Z'
    0x0000, 0x7C00, 0x0400, 0x0800, 0x1000, 0x2000, 0x4000, 0x7C00, 0x0000, 0x0000,
    // 0x5B '['
    0x0000, 0x3800, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x3800, 0x0000, 0x0000,
    // 0x5C '\'
    0x0000, 0x0000, 0x4000, 0x2000, 0x1000, 0x0800, 0x0400, 0x0000, 0x0000, 0x0000,
    // 0x5D ']'
    0x0000, 0x3800, 0x0800, 0x0800, 0x0800, 0x0800, 0x0800, 0x3800, 0x0000, 0x0000,
    // 0x5E '^'
    0x0000, 0x1000, 0x2800, 0x4400, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 0x5F '_'
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7C00, 0x0000, 0x0000,
    // 0x60 '`'
    0x0000, 0x2000, 0x1000, 0x0800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 0x61 'a'
    0x0000, 0x0000, 0x0000, 0x3800, 0x0400, 0x3C00, 0x4400, 0x3C00, 0x0000, 0x0000,
    // 0x62 'b'
    0x0000, 0x4000, 0x4000, 0x7800, 0x4400, 0x4400, 0x4400, 0x7800, 0x0000, 0x0000,
    // 0x63 'c'
    0x0000, 0x0000, 0x0000, 0x3800, 0x4000, 0x4000, 0x4400, 0x3800, 0x0000, 0x0000,
    // 0x64 'd'
    0x0000, 0x0400, 0x0400, 0x3C00, 0x4400, 0x4400, 0x4400, 0x3C00, 0x0000, 0x0000,
    // 0x65 'e'
    0x0000, 0x0000, 0x0000, 0x3800, 0x4400, 0x7C00, 0x4000, 0x3800, 0x0000, 0x0000,
    // 0x66 'f'
    0x0000, 0x1800, 0x2400, 0x2000, 0x7000, 0x2000, 0x2000, 0x2000, 0x0000, 0x0000,
    // 0x67 'g'
    0x0000, 0x0000, 0x3C00, 0x4400, 0x4400, 0x3C00, 0x0400, 0x3800, 0x0000, 0x0000,
    // 0x68 'h'
    0x0000, 0x4000, 0x4000, 0x7800, 0x4400, 0x4400, 0x4400, 0x4400, 0x0000, 0x0000,
    // 0x69 'i'
    0x0000, 0x1000, 0x0000, 0x3000, 0x1000, 0x1000, 0x1000, 0x3800, 0x0000, 0x0000,
    // 0x6A 'j'
    0x0000, 0x0800, 0x0000, 0x1800, 0x0800, 0x0800, 0x4800, 0x3000, 0x0000, 0x0000,
    // 0x6B 'k'
    0x0000, 0x4000, 0x4000, 0x4800, 0x5000, 0x6000, 0x5000, 0x4800, 0x0000, 0x0000,
    // 0x6C 'l'
    0x0000, 0x3000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x3800, 0x0000, 0x0000,
    // 0x6D 'm'
    0x0000, 0x0000, 0x0000, 0x6800, 0x5400, 0x5400, 0x5400, 0x5400, 0x0000, 0x0000,
    // 0x6E 'n'
    0x0000, 0x0000, 0x0000, 0x7800, 0x4400, 0x4400, 0x4400, 0x4400, 0x0000, 0x0000,
    // 0x6F 'o'
    0x0000, 0x0000, 0x0000, 0x3800, 0x4400, 0x4400, 0x4400, 0x3800, 0x0000, 0x0000,
    // 0x70 'p'
    0x0000, 0x0000, 0x7800, 0x4400, 0x4400, 0x7800, 0x4000, 0x4000, 0x0000, 0x0000,
    // 0x71 'q'
    0x0000, 0x0000, 0x3C00, 0x4400, 0x4400, 0x3C00, 0x0400, 0x0400, 0x0000, 0x0000,
    // 0x72 'r'
    0x0000, 0x0000, 0x0000, 0x5800, 0x6400, 0x4000, 0x4000, 0x4000, 0x0000, 0x0000,
    // 0x73 's'
    0x0000, 0x0000, 0x0000, 0x3C00, 0x4000, 0x3800, 0x0400, 0x7800, 0x0000, 0x0000,
    // 0x74 't'
    0x0000, 0x2000, 0x2000, 0x7000, 0x2000, 0x2000, 0x2400, 0x1800, 0x0000, 0x0000,
    // 0x75 'u'
    0x0000, 0x0000, 0x0000, 0x4400, 0x4400, 0x4400, 0x4400, 0x3C00, 0x0000, 0x0000,
    // 0x76 'v'
    0x0000, 0x0000, 0x0000, 0x4400, 0x4400, 0x4400, 0x2800, 0x1000, 0x0000, 0x0000,
    // 0x77 'w'
    0x0000, 0x0000, 0x0000, 0x4400, 0x5400, 0x5400, 0x5400, 0x2800, 0x0000, 0x0000,
    // 0x78 'x'
    0x0000, 0x0000, 0x0000, 0x4400, 0x2800, 0x1000, 0x2800, 0x4400, 0x0000, 0x0000,
    // 0x79 'y'
    0x0000, 0x0000, 0x4400, 0x4400, 0x3C00, 0x0400, 0x4400, 0x3800, 0x0000, 0x0000,
    // 0x7A 'z'
    0x0000, 0x0000, 0x0000, 0x7C00, 0x0800, 0x1000, 0x2000, 0x7C00, 0x0000, 0x0000,
    // 0x7B '{'
    0x0000, 0x0800, 0x1000, 0x1000, 0x2000, 0x1000, 0x1000, 0x0800, 0x0000, 0x0000,
    // 0x7C '|'
    0x0000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x0000, 0x0000,
    // 0x7D '}'
    0x0000, 0x2000, 0x1000, 0x1000, 0x0800, 0x1000, 0x1000, 0x2000, 0x0000, 0x0000,
    // 0x7E '~'
    0x0000, 0x0000, 0x0000, 0x2000, 0x5400, 0x0800, 0x0000, 0x0000, 0x0000, 0x0000,
];
