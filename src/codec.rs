//! Pixel-block to glyph codec.
//!
//! Every character cell covers a 2x4 block of pixels. The block packs into
//! one byte: bit i (0..=3) is the left column, rows top to bottom, and bit
//! i+4 is the right column in the same order. [`GLYPHS`] maps each of the
//! 256 patterns to the Unicode character whose ink is exactly those pixels,
//! drawn from the Legacy Computing octant set together with the older block
//! elements and quadrants that already covered some patterns.

/// Pixel columns per character cell.
pub const CELL_W: usize = 2;

/// Pixel rows per character cell.
pub const CELL_H: usize = 4;

/// Glyph for every 2x4 pixel pattern, indexed by packed pattern byte.
///
/// Laid out 8 entries per row, so row r starts at pattern `r * 8`.
pub const GLYPHS: [char; 256] = [
    ' ', '\u{1CEA8}', '\u{1CD00}', '\u{2598}', '\u{1CD09}', '\u{1CD0A}', '\u{1FBE6}', '\u{1CD0D}',
    '\u{1CEA3}', '\u{1CD36}', '\u{1CD39}', '\u{1CD3A}', '\u{2596}', '\u{1CD45}', '\u{1CD48}', '\u{258C}',
    '\u{1CEAB}', '\u{1FB82}', '\u{1CD01}', '\u{1CD02}', '\u{1CD0B}', '\u{1CD0C}', '\u{1CD0E}', '\u{1CD0F}',
    '\u{1CD37}', '\u{1CD38}', '\u{1CD3B}', '\u{1CD3C}', '\u{1CD46}', '\u{1CD47}', '\u{1CD49}', '\u{1CD4A}',
    '\u{1CD03}', '\u{1CD04}', '\u{1CD06}', '\u{1CD07}', '\u{1CD10}', '\u{1CD11}', '\u{1CD14}', '\u{1CD15}',
    '\u{1CD3D}', '\u{1CD3E}', '\u{1CD41}', '\u{1CD42}', '\u{1CD4B}', '\u{1CD4C}', '\u{1CD4E}', '\u{1CD4F}',
    '\u{259D}', '\u{1CD05}', '\u{1CD08}', '\u{2580}', '\u{1CD12}', '\u{1CD13}', '\u{1CD16}', '\u{1CD17}',
    '\u{1CD3F}', '\u{1CD40}', '\u{1CD43}', '\u{1CD44}', '\u{259E}', '\u{1CD4D}', '\u{1CD50}', '\u{259B}',
    '\u{1CD18}', '\u{1CD19}', '\u{1CD1C}', '\u{1CD1D}', '\u{1CD27}', '\u{1CD28}', '\u{1CD2B}', '\u{1CD2C}',
    '\u{1CD51}', '\u{1CD52}', '\u{1CD55}', '\u{1CD56}', '\u{1CD61}', '\u{1CD62}', '\u{1CD65}', '\u{1CD66}',
    '\u{1CD1A}', '\u{1CD1B}', '\u{1CD1E}', '\u{1CD1F}', '\u{1CD29}', '\u{1CD2A}', '\u{1CD2D}', '\u{1CD2E}',
    '\u{1CD53}', '\u{1CD54}', '\u{1CD57}', '\u{1CD58}', '\u{1CD63}', '\u{1CD64}', '\u{1CD67}', '\u{1CD68}',
    '\u{1FBE7}', '\u{1CD20}', '\u{1CD23}', '\u{1CD24}', '\u{1CD2F}', '\u{1CD30}', '\u{1CD33}', '\u{1CD34}',
    '\u{1CD59}', '\u{1CD5A}', '\u{1CD5D}', '\u{1CD5E}', '\u{1CD69}', '\u{1CD6A}', '\u{1CD6D}', '\u{1CD6E}',
    '\u{1CD21}', '\u{1CD22}', '\u{1CD25}', '\u{1CD26}', '\u{1CD31}', '\u{1CD32}', '\u{1CD35}', '\u{1FB85}',
    '\u{1CD5B}', '\u{1CD5C}', '\u{1CD5F}', '\u{1CD60}', '\u{1CD6B}', '\u{1CD6C}', '\u{1CD6F}', '\u{1CD70}',
    '\u{1CEA0}', '\u{1CD71}', '\u{1CD74}', '\u{1CD75}', '\u{1CD80}', '\u{1CD81}', '\u{1CD84}', '\u{1CD85}',
    '\u{2582}', '\u{1CDAC}', '\u{1CDAF}', '\u{1CDB0}', '\u{1CDBB}', '\u{1CDBC}', '\u{1CDBF}', '\u{1CDC0}',
    '\u{1CD72}', '\u{1CD73}', '\u{1CD76}', '\u{1CD77}', '\u{1CD82}', '\u{1CD83}', '\u{1CD86}', '\u{1CD87}',
    '\u{1CDAD}', '\u{1CDAE}', '\u{1CDB1}', '\u{1CDB2}', '\u{1CDBD}', '\u{1CDBE}', '\u{1CDC1}', '\u{1CDC2}',
    '\u{1CD78}', '\u{1CD79}', '\u{1CD7C}', '\u{1CD7D}', '\u{1CD88}', '\u{1CD89}', '\u{1CD8C}', '\u{1CD8D}',
    '\u{1CDB3}', '\u{1CDB4}', '\u{1CDB7}', '\u{1CDB8}', '\u{1CDC3}', '\u{1CDC4}', '\u{1CDC7}', '\u{1CDC8}',
    '\u{1CD7A}', '\u{1CD7B}', '\u{1CD7E}', '\u{1CD7F}', '\u{1CD8A}', '\u{1CD8B}', '\u{1CD8E}', '\u{1CD8F}',
    '\u{1CDB5}', '\u{1CDB6}', '\u{1CDB9}', '\u{1CDBA}', '\u{1CDC5}', '\u{1CDC6}', '\u{1CDC9}', '\u{1CDCA}',
    '\u{2597}', '\u{1CD90}', '\u{1CD93}', '\u{259A}', '\u{1CD9C}', '\u{1CD9D}', '\u{1CDA0}', '\u{1CDA1}',
    '\u{1CDCB}', '\u{1CDCC}', '\u{1CDCF}', '\u{1CDD0}', '\u{2584}', '\u{1CDDB}', '\u{1CDDE}', '\u{2599}',
    '\u{1CD91}', '\u{1CD92}', '\u{1CD94}', '\u{1CD95}', '\u{1CD9E}', '\u{1CD9F}', '\u{1CDA2}', '\u{1CDA3}',
    '\u{1CDCD}', '\u{1CDCE}', '\u{1CDD1}', '\u{1CDD2}', '\u{1CDDC}', '\u{1CDDD}', '\u{1CDDF}', '\u{1CDE0}',
    '\u{1CD96}', '\u{1CD97}', '\u{1CD99}', '\u{1CD9A}', '\u{1CDA4}', '\u{1CDA5}', '\u{1CDA8}', '\u{1CDA9}',
    '\u{1CDD3}', '\u{1CDD4}', '\u{1CDD7}', '\u{1CDD8}', '\u{1CDE1}', '\u{1CDE2}', '\u{2586}', '\u{1CDE4}',
    '\u{2590}', '\u{1CD98}', '\u{1CD9B}', '\u{259C}', '\u{1CDA6}', '\u{1CDA7}', '\u{1CDAA}', '\u{1CDAB}',
    '\u{1CDD5}', '\u{1CDD6}', '\u{1CDD9}', '\u{1CDDA}', '\u{259F}', '\u{1CDE3}', '\u{1CDE5}', '\u{2588}',
];

/// `(glyph, pattern)` pairs sorted by glyph, backing the reverse lookup.
const GLYPH_PATTERNS: [(char, u8); 256] = [
    (' ', 0x00), ('\u{2580}', 0x33), ('\u{2582}', 0x88), ('\u{2584}', 0xCC),
    ('\u{2586}', 0xEE), ('\u{2588}', 0xFF), ('\u{258C}', 0x0F), ('\u{2590}', 0xF0),
    ('\u{2596}', 0x0C), ('\u{2597}', 0xC0), ('\u{2598}', 0x03), ('\u{2599}', 0xCF),
    ('\u{259A}', 0xC3), ('\u{259B}', 0x3F), ('\u{259C}', 0xF3), ('\u{259D}', 0x30),
    ('\u{259E}', 0x3C), ('\u{259F}', 0xFC), ('\u{1CD00}', 0x02), ('\u{1CD01}', 0x12),
    ('\u{1CD02}', 0x13), ('\u{1CD03}', 0x20), ('\u{1CD04}', 0x21), ('\u{1CD05}', 0x31),
    ('\u{1CD06}', 0x22), ('\u{1CD07}', 0x23), ('\u{1CD08}', 0x32), ('\u{1CD09}', 0x04),
    ('\u{1CD0A}', 0x05), ('\u{1CD0B}', 0x14), ('\u{1CD0C}', 0x15), ('\u{1CD0D}', 0x07),
    ('\u{1CD0E}', 0x16), ('\u{1CD0F}', 0x17), ('\u{1CD10}', 0x24), ('\u{1CD11}', 0x25),
    ('\u{1CD12}', 0x34), ('\u{1CD13}', 0x35), ('\u{1CD14}', 0x26), ('\u{1CD15}', 0x27),
    ('\u{1CD16}', 0x36), ('\u{1CD17}', 0x37), ('\u{1CD18}', 0x40), ('\u{1CD19}', 0x41),
    ('\u{1CD1A}', 0x50), ('\u{1CD1B}', 0x51), ('\u{1CD1C}', 0x42), ('\u{1CD1D}', 0x43),
    ('\u{1CD1E}', 0x52), ('\u{1CD1F}', 0x53), ('\u{1CD20}', 0x61), ('\u{1CD21}', 0x70),
    ('\u{1CD22}', 0x71), ('\u{1CD23}', 0x62), ('\u{1CD24}', 0x63), ('\u{1CD25}', 0x72),
    ('\u{1CD26}', 0x73), ('\u{1CD27}', 0x44), ('\u{1CD28}', 0x45), ('\u{1CD29}', 0x54),
    ('\u{1CD2A}', 0x55), ('\u{1CD2B}', 0x46), ('\u{1CD2C}', 0x47), ('\u{1CD2D}', 0x56),
    ('\u{1CD2E}', 0x57), ('\u{1CD2F}', 0x64), ('\u{1CD30}', 0x65), ('\u{1CD31}', 0x74),
    ('\u{1CD32}', 0x75), ('\u{1CD33}', 0x66), ('\u{1CD34}', 0x67), ('\u{1CD35}', 0x76),
    ('\u{1CD36}', 0x09), ('\u{1CD37}', 0x18), ('\u{1CD38}', 0x19), ('\u{1CD39}', 0x0A),
    ('\u{1CD3A}', 0x0B), ('\u{1CD3B}', 0x1A), ('\u{1CD3C}', 0x1B), ('\u{1CD3D}', 0x28),
    ('\u{1CD3E}', 0x29), ('\u{1CD3F}', 0x38), ('\u{1CD40}', 0x39), ('\u{1CD41}', 0x2A),
    ('\u{1CD42}', 0x2B), ('\u{1CD43}', 0x3A), ('\u{1CD44}', 0x3B), ('\u{1CD45}', 0x0D),
    ('\u{1CD46}', 0x1C), ('\u{1CD47}', 0x1D), ('\u{1CD48}', 0x0E), ('\u{1CD49}', 0x1E),
    ('\u{1CD4A}', 0x1F), ('\u{1CD4B}', 0x2C), ('\u{1CD4C}', 0x2D), ('\u{1CD4D}', 0x3D),
    ('\u{1CD4E}', 0x2E), ('\u{1CD4F}', 0x2F), ('\u{1CD50}', 0x3E), ('\u{1CD51}', 0x48),
    ('\u{1CD52}', 0x49), ('\u{1CD53}', 0x58), ('\u{1CD54}', 0x59), ('\u{1CD55}', 0x4A),
    ('\u{1CD56}', 0x4B), ('\u{1CD57}', 0x5A), ('\u{1CD58}', 0x5B), ('\u{1CD59}', 0x68),
    ('\u{1CD5A}', 0x69), ('\u{1CD5B}', 0x78), ('\u{1CD5C}', 0x79), ('\u{1CD5D}', 0x6A),
    ('\u{1CD5E}', 0x6B), ('\u{1CD5F}', 0x7A), ('\u{1CD60}', 0x7B), ('\u{1CD61}', 0x4C),
    ('\u{1CD62}', 0x4D), ('\u{1CD63}', 0x5C), ('\u{1CD64}', 0x5D), ('\u{1CD65}', 0x4E),
    ('\u{1CD66}', 0x4F), ('\u{1CD67}', 0x5E), ('\u{1CD68}', 0x5F), ('\u{1CD69}', 0x6C),
    ('\u{1CD6A}', 0x6D), ('\u{1CD6B}', 0x7C), ('\u{1CD6C}', 0x7D), ('\u{1CD6D}', 0x6E),
    ('\u{1CD6E}', 0x6F), ('\u{1CD6F}', 0x7E), ('\u{1CD70}', 0x7F), ('\u{1CD71}', 0x81),
    ('\u{1CD72}', 0x90), ('\u{1CD73}', 0x91), ('\u{1CD74}', 0x82), ('\u{1CD75}', 0x83),
    ('\u{1CD76}', 0x92), ('\u{1CD77}', 0x93), ('\u{1CD78}', 0xA0), ('\u{1CD79}', 0xA1),
    ('\u{1CD7A}', 0xB0), ('\u{1CD7B}', 0xB1), ('\u{1CD7C}', 0xA2), ('\u{1CD7D}', 0xA3),
    ('\u{1CD7E}', 0xB2), ('\u{1CD7F}', 0xB3), ('\u{1CD80}', 0x84), ('\u{1CD81}', 0x85),
    ('\u{1CD82}', 0x94), ('\u{1CD83}', 0x95), ('\u{1CD84}', 0x86), ('\u{1CD85}', 0x87),
    ('\u{1CD86}', 0x96), ('\u{1CD87}', 0x97), ('\u{1CD88}', 0xA4), ('\u{1CD89}', 0xA5),
    ('\u{1CD8A}', 0xB4), ('\u{1CD8B}', 0xB5), ('\u{1CD8C}', 0xA6), ('\u{1CD8D}', 0xA7),
    ('\u{1CD8E}', 0xB6), ('\u{1CD8F}', 0xB7), ('\u{1CD90}', 0xC1), ('\u{1CD91}', 0xD0),
    ('\u{1CD92}', 0xD1), ('\u{1CD93}', 0xC2), ('\u{1CD94}', 0xD2), ('\u{1CD95}', 0xD3),
    ('\u{1CD96}', 0xE0), ('\u{1CD97}', 0xE1), ('\u{1CD98}', 0xF1), ('\u{1CD99}', 0xE2),
    ('\u{1CD9A}', 0xE3), ('\u{1CD9B}', 0xF2), ('\u{1CD9C}', 0xC4), ('\u{1CD9D}', 0xC5),
    ('\u{1CD9E}', 0xD4), ('\u{1CD9F}', 0xD5), ('\u{1CDA0}', 0xC6), ('\u{1CDA1}', 0xC7),
    ('\u{1CDA2}', 0xD6), ('\u{1CDA3}', 0xD7), ('\u{1CDA4}', 0xE4), ('\u{1CDA5}', 0xE5),
    ('\u{1CDA6}', 0xF4), ('\u{1CDA7}', 0xF5), ('\u{1CDA8}', 0xE6), ('\u{1CDA9}', 0xE7),
    ('\u{1CDAA}', 0xF6), ('\u{1CDAB}', 0xF7), ('\u{1CDAC}', 0x89), ('\u{1CDAD}', 0x98),
    ('\u{1CDAE}', 0x99), ('\u{1CDAF}', 0x8A), ('\u{1CDB0}', 0x8B), ('\u{1CDB1}', 0x9A),
    ('\u{1CDB2}', 0x9B), ('\u{1CDB3}', 0xA8), ('\u{1CDB4}', 0xA9), ('\u{1CDB5}', 0xB8),
    ('\u{1CDB6}', 0xB9), ('\u{1CDB7}', 0xAA), ('\u{1CDB8}', 0xAB), ('\u{1CDB9}', 0xBA),
    ('\u{1CDBA}', 0xBB), ('\u{1CDBB}', 0x8C), ('\u{1CDBC}', 0x8D), ('\u{1CDBD}', 0x9C),
    ('\u{1CDBE}', 0x9D), ('\u{1CDBF}', 0x8E), ('\u{1CDC0}', 0x8F), ('\u{1CDC1}', 0x9E),
    ('\u{1CDC2}', 0x9F), ('\u{1CDC3}', 0xAC), ('\u{1CDC4}', 0xAD), ('\u{1CDC5}', 0xBC),
    ('\u{1CDC6}', 0xBD), ('\u{1CDC7}', 0xAE), ('\u{1CDC8}', 0xAF), ('\u{1CDC9}', 0xBE),
    ('\u{1CDCA}', 0xBF), ('\u{1CDCB}', 0xC8), ('\u{1CDCC}', 0xC9), ('\u{1CDCD}', 0xD8),
    ('\u{1CDCE}', 0xD9), ('\u{1CDCF}', 0xCA), ('\u{1CDD0}', 0xCB), ('\u{1CDD1}', 0xDA),
    ('\u{1CDD2}', 0xDB), ('\u{1CDD3}', 0xE8), ('\u{1CDD4}', 0xE9), ('\u{1CDD5}', 0xF8),
    ('\u{1CDD6}', 0xF9), ('\u{1CDD7}', 0xEA), ('\u{1CDD8}', 0xEB), ('\u{1CDD9}', 0xFA),
    ('\u{1CDDA}', 0xFB), ('\u{1CDDB}', 0xCD), ('\u{1CDDC}', 0xDC), ('\u{1CDDD}', 0xDD),
    ('\u{1CDDE}', 0xCE), ('\u{1CDDF}', 0xDE), ('\u{1CDE0}', 0xDF), ('\u{1CDE1}', 0xEC),
    ('\u{1CDE2}', 0xED), ('\u{1CDE3}', 0xFD), ('\u{1CDE4}', 0xEF), ('\u{1CDE5}', 0xFE),
    ('\u{1CEA0}', 0x80), ('\u{1CEA3}', 0x08), ('\u{1CEA8}', 0x01), ('\u{1CEAB}', 0x10),
    ('\u{1FB82}', 0x11), ('\u{1FB85}', 0x77), ('\u{1FBE6}', 0x06), ('\u{1FBE7}', 0x60),
];

/// Returns the glyph covering exactly the pixels of `pattern`.
#[inline]
pub fn glyph_for_pattern(pattern: u8) -> char {
    GLYPHS[pattern as usize]
}

/// Returns the pattern a glyph encodes, or `None` for any character
/// outside the table.
pub fn pattern_for_glyph(glyph: char) -> Option<u8> {
    GLYPH_PATTERNS
        .binary_search_by_key(&glyph, |&(g, _)| g)
        .ok()
        .map(|idx| GLYPH_PATTERNS[idx].1)
}

/// Bit covering pixel `(px, py)` inside a cell, `px < 2`, `py < 4`.
#[inline]
pub fn pattern_bit(px: usize, py: usize) -> u8 {
    debug_assert!(px < CELL_W && py < CELL_H);
    1 << (py + CELL_H * px)
}
