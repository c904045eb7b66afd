//! Private-use code points for ligatures without a Unicode assignment
//!
//! Ligatures that Unicode does encode (`ff`, `fi`, `ffl`, `st`, ...) live in
//! the main glyph list. The names here get fixed slots at the start of the
//! Private Use Area. Documents serialize these values, so the slots never move.

use std::ops::RangeInclusive;

/// Code points reserved for [`LIGATURES`]
pub const LIGATURE_RANGE: RangeInclusive<u32> = 0xE000..=0xE00B;

/// Ligature glyph names and their assigned code points
pub static LIGATURES: &[(&str, u32)] = &[
    ("f_t", 0xE000),
    ("f_j", 0xE001),
    ("f_b", 0xE002),
    ("f_h", 0xE003),
    ("f_k", 0xE004),
    ("t_t", 0xE005),
    ("t_f", 0xE006),
    ("f_f_j", 0xE007),
    ("f_f_b", 0xE008),
    ("f_f_h", 0xE009),
    ("f_f_k", 0xE00A),
    ("T_h", 0xE00B),
];
