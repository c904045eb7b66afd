//! Glyph name to Unicode resolution
//!
//! This crate provides:
//! - The Adobe Glyph List corpus, extended with AFII, TeX, Zapf Dingbats and
//!   legacy private-use names
//! - An alias table that collapses alternative spellings onto canonical names
//! - Private-use code points for ligatures that have no Unicode assignment
//! - Syntactic fallbacks for suffixed names (`eight.lf`), `uniXXXX` names and
//!   letter-plus-decimal names (`C211`)
//!
//! ```
//! assert_eq!(glyph_names::resolve("Acyrillic"), Some(0x0410));
//! assert_eq!(glyph_names::resolve("uni2022"), Some(0x2022));
//! assert_eq!(glyph_names::resolve("totallyUnknown"), None);
//! ```

pub mod glyph_names;
pub mod ligatures;
pub mod resolver;

pub use glyph_names::glyph_to_char;
pub use ligatures::{LIGATURES, LIGATURE_RANGE};
pub use resolver::{resolve, resolve_many, GlyphTables};

#[derive(Debug, thiserror::Error)]
pub enum GlyphError {
    #[error("Unknown glyph name: {0:?}")]
    UnknownGlyph(String),
    #[error("Glyph {name:?} maps to U+{codepoint:04X}, which is not a Unicode scalar value")]
    NotAScalar { name: String, codepoint: u32 },
    #[error("Malformed table entry on line {line}: {content:?}")]
    Parse { line: usize, content: String },
    #[error("Ligature {name:?} maps to U+{codepoint:04X}, outside the ligature range")]
    LigatureOutOfRange { name: String, codepoint: u32 },
}
