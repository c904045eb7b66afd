//! Adobe Glyph List mapping from glyph names to Unicode
//! The bundled tables are generated from `data/glyphlist.txt` and `data/aliases.txt`

use crate::resolver::GlyphTables;
use crate::GlyphError;

// build.rs generates GLYPH_LIST and GLYPH_ALIAS_LIST
include!(concat!(env!("OUT_DIR"), "/glyph_codegen.rs"));

/// Canonical glyph names and their code points, in data file order
pub fn glyph_list() -> &'static [(&'static str, u32)] {
    GLYPH_LIST
}

/// Alternative glyph names and the canonical name each one stands for
pub fn alias_list() -> &'static [(&'static str, &'static str)] {
    GLYPH_ALIAS_LIST
}

/// Parse a glyph list in the `name;HHHH` format of `data/glyphlist.txt`.
///
/// Blank lines and lines starting with `#` are skipped. Names are borrowed
/// from `src`.
pub fn parse_glyph_list(src: &str) -> Result<Vec<(&str, u32)>, GlyphError> {
    entries(src)
        .map(|entry| {
            let (line, content, name, value) = entry?;
            let is_hex = !value.is_empty() && value.bytes().all(|b| b.is_ascii_hexdigit());
            match u32::from_str_radix(value, 16) {
                Ok(cp) if is_hex => Ok((name, cp)),
                _ => Err(GlyphError::Parse {
                    line,
                    content: content.to_string(),
                }),
            }
        })
        .collect()
}

/// Parse an alias list in the `alias;canonical` format of `data/aliases.txt`.
pub fn parse_alias_list(src: &str) -> Result<Vec<(&str, &str)>, GlyphError> {
    entries(src)
        .map(|entry| entry.map(|(_, _, alias, canonical)| (alias, canonical)))
        .collect()
}

type Entry<'a> = (usize, &'a str, &'a str, &'a str);

fn entries(src: &str) -> impl Iterator<Item = Result<Entry<'_>, GlyphError>> {
    src.lines()
        .enumerate()
        .map(|(idx, l)| (idx + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .map(|(line, l)| {
            let mut split = l.split(';');
            match (split.next(), split.next(), split.next()) {
                (Some(key), Some(value), None) if !key.is_empty() && !value.is_empty() => {
                    Ok((line, l, key, value))
                }
                _ => Err(GlyphError::Parse {
                    line,
                    content: l.to_string(),
                }),
            }
        })
}

/// Convert a glyph name to a `char` using the bundled tables.
///
/// Unlike [`resolve`](crate::resolve), this rejects the surrogate
/// placeholders some legacy names map to.
pub fn glyph_to_char(name: &str) -> Result<char, GlyphError> {
    GlyphTables::builtin().glyph_to_char(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_glyph_list() {
        let src = "# comment\n\nA;0041\n  Euro;20AC  \nFFIsmall;D801\n";
        let entries = parse_glyph_list(src).unwrap();
        assert_eq!(entries, vec![("A", 0x41), ("Euro", 0x20AC), ("FFIsmall", 0xD801)]);
    }

    #[test]
    fn test_parse_glyph_list_reports_line() {
        let src = "A;0041\n# comment\nB;zz42\n";
        match parse_glyph_list(src) {
            Err(GlyphError::Parse { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "B;zz42");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_glyph_list_rejects_signed_values() {
        assert!(parse_glyph_list("A;+41").is_err());
        assert!(parse_glyph_list("A;").is_err());
        assert!(parse_glyph_list(";0041").is_err());
    }

    #[test]
    fn test_parse_alias_list() {
        let src = "Acyrillic;afii10017\nf_f;ff\n";
        let entries = parse_alias_list(src).unwrap();
        assert_eq!(entries, vec![("Acyrillic", "afii10017"), ("f_f", "ff")]);

        assert!(parse_alias_list("a;b;c").is_err());
        assert!(parse_alias_list("missingseparator").is_err());
    }

    #[test]
    fn test_generated_tables_are_populated() {
        assert!(glyph_list().len() > 6000);
        assert!(alias_list().len() > 1000);
        assert!(glyph_list().contains(&(".notdef", 0xFFFD)));
        assert!(alias_list().contains(&("Acyrillic", "afii10017")));
    }

    #[test]
    fn test_glyph_to_char() {
        assert_eq!(glyph_to_char("A").unwrap(), 'A');
        assert_eq!(glyph_to_char("Euro").unwrap(), '€');
        assert_eq!(glyph_to_char("uni2022").unwrap(), '\u{2022}');
        assert!(matches!(
            glyph_to_char("nosuchglyph"),
            Err(GlyphError::UnknownGlyph(name)) if name == "nosuchglyph"
        ));
        assert!(matches!(
            glyph_to_char("FFIsmall"),
            Err(GlyphError::NotAScalar { codepoint: 0xD801, .. })
        ));
    }
}
