//! Glyph name resolution
//!
//! A name is resolved in a fixed order, and the first step that produces a
//! code point wins:
//! 1. A single `.suffix` is stripped (`eight.lf` -> `eight`)
//! 2. One alias hop (`Acyrillic` -> `afii10017`)
//! 3. Primary table
//! 4. Ligature table
//! 5. `uniXXXX` with exactly four uppercase hex digits
//! 6. One ASCII letter followed by one to five decimal digits (`C211` -> 211)

use std::collections::HashMap;
use std::sync::LazyLock;

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;

use crate::glyph_names::{alias_list, glyph_list, parse_alias_list, parse_glyph_list};
use crate::ligatures::{LIGATURES, LIGATURE_RANGE};
use crate::GlyphError;

// Word and digit classes are ASCII-only: other bytes never match a pattern
static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?-u:(\w+)\.\w+)$").unwrap());
static UNI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^uni([0-9A-F]{4})$").unwrap());
static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]((?-u:\d){1,5})$").unwrap());

static BUILTIN: LazyLock<GlyphTables<'static>> = LazyLock::new(|| {
    let tables = GlyphTables::from_maps(
        glyph_list().iter().copied().collect(),
        alias_list().iter().copied().collect(),
        LIGATURES.iter().copied().collect(),
    );
    log::debug!(
        "Built glyph tables: {} names, {} aliases, {} ligatures",
        tables.primary.len(),
        tables.aliases.len(),
        tables.ligatures.len()
    );
    tables
});

/// Lookup tables for glyph name resolution.
///
/// Tables are read-only once built and can be shared freely across threads.
/// Names are borrowed, so tables parsed from text live as long as the text.
#[derive(Debug, Clone, Default)]
pub struct GlyphTables<'a> {
    primary: HashMap<&'a str, u32>,
    aliases: HashMap<&'a str, &'a str>,
    ligatures: HashMap<&'a str, u32>,
}

impl<'a> GlyphTables<'a> {
    /// The bundled tables, built on first use
    pub fn builtin() -> &'static GlyphTables<'static> {
        &BUILTIN
    }

    /// Build tables from entry lists.
    ///
    /// When a name is listed more than once, the last entry wins. Aliases
    /// whose target is not a primary name are kept but never resolve.
    pub fn from_entries<P, A, L>(primary: P, aliases: A, ligatures: L) -> Result<Self, GlyphError>
    where
        P: IntoIterator<Item = (&'a str, u32)>,
        A: IntoIterator<Item = (&'a str, &'a str)>,
        L: IntoIterator<Item = (&'a str, u32)>,
    {
        let ligatures = ligatures
            .into_iter()
            .map(|(name, codepoint)| {
                if LIGATURE_RANGE.contains(&codepoint) {
                    Ok((name, codepoint))
                } else {
                    Err(GlyphError::LigatureOutOfRange {
                        name: name.to_string(),
                        codepoint,
                    })
                }
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        let tables = Self::from_maps(
            primary.into_iter().collect(),
            aliases.into_iter().collect(),
            ligatures,
        );

        for (alias, canonical) in &tables.aliases {
            if !tables.primary.contains_key(*canonical) {
                log::debug!("Alias {alias:?} targets {canonical:?}, which is not a glyph name");
            }
        }
        log::debug!(
            "Built custom glyph tables: {} names, {} aliases, {} ligatures",
            tables.primary.len(),
            tables.aliases.len(),
            tables.ligatures.len()
        );

        Ok(tables)
    }

    /// Build tables from text in the `data/glyphlist.txt` and
    /// `data/aliases.txt` formats, with the bundled ligatures.
    pub fn parse(glyph_list: &'a str, alias_list: &'a str) -> Result<Self, GlyphError> {
        let primary = parse_glyph_list(glyph_list)?;
        let aliases = parse_alias_list(alias_list)?;
        Self::from_entries(primary, aliases, LIGATURES.iter().copied())
    }

    fn from_maps(
        primary: HashMap<&'a str, u32>,
        aliases: HashMap<&'a str, &'a str>,
        ligatures: HashMap<&'a str, u32>,
    ) -> Self {
        Self {
            primary,
            aliases,
            ligatures,
        }
    }

    /// Code point of a canonical glyph name, without any fallback
    pub fn primary(&self, name: &str) -> Option<u32> {
        self.primary.get(name).copied()
    }

    /// Canonical name an alias stands for
    pub fn alias(&self, name: &str) -> Option<&'a str> {
        self.aliases.get(name).copied()
    }

    pub fn ligature(&self, name: &str) -> Option<u32> {
        self.ligatures.get(name).copied()
    }

    pub fn primaries(&self) -> impl Iterator<Item = (&'a str, u32)> + '_ {
        self.primary.iter().map(|(name, cp)| (*name, *cp))
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.aliases.iter().map(|(alias, canonical)| (*alias, *canonical))
    }

    pub fn ligatures(&self) -> impl Iterator<Item = (&'a str, u32)> + '_ {
        self.ligatures.iter().map(|(name, cp)| (*name, *cp))
    }

    /// Number of canonical glyph names
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Resolve a glyph name to a code point.
    ///
    /// Returns `None` when no table entry or fallback pattern matches. Table
    /// values are returned unchanged, including the surrogate placeholders a
    /// few legacy names carry; use [`GlyphTables::glyph_to_char`] to reject
    /// those.
    pub fn resolve(&self, name: &str) -> Option<u32> {
        let mut name = name;

        // `.notdef` and names with several dots are left alone
        if name.contains('.') {
            if let Some(base) = SUFFIX_RE.captures(name).and_then(|caps| caps.get(1)) {
                name = base.as_str();
            }
        }

        // Exactly one hop
        if let Some(canonical) = self.aliases.get(name) {
            name = *canonical;
        }

        if let Some(&cp) = self.primary.get(name) {
            return Some(cp);
        }
        if let Some(&cp) = self.ligatures.get(name) {
            return Some(cp);
        }

        if let Some(hex) = UNI_RE.captures(name).and_then(|caps| caps.get(1)) {
            if let Ok(cp) = u32::from_str_radix(hex.as_str(), 16) {
                return Some(cp);
            }
        }

        DECIMAL_RE
            .captures(name)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse().ok())
    }

    /// Resolve a batch of names in parallel, keeping input order
    pub fn resolve_many<S: AsRef<str> + Sync>(&self, names: &[S]) -> Vec<Option<u32>> {
        names
            .par_iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect()
    }

    /// Resolve a glyph name and convert it to a `char`
    pub fn glyph_to_char(&self, name: &str) -> Result<char, GlyphError> {
        let codepoint = self
            .resolve(name)
            .ok_or_else(|| GlyphError::UnknownGlyph(name.to_string()))?;
        char::from_u32(codepoint).ok_or_else(|| GlyphError::NotAScalar {
            name: name.to_string(),
            codepoint,
        })
    }
}

/// Resolve a glyph name with the bundled tables
pub fn resolve(name: &str) -> Option<u32> {
    BUILTIN.resolve(name)
}

/// Resolve a batch of glyph names with the bundled tables
pub fn resolve_many<S: AsRef<str> + Sync>(names: &[S]) -> Vec<Option<u32>> {
    BUILTIN.resolve_many(names)
}
