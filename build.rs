//! Generate static arrays from the glyph name data files

use std::{env, fs::File, io::BufWriter, io::Write, path::Path};

const OUT_FILE: &str = "glyph_codegen.rs";

fn main() {
    println!("cargo::rerun-if-changed=data");

    let path = Path::new(&env::var("OUT_DIR").unwrap()).join(OUT_FILE);
    let mut file = BufWriter::new(File::create(path).unwrap());
    write_glyph_list(&mut file);
    write_alias_list(&mut file);
    file.flush().unwrap();
}

fn write_glyph_list(out: &mut impl Write) {
    let formatted = parse_pairs("data/glyphlist.txt")
        .into_iter()
        .map(|(name, hex)| {
            let cp = u32::from_str_radix(&hex, 16)
                .unwrap_or_else(|_| panic!("bad code point for {name}: {hex}"));
            format!("({name:?}, 0x{cp:04X})")
        })
        .collect::<Vec<_>>()
        .join(",\n");
    writeln!(out, "static GLYPH_LIST: &[(&str, u32)] = &[\n{formatted}];\n").unwrap();
}

fn write_alias_list(out: &mut impl Write) {
    let formatted = parse_pairs("data/aliases.txt")
        .into_iter()
        .map(|(alias, canonical)| format!("({alias:?}, {canonical:?})"))
        .collect::<Vec<_>>()
        .join(",\n");
    writeln!(out, "static GLYPH_ALIAS_LIST: &[(&str, &str)] = &[\n{formatted}];\n").unwrap();
}

fn parse_pairs(path: &str) -> Vec<(String, String)> {
    let raw_source = std::fs::read_to_string(path).unwrap();
    raw_source
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| match l.split_once(';') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() && !value.contains(';') => {
                (key.to_string(), value.to_string())
            }
            _ => panic!("malformed line in {path}: {l}"),
        })
        .collect()
}
