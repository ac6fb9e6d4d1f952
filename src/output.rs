use std::{fmt::Write as _, fs};

use anyhow::Result;
use indexmap::IndexMap;

use crate::coords::Coordinate;

pub const JSON_PATH: &str = "cidades_paraiba.json";
pub const MODULE_PATH: &str = "cidades_paraiba.rs";

/// Normalized key -> coordinate, in listing order.
pub type Table = IndexMap<String, Coordinate>;

pub fn write(table: &Table) -> Result<()> {
    let mut json = serde_json::to_string_pretty(table)?;
    json.push('\n');
    fs::write(JSON_PATH, json)?;
    fs::write(MODULE_PATH, render_module(table)?)?;
    Ok(())
}

/// The same mapping as a Rust source literal, for `include!`-style use.
/// Floats are rendered with `{:?}` so whole numbers keep their `.0`.
pub fn render_module(table: &Table) -> Result<String> {
    let mut out = String::from("// generated by cidades, do not edit\n");
    out.push_str("pub static CIDADES_PARAIBA: &[(&str, (f64, f64))] = &[\n");
    for (key, Coordinate(lat, lon)) in table {
        writeln!(out, "    ({key:?}, ({lat:?}, {lon:?})),")?;
    }
    out.push_str("];\n");
    Ok(out)
}
