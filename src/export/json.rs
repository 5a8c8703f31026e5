//! JSON export for decoded maps.
//!
//! Every field is written under its camelCase name with native JSON types.
//! Heights keep full `f32` precision; non-finite heights have no JSON
//! representation and are written as `null`.

use std::fs;
use std::path::Path;

use crate::error::{MgmError, Result};
use crate::types::DecodedMap;

/// Serialize a map to a JSON string.
pub fn to_json(map: &DecodedMap, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(map)
    } else {
        serde_json::to_string(map)
    };

    json.map_err(|e| MgmError::Export {
        message: format!("Failed to serialize map '{}': {}", map.title, e),
        help: None,
    })
}

/// Serialize a map and write it to `path`.
pub fn write_json(map: &DecodedMap, path: &Path, pretty: bool) -> Result<()> {
    let json = to_json(map, pretty)?;
    fs::write(path, json).map_err(|e| MgmError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write JSON: {}", e),
    })?;
    Ok(())
}

/// File name for a map's JSON document: `<title>.json`, or `<fallback>.json`
/// when the title is blank.
///
/// Characters that cannot appear in a file name are replaced with `_`.
pub fn json_file_name(map: &DecodedMap, fallback: &str) -> String {
    let title = map.title.trim();
    let stem = if title.is_empty() { fallback } else { title };
    format!("{}.json", sanitize_file_stem(stem))
}

fn sanitize_file_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => "map".to_string(),
        _ => cleaned,
    }
}
