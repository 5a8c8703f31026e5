//! Text exports of decoded maps.

mod json;

pub use json::{json_file_name, to_json, write_json};
