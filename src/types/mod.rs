//! Core domain types for mgmconv.
//!
//! - `DecodedMap` - a fully decoded terrain map
//! - `StartLocation` - a player start position
//! - `Colour` - opaque canvas colours used by the renderers

mod colour;
mod map;

pub use colour::Colour;
pub use map::{DecodedMap, StartLocation};
