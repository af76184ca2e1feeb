//! GeoJSON input and output for the geometry types of this crate.
//!
//! Source features reach the profile as GeoJSON `FeatureCollection`s or as newline-delimited
//! GeoJSON; merged tiles leave it as collections again.

mod parse;
mod read;

pub use parse::*;
pub use read::*;
