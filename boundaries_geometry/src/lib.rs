//! Geometry primitives, feature values and polygon algorithms used by the boundaries tile profile.
//!
//! Coordinates are plain `f64` pairs in whatever frame the caller works in: degrees for
//! source features, tile pixels for the per-tile merge pass. Nothing in this crate reprojects.

mod error;
mod geo;
pub mod geojson;
pub mod math;

pub use error::*;
pub use geo::*;
pub use geojson::*;
