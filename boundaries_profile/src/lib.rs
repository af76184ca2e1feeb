//! Layer profile of the national boundaries vector tiles.
//!
//! Source features are classified into output layers by a data-driven rule table
//! ([`ProfileConfig`]), their tags are projected into zoom-dependent attributes
//! ([`AttributeProjector`]), and each match becomes an [`EmittedFeature`] that renders
//! into a tile feature per zoom level. Dense polygon layers are merged per tile by
//! the [`PolygonMerger`].
//!
//! ```
//! use boundaries_geometry::{GeoProperties, Geometry};
//! use boundaries_profile::{Profile, SourceFeature, TileContext};
//!
//! let profile = Profile::builtin().unwrap();
//! let feature = SourceFeature::new(
//! 	"counties",
//! 	Geometry::new_polygon(&[vec![[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]]]),
//! )
//! .with_tags(GeoProperties::from(vec![("code", "1"), ("name", "Alytaus apskritis")]));
//!
//! let emitted = profile.process_feature(&feature).unwrap();
//! assert_eq!(emitted[0].layer, "counties");
//! assert_eq!(emitted[1].layer, "counties_label");
//! assert!(emitted[1].render(&TileContext::new(6, 1.0)).is_some());
//! ```

mod classifier;
mod config;
mod emitter;
mod merger;
mod profile;
mod projector;
mod source;
mod stream;

pub use classifier::*;
pub use config::*;
pub use emitter::*;
pub use merger::*;
pub use profile::*;
pub use projector::*;
pub use source::*;
pub use stream::*;
