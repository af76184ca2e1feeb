// Geometry primitives of the boundaries profile: points, lines, rings, polygons and their
// multi-geometry counterparts. They share `GeometryTrait` for area, validation, bounds and
// point-in-geometry queries, and `CompositeGeometryTrait` for the vector-backed containers.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
