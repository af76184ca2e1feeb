//! Polygon algorithms: label points, proximity, simplification and union.

mod interior_point;
mod proximity;
mod simplify;
mod union;

pub use interior_point::*;
pub use proximity::*;
pub use simplify::*;
pub use union::*;
