use thiserror::Error;

/// A polygon operation could not complete because its input is degenerate or invalid.
///
/// Library functions return it wrapped in `anyhow::Error`; callers that need to scope
/// the failure to one feature or one tile use `downcast_ref::<GeometryError>()`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
	#[error("geometry is empty")]
	EmptyGeometry,

	#[error("invalid ring: {0}")]
	InvalidRing(String),

	#[error("coordinate [{0}, {1}] is not finite")]
	NonFinite(f64, f64),

	#[error("no interior point found: {0}")]
	NoInteriorPoint(String),

	#[error("expected a polygon or multipolygon, got {0}")]
	NotAPolygon(String),
}
