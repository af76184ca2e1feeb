use crate::{GeometryTrait, MultiPolygonGeometry, RingGeometry};
use geo::{Area, BooleanOps, Buffer, Coord, Distance, Euclidean, MultiLineString, MultiPolygon};

// Shared areas below this are treated as touching edges.
const MIN_SHARED_AREA: f64 = 1e-9;

/// A polygon shape prepared for proximity queries against other shapes: its outline
/// and the zone within `reach` of it are computed once.
pub struct Footprint {
	shape: MultiPolygon<f64>,
	outline: MultiLineString<f64>,
	zone: MultiPolygon<f64>,
	bounds: [f64; 4],
}

impl Footprint {
	/// Returns `None` for an empty geometry.
	#[must_use]
	pub fn new(polygons: &MultiPolygonGeometry, reach: f64) -> Option<Self> {
		let bounds = polygons.compute_bounds()?;
		let shape = polygons.to_geo();
		let outline = MultiLineString::new(
			polygons
				.0
				.iter()
				.flat_map(|polygon| polygon.0.iter().map(RingGeometry::to_geo))
				.collect(),
		);
		let zone = shape.buffer(reach);
		Some(Self {
			shape,
			outline,
			zone,
			bounds,
		})
	}

	/// `[x_min, y_min, x_max, y_max]`
	#[must_use]
	pub fn bounds(&self) -> [f64; 4] {
		self.bounds
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.bounds[2] - self.bounds[0]
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.bounds[3] - self.bounds[1]
	}

	/// Minimum distance between both shapes, zero when they touch, cross or one
	/// contains the other.
	#[must_use]
	pub fn distance(&self, other: &Self) -> f64 {
		Euclidean.distance(&self.shape, &other.shape)
	}

	/// Whether the interiors of both shapes overlap. Shapes sharing only an edge do not.
	#[must_use]
	pub fn overlaps(&self, other: &Self) -> bool {
		self.shape.intersection(&other.shape).unsigned_area() > MIN_SHARED_AREA
	}

	/// How much of their boundaries two shapes have in common, between 0 and 1.
	///
	/// The parts of each outline that lie within reach of the other shape are projected
	/// onto the x and the y axis. The stretch both projections cover is divided by the
	/// smaller extent of the two shapes along that axis; the better axis wins. Shapes
	/// whose interiors overlap have ratio 1.
	#[must_use]
	pub fn contact_ratio(&self, other: &Self) -> f64 {
		if self.overlaps(other) {
			return 1.0;
		}
		let near_self = other.zone.clip(&self.outline, false);
		let near_other = self.zone.clip(&other.outline, false);

		let along_x = shared_length(&spans(&near_self, |c| c.x), &spans(&near_other, |c| c.x));
		let along_y = shared_length(&spans(&near_self, |c| c.y), &spans(&near_other, |c| c.y));

		axis_ratio(along_x, self.width(), other.width()).max(axis_ratio(along_y, self.height(), other.height()))
	}
}

/// Projects every line onto one axis and merges the overlapping intervals.
fn spans(lines: &MultiLineString<f64>, axis: fn(&Coord<f64>) -> f64) -> Vec<(f64, f64)> {
	let mut spans: Vec<(f64, f64)> = lines
		.iter()
		.filter_map(|line| {
			line
				.coords()
				.map(axis)
				.fold(None, |span: Option<(f64, f64)>, v| match span {
					None => Some((v, v)),
					Some((low, high)) => Some((low.min(v), high.max(v))),
				})
		})
		.collect();
	spans.sort_by(|a, b| a.0.total_cmp(&b.0));

	let mut merged: Vec<(f64, f64)> = Vec::with_capacity(spans.len());
	for (low, high) in spans {
		match merged.last_mut() {
			Some(last) if low <= last.1 => last.1 = last.1.max(high),
			_ => merged.push((low, high)),
		}
	}
	merged
}

/// Total length covered by both sorted, disjoint interval lists.
fn shared_length(a: &[(f64, f64)], b: &[(f64, f64)]) -> f64 {
	let (mut i, mut j) = (0, 0);
	let mut sum = 0.0;
	while i < a.len() && j < b.len() {
		let low = a[i].0.max(b[j].0);
		let high = a[i].1.min(b[j].1);
		if high > low {
			sum += high - low;
		}
		if a[i].1 < b[j].1 {
			i += 1;
		} else {
			j += 1;
		}
	}
	sum
}

fn axis_ratio(shared: f64, extent_a: f64, extent_b: f64) -> f64 {
	let smaller = extent_a.min(extent_b);
	if smaller <= 0.0 {
		return 1.0;
	}
	(shared / smaller).min(1.0)
}
