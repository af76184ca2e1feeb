use crate::{Coordinates, Geometry, GeometryError, GeometryTrait, PointGeometry, PolygonGeometry};
use anyhow::Result;

/// Widest interior interval found on a horizontal scan line.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ScanInterval {
	y: f64,
	x_min: f64,
	x_max: f64,
}

impl ScanInterval {
	fn width(&self) -> f64 {
		self.x_max - self.x_min
	}
	fn midpoint(&self) -> Coordinates {
		Coordinates::new((self.x_min + self.x_max) / 2.0, self.y)
	}
}

/// Computes a point that lies strictly inside a polygonal geometry, suitable for
/// placing a label.
///
/// A horizontal scan line is placed halfway between the two vertex ordinates
/// closest to the vertical centre of the bounding box, so it never passes through a
/// vertex. The midpoint of the widest interior interval along that line is returned.
/// For multi-polygons the widest interval over all parts wins; ties keep the first part.
///
/// # Errors
/// Fails with [`GeometryError::NotAPolygon`] for points and lines, with the
/// verification error for malformed polygons and with
/// [`GeometryError::NoInteriorPoint`] for degenerate (zero-area) input.
pub fn interior_point(geometry: &Geometry) -> Result<PointGeometry> {
	let polygons = match geometry {
		Geometry::Polygon(polygon) => std::slice::from_ref(polygon),
		Geometry::MultiPolygon(multi) => multi.0.as_slice(),
		other => return Err(GeometryError::NotAPolygon(other.get_type_name().to_string()).into()),
	};
	polygons_interior_point(polygons)
}

/// Same as [`interior_point`] for a list of polygons.
///
/// # Errors
/// See [`interior_point`].
pub fn polygons_interior_point(polygons: &[PolygonGeometry]) -> Result<PointGeometry> {
	if polygons.is_empty() {
		return Err(GeometryError::EmptyGeometry.into());
	}

	let mut best: Option<(usize, ScanInterval)> = None;
	for (index, polygon) in polygons.iter().enumerate() {
		polygon.verify()?;
		if let Some(interval) = widest_interval(polygon)
			&& best.is_none_or(|(_, b)| interval.width() > b.width())
		{
			best = Some((index, interval));
		}
	}

	let Some((index, interval)) = best else {
		return Err(GeometryError::NoInteriorPoint("no interior interval on scan line".to_string()).into());
	};

	let point = interval.midpoint();
	if !polygons[index].contains_point(point.x(), point.y()) {
		return Err(GeometryError::NoInteriorPoint(format!("candidate {point:?} is not inside the polygon")).into());
	}
	Ok(PointGeometry::new(point))
}

/// Ordinate halfway between the nearest vertex ordinates below and above the centre.
fn scan_line_y(polygon: &PolygonGeometry) -> Option<f64> {
	let [_, y_min, _, y_max] = polygon.compute_bounds()?;
	let centre = (y_min + y_max) / 2.0;

	let mut lo = y_min;
	let mut hi = y_max;
	for c in polygon.0.iter().flat_map(|ring| ring.0.iter()) {
		let y = c.y();
		if y <= centre {
			if y > lo {
				lo = y;
			}
		} else if y < hi {
			hi = y;
		}
	}
	Some((lo + hi) / 2.0)
}

fn widest_interval(polygon: &PolygonGeometry) -> Option<ScanInterval> {
	let y = scan_line_y(polygon)?;

	let mut crossings: Vec<f64> = polygon
		.0
		.iter()
		.flat_map(|ring| ring.segments())
		.filter(|(a, b)| (a.y() > y) != (b.y() > y))
		.map(|(a, b)| a.x() + (y - a.y()) * (b.x() - a.x()) / (b.y() - a.y()))
		.collect();

	if crossings.len() % 2 != 0 {
		return None;
	}
	crossings.sort_by(f64::total_cmp);

	let mut best: Option<ScanInterval> = None;
	for pair in crossings.chunks_exact(2) {
		let interval = ScanInterval {
			y,
			x_min: pair[0],
			x_max: pair[1],
		};
		if interval.width() > 0.0 && best.is_none_or(|b| interval.width() > b.width()) {
			best = Some(interval);
		}
	}
	best
}
