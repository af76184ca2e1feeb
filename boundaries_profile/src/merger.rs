use crate::MergeConfig;
use anyhow::{Context, Result};
use boundaries_geometry::{
	CompositeGeometryTrait, GeoFeature, GeoProperties, Geometry, GeometryTrait, MultiPolygonGeometry, PolygonGeometry,
	math::{Footprint, union_polygons},
};
use itertools::Itertools;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Merges polygon features of one tile. All coordinates are tile pixels.
///
/// From `zoom` on, fragments of the same feature (same id and same properties) are
/// unioned, which is lossless. Below it, polygons that lie within `buffer` pixels of
/// each other and face each other along enough of their boundary are merged into a
/// single feature, which bounds the tile payload for dense layers such as parcels.
#[derive(Debug, Clone)]
pub struct PolygonMerger {
	config: MergeConfig,
}

impl PolygonMerger {
	pub fn new(config: MergeConfig) -> Self {
		Self { config }
	}

	#[must_use]
	pub fn config(&self) -> &MergeConfig {
		&self.config
	}

	/// Rewrites the feature list of one tile. Non-polygon features pass through
	/// unchanged and keep their position.
	///
	/// # Errors
	/// Fails with a [`boundaries_geometry::GeometryError`] when a polygon is malformed.
	pub fn merge(&self, zoom: u8, features: Vec<GeoFeature>) -> Result<Vec<GeoFeature>> {
		self.check(zoom, &features)?;
		Ok(self.merge_checked(zoom, features))
	}

	/// Verifies every polygon of a tile. Merging a tile that passed cannot fail.
	pub fn check(&self, zoom: u8, features: &[GeoFeature]) -> Result<()> {
		for (index, feature) in features.iter().enumerate() {
			if feature.geometry.is_polygonal() {
				feature
					.geometry
					.verify()
					.with_context(|| format!("feature {index} of tile at zoom {zoom}"))?;
			}
		}
		Ok(())
	}

	/// [`PolygonMerger::merge`] for a tile that passed [`PolygonMerger::check`].
	#[must_use]
	pub fn merge_checked(&self, zoom: u8, features: Vec<GeoFeature>) -> Vec<GeoFeature> {
		let count = features.len();
		let result = if zoom >= self.config.zoom {
			merge_identical(features)
		} else {
			self.merge_nearby(features)
		};
		debug!("zoom {zoom}: merged {count} features into {}", result.len());
		result
	}

	fn merge_nearby(&self, features: Vec<GeoFeature>) -> Vec<GeoFeature> {
		let buffer = self.config.buffer;
		let candidates: Vec<Candidate> = features
			.iter()
			.enumerate()
			.filter_map(|(index, feature)| Candidate::new(index, feature, buffer))
			.collect();

		// sweep from left to right; a pair is only compared while their x ranges are within reach
		let order: Vec<usize> = (0..candidates.len())
			.sorted_by(|&a, &b| candidates[a].x_min().total_cmp(&candidates[b].x_min()))
			.collect();
		let mut groups = UnionFind::new(candidates.len());
		for (position, &i) in order.iter().enumerate() {
			let a = &candidates[i];
			for &j in &order[position + 1..] {
				let b = &candidates[j];
				if b.x_min() - a.x_max() > buffer {
					break;
				}
				if a.is_near(b, buffer) && a.footprint.contact_ratio(&b.footprint) >= self.config.min_overlap_ratio {
					groups.union(i, j);
				}
			}
		}

		let mut members: HashMap<usize, Vec<&Candidate>> = HashMap::new();
		for (i, candidate) in candidates.iter().enumerate() {
			members.entry(groups.find(i)).or_default().push(candidate);
		}

		// the group of each polygon feature is emitted at the position of its first member
		let mut merged: HashMap<usize, Option<GeoFeature>> = HashMap::new();
		for group in members.values().filter(|group| group.len() > 1) {
			merged.insert(group[0].index, self.merge_group(&features, group));
		}
		let absorbed: HashSet<usize> = members
			.values()
			.flat_map(|group| group.iter().skip(1).map(|c| c.index))
			.collect();

		let mut result = Vec::with_capacity(features.len());
		for (index, feature) in features.into_iter().enumerate() {
			if let Some(group) = merged.remove(&index) {
				result.extend(group);
			} else if !absorbed.contains(&index) {
				result.push(feature);
			}
		}
		result
	}

	/// Unions a group of at least two features. Attributes come from the member with
	/// the largest area, the earliest one on ties. Returns `None` when the area
	/// filters remove every part.
	fn merge_group(&self, features: &[GeoFeature], group: &[&Candidate]) -> Option<GeoFeature> {
		let polygons: Vec<PolygonGeometry> = group.iter().flat_map(|c| c.polygons.0.iter().cloned()).collect();
		let union = union_polygons(&polygons);
		let geometry = drop_small_parts(union, self.config.min_area, self.config.min_hole_area)?;

		let largest = group.iter().min_by(|a, b| b.area.total_cmp(&a.area))?;
		let properties: GeoProperties = features[largest.index].properties.clone();

		Some(GeoFeature {
			id: None,
			geometry: Geometry::MultiPolygon(geometry),
			properties,
		})
	}
}

/// Unions polygon fragments that share id and properties. Groups keep the order of
/// their first fragment.
fn merge_identical(features: Vec<GeoFeature>) -> Vec<GeoFeature> {
	enum Slot {
		Polygons(Option<u64>, GeoProperties, Vec<PolygonGeometry>),
		Other(GeoFeature),
	}

	let mut slots: Vec<Slot> = Vec::new();
	let mut lookup: HashMap<(Option<u64>, GeoProperties), usize> = HashMap::new();

	for feature in features {
		let Some(polygons) = feature.geometry.to_multi_polygon() else {
			slots.push(Slot::Other(feature));
			continue;
		};
		let key = (feature.id, feature.properties);
		if let Some(&slot) = lookup.get(&key)
			&& let Slot::Polygons(_, _, list) = &mut slots[slot]
		{
			list.extend(polygons.into_inner());
			continue;
		}
		lookup.insert(key.clone(), slots.len());
		slots.push(Slot::Polygons(key.0, key.1, polygons.into_inner()));
	}

	slots
		.into_iter()
		.map(|slot| match slot {
			Slot::Other(feature) => feature,
			Slot::Polygons(id, properties, polygons) => GeoFeature {
				id,
				geometry: Geometry::MultiPolygon(union_polygons(&polygons)),
				properties,
			},
		})
		.collect()
}

/// Removes holes below `min_hole_area`, then parts below `min_area`.
fn drop_small_parts(geometry: MultiPolygonGeometry, min_area: f64, min_hole_area: f64) -> Option<MultiPolygonGeometry> {
	let mut parts = Vec::with_capacity(geometry.len());
	for polygon in geometry.into_iter() {
		let mut rings = polygon.into_inner().into_iter();
		let Some(exterior) = rings.next() else {
			continue;
		};
		let mut kept = vec![exterior];
		kept.extend(rings.filter(|hole| hole.area().abs() >= min_hole_area));
		let polygon = PolygonGeometry(kept);
		if polygon.area() >= min_area {
			parts.push(polygon);
		}
	}
	(!parts.is_empty()).then_some(MultiPolygonGeometry(parts))
}

/// A polygon feature taking part in a proximity merge.
struct Candidate {
	index: usize,
	polygons: MultiPolygonGeometry,
	footprint: Footprint,
	area: f64,
}

impl Candidate {
	fn new(index: usize, feature: &GeoFeature, buffer: f64) -> Option<Self> {
		let polygons = feature.geometry.to_multi_polygon()?;
		let footprint = Footprint::new(&polygons, buffer)?;
		let area = polygons.area();
		Some(Self {
			index,
			polygons,
			footprint,
			area,
		})
	}

	fn x_min(&self) -> f64 {
		self.footprint.bounds()[0]
	}

	fn x_max(&self) -> f64 {
		self.footprint.bounds()[2]
	}

	/// Both polygons intersect, or their outlines are at most `buffer` apart.
	fn is_near(&self, other: &Self, buffer: f64) -> bool {
		let [ax0, ay0, ax1, ay1] = self.footprint.bounds();
		let [bx0, by0, bx1, by1] = other.footprint.bounds();
		if bx0 - ax1 > buffer || ax0 - bx1 > buffer || by0 - ay1 > buffer || ay0 - by1 > buffer {
			return false;
		}
		self.footprint.distance(&other.footprint) <= buffer
	}
}

/// Union-find whose roots are always the smallest index of their set, so groups
/// come out the same regardless of the order pairs are linked in.
struct UnionFind {
	parent: Vec<usize>,
}

impl UnionFind {
	fn new(size: usize) -> Self {
		Self {
			parent: (0..size).collect(),
		}
	}

	fn find(&mut self, mut i: usize) -> usize {
		while self.parent[i] != i {
			self.parent[i] = self.parent[self.parent[i]];
			i = self.parent[i];
		}
		i
	}

	fn union(&mut self, a: usize, b: usize) {
		let (ra, rb) = (self.find(a), self.find(b));
		if ra != rb {
			let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
			self.parent[child] = root;
		}
	}
}
