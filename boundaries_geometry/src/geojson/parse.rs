use crate::{
	Coordinates, GeoCollection, GeoFeature, GeoProperties, GeoValue, Geometry, LineStringGeometry,
	MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Context, Result, anyhow, bail, ensure};
use serde_json::Value;

pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	let value: Value = serde_json::from_str(json).context("invalid JSON")?;
	parse_geojson_collection(&value)
}

pub fn parse_geojson_collection(value: &Value) -> Result<GeoCollection> {
	check_type(value, "FeatureCollection")?;
	let features = value
		.get("features")
		.and_then(Value::as_array)
		.ok_or_else(|| anyhow!("FeatureCollection must have a 'features' array"))?;

	let features = features
		.iter()
		.enumerate()
		.map(|(index, feature)| parse_geojson_feature(feature).with_context(|| format!("feature {index}")))
		.collect::<Result<Vec<_>>>()?;

	Ok(GeoCollection { features })
}

fn check_type(value: &Value, name: &str) -> Result<()> {
	let object_type = value
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| anyhow!("{name} must have a type"))?;

	if object_type != name {
		bail!("type must be '{name}', found '{object_type}'")
	}
	Ok(())
}

pub fn parse_geojson_feature(value: &Value) -> Result<GeoFeature> {
	check_type(value, "Feature")?;

	let geometry = value
		.get("geometry")
		.ok_or_else(|| anyhow!("feature is missing 'geometry'"))
		.and_then(parse_geojson_geometry)?;

	let properties = match value.get("properties") {
		None | Some(Value::Null) => GeoProperties::new(),
		Some(Value::Object(map)) => map
			.iter()
			.map(|(k, v)| (k.clone(), GeoValue::from_json(v)))
			.collect(),
		Some(_) => bail!("feature 'properties' must be an object"),
	};

	let id = value.get("id").map(GeoValue::from_json).and_then(|id| id.as_u64());

	Ok(GeoFeature { id, geometry, properties })
}

pub fn parse_geojson_geometry(value: &Value) -> Result<Geometry> {
	let geometry_type = value
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| anyhow!("geometry must have a type"))?;
	let coordinates = value
		.get("coordinates")
		.ok_or_else(|| anyhow!("geometry must have coordinates"))?;

	Ok(match geometry_type {
		"Point" => Geometry::Point(PointGeometry(parse_position(coordinates)?)),
		"MultiPoint" => Geometry::MultiPoint(MultiPointGeometry(
			parse_list(coordinates, parse_position)?.into_iter().map(PointGeometry).collect(),
		)),
		"LineString" => Geometry::LineString(parse_line(coordinates)?),
		"MultiLineString" => Geometry::MultiLineString(MultiLineStringGeometry(parse_list(coordinates, parse_line)?)),
		"Polygon" => Geometry::Polygon(parse_polygon(coordinates)?),
		"MultiPolygon" => Geometry::MultiPolygon(MultiPolygonGeometry(parse_list(coordinates, parse_polygon)?)),
		other => bail!("unknown geometry type '{other}'"),
	})
}

fn parse_list<T>(value: &Value, parse: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
	value
		.as_array()
		.ok_or_else(|| anyhow!("expected an array"))?
		.iter()
		.map(parse)
		.collect()
}

fn parse_position(value: &Value) -> Result<Coordinates> {
	let position = value.as_array().ok_or_else(|| anyhow!("position must be an array"))?;
	ensure!(position.len() >= 2, "position must have at least two numbers");
	let x = position[0].as_f64().ok_or_else(|| anyhow!("x must be a number"))?;
	let y = position[1].as_f64().ok_or_else(|| anyhow!("y must be a number"))?;
	Ok(Coordinates::new(x, y))
}

fn parse_line(value: &Value) -> Result<LineStringGeometry> {
	Ok(LineStringGeometry(parse_list(value, parse_position)?))
}

fn parse_polygon(value: &Value) -> Result<PolygonGeometry> {
	Ok(PolygonGeometry(parse_list(value, |ring| {
		Ok(RingGeometry(parse_list(ring, parse_position)?))
	})?))
}
