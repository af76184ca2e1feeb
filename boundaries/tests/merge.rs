mod test_utilities;
use predicates::str;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use test_utilities::{boundaries_cmd, get_testdata, run_stdout, write_temp_input};

fn merge(zoom: &str) -> Value {
	let stdout = run_stdout(&["merge", "--zoom", zoom, &get_testdata("parcels_tile.geojson")]);
	serde_json::from_str(&stdout).unwrap()
}

#[test]
fn low_zoom_merges_neighbours() {
	let collection = merge("12");
	assert_eq!(collection["type"], json!("FeatureCollection"));
	let features = collection["features"].as_array().unwrap();
	assert_eq!(features.len(), 2);
	assert_eq!(features[0]["geometry"]["type"], json!("MultiPolygon"));
	assert_eq!(features[0]["properties"]["unique_number"], json!("4400-0001"));
	assert_eq!(features[1]["properties"]["unique_number"], json!("4400-0003"));
}

#[test]
fn high_zoom_keeps_parcels() {
	let collection = merge("14");
	let numbers: Vec<&str> = collection["features"]
		.as_array()
		.unwrap()
		.iter()
		.map(|f| f["properties"]["unique_number"].as_str().unwrap())
		.collect();
	assert_eq!(numbers, vec!["4400-0001", "4400-0002", "4400-0003"]);
}

#[test]
fn layer_without_merge_rule() {
	boundaries_cmd()
		.args(["merge", "--zoom", "12", "--layer", "streets", &get_testdata("parcels_tile.geojson")])
		.assert()
		.failure()
		.stderr(str::contains("layer 'streets' has no merge rule"));
}

#[test]
fn broken_polygon_is_left_unmerged() {
	let (_dir, path) = write_temp_input(
		"tile.geojson",
		r#"{"type":"FeatureCollection","features":[
			{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10]]]},"properties":{"unique_number":"a"}},
			{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[11,0],[21,0],[21,10],[11,10],[11,0]]]},"properties":{"unique_number":"b"}}
		]}"#,
	);
	let stdout = run_stdout(&["merge", "--zoom", "12", &path]);
	let collection: Value = serde_json::from_str(&stdout).unwrap();
	assert_eq!(collection["features"].as_array().unwrap().len(), 2);
}

#[test]
fn broken_polygon_aborts_with_strict_rules() {
	let (_dir, path) = write_temp_input(
		"tile.geojson",
		r#"{"type":"FeatureCollection","features":[
			{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10]]]},"properties":{}}
		]}"#,
	);
	boundaries_cmd()
		.args(["merge", "--zoom", "10", "--layer", "lakes", "--config", &get_testdata("rules.yml"), &path])
		.assert()
		.failure()
		.stderr(str::contains("merging layer 'lakes'"));
}
