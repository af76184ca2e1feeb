use super::{parse_geojson, parse_geojson_feature};
use crate::{GeoCollection, GeoFeature};
use anyhow::{Error, Result, anyhow};
use futures::{Stream, StreamExt, future::ready, stream};
use std::io::{BufRead, Read};

pub fn read_geojson(mut reader: impl Read) -> Result<GeoCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_geojson(&buffer)
}

fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<GeoFeature>> {
	match line {
		Ok(line) if line.trim().is_empty() => Ok(None),
		Ok(line) => serde_json::from_str::<serde_json::Value>(&line)
			.map_err(Error::from)
			.and_then(|value| parse_geojson_feature(&value))
			.map(Some)
			.map_err(|e| anyhow!("line {}: {e:#}", index + 1)),
		Err(e) => Err(anyhow!("line {}: {e}", index + 1)),
	}
}

/// Reads newline-delimited GeoJSON, one feature per line. Blank lines are skipped.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoFeature>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}

/// Like [`read_ndgeojson_iter`], but parses lines on the tokio runtime, keeping
/// one task per CPU in flight. Output order follows input order.
pub fn read_ndgeojson_stream(reader: impl BufRead) -> impl Stream<Item = Result<GeoFeature>> {
	stream::iter(reader.lines().enumerate())
		.map(|(index, line)| tokio::spawn(async move { process_line(line, index).transpose() }))
		.buffered(num_cpus::get())
		.filter_map(|f| {
			ready(match f {
				Ok(value) => value,
				Err(e) => Some(Err(Error::from(e))),
			})
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::{BufReader, Cursor};

	const LINE: &str = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]},"properties":{}}"#;

	#[test]
	fn read_geojson_basic() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let collection = read_geojson(Cursor::new(json))?;
		assert_eq!(collection.features.len(), 1);
		assert_eq!(collection.features[0].geometry.get_type_name(), "Point");
		Ok(())
	}

	#[test]
	fn read_ndgeojson_iter_skips_empty_lines() {
		let input = format!("{LINE}\n\n{LINE}\n");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(results.len(), 2);
		assert!(results.iter().all(Result::is_ok));
	}

	#[test]
	fn read_ndgeojson_iter_reports_line_numbers() {
		let input = format!("{LINE}\n{{broken\n");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert!(results[0].is_ok());
		let err = results[1].as_ref().unwrap_err().to_string();
		assert!(err.starts_with("line 2: "), "{err}");
	}

	#[tokio::test]
	async fn read_ndgeojson_stream_keeps_order() {
		let input = [
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,0]},"properties":{}}"#,
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[2,0]},"properties":{}}"#,
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[3,0]},"properties":{}}"#,
		]
		.join("\n");
		let features: Vec<GeoFeature> = read_ndgeojson_stream(BufReader::new(Cursor::new(input)))
			.map(Result::unwrap)
			.collect()
			.await;
		let xs: Vec<f64> = features
			.iter()
			.map(|f| f.geometry.compute_bounds().unwrap()[0])
			.collect();
		assert_eq!(xs, vec![1.0, 2.0, 3.0]);
	}
}
