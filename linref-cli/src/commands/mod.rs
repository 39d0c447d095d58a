pub mod distance;
pub mod info;
pub mod locate;

use anyhow::{bail, Context, Result};
use geojson::GeoJson;
use linref::Line;
use std::path::Path;

/// Read a route from a JSON file.
///
/// Without `geojson` the file holds a route object (`{"paths": [...]}`).
/// With `geojson` it holds a LineString or MultiLineString, either as a bare
/// geometry or wrapped in a Feature.
pub fn load_route(path: &Path, geojson: bool) -> Result<Line> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read route file {}", path.display()))?;

    if !geojson {
        return serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse route from {}", path.display()));
    }

    let parsed: GeoJson = contents
        .parse()
        .with_context(|| format!("Failed to parse GeoJSON from {}", path.display()))?;

    let geometry = match parsed {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(feature) => match feature.geometry {
            Some(geometry) => geometry,
            None => bail!("GeoJSON feature has no geometry"),
        },
        GeoJson::FeatureCollection(_) => {
            bail!("FeatureCollection is not supported, provide a single Feature or Geometry")
        }
    };

    linref::geojson::line_from_geometry(&geometry).context("Invalid route geometry")
}

/// Parse a `LAT,LON` pair.
pub fn parse_lat_lon(value: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON but got '{value}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;
    Ok((lat, lon))
}
