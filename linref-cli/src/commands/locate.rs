use anyhow::Result;
use linref::locate_point_along_route;
use serde::Serialize;
use std::path::PathBuf;

use super::load_route;

#[derive(Serialize)]
struct LocateResponse {
    measure: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
    found: bool,
}

pub fn run(route: PathBuf, measure: f64, geojson: bool, json: bool) -> Result<()> {
    let line = load_route(&route, geojson)?;

    let point = locate_point_along_route(&line, measure);

    if json {
        let response = LocateResponse {
            measure,
            x: point.map(|p| p.x),
            y: point.map(|p| p.y),
            found: point.is_some(),
        };
        println!("{}", serde_json::to_string(&response)?);
    } else if geojson {
        match point {
            Some(p) => println!(
                "{}",
                serde_json::to_string(&linref::geojson::point_to_geometry(&p))?
            ),
            None => println!("not found"),
        }
    } else {
        match point {
            Some(p) => println!("{:.8},{:.8}", p.y, p.x),
            None => println!("not found"),
        }
    }

    Ok(())
}
