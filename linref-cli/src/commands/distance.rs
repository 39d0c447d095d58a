use anyhow::Result;
use linref::geo_math::{calculate_bearing_to, geodesic_length_in};
use linref::DistanceUnit;
use serde::Serialize;

#[derive(Serialize)]
struct DistanceResponse {
    distance: f64,
    unit: String,
    bearing: f64,
}

pub fn run(from: (f64, f64), to: (f64, f64), unit: DistanceUnit, json: bool) -> Result<()> {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let distance = geodesic_length_in(lat1, lon1, lat2, lon2, unit);
    let bearing = calculate_bearing_to(lat1, lon1, lat2, lon2);

    if json {
        let response = DistanceResponse {
            distance,
            unit: unit.to_string(),
            bearing,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{:.3}{} bearing {:.2}°", distance, unit, bearing);
    }

    Ok(())
}
