use anyhow::Result;
use std::path::PathBuf;

use super::load_route;

pub fn run(route: PathBuf, geojson: bool) -> Result<()> {
    let line = load_route(&route, geojson)?;

    let point_count: usize = line.paths.iter().map(|p| p.points.len()).sum();
    let length = line.geodesic_length();

    println!("Route: {}", route.display());
    println!("{:-<50}", "");
    println!("  Paths:           {}", line.paths.len());
    println!("  Points:          {}", point_count);
    println!("  Segments:        {}", line.segment_count());
    println!("  Measured:        {}", if line.has_m() { "yes" } else { "no" });
    println!(
        "  Geodesic length: {:.1}m ({:.3}km)",
        length,
        length / 1000.0
    );
    match line.max_measure() {
        Some(m) => println!("  Max measure:     {}", m),
        None => println!("  Max measure:     n/a"),
    }

    Ok(())
}
