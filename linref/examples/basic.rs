//! Basic example demonstrating linref library usage.
//!
//! Run with: cargo run --example basic -- 55660

use linref::{locate_point_along_route, Line, Path, Point};
use std::env;

fn main() {
    let measure: f64 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("Usage: cargo run --example basic -- <measure in meters>");
            std::process::exit(1);
        });

    // A measured route heading north from the equator, then east
    let measured = Line::new(vec![Path::new(vec![
        Point::with_m(0.0, 0.0, 0.0),
        Point::with_m(0.0, 1.0, 111_320.0),
        Point::with_m(1.0, 1.0, 222_620.0),
    ])]);

    // The same vertices without measures: distance is accumulated instead
    let unmeasured = Line::new(vec![Path::new(
        measured
            .paths
            .iter()
            .flat_map(|path| path.points.iter())
            .map(|p| Point::new(p.x, p.y))
            .collect(),
    )]);

    println!("Locating measure {measure}");
    println!("{:-<50}", "");

    for (name, route) in [("measured", &measured), ("unmeasured", &unmeasured)] {
        match locate_point_along_route(route, measure) {
            Some(point) => println!("{name}: x={:.6}, y={:.6}", point.x, point.y),
            None => println!("{name}: beyond end of route"),
        }
    }

    println!("\nRoute statistics:");
    println!("  Segments: {}", unmeasured.segment_count());
    println!("  Geodesic length: {:.1}m", unmeasured.geodesic_length());
    println!("  Max measure: {:?}", measured.max_measure());
}
