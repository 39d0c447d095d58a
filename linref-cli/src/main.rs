use anyhow::Result;
use clap::{Parser, Subcommand};
use linref::DistanceUnit;
use std::path::PathBuf;

mod commands;

/// Linear referencing CLI tool
#[derive(Parser)]
#[command(name = "linref")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output results as JSON
    #[arg(short, long, env = "LINREF_JSON", global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate the point at a measure along a route
    Locate {
        /// Route file (route JSON, or GeoJSON with --geojson)
        #[arg(short, long)]
        route: PathBuf,

        /// Target measure (vertex measure units, or meters for unmeasured routes)
        #[arg(short, long, allow_hyphen_values = true)]
        measure: f64,

        /// Read the route as a GeoJSON LineString/MultiLineString
        #[arg(short, long)]
        geojson: bool,
    },

    /// Display information about a route
    Info {
        /// Route file (route JSON, or GeoJSON with --geojson)
        #[arg(short, long)]
        route: PathBuf,

        /// Read the route as a GeoJSON LineString/MultiLineString
        #[arg(short, long)]
        geojson: bool,
    },

    /// Great-circle distance and initial bearing between two coordinates
    Distance {
        /// Start coordinate as LAT,LON
        #[arg(long, allow_hyphen_values = true, value_parser = commands::parse_lat_lon)]
        from: (f64, f64),

        /// End coordinate as LAT,LON
        #[arg(long, allow_hyphen_values = true, value_parser = commands::parse_lat_lon)]
        to: (f64, f64),

        /// Distance unit: kilometers (km) or meters (m)
        #[arg(short, long, default_value = "m")]
        unit: DistanceUnit,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Locate {
            route,
            measure,
            geojson,
        } => commands::locate::run(route, measure, geojson, cli.json),
        Commands::Info { route, geojson } => commands::info::run(route, geojson),
        Commands::Distance { from, to, unit } => commands::distance::run(from, to, unit, cli.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_flag_shared_by_locate_and_info() {
        let cli = Cli::try_parse_from(["linref", "locate", "-r", "route.json", "-m", "-5"]).unwrap();
        match cli.command {
            Commands::Locate { route, measure, .. } => {
                assert_eq!(route, PathBuf::from("route.json"));
                assert_eq!(measure, -5.0);
            }
            _ => panic!("expected locate"),
        }

        let cli = Cli::try_parse_from(["linref", "info", "--route", "route.json"]).unwrap();
        match cli.command {
            Commands::Info { route, geojson } => {
                assert_eq!(route, PathBuf::from("route.json"));
                assert!(!geojson);
            }
            _ => panic!("expected info"),
        }

        assert!(Cli::try_parse_from(["linref", "info", "route.json"]).is_err());
    }
}
