use anyhow::Result;
use clap::{Parser, Subcommand};
use drawgeom::intersect::{polygon_intersects_self, polyline_intersects_self};
use drawgeom::latlng::path_length;
use drawgeom::measure::{geodesic_area, MeasurementUnit};
use drawgeom::snap::{closest_point_on_path, SNAP_DISTANCE};
use drawgeom::PlanarPoint;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod report;

use report::Measurement;

#[derive(Parser)]
#[command(name = "drawgeom")]
#[command(about = "Measure and validate drawn shapes from point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Geodesic area of a ring read from `lat,lng` columns
    Area {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        imperial: bool,
        /// Also write a JSON report (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Great-circle length of a path read from `lat,lng` columns
    Length {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        imperial: bool,
        /// Show feet instead of yards below one mile (imperial only)
        #[arg(long)]
        feet: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Self-intersection check of projected `x,y` points
    Check {
        #[arg(long)]
        input: PathBuf,
        /// Treat the points as a closed polygon
        #[arg(long)]
        polygon: bool,
    },
    /// Closest point on a projected `x,y` path
    Snap {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, default_value_t = SNAP_DISTANCE)]
        tolerance: f64,
    },
    /// Print version and code revision as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Area {
            input,
            imperial,
            out,
        } => area(input, unit(imperial, false), out),
        Action::Length {
            input,
            imperial,
            feet,
            out,
        } => length(input, unit(imperial, feet), out),
        Action::Check { input, polygon } => check(input, polygon),
        Action::Snap {
            input,
            x,
            y,
            tolerance,
        } => snap(input, PlanarPoint::new(x, y), tolerance),
        Action::Report => version(),
    }
}

fn unit(imperial: bool, feet: bool) -> MeasurementUnit {
    MeasurementUnit {
        metric: !imperial,
        use_feet: feet,
    }
}

fn area(input: PathBuf, unit: MeasurementUnit, out: Option<PathBuf>) -> Result<()> {
    let ring = points::read_geo_points(&input)?;
    let value = geodesic_area(&ring);
    let readable = unit.format_area(value);
    tracing::info!(input = %input.display(), points = ring.len(), value, "area");
    println!("{readable}");
    emit(
        out,
        Measurement {
            input: input.display().to_string(),
            points: ring.len(),
            value,
            readable,
            metric: unit.metric,
        },
        "area",
    )
}

fn length(input: PathBuf, unit: MeasurementUnit, out: Option<PathBuf>) -> Result<()> {
    let path = points::read_geo_points(&input)?;
    let value = path_length(&path);
    let readable = unit.format_distance(value);
    tracing::info!(input = %input.display(), points = path.len(), value, "length");
    println!("{readable}");
    emit(
        out,
        Measurement {
            input: input.display().to_string(),
            points: path.len(),
            value,
            readable,
            metric: unit.metric,
        },
        "length",
    )
}

fn emit(out: Option<PathBuf>, m: Measurement, command: &str) -> Result<()> {
    if let Some(out) = out {
        let params = serde_json::json!({ "command": command, "input": m.input });
        let sidecar = report::write_report(&out, &m, params)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "report_written");
    }
    Ok(())
}

fn check(input: PathBuf, polygon: bool) -> Result<()> {
    let ring = points::read_planar_points(&input)?;
    let crosses = if polygon {
        polygon_intersects_self(&ring)
    } else {
        polyline_intersects_self(&ring)
    };
    tracing::info!(input = %input.display(), points = ring.len(), polygon, crosses, "check");
    let obj = serde_json::json!({
        "points": ring.len(),
        "polygon": polygon,
        "self_intersects": crosses,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn snap(input: PathBuf, p: PlanarPoint, tolerance: f64) -> Result<()> {
    let path = points::read_planar_points(&input)?;
    let hit = closest_point_on_path(p, &path)?;
    tracing::info!(index = hit.index, distance = hit.distance, "snap");
    let obj = serde_json::json!({
        "index": hit.index,
        "x": hit.point.x,
        "y": hit.point.y,
        "distance": hit.distance,
        "within_tolerance": hit.within(tolerance),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn version() -> Result<()> {
    let obj = serde_json::json!({
        "version": drawgeom::VERSION,
        "code_rev": report::current_git_rev(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
