//! Point files: CSV (header row) or Parquet, two numeric columns.

use anyhow::{bail, Context, Result};
use drawgeom::{GeoPoint, PlanarPoint};
use polars::prelude::*;
use std::path::Path;

fn scan(path: &Path) -> Result<LazyFrame> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
    };
    Ok(lf)
}

/// Read columns `a` and `b` as `f64` pairs, in file order. Nulls are rejected.
pub fn read_pairs(path: &Path, a: &str, b: &str) -> Result<Vec<(f64, f64)>> {
    let df = scan(path)
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col(a).cast(DataType::Float64),
            col(b).cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns {a},{b} from {}", path.display()))?;
    let xs = df.column(a)?.f64()?;
    let ys = df.column(b)?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push((x, y)),
            _ => bail!("row {row}: missing value in {a}/{b}"),
        }
    }
    tracing::debug!(path = %path.display(), rows = out.len(), "points_read");
    Ok(out)
}

/// `lat,lng` columns; every point must be a valid coordinate.
pub fn read_geo_points(path: &Path) -> Result<Vec<GeoPoint>> {
    let points: Vec<GeoPoint> = read_pairs(path, "lat", "lng")?
        .into_iter()
        .map(GeoPoint::from)
        .collect();
    if let Some(row) = points.iter().position(|p| !p.is_valid()) {
        bail!("row {row}: latitude out of range or non-finite");
    }
    Ok(points)
}

/// `x,y` columns (already projected).
pub fn read_planar_points(path: &Path) -> Result<Vec<PlanarPoint>> {
    Ok(read_pairs(path, "x", "y")?
        .into_iter()
        .map(|(x, y)| PlanarPoint::new(x, y))
        .collect())
}
