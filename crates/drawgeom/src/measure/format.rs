//! Readable strings for areas and distances.

/// Square meters per square yard.
const SQ_METERS_PER_SQ_YARD: f64 = 0.836127;
/// Yards per meter.
const YARDS_PER_METER: f64 = 1.09361;
const SQ_YARDS_PER_SQ_MILE: f64 = 3_097_600.0;
const SQ_YARDS_PER_ACRE: f64 = 4840.0;
const SQ_METERS_PER_HECTARE: f64 = 10_000.0;
const HECTARES_PER_SQ_METER: f64 = 0.0001;
const YARDS_PER_MILE: f64 = 1760.0;

/// Unit system for tooltip text.
///
/// `use_feet` only matters for imperial distances below one mile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasurementUnit {
    pub metric: bool,
    pub use_feet: bool,
}

impl Default for MeasurementUnit {
    fn default() -> Self {
        Self::metric()
    }
}

impl MeasurementUnit {
    #[inline]
    pub fn metric() -> Self {
        Self {
            metric: true,
            use_feet: false,
        }
    }
    #[inline]
    pub fn imperial() -> Self {
        Self {
            metric: false,
            use_feet: false,
        }
    }
    #[inline]
    pub fn imperial_feet() -> Self {
        Self {
            metric: false,
            use_feet: true,
        }
    }
    #[inline]
    pub fn format_area(&self, area: f64) -> String {
        readable_area(area, self.metric)
    }
    #[inline]
    pub fn format_distance(&self, distance: f64) -> String {
        readable_distance(distance, self.metric, self.use_feet)
    }
}

/// Two decimals, exact ties rounded away from zero (`Number.prototype.toFixed(2)`).
///
/// `{:.2}` already rounds the exact binary value correctly except on ties, where
/// it picks the even digit. A value sits exactly halfway between hundredths only
/// when it is an odd multiple of 1/8 (…125, …375, …625, …875).
fn to_fixed2(x: f64) -> String {
    let eighths = x * 8.0;
    let tie = eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if tie {
        // a quarter hundredth past the tie, still short of the next midpoint
        format!("{:.2}", x + 0.0025f64.copysign(x))
    } else {
        format!("{x:.2}")
    }
}

/// Ceiling as a whole number; `-0` prints as `0`.
fn whole_up(x: f64) -> String {
    format!("{:.0}", x.ceil() + 0.0)
}

/// Area (m²) as text: `ha`/`m²` when metric, `mi²`/`acres`/`yd²` otherwise.
pub fn readable_area(area: f64, metric: bool) -> String {
    if metric {
        if area >= SQ_METERS_PER_HECTARE {
            format!("{} ha", to_fixed2(area * HECTARES_PER_SQ_METER))
        } else {
            format!("{} m²", to_fixed2(area))
        }
    } else {
        let sq_yards = area / SQ_METERS_PER_SQ_YARD;
        if sq_yards >= SQ_YARDS_PER_SQ_MILE {
            format!("{} mi²", to_fixed2(sq_yards / SQ_YARDS_PER_SQ_MILE))
        } else if sq_yards >= SQ_YARDS_PER_ACRE {
            format!("{} acres", to_fixed2(sq_yards / SQ_YARDS_PER_ACRE))
        } else {
            format!("{} yd²", whole_up(sq_yards))
        }
    }
}

/// Distance (m) as text: `km`/`m` when metric, `miles`/`ft`/`yd` otherwise.
pub fn readable_distance(distance: f64, metric: bool, use_feet: bool) -> String {
    if metric {
        // meters up to 1 km, then km
        if distance > 1000.0 {
            format!("{} km", to_fixed2(distance / 1000.0))
        } else {
            format!("{} m", whole_up(distance))
        }
    } else {
        let yards = distance * YARDS_PER_METER;
        if yards > YARDS_PER_MILE {
            format!("{} miles", to_fixed2(yards / YARDS_PER_MILE))
        } else if use_feet {
            format!("{} ft", whole_up(yards * 3.0))
        } else {
            format!("{} yd", whole_up(yards))
        }
    }
}
