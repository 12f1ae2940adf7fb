use nitelight_entities::geo::Distance;

/// Parses a user-entered radius in kilometers.
///
/// Unparsable input yields a NaN distance. Every comparison against it
/// is false, so a radius filter built from such input matches no
/// venues instead of failing.
pub fn parse_radius_km(text: &str) -> Distance {
    let km = text.trim().parse::<f64>().unwrap_or(f64::NAN);
    Distance::from_kilometers(km)
}

/// Strict counterpart of [`parse_radius_km`] that only accepts finite,
/// non-negative values.
pub fn try_parse_radius_km(text: &str) -> Option<Distance> {
    let km = text.trim().parse::<f64>().ok()?;
    if km.is_finite() && km >= 0.0 {
        Some(Distance::from_kilometers(km))
    } else {
        None
    }
}
