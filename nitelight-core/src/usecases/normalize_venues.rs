use super::prelude::*;

/// Converts backend venue records into domain venues.
///
/// Lenient: records with a malformed location are kept and placed at
/// the zero coordinate instead of being dropped. Callers cannot tell
/// the fallback apart from a venue legitimately located at the origin.
pub fn normalize_venues(raw_venues: Vec<RawVenue>) -> Vec<Venue> {
    raw_venues.into_iter().map(normalize_venue).collect()
}

pub fn normalize_venue(raw: RawVenue) -> Venue {
    let pos = parse_location_lenient(&raw.location);
    Venue {
        id: raw.id,
        name: raw.name,
        venue_type: raw.venue_type,
        pos,
        address: raw.address,
        description: raw.description,
        opening_hours: raw.opening_hours.parse().ok(),
    }
}

/// Strict counterpart of [`normalize_venue`] that surfaces a malformed
/// location instead of falling back to the zero coordinate.
pub fn try_normalize_venue(raw: RawVenue) -> Result<Venue> {
    let pos: MapPoint = raw.location.parse()?;
    Ok(Venue {
        id: raw.id,
        name: raw.name,
        venue_type: raw.venue_type,
        pos,
        address: raw.address,
        description: raw.description,
        opening_hours: raw.opening_hours.parse().ok(),
    })
}

/// Lenient counterpart of the `FromStr` implementation of [`MapPoint`].
/// Malformed input degrades to the zero coordinate.
pub fn parse_location_lenient(raw: &str) -> MapPoint {
    match raw.parse() {
        Ok(pos) => pos,
        Err(err) => {
            log::warn!("Failed to parse location '{raw}': {err}");
            MapPoint::default()
        }
    }
}
