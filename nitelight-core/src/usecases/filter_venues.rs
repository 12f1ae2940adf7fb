use super::prelude::*;
use crate::util::parse::{parse_radius_km, try_parse_radius_km};

/// Pseudo venue type that matches every venue.
pub const ALL_VENUE_TYPES: &str = "All";

/// The active filter of a map session.
///
/// Exactly one criterion is active at a time. Selecting a new
/// criterion replaces the previous one entirely; filters never stack.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterCriterion {
    #[default]
    All,
    ByType(String),
    ByRadius { origin: MapPoint, radius: Distance },
}

impl FilterCriterion {
    /// Criterion for the given venue type tag. The `"All"` tag of the
    /// type selector maps to the pass-through criterion.
    pub fn by_type(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if tag == ALL_VENUE_TYPES {
            Self::All
        } else {
            Self::ByType(tag)
        }
    }

    /// Criterion for a radius entered as free text, in kilometers.
    ///
    /// Unparsable input yields a NaN radius and therefore an empty
    /// filter result, never an error.
    pub fn by_radius(origin: MapPoint, radius_text: &str) -> Self {
        Self::ByRadius {
            origin,
            radius: parse_radius_km(radius_text),
        }
    }

    /// Strict counterpart of [`FilterCriterion::by_radius`].
    pub fn try_by_radius(origin: MapPoint, radius_text: &str) -> Result<Self> {
        let radius = try_parse_radius_km(radius_text).ok_or(Error::InvalidRadius)?;
        Ok(Self::ByRadius { origin, radius })
    }
}

/// Selects the venues satisfying the given criterion.
///
/// Pure function over the full unfiltered collection, which the caller
/// keeps as session state. Input order is preserved, no venue is
/// duplicated.
pub fn filter_venues(venues: &[Venue], criterion: &FilterCriterion) -> Vec<Venue> {
    match criterion {
        FilterCriterion::All => venues.to_vec(),
        FilterCriterion::ByType(tag) => filter_by_type(venues, tag),
        FilterCriterion::ByRadius { origin, radius } => {
            filter_by_radius(venues, *origin, *radius)
        }
    }
}

/// Selects the venues whose type tag matches exactly (case-sensitive).
/// The `"All"` tag passes the input through unchanged.
pub fn filter_by_type(venues: &[Venue], venue_type: &str) -> Vec<Venue> {
    if venue_type == ALL_VENUE_TYPES {
        return venues.to_vec();
    }
    venues
        .iter()
        .filter(|venue| venue.venue_type == venue_type)
        .cloned()
        .collect()
}

/// Selects the venues within `radius` of `origin` (inclusive boundary).
///
/// A NaN radius compares false against every distance and yields an
/// empty result. The zero-sentinel origin is processed like any other
/// coordinate; readiness of the position is the caller's concern.
pub fn filter_by_radius(venues: &[Venue], origin: MapPoint, radius: Distance) -> Vec<Venue> {
    venues
        .iter()
        .filter(|venue| MapPoint::distance(venue.pos, origin) <= radius)
        .cloned()
        .collect()
}
