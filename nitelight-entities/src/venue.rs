use std::str::FromStr;

use crate::{geo::*, id::*};

/// A venue as displayed on the map, with its location already parsed.
///
/// Venues are immutable for the duration of a filter pass; the filter
/// engine only selects subsets of a collection of them.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id            : Id,
    pub name          : String,
    pub venue_type    : String,
    pub pos           : MapPoint,
    pub address       : String,
    pub description   : String,
    pub opening_hours : Option<OpeningHours>,
}

/// A venue record in the shape delivered by the remote venue API,
/// with the location still serialized as `POINT (<lng> <lat>)`.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVenue {
    pub id            : Id,
    pub name          : String,
    pub venue_type    : String,
    pub location      : String,
    pub address       : String,
    pub description   : String,
    pub opening_hours : String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OpeningHours(String);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OpeningHoursParseError;

impl OpeningHours {
    pub const fn min_len() -> usize {
        4
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for OpeningHours {
    type Err = OpeningHoursParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() < Self::min_len() {
            return Err(OpeningHoursParseError);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<OpeningHours> for String {
    fn from(from: OpeningHours) -> Self {
        from.0
    }
}
