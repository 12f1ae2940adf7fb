#![deny(missing_debug_implementations)]

//! # nitelight-core
//!
//! Use cases of the Nitelight venue map: normalizing backend venue
//! records and filtering them by category or distance.

use crate::entities::{MapPoint, RawVenue};

pub mod rating;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use nitelight_entities::{category::*, geo::*, id::*, review::*, time::*, venue::*};
}

/// Boundary to the remote venue API.
pub trait VenueGateway {
    fn fetch_venues(&self) -> anyhow::Result<Vec<RawVenue>>;
}

/// Boundary to the device location service.
///
/// Returns `None` as long as no position fix has been obtained.
/// Callers decide whether to fall back to the zero coordinate before
/// requesting a radius filter.
pub trait LocationGateway {
    fn current_position(&self) -> Option<MapPoint>;
}
