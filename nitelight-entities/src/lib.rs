#![deny(missing_debug_implementations)]

//! # nitelight-entities
//!
//! Reusable, agnostic domain entities for the Nitelight venue map.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod category;
pub mod geo;
pub mod id;
pub mod review;
pub mod time;
pub mod venue;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
