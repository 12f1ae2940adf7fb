use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

/// Mean Earth radius in kilometers as assumed by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographical latitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        let res = Self(deg);
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        let res = Self(deg);
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location on a (flat) map.
///
/// The default value is the zero coordinate, which doubles as the
/// fallback position for venues whose location could not be parsed.
/// It is indistinguishable from a legitimate position at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    fn parse_lng_lat_deg(lng_deg_str: &str, lat_deg_str: &str) -> Result<Self, PointParseError> {
        let lng = lng_deg_str
            .parse::<f64>()
            .ok()
            .and_then(LngCoord::try_from_deg)
            .ok_or_else(|| PointParseError::InvalidLongitude(lng_deg_str.to_string()))?;
        let lat = lat_deg_str
            .parse::<f64>()
            .ok()
            .and_then(LatCoord::try_from_deg)
            .ok_or_else(|| PointParseError::InvalidLatitude(lat_deg_str.to_string()))?;
        Ok(Self::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "POINT ({} {})", self.lng, self.lat)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointParseError {
    #[error("Malformed point geometry: '{0}'")]
    MalformedGeometry(String),
    #[error("Invalid longitude degrees: '{0}'")]
    InvalidLongitude(String),
    #[error("Invalid latitude degrees: '{0}'")]
    InvalidLatitude(String),
}

/// Parses the `POINT (<lng> <lat>)` geometry format of the venue API.
///
/// Longitude comes first, latitude second. The inverted order follows
/// the WKT convention of the backend's geometry serialization.
impl FromStr for MapPoint {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("POINT")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| PointParseError::MalformedGeometry(s.to_string()))?;
        if let Some((lng_deg_str, lat_deg_str)) = inner.split_whitespace().collect_tuple() {
            MapPoint::parse_lng_lat_deg(lng_deg_str, lat_deg_str)
        } else {
            Err(PointParseError::MalformedGeometry(s.to_string()))
        }
    }
}

/// A geographical distance in kilometers.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_kilometers(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_kilometers(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl MapPoint {
    /// Calculate the great-circle distance between two points on the
    /// surface of the earth using the haversine formula.
    /// Reference: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half = (lat2_rad - lat1_rad) / 2.0;
        let dlng_half = (lng2_rad - lng1_rad) / 2.0;

        let a = dlat_half.sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half.sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_kilometers(EARTH_RADIUS_KM * c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;

    #[test]
    fn latitude() {
        assert_eq!(0.0, LatCoord::default().to_deg());
        assert_eq!(LatCoord::min(), LatCoord::from_deg(-90));
        assert_eq!(LatCoord::max(), LatCoord::from_deg(90));
        assert_eq!(None, LatCoord::try_from_deg(-90.000001));
        assert_eq!(None, LatCoord::try_from_deg(90.000001));
        assert_eq!(None, LatCoord::try_from_deg(f64::NAN));
    }

    #[test]
    fn longitude() {
        assert_eq!(0.0, LngCoord::default().to_deg());
        assert_eq!(LngCoord::min(), LngCoord::from_deg(-180));
        assert_eq!(LngCoord::max(), LngCoord::from_deg(180));
        assert_eq!(None, LngCoord::try_from_deg(-180.000001));
        assert_eq!(None, LngCoord::try_from_deg(180.000001));
        assert_eq!(None, LngCoord::try_from_deg(f64::NAN));
    }

    #[test]
    fn parse_point() {
        let pos: MapPoint = "POINT (-6.2631 53.3458)".parse().unwrap();
        // Longitude first, latitude second
        assert_eq!(53.3458, pos.lat().to_deg());
        assert_eq!(-6.2631, pos.lng().to_deg());
    }

    #[test]
    fn parse_point_tolerates_whitespace_and_signs() {
        let pos: MapPoint = "  POINT(+9.1827 48.7755)  ".parse().unwrap();
        assert_eq!(48.7755, pos.lat().to_deg());
        assert_eq!(9.1827, pos.lng().to_deg());

        let pos: MapPoint = "POINT (10 -20)".parse().unwrap();
        assert_eq!(-20.0, pos.lat().to_deg());
        assert_eq!(10.0, pos.lng().to_deg());
    }

    #[test]
    fn parse_malformed_point() {
        for malformed in [
            "",
            "garbage",
            "POINT",
            "POINT ()",
            "POINT (1)",
            "POINT (1 2 3)",
            "POINT 1 2",
            "(1 2)",
            "POINT (1 2",
        ] {
            assert!(matches!(
                malformed.parse::<MapPoint>(),
                Err(PointParseError::MalformedGeometry(_))
            ));
        }
        assert!(matches!(
            "POINT (abc 53.3)".parse::<MapPoint>(),
            Err(PointParseError::InvalidLongitude(_))
        ));
        assert!(matches!(
            "POINT (-6.2 xyz)".parse::<MapPoint>(),
            Err(PointParseError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn parse_point_with_degrees_out_of_range() {
        assert!(matches!(
            "POINT (200.0 10.0)".parse::<MapPoint>(),
            Err(PointParseError::InvalidLongitude(_))
        ));
        assert!(matches!(
            "POINT (10.0 95.0)".parse::<MapPoint>(),
            Err(PointParseError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn format_and_reparse_point() {
        let pos = MapPoint::from_lat_lng_deg(53.3458, -6.2631);
        assert_eq!("POINT (-6.2631 53.3458)", pos.to_string());
        assert_eq!(Ok(pos), pos.to_string().parse());
    }

    #[test]
    fn no_distance() {
        let p1 = MapPoint::from_lat_lng_deg(0.0, 0.0);
        assert!(MapPoint::distance(p1, p1).to_kilometers() < 1e-6);

        let p2 = MapPoint::from_lat_lng_deg(-25.0, 55.0);
        assert!(MapPoint::distance(p2, p2).to_kilometers() < 1e-6);

        let p1 = MapPoint::from_lat_lng_deg(-15.0, -180.0);
        let p2 = MapPoint::from_lat_lng_deg(-15.0, 180.0);
        assert!(MapPoint::distance(p1, p2).to_kilometers() < 1e-6);
    }

    #[test]
    fn real_distance() {
        let dublin_centre = MapPoint::from_lat_lng_deg(53.3498, -6.2603);
        let dublin_airport = MapPoint::from_lat_lng_deg(53.4264, -6.2499);
        let d = MapPoint::distance(dublin_centre, dublin_airport);
        assert!(d > Distance::from_kilometers(8.4));
        assert!(d < Distance::from_kilometers(9.0));

        let new_york = MapPoint::from_lat_lng_deg(40.714268, -74.005974);
        let sidney = MapPoint::from_lat_lng_deg(-33.867138, 151.207108);
        let d = MapPoint::distance(new_york, sidney);
        assert!(d > Distance::from_kilometers(15_985.0));
        assert!(d < Distance::from_kilometers(15_995.0));
    }

    #[test]
    fn symmetric_distance() {
        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            let a = MapPoint::from_lat_lng_deg(
                rng.gen_range(-90.0..=90.0),
                rng.gen_range(-180.0..=180.0),
            );
            let b = MapPoint::from_lat_lng_deg(
                rng.gen_range(-90.0..=90.0),
                rng.gen_range(-180.0..=180.0),
            );
            let there = MapPoint::distance(a, b).to_kilometers();
            let back = MapPoint::distance(b, a).to_kilometers();
            assert!((there - back).abs() < 1e-9);
            assert!(MapPoint::distance(a, b).is_valid());
        }
    }

    #[test]
    fn invalid_distance() {
        assert!(Distance::infinite().is_valid());
        assert!(!Distance::from_kilometers(-1.0).is_valid());
        assert!(!Distance::from_kilometers(f64::NAN).is_valid());
        // NaN compares false against everything
        assert!(!(Distance::from_kilometers(0.0) <= Distance::from_kilometers(f64::NAN)));
    }
}
