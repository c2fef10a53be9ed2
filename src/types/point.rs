use crate::error::{Error, Result};
use std::fmt;

/// A geographic position in degrees
///
/// Latitude is within `[-90, 90]` and longitude within `[-180, 180]`. The only
/// way to obtain a `GeoPoint` is through [`GeoPoint::new`] (or deserialization,
/// which applies the same checks), so every instance satisfies these bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LatLon")
)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees
    ///
    /// Out-of-range or non-finite values are rejected with
    /// [`Error::InvalidCoordinate`] instead of being wrapped.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::InvalidCoordinate { lat, lon });
        }

        Ok(Self { lat, lon })
    }

    /// Create a point without range checks
    ///
    /// Only for compile-time tables whose values are known to be in range.
    pub(crate) const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Position on the unit sphere (x towards 0°/0°, z towards the north pole)
    pub(crate) fn to_unit_vector(self) -> [f64; 3] {
        let (lat, lon) = (self.lat.to_radians(), self.lon.to_radians());
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }

    /// Inverse of [`GeoPoint::to_unit_vector`]
    ///
    /// The vector does not need to be normalized. `atan2` keeps the result
    /// within the valid ranges, so no validation is needed.
    pub(crate) fn from_vector([x, y, z]: [f64; 3]) -> Self {
        let lat = z.atan2(x.hypot(y));
        let lon = y.atan2(x);

        Self {
            lat: lat.to_degrees(),
            lon: lon.to_degrees(),
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LatLon {
    lat: f64,
    lon: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<LatLon> for GeoPoint {
    type Error = Error;

    fn try_from(value: LatLon) -> Result<Self> {
        Self::new(value.lat, value.lon)
    }
}

/// A named position, drawn as a labeled marker at either end of a flight
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub position: GeoPoint,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}
