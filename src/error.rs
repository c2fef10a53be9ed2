use crate::types::GeoPoint;

/// Errors returned by path computation and registry construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(
        "Invalid coordinate (lat={lat}, lon={lon}): latitude must be within [-90, 90] and longitude within [-180, 180]"
    )]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("Ambiguous great-circle path between antipodal points {from} and {to}")]
    AmbiguousPath { from: GeoPoint, to: GeoPoint },

    #[error("Invalid sample count: {0} (at least 2 points are required)")]
    InvalidSampleCount(usize),

    #[error("Duplicate flight identifier: {0:?}")]
    DuplicateFlightId(String),
}

/// Non-fatal issues encountered while resolving a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Selected identifier is not in the registry, skipped
    UnknownFlightId(String),
}

pub type Result<T> = std::result::Result<T, Error>;
