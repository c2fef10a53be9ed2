use crate::error::Result;
use crate::types::GeoPoint;

/// Latitude/longitude extent of one or more flight paths, in degrees
///
/// A renderer can use it to zoom the flat map onto the selected flights, or
/// [`BoundingBox::center`] to rotate the globe towards them.
///
/// # Limitations
///
/// Longitudes are compared as plain numbers. A trans-Pacific path such as
/// Los Angeles → Tokyo jumps from -180° to 180°, so its box runs from about
/// -180 to 180 in longitude even though the flight covers well under half of
/// that.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Create a bounding box from a slice of points
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut bbox = Self::from(*first);
        for &point in rest {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Widen the box so that `point` lies on or inside its edges
    pub fn extend(&mut self, point: GeoPoint) {
        self.west = self.west.min(point.lon());
        self.east = self.east.max(point.lon());
        self.north = self.north.max(point.lat());
        self.south = self.south.min(point.lat());
    }

    /// Union with `other`, used to frame several flights at once
    pub fn merge(&mut self, other: BoundingBox) {
        self.west = self.west.min(other.west);
        self.east = self.east.max(other.east);
        self.north = self.north.max(other.north);
        self.south = self.south.min(other.south);
    }

    /// Check whether a point lies inside the box (edges included)
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.west..=self.east).contains(&point.lon())
            && (self.south..=self.north).contains(&point.lat())
    }

    /// Center of the box in degrees
    ///
    /// Useful as the initial rotation of an orthographic globe view. Fails if
    /// the bounds were set to values outside the valid coordinate ranges.
    pub fn center(&self) -> Result<GeoPoint> {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

impl From<GeoPoint> for BoundingBox {
    fn from(point: GeoPoint) -> Self {
        Self {
            west: point.lon(),
            south: point.lat(),
            east: point.lon(),
            north: point.lat(),
        }
    }
}
