use crate::types::{BoundingBox, GeoPoint};

/// Ordered sequence of points along a great circle
///
/// Produced by [`interpolate`](crate::interpolate()). The path always holds at
/// least two points and cannot be modified after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GreatCirclePath {
    points: Vec<GeoPoint>,
}

impl GreatCirclePath {
    pub(crate) fn new(points: Vec<GeoPoint>) -> Self {
        debug_assert!(points.len() >= 2);
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`, paths hold at least two points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Start of the path
    pub fn first(&self) -> GeoPoint {
        self.points[0]
    }

    /// End of the path
    pub fn last(&self) -> GeoPoint {
        self.points[self.points.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    /// Latitudes of all points, in path order
    ///
    /// Charting backends usually take a path as separate latitude and
    /// longitude columns.
    pub fn latitudes(&self) -> Vec<f64> {
        self.points.iter().map(GeoPoint::lat).collect()
    }

    /// Longitudes of all points, in path order
    pub fn longitudes(&self) -> Vec<f64> {
        self.points.iter().map(GeoPoint::lon).collect()
    }

    /// See [`BoundingBox`] for the anti-meridian limitation
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::from(self.first());
        for &point in &self.points[1..] {
            bbox.extend(point);
        }
        bbox
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a GreatCirclePath {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for GreatCirclePath {
    type Item = GeoPoint;
    type IntoIter = std::vec::IntoIter<GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
