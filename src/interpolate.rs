//! Great-circle interpolation between two geographic positions

use crate::error::{Error, Result};
use crate::types::{GeoPoint, GreatCirclePath};

/// Number of points per path used when the caller does not choose one
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// IUGG mean Earth radius in kilometers
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0088;

/// Below this value of `sin(delta)` the endpoints are treated as either
/// identical or antipodal.
///
/// Antipodal input like `(0, 0)` and `(0, 180)` does not produce an exact
/// zero because `sin(PI)` is about `1.2e-16` in `f64`.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Central angle between two points in radians, within `[0, PI]`
///
/// Equivalent to the spherical law of cosines
/// `acos(sin φ1 sin φ2 + cos φ1 cos φ2 cos Δλ)`, but computed as
/// `atan2(|a × b|, a · b)` which does not lose precision near `0` and `PI`.
pub fn central_angle(a: GeoPoint, b: GeoPoint) -> f64 {
    let (a, b) = (a.to_unit_vector(), b.to_unit_vector());
    norm(cross(a, b)).atan2(dot(a, b))
}

/// Great-circle distance in kilometers on a spherical Earth
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    central_angle(a, b) * EARTH_MEAN_RADIUS_KM
}

/// Compute `sample_count` points along the minor great-circle arc from `a` to `b`
///
/// Points are spaced at equal angular increments. The first point is `a` and
/// the last point is `b`, both returned unchanged.
///
/// Identical endpoints (including the same pole under different longitudes,
/// or the same meridian written as `-180` and `180`) yield `sample_count`
/// copies of `a`.
///
/// # Errors
///
/// - [`Error::InvalidSampleCount`] if `sample_count < 2`
/// - [`Error::AmbiguousPath`] if `a` and `b` are antipodal, since infinitely
///   many great circles connect them
///
/// # Precision
///
/// Endpoints that are nearly, but not exactly, identical or antipodal are
/// computed with ordinary floating-point arithmetic. Intermediate points of
/// such paths may carry visible rounding error.
///
/// There is no upper bound on `sample_count`; memory use grows linearly.
pub fn interpolate(a: GeoPoint, b: GeoPoint, sample_count: usize) -> Result<GreatCirclePath> {
    if sample_count < 2 {
        return Err(Error::InvalidSampleCount(sample_count));
    }

    let (va, vb) = (a.to_unit_vector(), b.to_unit_vector());
    let sin_delta = norm(cross(va, vb));
    let cos_delta = dot(va, vb);

    if sin_delta < DEGENERATE_EPSILON {
        if cos_delta < 0.0 {
            return Err(Error::AmbiguousPath { from: a, to: b });
        }

        tracing::trace!(%a, %b, "identical endpoints, returning constant path");
        return Ok(GreatCirclePath::new(vec![a; sample_count]));
    }

    let delta = sin_delta.atan2(cos_delta);
    let step = 1.0 / (sample_count - 1) as f64;

    let mut points = Vec::with_capacity(sample_count);
    points.push(a);
    for i in 1..sample_count - 1 {
        let s = i as f64 * step;
        let wa = ((1.0 - s) * delta).sin() / sin_delta;
        let wb = (s * delta).sin() / sin_delta;

        let v = [
            wa * va[0] + wb * vb[0],
            wa * va[1] + wb * vb[1],
            wa * va[2] + wb * vb[2],
        ];
        points.push(GeoPoint::from_vector(v));
    }
    points.push(b);

    Ok(GreatCirclePath::new(points))
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm(v: [f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_matches, assert_ok};
    use insta::assert_snapshot;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn assert_close(actual: GeoPoint, expected: GeoPoint, tolerance: f64) {
        assert!(
            (actual.lat() - expected.lat()).abs() < tolerance
                && (actual.lon() - expected.lon()).abs() < tolerance,
            "{actual} is not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn central_angle_quarter_circle() {
        let angle = central_angle(point(0.0, 0.0), point(0.0, 90.0));
        assert!((angle - FRAC_PI_2).abs() < 1e-15);

        let angle = central_angle(point(0.0, 0.0), point(90.0, 0.0));
        assert!((angle - FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn central_angle_antipodal() {
        let angle = central_angle(point(0.0, 0.0), point(0.0, 180.0));
        assert!((angle - PI).abs() < 1e-15);
    }

    #[test]
    fn central_angle_identical() {
        let a = point(48.8566, 2.3522);
        assert_eq!(central_angle(a, a), 0.0);
    }

    #[test]
    fn distance_los_angeles_tokyo() {
        let distance = distance_km(point(34.0522, -118.2437), point(35.6895, 139.6917));
        assert!((distance - 8815.4855).abs() < 1e-3, "{distance}");
    }

    #[test]
    fn rejects_too_few_samples() {
        let (a, b) = (point(0.0, 0.0), point(10.0, 10.0));

        assert_eq!(interpolate(a, b, 0), Err(Error::InvalidSampleCount(0)));
        assert_eq!(interpolate(a, b, 1), Err(Error::InvalidSampleCount(1)));
        assert_ok!(interpolate(a, b, 2));
    }

    #[test]
    fn two_samples_are_the_endpoints() {
        let (a, b) = (point(40.7128, -74.0060), point(-33.8688, 151.2093));
        let path = interpolate(a, b, 2).unwrap();

        assert_eq!(path.points(), &[a, b]);
    }

    #[test]
    fn equator_is_evenly_spaced() {
        let path = interpolate(point(0.0, 0.0), point(0.0, 90.0), 4).unwrap();

        for (point, lon) in path.iter().zip([0.0, 30.0, 60.0, 90.0]) {
            assert!(point.lat().abs() < 1e-12);
            assert!((point.lon() - lon).abs() < 1e-12, "{point}");
        }
    }

    #[test]
    fn meridian_is_evenly_spaced() {
        let path = interpolate(point(-60.0, 45.0), point(60.0, 45.0), 5).unwrap();

        for (point, lat) in path.iter().zip([-60.0, -30.0, 0.0, 30.0, 60.0]) {
            assert_close(*point, GeoPoint::new(lat, 45.0).unwrap(), 1e-12);
        }
    }

    #[test]
    fn crosses_the_anti_meridian() {
        let path = interpolate(point(0.0, 170.0), point(0.0, -170.0), 3).unwrap();

        // Minor arc goes through 180°, not through 0°
        let middle = path.points()[1];
        assert!(middle.lat().abs() < 1e-12);
        assert!((middle.lon().abs() - 180.0).abs() < 1e-12, "{middle}");
    }

    #[test]
    fn identical_points_yield_constant_path() {
        let a = point(51.5074, 0.1278);
        let path = interpolate(a, a, 5).unwrap();

        assert_eq!(path.points(), &[a; 5]);
    }

    #[test]
    fn same_pole_is_identical() {
        let a = point(90.0, 0.0);
        let path = interpolate(a, point(90.0, 123.0), 3).unwrap();

        assert_eq!(path.points(), &[a; 3]);
    }

    #[test]
    fn opposite_longitude_notation_is_identical() {
        let a = point(10.0, -180.0);
        let path = interpolate(a, point(10.0, 180.0), 3).unwrap();

        assert_eq!(path.points(), &[a; 3]);
    }

    #[test]
    fn antipodal_points_are_ambiguous() {
        let (a, b) = (point(0.0, 0.0), point(0.0, 180.0));

        let error = assert_err!(interpolate(a, b, 50));
        assert_eq!(error, Error::AmbiguousPath { from: a, to: b });
        assert_snapshot!(error.to_string(), @"Ambiguous great-circle path between antipodal points (0, 0) and (0, 180)");
    }

    #[test]
    fn antipodal_poles_are_ambiguous() {
        assert_matches!(
            interpolate(point(90.0, 0.0), point(-90.0, 0.0), 10),
            Err(Error::AmbiguousPath { .. })
        );
    }

    #[test]
    fn antipodal_off_axis_is_ambiguous() {
        assert_matches!(
            interpolate(point(45.0, 10.0), point(-45.0, -170.0), 10),
            Err(Error::AmbiguousPath { .. })
        );
    }

    #[test]
    fn nearly_antipodal_points_are_allowed() {
        let path = interpolate(point(0.0, 0.0), point(0.0, 179.0), 3).unwrap();

        assert_close(path.points()[1], point(0.0, 89.5), 1e-9);
    }

    #[test]
    fn opposite_longitudes_cross_the_north_pole() {
        // 60° up meridian 0, then 50° down meridian 180
        let path = interpolate(point(30.0, 0.0), point(40.0, 180.0), 3).unwrap();

        assert_close(path.points()[1], point(85.0, 0.0), 1e-9);
    }

    #[test]
    fn opposite_longitudes_meet_at_the_pole() {
        let path = interpolate(point(30.0, 0.0), point(30.0, 180.0), 3).unwrap();

        // Longitude is meaningless at the pole
        let middle = path.points()[1];
        assert!((middle.lat() - 90.0).abs() < 1e-9, "{middle}");
    }

    #[test]
    fn opposite_longitudes_cross_the_south_pole() {
        let path = interpolate(point(-30.0, -90.0), point(-30.0, 90.0), 5).unwrap();
        let points = path.points();

        assert_close(points[1], point(-60.0, -90.0), 1e-9);
        assert!((points[2].lat() + 90.0).abs() < 1e-9, "{}", points[2]);
        assert_close(points[3], point(-60.0, 90.0), 1e-9);
    }

    #[test]
    fn polar_path_stays_on_the_arc() {
        let (a, b) = (point(30.0, -90.0), point(30.0, 90.0));
        let path = interpolate(a, b, 9).unwrap();
        let total = central_angle(a, b);

        for &p in &path {
            let detour = central_angle(a, p) + central_angle(p, b) - total;
            assert!(detour.abs() < 1e-12, "{p} is off the arc by {detour}");
        }
        assert!((path.points()[4].lat() - 90.0).abs() < 1e-9);
    }
}
