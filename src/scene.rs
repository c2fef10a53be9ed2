//! Assembly of the globe and flat-map views for a rendering backend

use crate::error::{Error, Result, Warning};
use crate::interpolate::{DEFAULT_SAMPLE_COUNT, distance_km, interpolate};
use crate::registry::FlightRegistry;
use crate::types::{BoundingBox, FlightDefinition, GreatCirclePath, Waypoint};

/// Map projection requested from the rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Projection {
    /// Sphere seen from space, used for the globe view
    Orthographic,
    #[default]
    Equirectangular,
    Mercator,
    NaturalEarth,
}

impl Projection {
    /// Identifier understood by common web mapping backends
    pub fn name(&self) -> &'static str {
        match self {
            Projection::Orthographic => "orthographic",
            Projection::Equirectangular => "equirectangular",
            Projection::Mercator => "mercator",
            Projection::NaturalEarth => "natural earth",
        }
    }

    /// Human readable name, used in view titles
    pub fn title(&self) -> &'static str {
        match self {
            Projection::Orthographic => "Orthographic",
            Projection::Equirectangular => "Equirectangular",
            Projection::Mercator => "Mercator",
            Projection::NaturalEarth => "Natural Earth",
        }
    }
}

/// One flight as drawn on a map: the path line plus two labeled markers
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlightTrace {
    pub id: String,
    pub label: String,
    pub path: GreatCirclePath,
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub distance_km: f64,
}

/// A single map panel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MapView {
    pub title: String,
    pub projection: Projection,
}

impl MapView {
    fn globe() -> Self {
        Self {
            title: format!(
                "Flight Paths on 3D Globe ({} Projection)",
                Projection::Orthographic.title()
            ),
            projection: Projection::Orthographic,
        }
    }

    fn flat(projection: Projection) -> Self {
        Self {
            title: format!("Flight Paths on 2D Map ({} Projection)", projection.title()),
            projection,
        }
    }
}

/// The globe view and the flat-map view, drawing the same traces side by side
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scene {
    pub globe: MapView,
    pub flat: MapView,
    pub traces: Vec<FlightTrace>,
}

impl Scene {
    /// Extent of all traces, `None` if nothing is selected
    ///
    /// See [`BoundingBox`] for the anti-meridian limitation.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut traces = self.traces.iter();
        let mut bbox = traces.next()?.path.bounding_box();
        for trace in traces {
            bbox.merge(trace.path.bounding_box());
        }
        Some(bbox)
    }

    /// Hand the scene to a rendering backend
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> std::result::Result<(), R::Error> {
        renderer.render(self)
    }
}

/// Rendering backend that draws a [`Scene`]
///
/// Implementations turn the traces into pixels, markup or chart
/// descriptions. Projection math is their responsibility.
pub trait Renderer {
    type Error;

    fn render(&mut self, scene: &Scene) -> std::result::Result<(), Self::Error>;
}

/// Builds a [`Scene`] from a registry and a selection
///
/// The registry is only read. The selection is passed to every
/// [`SceneBuilder::build`] call, so one builder can serve every checklist
/// change.
///
/// # Example
///
/// ```
/// use great_circle_flights::{FlightRegistry, Projection, SceneBuilder};
///
/// let registry = FlightRegistry::builtin();
/// let mut warnings = Vec::new();
///
/// let scene = SceneBuilder::new(&registry)
///     .with_sample_count(20)
///     .with_flat_projection(Projection::Mercator)
///     .build(registry.default_selection(), &mut warnings)
///     .unwrap();
///
/// assert_eq!(scene.traces.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SceneBuilder<'a> {
    registry: &'a FlightRegistry,
    sample_count: usize,
    flat_projection: Projection,
}

impl<'a> SceneBuilder<'a> {
    /// Create a builder with [`DEFAULT_SAMPLE_COUNT`] points per path and an
    /// equirectangular flat map
    pub fn new(registry: &'a FlightRegistry) -> Self {
        Self {
            registry,
            sample_count: DEFAULT_SAMPLE_COUNT,
            flat_projection: Projection::default(),
        }
    }

    /// Override the number of points per path
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_sample_count(&mut self, sample_count: usize) -> &mut Self {
        self.sample_count = sample_count;
        self
    }

    /// Configure the projection of the flat map
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_flat_projection(&mut self, projection: Projection) -> &mut Self {
        self.flat_projection = projection;
        self
    }

    /// Interpolate every selected flight and assemble both views
    ///
    /// Unknown identifiers in `selection` are reported through `warnings`.
    /// The first flight that cannot be interpolated aborts the build.
    pub fn build<I, S>(&self, selection: I, warnings: &mut Vec<Warning>) -> Result<Scene>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.sample_count < 2 {
            return Err(Error::InvalidSampleCount(self.sample_count));
        }

        let traces = self
            .registry
            .select(selection, warnings)
            .into_iter()
            .map(|flight| self.trace(flight))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            traces = traces.len(),
            sample_count = self.sample_count,
            projection = self.flat_projection.name(),
            "assembled scene"
        );

        Ok(Scene {
            globe: MapView::globe(),
            flat: MapView::flat(self.flat_projection),
            traces,
        })
    }

    fn trace(&self, flight: &FlightDefinition) -> Result<FlightTrace> {
        let (from, to) = (flight.origin.position, flight.destination.position);

        let path = interpolate(from, to, self.sample_count).inspect_err(|error| {
            tracing::warn!(id = %flight.id, %error, "failed to interpolate flight path");
        })?;
        let distance_km = distance_km(from, to);

        tracing::debug!(id = %flight.id, distance_km, points = path.len(), "interpolated flight path");

        Ok(FlightTrace {
            id: flight.id.clone(),
            label: flight.label.clone(),
            path,
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            distance_km,
        })
    }
}
