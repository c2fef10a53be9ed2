#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result, Warning};
pub use crate::interpolate::{
    DEFAULT_SAMPLE_COUNT, EARTH_MEAN_RADIUS_KM, central_angle, distance_km, interpolate,
};
pub use crate::registry::FlightRegistry;
pub use crate::scene::{FlightTrace, MapView, Projection, Renderer, Scene, SceneBuilder};
pub use crate::types::*;

mod error;
pub mod interpolate;
mod registry;
pub mod scene;
mod types;
