//! Immutable table of the flights available for display

use crate::error::{Error, Result, Warning};
use crate::types::{FlightDefinition, GeoPoint, Waypoint};
use std::collections::{BTreeSet, HashMap};

/// Built-in flights: (id, origin, lat, lon, destination, lat, lon)
const BUILTIN_FLIGHTS: [(&str, &str, f64, f64, &str, f64, f64); 3] = [
    ("lax-tyo", "Los Angeles", 34.0522, -118.2437, "Tokyo", 35.6895, 139.6917),
    ("nyc-syd", "New York", 40.7128, -74.0060, "Sydney", -33.8688, 151.2093),
    ("lon-bue", "London", 51.5074, 0.1278, "Buenos Aires", -34.6037, -58.3816),
];

/// Registry of flight definitions
///
/// Built once at startup and never modified. Which flights are currently
/// visible is not stored here; callers pass the selected identifiers to
/// [`FlightRegistry::select`] instead.
#[derive(Debug, Clone)]
pub struct FlightRegistry {
    flights: Vec<FlightDefinition>,
    index: HashMap<String, usize>,
}

impl FlightRegistry {
    /// Create a registry from definitions, keeping their order
    ///
    /// Fails with [`Error::DuplicateFlightId`] if two definitions share an
    /// identifier.
    pub fn new<I: IntoIterator<Item = FlightDefinition>>(definitions: I) -> Result<Self> {
        let flights: Vec<FlightDefinition> = definitions.into_iter().collect();
        let index = index_by_id(&flights);

        // A later definition whose id already points elsewhere is a duplicate
        if let Some(duplicate) = flights
            .iter()
            .enumerate()
            .find_map(|(i, flight)| (index[&flight.id] != i).then_some(&flight.id))
        {
            return Err(Error::DuplicateFlightId(duplicate.clone()));
        }

        Ok(Self { flights, index })
    }

    /// The demonstration flights: Los Angeles → Tokyo, New York → Sydney
    /// and London → Buenos Aires, all visible by default
    pub fn builtin() -> Self {
        let flights: Vec<_> = BUILTIN_FLIGHTS
            .iter()
            .map(|&(id, from, from_lat, from_lon, to, to_lat, to_lon)| {
                FlightDefinition::new(
                    id,
                    Waypoint::new(from, GeoPoint::new_unchecked(from_lat, from_lon)),
                    Waypoint::new(to, GeoPoint::new_unchecked(to_lat, to_lon)),
                )
            })
            .collect();

        Self {
            index: index_by_id(&flights),
            flights,
        }
    }

    /// All definitions in registry order
    pub fn definitions(&self) -> &[FlightDefinition] {
        &self.flights
    }

    pub fn get(&self, id: &str) -> Option<&FlightDefinition> {
        self.index.get(id).map(|&i| &self.flights[i])
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Definitions matching the selected identifiers, in registry order
    ///
    /// Unknown identifiers are skipped and reported as
    /// [`Warning::UnknownFlightId`]. Repeated identifiers select the flight once.
    pub fn select<I, S>(&self, ids: I, warnings: &mut Vec<Warning>) -> Vec<&FlightDefinition>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected = vec![false; self.flights.len()];
        for id in ids {
            let id = id.as_ref();
            match self.index.get(id) {
                Some(&i) => selected[i] = true,
                None => {
                    tracing::warn!(id, "selected flight is not registered");
                    warnings.push(Warning::UnknownFlightId(id.to_string()));
                }
            }
        }

        self.flights
            .iter()
            .zip(selected)
            .filter_map(|(flight, selected)| selected.then_some(flight))
            .collect()
    }

    /// Identifiers of the flights that are visible by default
    pub fn default_selection(&self) -> BTreeSet<String> {
        self.flights
            .iter()
            .filter(|flight| flight.visible_by_default)
            .map(|flight| flight.id.clone())
            .collect()
    }
}

/// Position of each id in `flights`; the first definition wins for repeated ids
fn index_by_id(flights: &[FlightDefinition]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(flights.len());
    for (i, flight) in flights.iter().enumerate() {
        index.entry(flight.id.clone()).or_insert(i);
    }
    index
}

impl Default for FlightRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
