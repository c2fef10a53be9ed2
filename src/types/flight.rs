use crate::types::Waypoint;

/// A flight shown on the map, defined once at startup
///
/// When deserialized, `label` may be omitted and is then generated as in
/// [`FlightDefinition::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "FlightDocument")
)]
pub struct FlightDefinition {
    /// Stable identifier, used as the checklist value
    pub id: String,
    /// Display label, e.g. `"Los Angeles → Tokyo"`
    pub label: String,
    pub origin: Waypoint,
    pub destination: Waypoint,
    /// Whether the flight is checked when the page first loads
    pub visible_by_default: bool,
}

/// Serialized form of a [`FlightDefinition`] with the optional fields
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FlightDocument {
    id: String,
    label: Option<String>,
    origin: Waypoint,
    destination: Waypoint,
    #[serde(default = "default_visible")]
    visible_by_default: bool,
}

#[cfg(feature = "serde")]
fn default_visible() -> bool {
    true
}

#[cfg(feature = "serde")]
impl From<FlightDocument> for FlightDefinition {
    fn from(document: FlightDocument) -> Self {
        let flight = FlightDefinition::new(document.id, document.origin, document.destination)
            .with_visible_by_default(document.visible_by_default);

        match document.label {
            Some(label) => flight.with_label(label),
            None => flight,
        }
    }
}

impl FlightDefinition {
    /// Create a flight labeled `"<origin> → <destination>"`, visible by default
    pub fn new(id: impl Into<String>, origin: Waypoint, destination: Waypoint) -> Self {
        let label = format!("{} → {}", origin.name, destination.name);
        Self {
            id: id.into(),
            label,
            origin,
            destination,
            visible_by_default: true,
        }
    }

    /// Replace the generated label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set whether the flight starts out checked
    pub fn with_visible_by_default(mut self, visible: bool) -> Self {
        self.visible_by_default = visible;
        self
    }
}
