use great_circle_flights::{FlightRegistry, FlightTrace, Renderer, Scene, SceneBuilder, Waypoint};
use serde_json::json;
use std::env;
use std::fs;

/// Writes the scene as a GeoJSON `FeatureCollection`
///
/// Each trace becomes a `LineString`, each endpoint a labeled `Point`.
/// Any GeoJSON viewer can then draw the flat map.
#[derive(Default)]
struct GeoJsonRenderer {
    output: Option<serde_json::Value>,
}

fn line_feature(trace: &FlightTrace) -> serde_json::Value {
    // GeoJSON uses [lon, lat] order
    let coordinates: Vec<[f64; 2]> = trace.path.iter().map(|pt| [pt.lon(), pt.lat()]).collect();

    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates
        },
        "properties": {
            "id": trace.id,
            "name": trace.label,
            "distance_km": trace.distance_km,
            "stroke": "#FF0000",
            "stroke-width": 2
        }
    })
}

fn marker_feature(waypoint: &Waypoint) -> serde_json::Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [waypoint.position.lon(), waypoint.position.lat()]
        },
        "properties": {
            "name": waypoint.name,
            "marker-color": "#0000FF",
            "marker-size": "small"
        }
    })
}

impl Renderer for GeoJsonRenderer {
    type Error = std::convert::Infallible;

    fn render(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        let mut features = Vec::new();
        for trace in &scene.traces {
            features.push(line_feature(trace));
            features.push(marker_feature(&trace.origin));
            features.push(marker_feature(&trace.destination));
        }

        self.output = Some(json!({
            "type": "FeatureCollection",
            "name": scene.flat.title,
            "features": features
        }));
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: create-map <output.geojson> [flight-id...]");
        std::process::exit(1);
    }

    let registry = FlightRegistry::builtin();
    let selection: Vec<String> = if args.len() > 2 {
        args[2..].to_vec()
    } else {
        registry.default_selection().into_iter().collect()
    };

    let mut warnings = Vec::new();
    let scene = SceneBuilder::new(&registry).build(&selection, &mut warnings)?;
    for warning in &warnings {
        eprintln!("Warning: {:?}", warning);
    }

    let mut renderer = GeoJsonRenderer::default();
    scene.render(&mut renderer)?;

    if let Some(output) = renderer.output {
        fs::write(&args[1], serde_json::to_string_pretty(&output)?)?;
        println!("Wrote {} flights to {}", scene.traces.len(), args[1]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use great_circle_flights::GeoPoint;
    use insta::assert_snapshot;

    #[test]
    fn marker_feature_uses_lon_lat_order() {
        let tokyo = Waypoint::new("Tokyo", GeoPoint::new(35.6895, 139.6917).unwrap());

        assert_snapshot!(marker_feature(&tokyo).to_string(), @r##"{"geometry":{"coordinates":[139.6917,35.6895],"type":"Point"},"properties":{"marker-color":"#0000FF","marker-size":"small","name":"Tokyo"},"type":"Feature"}"##);
    }
}
