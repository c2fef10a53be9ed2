use great_circle_flights::{FlightRegistry, SceneBuilder};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Optional list of flight ids, defaults to the initially checked flights
    let registry = FlightRegistry::builtin();
    let args: Vec<String> = env::args().skip(1).collect();
    let selection = if args.is_empty() {
        registry.default_selection().into_iter().collect()
    } else {
        args
    };

    let mut warnings = Vec::new();
    let scene = SceneBuilder::new(&registry)
        .with_sample_count(5)
        .build(&selection, &mut warnings)?;

    for warning in &warnings {
        eprintln!("Warning: {:?}", warning);
    }

    println!("=== {} ===", scene.globe.title);
    println!("=== {} ===", scene.flat.title);

    for trace in &scene.traces {
        println!("\n{} [{}]", trace.label, trace.id);
        println!("   Distance: {:.0} km", trace.distance_km);
        for point in &trace.path {
            println!("   {:>9.4} {:>10.4}", point.lat(), point.lon());
        }
    }

    if let Some(bbox) = scene.bounding_box() {
        println!(
            "\nBounds: W={:.4} S={:.4} E={:.4} N={:.4}",
            bbox.west, bbox.south, bbox.east, bbox.north
        );
    }

    Ok(())
}
