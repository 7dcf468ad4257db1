use anyhow::{Context, Result};
use airly::{Client, NearestMeasurementOptions};

fn main() -> Result<()> {
    // Example program that calls the library API.
    // Configure the key via AIRLY_API_KEY or an `.airlyrc` file.
    let client = Client::from_env()?.with_language("en");

    let (lat, lng) = (50.062006, 19.940984);
    let mut opts = NearestMeasurementOptions::new(lat, lng);
    opts.max_distance_km(3.0).index_type("AIRLY_CAQI");

    let measurement = client
        .measurement()
        .nearest(&opts)
        .with_context(|| format!("no measurement near {lat}, {lng}"))?;

    let current = &measurement.current;
    println!(
        "{} - {}",
        current.from_date_time.format("%H:%M"),
        current.till_date_time.format("%H:%M")
    );
    match current.index("AIRLY_CAQI") {
        Some(caqi) => match caqi.value {
            Some(value) => println!("CAQI {:.1} ({}): {}", value, caqi.level, caqi.advice),
            None => println!("CAQI unknown: {}", caqi.description),
        },
        None => println!("no CAQI available"),
    }

    let types = client.meta().measurements()?;
    for value in &current.values {
        let unit = types
            .iter()
            .find(|t| t.name == value.name)
            .map(|t| t.unit.as_str())
            .unwrap_or("");
        println!("  {:<12} {:>8.2} {}", value.name, value.value, unit);
    }

    Ok(())
}
