// SPDX-License-Identifier: Apache-2.0

// Walks a weather report with chained lookups

use jsoncraft::{get, get_into, get_path, parse, Lookup, ParseError};

const REPORT: &str = r#"{"coord":{"lon":139.01,"lat":35.02},"weather":[{"id":800,"main":"Clear","description":"clear sky","icon":"01n"}],"base":"stations","main":{"temp":285.514,"pressure":1013.75,"humidity":100,"temp_min":285.514,"temp_max":285.514,"sea_level":1023.22,"grnd_level":1013.75},"wind":{"speed":5.52,"deg":311},"clouds":{"all":0},"dt":1485792967,"sys":{"message":0.0025,"country":"JP","sunrise":1485726240,"sunset":1485763863},"id":1907296,"name":"Tawarano","cod":200, "status": true}"#;

fn main() -> Result<(), ParseError> {
    let root = parse(REPORT)?;

    // One step at a time, descending through nodes
    if let Ok(Lookup::Node(weather)) = get(&root, "weather") {
        if let Ok(Lookup::Node(first)) = get(weather, "0") {
            if let Ok(Lookup::Scalar(description)) = get(first, "description") {
                println!("Description: {description}");
            }
        }
    }

    // The same kind of walk in one call
    match get_path(&root, ["main", "temp"]) {
        Ok(temp) => println!("Value: {}", temp.scalar().unwrap_or_default()),
        Err(e) => println!("Lookup failed: {e}"),
    }

    // Scalars rendered into a reused buffer
    let mut value = String::new();
    for key in ["name", "status", "visibility"] {
        match get_into(&root, key, &mut value) {
            Ok(_) => println!("Value: {value}"),
            Err(e) => println!("Lookup failed: {e}"),
        }
    }

    println!("Compact form: {root}");
    Ok(())
}
