use krishi_core::error::KrishiError;
use krishi_core::model::Factor;
use krishi_core::tables::Tables;
use std::path::Path;

pub fn list() -> Result<(), KrishiError> {
    let tables = Tables::builtin()?;

    println!("Builtin rule tables:\n");
    println!(
        "  tolerances  {} (v{}) -- {} crops",
        tables.tolerances.name,
        tables.tolerances.version,
        tables.tolerances.crops.len()
    );
    if let Some(ref desc) = tables.tolerances.description {
        println!("              {desc}");
    }
    println!();
    println!(
        "  pest        {} (v{}) -- {} crops plus a generic fallback",
        tables.pest.name,
        tables.pest.version,
        tables.pest.entries.len()
    );
    println!();
    println!(
        "  yields      {} (v{}) -- {} base yields, {} seasons",
        tables.yields.name,
        tables.yields.version,
        tables.yields.base_yields.len(),
        tables.yields.season_multipliers.len()
    );
    println!();

    Ok(())
}

pub fn explain() -> Result<(), KrishiError> {
    let tables = Tables::builtin()?;
    let tolerances = &tables.tolerances;

    println!("{} (version {})\n", tolerances.name, tolerances.version);
    if let Some(ref desc) = tolerances.description {
        println!("{desc}\n");
    }

    println!("Each crop has an inclusive comfort band per factor. A measurement");
    println!("inside the band contributes a full point; outside, the contribution");
    println!("decays with the distance to the violated bound. The final score is");
    println!("the average over the 7 factors, so it always lands in [0, 1].\n");

    println!("Crops are listed in tie-break order: equal scores keep this order.\n");

    // Band table, one row per crop
    let max_name_len = tolerances
        .crops
        .iter()
        .map(|c| c.crop.len())
        .max()
        .unwrap_or(10);

    print!("  {:<width$}", "Crop", width = max_name_len + 2);
    for factor in Factor::ALL {
        print!("  {:<11}", factor.to_string());
    }
    println!();
    println!(
        "  {}",
        "-".repeat(max_name_len + 2 + Factor::ALL.len() * 13)
    );

    for crop in &tolerances.crops {
        print!("  {:<width$}", crop.crop, width = max_name_len + 2);
        for factor in Factor::ALL {
            match crop.bands.get(&factor) {
                Some(band) => print!("  {:<11}", format!("{}-{}", band.min, band.max)),
                None => print!("  {:<11}", "-"),
            }
        }
        println!();
    }
    println!();

    println!("Yield factors (tons/ha):\n");
    for (crop, base) in &tables.yields.base_yields {
        println!("  {crop:<12} {base}");
    }
    println!(
        "  {:<12} {} (crops without an entry)",
        "default", tables.yields.default_base_yield
    );
    println!();
    println!("Season multipliers:");
    for (season, multiplier) in &tables.yields.season_multipliers {
        println!("  {season:<12} {multiplier}");
    }
    println!(
        "  {:<12} {} (unrecognized seasons)",
        "default", tables.yields.default_multiplier
    );
    println!();

    Ok(())
}

pub fn schema() -> Result<(), KrishiError> {
    print!(
        r#"JSON Tolerance Table Schema
===========================

A tolerance table defines per-crop comfort bands for the 7 soil/weather
factors. When you run `krishi recommend`, every crop in the table is
scored against the measurement and the crops are ranked by score.

Top-level fields:
  name          (string, required)  Human-readable name of the table
  description   (string, optional)  What this table is for
  version       (string, required)  Version identifier (e.g., "2025.1")
  crops         (array, required)   Ordered list of crop records.
                                    The order matters: crops with equal
                                    scores are ranked in listing order.

Each record in the "crops" array:
  crop          (string, required)  Crop name (lowercase by convention)
  bands         (object, required)  Map of factor -> band. All 7 factors
                                    are required: "n", "p", "k",
                                    "temperature", "humidity", "ph",
                                    "rainfall".

Each band:
  min           (number, required)  Inclusive lower bound. Must be > 0,
                                    because the score decay divides by
                                    the bound itself.
  max           (number, required)  Inclusive upper bound, >= min.

Example:
{{
  "name": "My regional bands",
  "description": "Bands tuned for the coastal belt",
  "version": "1.0",
  "crops": [
    {{
      "crop": "rice",
      "bands": {{
        "n": {{ "min": 80, "max": 120 }},
        "p": {{ "min": 40, "max": 60 }},
        "k": {{ "min": 40, "max": 60 }},
        "temperature": {{ "min": 20, "max": 35 }},
        "humidity": {{ "min": 70, "max": 95 }},
        "ph": {{ "min": 5.5, "max": 7.0 }},
        "rainfall": {{ "min": 1000, "max": 3000 }}
      }}
    }}
  ]
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), KrishiError> {
    let table = krishi_core::tables::load_tolerance_table(file)?;

    println!("Table '{}' (v{}) is valid.", table.name, table.version);
    println!("  Crops: {}", table.crops.len());

    // Cross-check against the builtin companion tables (warnings only)
    let builtin = Tables::builtin()?;
    let mut warnings = Vec::new();
    for crop in &table.crops {
        if !builtin.pest.entries.contains_key(&crop.crop) {
            warnings.push(format!(
                "crop '{}' has no pest advice entry; the generic fallback will be used",
                crop.crop
            ));
        }
        if !builtin.yields.base_yields.contains_key(&crop.crop.to_lowercase()) {
            warnings.push(format!(
                "crop '{}' has no base yield entry; the default {} t/ha applies",
                crop.crop, builtin.yields.default_base_yield
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {w}");
        }
    }

    Ok(())
}
