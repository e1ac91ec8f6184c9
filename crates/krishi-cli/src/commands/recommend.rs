use krishi_core::error::KrishiError;
use krishi_core::model::SoilMeasurement;
use krishi_core::tables::Tables;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    table_file: Option<PathBuf>,
    show_all: bool,
) -> Result<(), KrishiError> {
    let mut tables = Tables::builtin()?;
    if let Some(path) = table_file {
        tables.tolerances = krishi_core::tables::load_tolerance_table(&path)?;
    }

    let json_bytes = std::fs::read(&input_file)?;
    let measurement: SoilMeasurement = serde_json::from_slice(&json_bytes)?;

    let recommendation = krishi_core::recommend(&measurement, &tables)?;

    match output_format {
        "json" => output::json::print(&recommendation)?,
        _ => {
            let all_scores = if show_all {
                Some(krishi_core::engine::rank(&tables.tolerances, &measurement))
            } else {
                None
            };
            output::table::print_recommendation(&recommendation, all_scores.as_deref());
        }
    }

    Ok(())
}
