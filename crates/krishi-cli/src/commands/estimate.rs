use krishi_core::error::KrishiError;
use krishi_core::model::YieldRequest;
use krishi_core::tables::Tables;
use std::path::PathBuf;

use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), KrishiError> {
    let tables = Tables::builtin()?;

    let json_bytes = std::fs::read(&input_file)?;
    let request: YieldRequest = serde_json::from_slice(&json_bytes)?;

    let estimate = krishi_core::estimate_yield(&request, &tables);

    match output_format {
        "json" => output::json::print(&estimate)?,
        _ => output::table::print_estimate(&estimate),
    }

    Ok(())
}
