use krishi_core::error::KrishiError;
use krishi_core::predictor::RuleBasedPredictor;
use krishi_core::tables::Tables;
use serde_json::{json, Value};
use std::io::Read;

/// Single-message mode: one JSON envelope on stdin, one JSON reply on
/// stdout. Every failure, including setup failures, becomes an error
/// reply; callers distinguish errors by payload, never by exit status.
pub fn run() -> Result<(), KrishiError> {
    let reply = match build_reply() {
        Ok(value) => value,
        Err(e) => json!({ "error": e.to_string() }),
    };
    println!("{reply}");
    Ok(())
}

fn build_reply() -> Result<Value, KrishiError> {
    let tables = Tables::builtin()?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let predictor = RuleBasedPredictor::new(&tables.tolerances);
    Ok(krishi_core::protocol::handle_message(
        &input, &predictor, &tables,
    ))
}
