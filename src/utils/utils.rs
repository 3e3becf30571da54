// Start of file: src/utils/utils.rs

use anyhow::Result;
use serde::Serialize;
use tracing::{error, info};

use crate::models::response_record::{FieldBag, ResponseRecord};

/*
    * Logs a built `ResponseRecord` as pretty JSON.
*/
pub fn log_record<X: FieldBag>(record: &ResponseRecord<X>) {
    match to_two_space_indented_json(record) {
        Ok(spaced_json) => {
            info!("\nResponse record:\n{}", spaced_json);
        }
        Err(err) => {
            error!("Failed to format response record JSON: {:?}", err);
        }
    }
}

/*
    * Convert any `Serialize` type into a two-space-indented JSON string.
*/
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> Result<String> {
    let json_value: serde_json::Value = serde_json::to_value(value)?;
    let pretty_json: String = serde_json::to_string_pretty(&json_value)?;
    Ok(pretty_json)
}


// End of file: src/utils/utils.rs
