// Start of file: src/main.rs

// Demo binary: loads response defaults, then logs one success and one failure record

use serde_json::json;

use uniform_response::core::logging::init_tracing;
use uniform_response::utils::utils::log_record;
use uniform_response::{ResponseBuilder, ResponseDefaults, ResponseRecord};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let defaults: ResponseDefaults = ResponseDefaults::from_env()?;

    let created: ResponseRecord = ResponseBuilder::success()
        .defaults(defaults.clone())
        .status_code(201)
        .data(json!({ "version": "1.0.0" }))
        .extra_field("traceId", "demo-trace")
        .build();

    let rejected: ResponseRecord = ResponseBuilder::failure()
        .defaults(defaults)
        .error(json!({ "field": "email", "reason": "already registered" }))
        .build();

    log_record(&created);
    log_record(&rejected);

    Ok(())
}

// End of file: src/main.rs
