//! tests/response_builder/timestamp.rs
//! Ensures every record is stamped with the build instant in ISO-8601 UTC.

// Include the helper module defined in tests/mod.rs.
#[path = "../mod.rs"]
mod common;

use chrono::{DateTime, Utc};
use serde_json::Value;
use uniform_response::{ResponseBuilder, ResponseRecord};

#[test]
fn timestamp_is_recent_iso8601_utc() {
    let record: ResponseRecord = ResponseBuilder::success().build();
    common::assert_recent_timestamp(&common::to_json(&record));
}

#[test]
fn timestamp_falls_between_surrounding_clock_reads() {
    let before: DateTime<Utc> = Utc::now();
    let record: ResponseRecord = ResponseBuilder::failure().build();
    let after: DateTime<Utc> = Utc::now();

    assert!(record.timestamp() >= before);
    assert!(record.timestamp() <= after);
}

#[test]
fn timestamp_is_serialized_with_millisecond_precision() {
    let record: ResponseRecord = ResponseBuilder::success().build();
    let json: Value = common::to_json(&record);
    let raw: &str = json["timestamp"].as_str().unwrap();

    // e.g. 2026-10-19T12:00:00.000Z
    assert_eq!(raw.len(), 24);
    assert_eq!(&raw[19..20], ".");
}
