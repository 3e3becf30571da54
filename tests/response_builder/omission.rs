//! tests/response_builder/omission.rs
//! Ensures absent optional fields are omitted or written as null/empty
//! according to the record's omission policy.

// Include the helper module defined in tests/mod.rs.
#[path = "../mod.rs"]
mod common;

use serde_json::{json, Value};
use uniform_response::{OmissionPolicy, ResponseBuilder, ResponseDefaults, ResponseRecord};

#[test]
fn bare_success_omits_every_optional_key_by_default() {
    let record: ResponseRecord = ResponseBuilder::success().build();
    let json: Value = common::to_json(&record);

    assert_eq!(record.policy(), OmissionPolicy::Omit);
    assert_eq!(
        common::keys(&json),
        vec!["message", "statusCode", "success", "timestamp"]
    );
    assert_eq!(json["statusCode"], 200);
    assert_eq!(json["message"], "Request was successful");
}

#[test]
fn bare_success_under_include_policy_writes_null_and_empty() {
    let record: ResponseRecord = ResponseBuilder::success()
        .policy(OmissionPolicy::Include)
        .build();
    let json: Value = common::to_json(&record);

    assert_eq!(
        common::keys(&json),
        vec![
            "data",
            "error",
            "extraFields",
            "message",
            "metadata",
            "statusCode",
            "success",
            "timestamp"
        ]
    );
    assert_eq!(json["data"], Value::Null);
    assert_eq!(json["error"], Value::Null);
    assert_eq!(json["metadata"], Value::Null);
    assert_eq!(json["extraFields"], json!({}));
}

#[test]
fn policy_can_come_from_defaults() {
    let defaults: ResponseDefaults = ResponseDefaults {
        policy: OmissionPolicy::Include,
        ..ResponseDefaults::default()
    };
    let record: ResponseRecord = ResponseBuilder::failure().defaults(defaults).build();

    assert_eq!(record.policy(), OmissionPolicy::Include);
    assert!(common::to_json(&record).get("data").is_some());
}

#[test]
fn payload_with_trace_id_omits_error_and_metadata() {
    let record: ResponseRecord = ResponseBuilder::success()
        .status_code(200)
        .message("ok")
        .data(json!({ "id": 1 }))
        .error(Value::Null)
        .metadata(Value::Null)
        .extra_field("traceId", "abc")
        .build();
    let json: Value = common::to_json(&record);

    assert_eq!(json["data"], json!({ "id": 1 }));
    assert_eq!(json["extraFields"], json!({ "traceId": "abc" }));
    assert!(json.get("error").is_none());
    assert!(json.get("metadata").is_none());
}

#[test]
fn payload_with_trace_id_nulls_error_and_metadata_under_include() {
    let record: ResponseRecord = ResponseBuilder::success()
        .message("ok")
        .data(json!({ "id": 1 }))
        .extra_field("traceId", "abc")
        .policy(OmissionPolicy::Include)
        .build();
    let json: Value = common::to_json(&record);

    assert_eq!(json["data"], json!({ "id": 1 }));
    assert_eq!(json["extraFields"], json!({ "traceId": "abc" }));
    assert_eq!(json["error"], Value::Null);
    assert_eq!(json["metadata"], Value::Null);
}

#[test]
fn null_data_is_treated_as_absent() {
    let record: ResponseRecord = ResponseBuilder::success().data(Value::Null).build();

    assert_eq!(record.data(), None);
    assert!(common::to_json(&record).get("data").is_none());
}

#[test]
fn falsy_data_is_kept() {
    let record: ResponseRecord = ResponseBuilder::success().data(false).build();
    assert_eq!(common::to_json(&record)["data"], json!(false));

    let record: ResponseRecord = ResponseBuilder::success().data(0).build();
    assert_eq!(common::to_json(&record)["data"], json!(0));
}

#[test]
fn falsy_error_and_metadata_are_dropped() {
    let record: ResponseRecord = ResponseBuilder::failure()
        .error("")
        .metadata(false)
        .build();
    let json: Value = common::to_json(&record);

    assert_eq!(record.error(), None);
    assert_eq!(record.metadata(), None);
    assert!(json.get("error").is_none());
    assert!(json.get("metadata").is_none());
}

#[test]
fn truthy_error_and_metadata_pass_through_verbatim() {
    let error: Value = json!({ "code": "E_DUPLICATE", "fields": ["email"] });
    let metadata: Value = json!({ "page": 1, "total": 0 });

    let record: ResponseRecord = ResponseBuilder::failure()
        .status_code(409)
        .error(error.clone())
        .metadata(metadata.clone())
        .build();
    let json: Value = common::to_json(&record);

    assert_eq!(json["error"], error);
    assert_eq!(json["metadata"], metadata);
}
