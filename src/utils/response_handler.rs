// Start of file: /src/utils/response_handler.rs

/*
    * This module encapsulates everything related to building records:
    * - `ResponseOptions`, the named optional inputs of a build
    * - `build_response` / `build_response_with`, the factory itself
    * - `ResponseBuilder`, a chained front end over the same factory
*/

use serde_json::Value;
use tracing::debug;

use crate::config::environment::ResponseDefaults;
use crate::models::response_record::{ExtraFields, FieldBag, OmissionPolicy, ResponseRecord};

/// Optional inputs of a build. Every `None` falls back to [`ResponseDefaults`]
/// or to an absent field.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseOptions<X = ExtraFields> {
    pub status_code: Option<u16>,
    pub message: Option<String>,
    pub data: Option<Value>,
    pub error: Option<Value>,
    pub metadata: Option<Value>,
    pub extra_fields: Option<X>,
    pub policy: Option<OmissionPolicy>,
}

impl ResponseOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<X> Default for ResponseOptions<X> {
    fn default() -> Self {
        Self {
            status_code: None,
            message: None,
            data: None,
            error: None,
            metadata: None,
            extra_fields: None,
            policy: None,
        }
    }
}

/// Builds a record using the built-in defaults (200/400, English messages,
/// omitted empty fields).
pub fn build_response<X: FieldBag>(success: bool, options: ResponseOptions<X>) -> ResponseRecord<X> {
    build_response_with(success, options, &ResponseDefaults::default())
}

/// Builds a record, filling anything the caller left out from `defaults`.
pub fn build_response_with<X: FieldBag>(
    success: bool,
    options: ResponseOptions<X>,
    defaults: &ResponseDefaults,
) -> ResponseRecord<X> {
    let ResponseOptions {
        status_code,
        message,
        data,
        error,
        metadata,
        extra_fields,
        policy,
    } = options;

    let status_code: u16 = status_code.unwrap_or_else(|| defaults.status_for(success));
    let message: String = message.unwrap_or_else(|| defaults.message_for(success).to_owned());

    debug!(success, status_code, "Building response record");

    ResponseRecord::assemble(
        success,
        status_code,
        message,
        data,
        error,
        metadata,
        extra_fields.unwrap_or_default(),
        policy.unwrap_or(defaults.policy),
    )
}

/// Convenience struct for building records in handlers
#[derive(Debug, Clone)]
pub struct ResponseBuilder<X = ExtraFields> {
    success: bool,
    options: ResponseOptions<X>,
    defaults: Option<ResponseDefaults>,
}

impl ResponseBuilder {
    /// Starts a build; `success` is the only required input
    pub fn new(success: bool) -> Self {
        Self {
            success,
            options: ResponseOptions::new(),
            defaults: None,
        }
    }

    pub fn success() -> Self {
        Self::new(true)
    }

    pub fn failure() -> Self {
        Self::new(false)
    }

    /// Adds one key to the default map bag
    pub fn extra_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options
            .extra_fields
            .get_or_insert_with(ExtraFields::new)
            .insert(key.into(), value.into());
        self
    }
}

impl<X: FieldBag> ResponseBuilder<X> {
    pub fn status_code(mut self, status_code: u16) -> Self {
        self.options.status_code = Some(status_code);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.options.message = Some(message.into());
        self
    }

    pub fn data(mut self, data: impl Into<Value>) -> Self {
        self.options.data = Some(data.into());
        self
    }

    pub fn error(mut self, error: impl Into<Value>) -> Self {
        self.options.error = Some(error.into());
        self
    }

    pub fn metadata(mut self, metadata: impl Into<Value>) -> Self {
        self.options.metadata = Some(metadata.into());
        self
    }

    pub fn policy(mut self, policy: OmissionPolicy) -> Self {
        self.options.policy = Some(policy);
        self
    }

    /// Uses `defaults` instead of the built-in constants
    pub fn defaults(mut self, defaults: ResponseDefaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Replaces the extension bag, possibly with a bag of another shape
    pub fn extra_fields<Y: FieldBag>(self, extra_fields: Y) -> ResponseBuilder<Y> {
        let ResponseOptions {
            status_code,
            message,
            data,
            error,
            metadata,
            policy,
            ..
        } = self.options;

        ResponseBuilder {
            success: self.success,
            options: ResponseOptions {
                status_code,
                message,
                data,
                error,
                metadata,
                extra_fields: Some(extra_fields),
                policy,
            },
            defaults: self.defaults,
        }
    }

    pub fn build(self) -> ResponseRecord<X> {
        match &self.defaults {
            Some(defaults) => build_response_with(self.success, self.options, defaults),
            None => build_response(self.success, self.options),
        }
    }
}

// End of file: /src/utils/response_handler.rs
