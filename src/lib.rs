// Library root for the uniform response record builder

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::config::environment::ResponseDefaults;
pub use crate::models::response_record::{ExtraFields, FieldBag, OmissionPolicy, ResponseRecord};
pub use crate::utils::response_handler::{
    build_response, build_response_with, ResponseBuilder, ResponseOptions,
};
