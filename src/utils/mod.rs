// Start of file: /src/utils/mod.rs

/*
    * Re-exports for the response builder and the shared JSON helpers
    * used to log built records.
*/

pub mod response_handler;
pub mod utils;

// End of file: /src/utils/mod.rs
