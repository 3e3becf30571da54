// Start of file: /src/config/mod.rs

/*
* Re-export submodules related to configuration of response defaults.
*/

pub mod environment;

// End of file: /src/config/mod.rs
