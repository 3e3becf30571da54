// Start of file: /src/core/mod.rs

// Process-level setup shared by the library and the demo binary

pub mod logging;

// End of file: /src/core/mod.rs
