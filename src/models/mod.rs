// Start of file: /src/models/mod.rs

/*
    * This module groups the data models: the response record, its
    * omission policy and the extension bag trait.
*/

pub mod response_record;

// End of file: /src/models/mod.rs
