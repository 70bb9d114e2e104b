/// Error to HTTP response mapping
pub mod error_handling;
