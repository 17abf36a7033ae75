//! Backend worker: owns the tokio runtime, the catalog source and the search
//! debouncer.

pub mod commands;
pub mod runtime;
