//! Kumu Gradebook Library
//!
//! This library contains the core components of the Kumu gradebook: an in-memory
//! record store keyed by student name, the configuration layer and the line-oriented
//! shell that drives it. The library is used by the binary crate, but the record
//! store can also be embedded on its own.
//!
//! # Architecture
//!
//! - `data_structures::kumu_trie` owns every record; nothing else mutates it
//! - `shell` validates input against the course catalog before calling the store
//! - `config` and `error` are shared by both

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod shell;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Kumu gradebook.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::GradesResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
