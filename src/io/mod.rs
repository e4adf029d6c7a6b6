//! Command-line surface, image I/O and ambient services

/// Command-line parsing and run orchestration
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// Candidate directory loading
pub mod loader;
/// Log output initialisation
pub mod logging;
/// Terminal progress display
pub mod progress;
