//! Tile matching and mosaic composition

/// Per-run memo of candidate signatures
pub mod cache;
/// Nearest-signature candidate selection
pub mod matcher;
/// End-to-end mosaic construction
pub mod mosaic;
/// Candidate arena with take-and-remove semantics
pub mod pool;
/// Average-colour signatures
pub mod signature;
