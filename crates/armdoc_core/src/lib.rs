//! Public library API for decoding ARM templates with source metadata.

/// JSON-with-comments parsing, metadata-stamped decoding, and template model.
pub mod arm;
