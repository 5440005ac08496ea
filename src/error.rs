//! Error types for HL7 v2 segment handling
//!
//! This module defines the error types used throughout the segment codec.

use thiserror::Error;

/// Result type alias for HL7 v2 operations
pub type Result<T> = std::result::Result<T, Hl7Error>;

/// Error type for segment parsing and addressing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Hl7Error {
    /// Input too short to carry the three-character segment ID
    #[error("Segment too short: {len} bytes, need at least 3")]
    SegmentTooShort { len: usize },

    /// No field at the requested sequence number
    #[error("Field not found: sequence {seq}")]
    FieldNotFound { seq: usize },

    /// A whole-segment location was passed to an operation that requires a field
    #[error("Location addresses the whole segment: a field sequence is required")]
    FieldRequired,
}

impl Hl7Error {
    /// Create a too-short error
    pub fn segment_too_short(len: usize) -> Self {
        Self::SegmentTooShort { len }
    }

    /// Create a field-not-found error
    pub fn field_not_found(seq: usize) -> Self {
        Self::FieldNotFound { seq }
    }
}
