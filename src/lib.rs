//! HL7 v2 segment parsing in Rust
//!
//! Parses one raw segment line into an addressable field / component /
//! subcomponent tree and re-encodes it after location-addressed writes.
//! Splitting a full message into segment lines and parsing a path syntax
//! into a [`Location`] are the caller's collaborators, not this crate.

pub mod component;
pub mod delimiters;
pub mod error;
pub mod field;
pub mod location;
pub mod segment;
pub mod subcomponent;

mod tokenizer;

// Re-export main types
pub use component::Component;
pub use delimiters::{Delimiters, SEGMENT_TERMINATOR};
pub use error::{Hl7Error, Result};
pub use field::Field;
pub use location::Location;
pub use segment::Segment;
pub use subcomponent::SubComponent;
