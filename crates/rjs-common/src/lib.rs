//! Common types and utilities for the rjs Ruby-to-JavaScript compiler.
//!
//! This crate provides the foundational types shared across rjs crates:
//! - Source buffer registry and spans (`SourceRegistry`, `SourceId`, `SourceSpan`)
//! - Byte-offset to line/column resolution (`Position`, `position_at`)
//! - Source Map v3 mapping encoder and Base64 VLQ codec

// Source buffers - the driver owns the registry, the emitter borrows handles
pub mod source;
pub use source::{SourceBuffer, SourceId, SourceRegistry, SourceSpan};

// Position - line/column resolution for byte offsets
pub mod position;
pub use position::{Position, position_at};

// Source Map generation
pub mod source_map;
pub use source_map::{MappingEncoder, SourceMap};
