//! JavaScript output assembly for the rjs compiler.
//!
//! The AST walker drives an [`EmitWriter`] with buffer primitives in
//! tree-traversal order, bracketing statement and expression
//! sub-traversals with the [`wrap`](EmitWriter::wrap) /
//! [`compact`](EmitWriter::compact) layout heuristics. Once traversal
//! completes, [`render`](EmitWriter::render) runs the layout passes and
//! produces the formatted text, and [`source_map`](EmitWriter::source_map)
//! produces the companion Source Map v3 document.
//!
//! ```
//! use rjs_emitter::{EmitOptions, EmitWriter};
//!
//! let mut writer = EmitWriter::new(EmitOptions::default());
//! writer.write("if (x) ");
//! writer.wrap(|w| w.write("y();"));
//! assert_eq!(writer.render(), "if (x) { y(); }");
//! ```

// Token and line building blocks
pub mod line;
pub use line::{Line, Token};

// The output buffer and its mutation primitives
pub mod writer;
pub use writer::{EmitOptions, EmitWriter, Mark};

// Layout passes: indent assignment, blank-line management, rendering
mod layout;

// Statement layout heuristics: wrap and compact
mod compaction;

// Source-map assembly over the finished buffer
mod mapping;

// Cache-freshness queries over captured source timestamps
mod freshness;
