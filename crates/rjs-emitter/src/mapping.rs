//! Source-map assembly over the finished buffer.

use std::fs;

use rjs_common::{MappingEncoder, SourceId, SourceMap, SourceRegistry, position_at};
use rustc_hash::FxHashMap;

use crate::writer::EmitWriter;

impl EmitWriter {
    /// Build the Source Map v3 document for the rendered output.
    ///
    /// Runs the same layout passes `render` applies, so generated
    /// positions line up with the rendered text, then walks every token
    /// that carries a span. Source buffers are listed in first-seen order;
    /// the first sighting also captures the file's modification time for
    /// the freshness cache.
    pub fn source_map(&mut self, file: &str, registry: &SourceRegistry) -> SourceMap {
        if self.options.indent > 0 {
            self.respace_all();
        }

        let mut encoder = MappingEncoder::new();
        let mut seen: Vec<SourceId> = Vec::new();
        let mut indices: FxHashMap<SourceId, usize> = FxHashMap::default();
        let mut sources: Vec<String> = Vec::new();
        let mut segments = 0usize;

        for (row, line) in self.lines.iter().enumerate() {
            let mut column = line.indent;
            for token in &line.tokens {
                if let Some(span) = token.span {
                    // Separator spaces spliced in by the heuristics carry
                    // no meaningful origin.
                    if token.text != " " {
                        if let Some(buffer) = registry.get(span.source) {
                            let index = match indices.get(&span.source) {
                                Some(&index) => index,
                                None => {
                                    let index = seen.len();
                                    seen.push(span.source);
                                    indices.insert(span.source, index);
                                    sources.push(buffer.name.clone());
                                    match fs::metadata(&buffer.name).and_then(|m| m.modified()) {
                                        Ok(mtime) => {
                                            self.timestamps.insert(buffer.name.clone(), mtime);
                                        }
                                        Err(_) => {
                                            tracing::trace!(
                                                source = %buffer.name,
                                                "no timestamp captured"
                                            );
                                        }
                                    }
                                    index
                                }
                            };
                            let original = position_at(&buffer.text, span.offset as usize);
                            encoder.record(
                                row as u32,
                                column as u32,
                                index as u32,
                                original.line,
                                original.column,
                            );
                            segments += 1;
                        }
                    }
                }
                column += token.len();
            }
        }

        tracing::debug!(segments, sources = sources.len(), "source map encoded");
        SourceMap {
            version: 3,
            file: file.to_string(),
            sources,
            mappings: encoder.finish(),
        }
    }
}
