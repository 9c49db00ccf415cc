//! Source Map v3 document assembly.
//!
//! [`MappingEncoder`] holds the five running counters the mapping grammar
//! delta-encodes against and grows the `mappings` string one segment at a
//! time; [`SourceMap`] is the JSON envelope around the finished string.

pub mod vlq;

use serde::Serialize;

/// A Source Map v3 document, serializable as-is.
#[derive(Debug, Clone, Serialize)]
pub struct SourceMap {
    pub version: u32,
    pub file: String,
    pub sources: Vec<String>,
    pub mappings: String,
}

/// Delta-encodes absolute mapping tuples into a `mappings` string.
///
/// Tuples must arrive ordered by generated position; the buffer walk that
/// feeds this encoder guarantees that.
#[derive(Debug, Default)]
pub struct MappingEncoder {
    mappings: String,
    recorded_any: bool,
    generated_line: u32,
    generated_column: u32,
    source_index: u32,
    original_line: u32,
    original_column: u32,
}

impl MappingEncoder {
    pub fn new() -> Self {
        MappingEncoder::default()
    }

    /// Record one absolute mapping tuple.
    ///
    /// A tuple identical to the previously recorded one is dropped. Lines
    /// with no mappings show up as consecutive `;` separators, and the
    /// generated-column counter resets at each line boundary.
    pub fn record(
        &mut self,
        generated_line: u32,
        generated_column: u32,
        source_index: u32,
        original_line: u32,
        original_column: u32,
    ) {
        if generated_line == self.generated_line {
            if self.recorded_any
                && generated_column == self.generated_column
                && source_index == self.source_index
                && original_line == self.original_line
                && original_column == self.original_column
            {
                return;
            }
            if !self.mappings.is_empty() {
                self.mappings.push(',');
            }
        }

        while self.generated_line < generated_line {
            self.mappings.push(';');
            self.generated_line += 1;
            self.generated_column = 0;
        }

        let deltas = [
            generated_column as i64 - self.generated_column as i64,
            source_index as i64 - self.source_index as i64,
            original_line as i64 - self.original_line as i64,
            original_column as i64 - self.original_column as i64,
        ];
        self.generated_column = generated_column;
        self.source_index = source_index;
        self.original_line = original_line;
        self.original_column = original_column;
        self.recorded_any = true;

        for delta in deltas {
            vlq::encode(delta as i32, &mut self.mappings);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// The finished `mappings` string.
    pub fn finish(self) -> String {
        self.mappings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_zero_tuple_is_emitted() {
        let mut encoder = MappingEncoder::new();
        encoder.record(0, 0, 0, 0, 0);
        assert_eq!(encoder.finish(), "AAAA");
    }

    #[test]
    fn test_same_line_segments_comma_separated() {
        let mut encoder = MappingEncoder::new();
        encoder.record(0, 0, 0, 0, 0);
        encoder.record(0, 5, 0, 0, 5);
        assert_eq!(encoder.finish(), "AAAA,KAAK");
    }

    #[test]
    fn test_duplicate_tuple_skipped() {
        let mut encoder = MappingEncoder::new();
        encoder.record(0, 5, 0, 0, 5);
        encoder.record(0, 5, 0, 0, 5);
        assert_eq!(encoder.finish(), "KAAK");
    }

    #[test]
    fn test_line_advance_resets_column() {
        let mut encoder = MappingEncoder::new();
        encoder.record(0, 5, 0, 0, 5);
        // Column delta on the new line is absolute again, not 0 - 5.
        encoder.record(1, 0, 0, 1, 0);
        assert_eq!(encoder.finish(), "KAAK;AACL");
    }

    #[test]
    fn test_empty_lines_emit_bare_separators() {
        let mut encoder = MappingEncoder::new();
        encoder.record(0, 0, 0, 0, 0);
        encoder.record(3, 0, 0, 2, 0);
        assert_eq!(encoder.finish(), "AAAA;;;AAEA");
    }

    #[test]
    fn test_envelope_serializes_in_order() {
        let map = SourceMap {
            version: 3,
            file: "out.js".to_string(),
            sources: vec!["a.rb".to_string()],
            mappings: "AAAA".to_string(),
        };
        let json = serde_json::to_string(&map).expect("serialize map");
        assert_eq!(
            json,
            r#"{"version":3,"file":"out.js","sources":["a.rb"],"mappings":"AAAA"}"#
        );
    }
}
