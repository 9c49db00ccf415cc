//! Cache-freshness queries over the captured source timestamps.
//!
//! These back an external incremental-build decision (skip regeneration
//! when nothing changed); the formatting and encoding passes never consult
//! them.

use std::fs;
use std::time::SystemTime;

use crate::writer::EmitWriter;

impl EmitWriter {
    /// True when every source file seen during map encoding still carries
    /// its captured modification time. A writer that captured nothing is
    /// never up to date.
    pub fn is_up_to_date(&self) -> bool {
        if self.timestamps.is_empty() {
            return false;
        }
        self.timestamps.iter().all(|(file, captured)| {
            fs::metadata(file)
                .and_then(|metadata| metadata.modified())
                .map(|current| current == *captured)
                .unwrap_or(false)
        })
    }

    /// The newest captured modification time, or the current time when
    /// nothing was captured.
    pub fn latest_modification(&self) -> SystemTime {
        self.timestamps
            .values()
            .copied()
            .max()
            .unwrap_or_else(SystemTime::now)
    }
}
