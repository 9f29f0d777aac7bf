//! Core types for CSV parsing

/// Statistics about a single parse run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Non-blank lines after normalization, header included
    pub lines_processed: usize,
    /// Blank lines discarded before parsing
    pub blank_lines: usize,
    /// Data rows turned into records
    pub valid_rows: usize,
    /// Data rows dropped for having the wrong number of fields
    pub dropped_rows: usize,
    /// Whether the canonical header replaced the one in the text
    pub canonical_header: bool,
}

impl ParseStats {
    /// Number of data rows seen (header excluded)
    pub fn data_rows(&self) -> usize {
        self.valid_rows + self.dropped_rows
    }

    /// Calculate success rate as percentage
    pub fn success_rate(&self) -> f64 {
        if self.data_rows() == 0 {
            0.0
        } else {
            (self.valid_rows as f64 / self.data_rows() as f64) * 100.0
        }
    }
}
