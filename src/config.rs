use crate::scoring::ScoringTable;
use crate::{AlignerError, Result, DEFAULT_GAP_MARKER, DEFAULT_INDEL};

/// What to do with a zero-length input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Build the degenerate graph: a single row, column or node.
    #[default]
    Degenerate,
    /// Fail with `AlignerError::EmptySequence`.
    Reject,
}

#[derive(Debug, Clone)]
pub struct AlignerConfig {
    pub indel_weight: i32,
    pub gap_marker: char,
    pub max_paths: Option<usize>,
    pub empty_policy: EmptyPolicy,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            indel_weight: DEFAULT_INDEL,
            gap_marker: DEFAULT_GAP_MARKER,
            max_paths: None, // enumerate every co-optimal path
            empty_policy: EmptyPolicy::default(),
        }
    }
}

impl AlignerConfig {
    pub fn with_indel_weight(mut self, indel_weight: i32) -> Self {
        self.indel_weight = indel_weight;
        self
    }

    pub fn with_gap_marker(mut self, gap_marker: char) -> Self {
        self.gap_marker = gap_marker;
        self
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = Some(max_paths);
        self
    }

    pub fn with_empty_policy(mut self, empty_policy: EmptyPolicy) -> Self {
        self.empty_policy = empty_policy;
        self
    }

    /// Checks the settings against the table they will be used with.
    pub fn validate(&self, table: &ScoringTable) -> Result<()> {
        if self.indel_weight > 0 {
            return Err(AlignerError::InvalidConfig(format!(
                "indel weight must not be positive, got {}",
                self.indel_weight
            )));
        }
        if self.max_paths == Some(0) {
            return Err(AlignerError::InvalidConfig(
                "path cap must allow at least one path".to_string(),
            ));
        }
        if table.contains(self.gap_marker) {
            return Err(AlignerError::InvalidConfig(format!(
                "gap marker {:?} is part of the alphabet",
                self.gap_marker
            )));
        }
        Ok(())
    }
}
