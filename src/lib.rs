use std::str::FromStr;

use log::{debug, info};
use thiserror::Error;

pub mod alphabet;
pub mod best_path;
pub mod config;
pub mod graph;
pub mod report;
pub mod scoring;
pub mod traceback;

pub use config::{AlignerConfig, EmptyPolicy};
pub use graph::{AlignmentGraph, Edge, EdgeKind, Node, Position};
pub use report::AlignmentReport;
pub use scoring::{ScoringParams, ScoringTable};
pub use traceback::{Alignment, Move, Path};

// Protein scoring parameters
pub const PROTEIN_MATCH: i32 = 5;
pub const PROTEIN_MISMATCH_BOTH: i32 = 1;
pub const PROTEIN_MISMATCH_ONE: i32 = -5;
pub const PROTEIN_MISMATCH_NEITHER: i32 = 0;
pub const DEFAULT_INDEL: i32 = -2;
pub const DEFAULT_GAP_MARKER: char = '_';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignerError {
    #[error("Unknown symbol: {symbol:?}")]
    UnknownSymbol { symbol: char },
    #[error("Empty sequence: {which}")]
    EmptySequence { which: &'static str },
    #[error("Traceback invariant violated: {0}")]
    TracebackInvariantViolation(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AlignerError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    data: Vec<u8>,
}

impl Sequence {
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromStr for Sequence {
    type Err = AlignerError;

    /// Residues are single-byte symbols; the first non-ASCII character is
    /// reported whole rather than as a stray UTF-8 byte.
    fn from_str(value: &str) -> Result<Self> {
        if let Some(symbol) = value.chars().find(|c| !c.is_ascii()) {
            return Err(AlignerError::UnknownSymbol { symbol });
        }
        Ok(Self::new(value.as_bytes()))
    }
}

/// Everything one alignment request produces: the scored graph for a
/// renderer, plus the co-optimal alignments for reporting.
#[derive(Debug, Clone)]
pub struct AlignmentOutcome {
    pub graph: AlignmentGraph,
    pub alignments: Vec<Alignment>,
    /// Number of co-optimal paths in the graph, which can exceed
    /// `alignments.len()` when enumeration is capped.
    pub path_count: u128,
}

impl AlignmentOutcome {
    pub fn best_score(&self) -> Option<i64> {
        self.graph.node(self.graph.terminal()).best_score()
    }

    pub fn is_truncated(&self) -> bool {
        (self.alignments.len() as u128) < self.path_count
    }

    pub fn report(&self) -> AlignmentReport<'_> {
        AlignmentReport::new(self)
    }
}

/// Global aligner over a fixed scoring table.
pub struct Aligner {
    table: ScoringTable,
    config: AlignerConfig,
}

impl Aligner {
    pub fn new(table: ScoringTable) -> Result<Self> {
        Self::with_config(table, AlignerConfig::default())
    }

    pub fn with_config(table: ScoringTable, config: AlignerConfig) -> Result<Self> {
        config.validate(&table)?;
        Ok(Self { table, config })
    }

    /// Amino-acid aligner with the default hydrophobic-conditioned table.
    pub fn protein() -> Result<Self> {
        Self::new(ScoringTable::protein_default())
    }

    pub fn table(&self) -> &ScoringTable {
        &self.table
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    pub fn with_indel_weight(mut self, indel_weight: i32) -> Result<Self> {
        self.config.indel_weight = indel_weight;
        self.config.validate(&self.table)?;
        Ok(self)
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Result<Self> {
        self.config.max_paths = Some(max_paths);
        self.config.validate(&self.table)?;
        Ok(self)
    }

    /// Builds and scores the alignment graph without enumerating paths.
    pub fn scored_graph(&self, seq1: &Sequence, seq2: &Sequence) -> Result<AlignmentGraph> {
        if self.config.empty_policy == EmptyPolicy::Reject {
            if seq1.is_empty() {
                return Err(AlignerError::EmptySequence { which: "seq1" });
            }
            if seq2.is_empty() {
                return Err(AlignerError::EmptySequence { which: "seq2" });
            }
        }

        let mut graph = AlignmentGraph::build(
            seq1.as_bytes(),
            seq2.as_bytes(),
            &self.table,
            self.config.indel_weight,
        )?;
        best_path::score_graph(&mut graph);
        Ok(graph)
    }

    pub fn align(&self, seq1: &Sequence, seq2: &Sequence) -> Result<AlignmentOutcome> {
        let graph = self.scored_graph(seq1, seq2)?;
        let path_count = traceback::count_paths(&graph);
        let terminal = graph.terminal();
        let paths = traceback::enumerate_paths(&graph, terminal, self.config.max_paths)?;

        let alignments = paths
            .iter()
            .map(|path| {
                traceback::to_alignment(
                    seq1.as_bytes(),
                    seq2.as_bytes(),
                    path,
                    self.config.gap_marker,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        if (alignments.len() as u128) < path_count {
            debug!(
                "Enumeration capped at {} of {} co-optimal paths",
                alignments.len(),
                path_count
            );
        }
        info!(
            "Aligned {} x {} residues: best score {:?}, {} co-optimal path(s)",
            seq1.len(),
            seq2.len(),
            graph.node(terminal).best_score(),
            path_count
        );

        Ok(AlignmentOutcome {
            graph,
            alignments,
            path_count,
        })
    }
}
