use std::collections::BTreeSet;

use log::debug;

use crate::graph::{AlignmentGraph, Edge, Position};
use crate::{AlignerError, Result};

/// Direction of one step along a path, as seen from the source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Both coordinates advance: residues aligned against each other.
    Diagonal,
    /// Only `i` advances: seq1 residue against a gap.
    Vertical,
    /// Only `j` advances: gap against a seq2 residue.
    Horizontal,
}

impl Move {
    pub fn classify(from: Position, to: Position) -> Result<Move> {
        let di = to.i.checked_sub(from.i);
        let dj = to.j.checked_sub(from.j);
        match (di, dj) {
            (Some(1), Some(1)) => Ok(Move::Diagonal),
            (Some(1), Some(0)) => Ok(Move::Vertical),
            (Some(0), Some(1)) => Ok(Move::Horizontal),
            _ => Err(AlignerError::TracebackInvariantViolation(format!(
                "illegal step ({}, {}) -> ({}, {})",
                from.i, from.j, to.i, to.j
            ))),
        }
    }
}

/// Nodes from the origin to the terminal, each step optimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<Position>,
}

impl Path {
    pub fn nodes(&self) -> &[Position] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn moves(&self) -> Result<Vec<Move>> {
        self.nodes
            .windows(2)
            .map(|step| Move::classify(step[0], step[1]))
            .collect()
    }

    /// Sum of edge weights along the path.
    pub fn score(&self, graph: &AlignmentGraph) -> Result<i64> {
        self.nodes.windows(2).try_fold(0i64, |acc, step| {
            let edge = graph.edge(step[0], step[1]).ok_or_else(|| {
                AlignerError::TracebackInvariantViolation(format!(
                    "no edge ({}, {}) -> ({}, {})",
                    step[0].i, step[0].j, step[1].i, step[1].j
                ))
            })?;
            Ok(acc + i64::from(edge.weight))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub aligned_seq1: String,
    pub aligned_seq2: String,
}

impl Alignment {
    pub fn new(aligned_seq1: &str, aligned_seq2: &str) -> Self {
        Self {
            aligned_seq1: aligned_seq1.to_string(),
            aligned_seq2: aligned_seq2.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.aligned_seq1.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }

    /// Both rows with the gap marker removed.
    pub fn ungapped(&self, gap_marker: char) -> (String, String) {
        let strip = |s: &str| s.chars().filter(|&c| c != gap_marker).collect();
        (strip(&self.aligned_seq1), strip(&self.aligned_seq2))
    }
}

fn missing_predecessors(pos: Position) -> AlignerError {
    AlignerError::TracebackInvariantViolation(format!(
        "node ({}, {}) has no recorded predecessors",
        pos.i, pos.j
    ))
}

/// Unwinds predecessor sets from `terminal` back to the origin and returns
/// every optimal path, origin first. Paths come out in depth-first order,
/// first predecessor first. `max_paths` stops enumeration early.
///
/// Worst case is exponential in the path length.
pub fn enumerate_paths(
    graph: &AlignmentGraph,
    terminal: Position,
    max_paths: Option<usize>,
) -> Result<Vec<Path>> {
    if !graph.contains(terminal) {
        return Err(AlignerError::TracebackInvariantViolation(format!(
            "terminal ({}, {}) is outside the grid",
            terminal.i, terminal.j
        )));
    }

    let limit = max_paths.unwrap_or(usize::MAX);
    let max_len = terminal.i + terminal.j + 1;
    let mut paths = Vec::new();
    let mut trail: Vec<Position> = Vec::with_capacity(max_len);
    let mut stack = vec![(terminal, 0usize)];

    while let Some((pos, depth)) = stack.pop() {
        trail.truncate(depth);
        trail.push(pos);
        if trail.len() > max_len {
            return Err(AlignerError::TracebackInvariantViolation(format!(
                "traceback from ({}, {}) exceeded {} steps",
                terminal.i, terminal.j, max_len
            )));
        }

        if pos == Position::ORIGIN {
            paths.push(Path {
                nodes: trail.iter().rev().copied().collect(),
            });
            if paths.len() >= limit {
                break;
            }
            continue;
        }

        let predecessors = graph.node(pos).predecessors();
        if predecessors.is_empty() {
            return Err(missing_predecessors(pos));
        }
        for &pred in predecessors.iter().rev() {
            stack.push((pred, depth + 1));
        }
    }

    debug!(
        "Enumerated {} optimal path(s) to ({}, {})",
        paths.len(),
        terminal.i,
        terminal.j
    );
    Ok(paths)
}

/// Number of optimal paths to the terminal, from the predecessor sets
/// alone. Saturates instead of overflowing.
pub fn count_paths(graph: &AlignmentGraph) -> u128 {
    let mut counts = vec![0u128; graph.node_count()];
    let index = |pos: Position| pos.i * graph.cols() + pos.j;

    for pos in graph.positions() {
        let count = if pos == Position::ORIGIN {
            1
        } else {
            graph
                .node(pos)
                .predecessors()
                .iter()
                .fold(0u128, |acc, &pred| acc.saturating_add(counts[index(pred)]))
        };
        counts[index(pos)] = count;
    }

    counts[index(graph.terminal())]
}

/// Every edge lying on at least one optimal path, sorted by source then
/// target. Does not enumerate the paths themselves.
pub fn best_path_edges(graph: &AlignmentGraph) -> Result<Vec<Edge>> {
    let mut visited = BTreeSet::new();
    let mut edges = Vec::new();
    let mut pending = vec![graph.terminal()];

    while let Some(pos) = pending.pop() {
        if !visited.insert(pos) {
            continue;
        }
        let predecessors = graph.node(pos).predecessors();
        if predecessors.is_empty() && pos != Position::ORIGIN {
            return Err(missing_predecessors(pos));
        }
        for &pred in predecessors {
            let edge = graph.edge(pred, pos).ok_or_else(|| {
                AlignerError::TracebackInvariantViolation(format!(
                    "predecessor ({}, {}) of ({}, {}) is not adjacent",
                    pred.i, pred.j, pos.i, pos.j
                ))
            })?;
            edges.push(edge);
            pending.push(pred);
        }
    }

    edges.sort_by_key(|e| (e.from, e.to));
    Ok(edges)
}

/// Renders `path` as two gapped rows.
pub fn to_alignment(seq1: &[u8], seq2: &[u8], path: &Path, gap_marker: char) -> Result<Alignment> {
    let mut aligned_seq1 = String::with_capacity(path.len());
    let mut aligned_seq2 = String::with_capacity(path.len());

    let residue = |seq: &[u8], k: usize| {
        seq.get(k).map(|&b| b as char).ok_or_else(|| {
            AlignerError::TracebackInvariantViolation(format!(
                "path leaves the sequence at offset {}",
                k
            ))
        })
    };

    for step in path.nodes.windows(2) {
        let (from, to) = (step[0], step[1]);
        match Move::classify(from, to)? {
            Move::Diagonal => {
                aligned_seq1.push(residue(seq1, from.i)?);
                aligned_seq2.push(residue(seq2, from.j)?);
            }
            Move::Vertical => {
                aligned_seq1.push(residue(seq1, from.i)?);
                aligned_seq2.push(gap_marker);
            }
            Move::Horizontal => {
                aligned_seq1.push(gap_marker);
                aligned_seq2.push(residue(seq2, from.j)?);
            }
        }
    }

    Ok(Alignment {
        aligned_seq1,
        aligned_seq2,
    })
}
