use log::debug;

use crate::scoring::ScoringTable;
use crate::traceback::Move;
use crate::Result;

/// Grid coordinate: `i` residues of seq1 aligned against `j` residues of seq2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { i: 0, j: 0 };

    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// (i, j) -> (i + 1, j), consumes a seq1 residue only.
    Deletion,
    /// (i, j) -> (i, j + 1), consumes a seq2 residue only.
    Insertion,
    /// (i, j) -> (i + 1, j + 1), aligns one residue from each.
    Substitution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Position,
    pub to: Position,
    pub weight: i32,
    pub kind: EdgeKind,
}

pub(crate) const UNSCORED: i64 = i64::MIN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) best_score: i64,
    pub(crate) predecessors: Vec<Position>,
}

impl Node {
    fn unscored() -> Self {
        Self {
            best_score: UNSCORED,
            predecessors: Vec::new(),
        }
    }

    /// `None` until the graph has been scored.
    pub fn best_score(&self) -> Option<i64> {
        (self.best_score != UNSCORED).then_some(self.best_score)
    }

    /// Every source node whose incoming edge achieves the best score.
    pub fn predecessors(&self) -> &[Position] {
        &self.predecessors
    }
}

/// Dense (m + 1) x (n + 1) alignment grid. Edges are implicit: indels
/// share one weight and substitution weights are stored per cell.
#[derive(Debug, Clone)]
pub struct AlignmentGraph {
    seq1: Vec<u8>,
    seq2: Vec<u8>,
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
    substitution: Vec<i32>,
    indel_weight: i32,
}

impl AlignmentGraph {
    pub fn build(
        seq1: &[u8],
        seq2: &[u8],
        table: &ScoringTable,
        indel_weight: i32,
    ) -> Result<Self> {
        table.validate(seq1)?;
        table.validate(seq2)?;

        let mut substitution = Vec::with_capacity(seq1.len() * seq2.len());
        for &a in seq1 {
            for &b in seq2 {
                substitution.push(table.score(a, b)?);
            }
        }

        let rows = seq1.len() + 1;
        let cols = seq2.len() + 1;
        let graph = Self {
            seq1: seq1.to_vec(),
            seq2: seq2.to_vec(),
            rows,
            cols,
            nodes: vec![Node::unscored(); rows * cols],
            substitution,
            indel_weight,
        };

        debug!(
            "Built alignment graph: {} nodes, {} edges, indel weight {}",
            graph.node_count(),
            graph.edge_count(),
            indel_weight
        );

        Ok(graph)
    }

    pub fn seq1(&self) -> &[u8] {
        &self.seq1
    }

    pub fn seq2(&self) -> &[u8] {
        &self.seq2
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn indel_weight(&self) -> i32 {
        self.indel_weight
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        let (m, n) = (self.seq1.len(), self.seq2.len());
        m * (n + 1) + (m + 1) * n + m * n
    }

    pub fn origin(&self) -> Position {
        Position::ORIGIN
    }

    pub fn terminal(&self) -> Position {
        Position::new(self.seq1.len(), self.seq2.len())
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.i < self.rows && pos.j < self.cols
    }

    /// # Panics
    /// If `pos` lies outside the grid.
    pub fn node(&self, pos: Position) -> &Node {
        &self.nodes[pos.i * self.cols + pos.j]
    }

    pub(crate) fn node_mut(&mut self, pos: Position) -> &mut Node {
        &mut self.nodes[pos.i * self.cols + pos.j]
    }

    /// Positions in scoring order: increasing `i`, then increasing `j`.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |i| (0..self.cols).map(move |j| Position::new(i, j)))
    }

    fn substitution_weight(&self, from: Position) -> i32 {
        self.substitution[from.i * self.seq2.len() + from.j]
    }

    /// The edge `from -> to`, if the grid has one.
    pub fn edge(&self, from: Position, to: Position) -> Option<Edge> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        let kind = match (to.i.checked_sub(from.i)?, to.j.checked_sub(from.j)?) {
            (1, 0) => EdgeKind::Deletion,
            (0, 1) => EdgeKind::Insertion,
            (1, 1) => EdgeKind::Substitution,
            _ => return None,
        };
        let weight = match kind {
            EdgeKind::Substitution => self.substitution_weight(from),
            EdgeKind::Deletion | EdgeKind::Insertion => self.indel_weight,
        };
        Some(Edge {
            from,
            to,
            weight,
            kind,
        })
    }

    /// Incoming edges of `pos`, always in the order deletion, insertion,
    /// substitution.
    pub fn incoming(&self, pos: Position) -> impl Iterator<Item = Edge> + '_ {
        let sources = [
            pos.i.checked_sub(1).map(|i| Position::new(i, pos.j)),
            pos.j.checked_sub(1).map(|j| Position::new(pos.i, j)),
            pos.i
                .checked_sub(1)
                .zip(pos.j.checked_sub(1))
                .map(|(i, j)| Position::new(i, j)),
        ];
        sources
            .into_iter()
            .flatten()
            .filter_map(move |from| self.edge(from, pos))
    }

    pub fn outgoing(&self, pos: Position) -> impl Iterator<Item = Edge> + '_ {
        [
            Position::new(pos.i + 1, pos.j),
            Position::new(pos.i, pos.j + 1),
            Position::new(pos.i + 1, pos.j + 1),
        ]
        .into_iter()
        .filter_map(move |to| self.edge(pos, to))
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.positions().flat_map(move |pos| self.outgoing(pos))
    }

    /// Direction of each best predecessor of `pos`, for drawing traceback
    /// arrows.
    pub fn traceback_moves(&self, pos: Position) -> Result<Vec<Move>> {
        self.node(pos)
            .predecessors()
            .iter()
            .map(|&from| Move::classify(from, pos))
            .collect()
    }
}
