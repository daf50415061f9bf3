//! Single forward sweep recording, for every node, the best cumulative
//! score and all tied best predecessors.

use log::{debug, trace};

use crate::graph::{AlignmentGraph, Position, UNSCORED};

/// Scores `graph` in place. Rerunning on the same graph yields the same
/// result.
///
/// Nodes are visited by increasing `i` then increasing `j`, so every
/// source of an incoming edge is final before it is read.
pub fn score_graph(graph: &mut AlignmentGraph) {
    let positions: Vec<Position> = graph.positions().collect();

    for pos in positions {
        if pos == Position::ORIGIN {
            let origin = graph.node_mut(pos);
            origin.best_score = 0;
            origin.predecessors.clear();
            continue;
        }

        let mut best_score = UNSCORED;
        let mut best_predecessors = Vec::with_capacity(3);
        for edge in graph.incoming(pos) {
            let source = graph.node(edge.from).best_score;
            if source == UNSCORED {
                continue;
            }
            let candidate = source + i64::from(edge.weight);
            if candidate > best_score {
                best_score = candidate;
                best_predecessors.clear();
                best_predecessors.push(edge.from);
            } else if candidate == best_score {
                // ties are kept, each is a co-optimal route
                best_predecessors.push(edge.from);
            }
        }

        trace!(
            "Node ({}, {}): score {} from {:?}",
            pos.i,
            pos.j,
            best_score,
            best_predecessors
        );

        let node = graph.node_mut(pos);
        node.best_score = best_score;
        node.predecessors = best_predecessors;
    }

    debug!(
        "Scored {} nodes, terminal score {:?}",
        graph.node_count(),
        graph.node(graph.terminal()).best_score()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ScoringParams, ScoringTable};

    fn scored(seq1: &str, seq2: &str, table: &ScoringTable, indel: i32) -> AlignmentGraph {
        let mut graph =
            AlignmentGraph::build(seq1.as_bytes(), seq2.as_bytes(), table, indel).unwrap();
        score_graph(&mut graph);
        graph
    }

    fn terminal_score(graph: &AlignmentGraph) -> i64 {
        graph.node(graph.terminal()).best_score().unwrap()
    }

    #[test]
    fn test_identical_sequences() {
        let graph = scored("AAA", "AAA", &ScoringTable::protein_default(), -2);
        assert_eq!(terminal_score(&graph), 15);
        for k in 1..=3 {
            assert_eq!(
                graph.node(Position::new(k, k)).predecessors(),
                &[Position::new(k - 1, k - 1)]
            );
        }
    }

    #[test]
    fn test_origin_has_no_predecessors() {
        let graph = scored("GW", "WR", &ScoringTable::protein_default(), -2);
        let origin = graph.node(Position::ORIGIN);
        assert_eq!(origin.best_score(), Some(0));
        assert!(origin.predecessors().is_empty());
        assert!(graph
            .positions()
            .filter(|&p| p != Position::ORIGIN)
            .all(|p| !graph.node(p).predecessors().is_empty()));
    }

    #[test]
    fn test_borders_are_pure_indels() {
        let graph = scored("GWW", "WR", &ScoringTable::protein_default(), -3);
        for i in 0..=3 {
            assert_eq!(graph.node(Position::new(i, 0)).best_score(), Some(-3 * i as i64));
        }
        for j in 0..=2 {
            assert_eq!(graph.node(Position::new(0, j)).best_score(), Some(-3 * j as i64));
        }
    }

    #[test]
    fn test_two_indels_beat_bad_mismatch() {
        let params = ScoringParams {
            one_in_set: -5,
            ..ScoringParams::default()
        };
        let table = ScoringTable::protein(crate::alphabet::ResidueClass::Hydrophobic, params);
        // A is hydrophobic, D is not: substitution -5 < 2 * -2
        let graph = scored("A", "D", &table, -2);
        assert_eq!(terminal_score(&graph), -4);
        assert_eq!(
            graph.node(graph.terminal()).predecessors(),
            &[Position::new(0, 1), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_ties_are_kept_in_incoming_order() {
        let graph = scored("AA", "A", &ScoringTable::protein_default(), -2);
        assert_eq!(terminal_score(&graph), 3);
        assert_eq!(
            graph.node(graph.terminal()).predecessors(),
            &[Position::new(1, 1), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_rescoring_is_idempotent() {
        let table = ScoringTable::protein_default();
        let mut graph = scored("GWWPDT", "WRRKHY", &table, -2);
        let first: Vec<_> = graph.positions().map(|p| graph.node(p).clone()).collect();
        score_graph(&mut graph);
        let second: Vec<_> = graph.positions().map(|p| graph.node(p).clone()).collect();
        assert_eq!(first, second);
    }
}
