use std::fmt;

use crate::AlignmentOutcome;

/// Plain-text listing of the co-optimal alignments of one run.
pub struct AlignmentReport<'a> {
    outcome: &'a AlignmentOutcome,
}

impl<'a> AlignmentReport<'a> {
    pub fn new(outcome: &'a AlignmentOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for AlignmentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.outcome.path_count;
        let plural = if count == 1 { "" } else { "s" };
        write!(f, "{} best path{} found", count, plural)?;
        if self.outcome.is_truncated() {
            write!(f, " (showing first {})", self.outcome.alignments.len())?;
        }
        writeln!(f, ":")?;
        writeln!(f)?;

        for alignment in &self.outcome.alignments {
            writeln!(f, "{}", alignment.aligned_seq1)?;
            writeln!(f, "{}", alignment.aligned_seq2)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Aligner, AlignmentOutcome, Sequence};

    fn align(aligner: &Aligner, seq1: &str, seq2: &str) -> AlignmentOutcome {
        let seq1: Sequence = seq1.parse().unwrap();
        let seq2: Sequence = seq2.parse().unwrap();
        aligner.align(&seq1, &seq2).unwrap()
    }

    #[test]
    fn test_single_path_report() {
        let aligner = Aligner::protein().unwrap();
        let outcome = align(&aligner, "AAA", "AAA");
        assert_eq!(
            outcome.report().to_string(),
            "1 best path found:\n\nAAA\nAAA\n\n"
        );
    }

    #[test]
    fn test_plural_report() {
        let aligner = Aligner::protein().unwrap();
        let outcome = align(&aligner, "AA", "A");
        assert_eq!(
            outcome.report().to_string(),
            "2 best paths found:\n\nAA\nA_\n\nAA\n_A\n\n"
        );
    }

    #[test]
    fn test_truncated_report() {
        let aligner = Aligner::protein().unwrap().with_max_paths(1).unwrap();
        let outcome = align(&aligner, "AA", "A");
        assert_eq!(
            outcome.report().to_string(),
            "2 best paths found (showing first 1):\n\nAA\nA_\n\n"
        );
    }
}
