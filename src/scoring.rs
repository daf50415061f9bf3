use log::debug;

use crate::alphabet::{ResidueClass, AMINO_ACIDS};
use crate::{
    AlignerError, Result, PROTEIN_MATCH, PROTEIN_MISMATCH_BOTH, PROTEIN_MISMATCH_NEITHER,
    PROTEIN_MISMATCH_ONE,
};

/// Substitution scores keyed by how many of the two residues fall in the
/// conditioning class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringParams {
    pub match_score: i32,
    pub both_in_set: i32,
    pub one_in_set: i32,
    pub neither_in_set: i32,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            match_score: PROTEIN_MATCH,
            both_in_set: PROTEIN_MISMATCH_BOTH,
            one_in_set: PROTEIN_MISMATCH_ONE,
            neither_in_set: PROTEIN_MISMATCH_NEITHER,
        }
    }
}

impl ScoringParams {
    fn mismatch(&self, a_in_set: bool, b_in_set: bool) -> i32 {
        match (a_in_set, b_in_set) {
            (true, true) => self.both_in_set,
            (true, false) | (false, true) => self.one_in_set,
            (false, false) => self.neither_in_set,
        }
    }
}

/// Precomputed symmetric substitution table over a byte alphabet.
#[derive(Debug, Clone)]
pub struct ScoringTable {
    alphabet: Vec<u8>,
    index: [Option<u8>; 256],
    scores: Vec<i32>,
}

impl ScoringTable {
    /// Fills every ordered pair of `alphabet` up front, so lookups for
    /// in-alphabet residues never miss.
    pub fn build(alphabet: &[u8], condition_set: &[u8], params: ScoringParams) -> Self {
        let mut symbols = Vec::with_capacity(alphabet.len());
        let mut index = [None; 256];
        for &symbol in alphabet {
            // at most 256 distinct bytes, so every slot fits a u8
            if index[symbol as usize].is_none() {
                index[symbol as usize] = Some(symbols.len() as u8);
                symbols.push(symbol);
            }
        }

        let k = symbols.len();
        let mut scores = vec![0; k * k];
        for (row, &a) in symbols.iter().enumerate() {
            for (col, &b) in symbols.iter().enumerate().skip(row) {
                let score = if a == b {
                    params.match_score
                } else {
                    params.mismatch(condition_set.contains(&a), condition_set.contains(&b))
                };
                scores[row * k + col] = score;
                scores[col * k + row] = score;
            }
        }

        debug!(
            "Built {}x{} scoring table from {} conditioning residues",
            k,
            k,
            condition_set.len()
        );

        Self {
            alphabet: symbols,
            index,
            scores,
        }
    }

    /// Amino-acid table conditioned on `class`.
    pub fn protein(class: ResidueClass, params: ScoringParams) -> Self {
        Self::build(AMINO_ACIDS, class.residues(), params)
    }

    pub fn protein_default() -> Self {
        Self::protein(ResidueClass::Hydrophobic, ScoringParams::default())
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn contains(&self, symbol: char) -> bool {
        u8::try_from(symbol).is_ok_and(|b| self.index[b as usize].is_some())
    }

    fn slot(&self, symbol: u8) -> Result<usize> {
        self.index[symbol as usize]
            .map(usize::from)
            .ok_or(AlignerError::UnknownSymbol {
                symbol: symbol as char,
            })
    }

    pub fn score(&self, a: u8, b: u8) -> Result<i32> {
        let row = self.slot(a)?;
        let col = self.slot(b)?;
        Ok(self.scores[row * self.alphabet.len() + col])
    }

    /// Fails on the first residue outside the alphabet.
    pub fn validate(&self, sequence: &[u8]) -> Result<()> {
        sequence.iter().try_for_each(|&s| self.slot(s).map(|_| ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_symmetric() {
        let table = ScoringTable::protein_default();
        for &a in AMINO_ACIDS {
            for &b in AMINO_ACIDS {
                assert_eq!(table.score(a, b), table.score(b, a));
            }
        }
    }

    #[test]
    fn test_diagonal_is_match_score() {
        let params = ScoringParams {
            match_score: 7,
            ..ScoringParams::default()
        };
        let table = ScoringTable::protein(ResidueClass::Polar, params);
        for &a in AMINO_ACIDS {
            assert_eq!(table.score(a, a), Ok(7));
        }
    }

    #[test]
    fn test_mismatch_categories() {
        let table = ScoringTable::protein_default();
        // A and W are hydrophobic, D and E are not
        assert_eq!(table.score(b'A', b'W'), Ok(1));
        assert_eq!(table.score(b'A', b'D'), Ok(-5));
        assert_eq!(table.score(b'D', b'A'), Ok(-5));
        assert_eq!(table.score(b'D', b'E'), Ok(0));
    }

    #[test]
    fn test_unknown_symbol() {
        let table = ScoringTable::protein_default();
        assert_eq!(
            table.score(b'A', b'B'),
            Err(AlignerError::UnknownSymbol { symbol: 'B' })
        );
        assert_eq!(
            table.score(b'z', b'A'),
            Err(AlignerError::UnknownSymbol { symbol: 'z' })
        );
        assert_eq!(
            table.validate(b"GWX"),
            Err(AlignerError::UnknownSymbol { symbol: 'X' })
        );
        assert!(table.validate(b"GWWPDT").is_ok());
    }

    #[test]
    fn test_duplicate_alphabet_entries_collapse() {
        let table = ScoringTable::build(b"ACCA", b"C", ScoringParams::default());
        assert_eq!(table.alphabet(), b"AC");
        assert_eq!(table.score(b'A', b'C'), Ok(PROTEIN_MISMATCH_ONE));
    }

    #[test]
    fn test_contains() {
        let table = ScoringTable::protein_default();
        assert!(table.contains('W'));
        assert!(!table.contains('_'));
        assert!(!table.contains('é'));
    }

    #[test]
    fn test_full_byte_alphabet_is_fully_defined() {
        let alphabet: Vec<u8> = (0..=u8::MAX).collect();
        let table = ScoringTable::build(&alphabet, b"", ScoringParams::default());
        assert_eq!(table.alphabet().len(), 256);
        assert_eq!(table.score(u8::MAX, u8::MAX), Ok(PROTEIN_MATCH));
        assert_eq!(table.score(0, u8::MAX), Ok(PROTEIN_MISMATCH_NEITHER));
        assert_eq!(table.score(u8::MAX, 0), Ok(PROTEIN_MISMATCH_NEITHER));
        assert!(table.validate(&alphabet).is_ok());
    }
}
