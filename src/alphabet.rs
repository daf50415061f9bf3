//! Amino-acid residues and the overlapping classes used to derive
//! substitution scores.

pub const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

pub const HYDROPHOBIC: &[u8] = b"ACFGHIKLMTVWY";
pub const AROMATIC: &[u8] = b"FHWY";
pub const ALIPHATIC: &[u8] = b"ILV";
pub const TINY: &[u8] = b"ACGS";
pub const SMALL: &[u8] = b"ACDGNPSTV";
pub const POLAR: &[u8] = b"CDEHKNQRSTWY";
pub const CHARGED: &[u8] = b"DEHKR";
pub const CHARGED_POSITIVE: &[u8] = b"HKR";
pub const CHARGED_NEGATIVE: &[u8] = b"DE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidueClass {
    Hydrophobic,
    Aromatic,
    Aliphatic,
    Tiny,
    Small,
    Polar,
    Charged,
    ChargedPositive,
    ChargedNegative,
}

impl ResidueClass {
    pub const ALL: [ResidueClass; 9] = [
        ResidueClass::Hydrophobic,
        ResidueClass::Aromatic,
        ResidueClass::Aliphatic,
        ResidueClass::Tiny,
        ResidueClass::Small,
        ResidueClass::Polar,
        ResidueClass::Charged,
        ResidueClass::ChargedPositive,
        ResidueClass::ChargedNegative,
    ];

    pub fn residues(self) -> &'static [u8] {
        match self {
            ResidueClass::Hydrophobic => HYDROPHOBIC,
            ResidueClass::Aromatic => AROMATIC,
            ResidueClass::Aliphatic => ALIPHATIC,
            ResidueClass::Tiny => TINY,
            ResidueClass::Small => SMALL,
            ResidueClass::Polar => POLAR,
            ResidueClass::Charged => CHARGED,
            ResidueClass::ChargedPositive => CHARGED_POSITIVE,
            ResidueClass::ChargedNegative => CHARGED_NEGATIVE,
        }
    }

    pub fn contains(self, residue: u8) -> bool {
        self.residues().contains(&residue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_subsets_of_alphabet() {
        for class in ResidueClass::ALL {
            for residue in class.residues() {
                assert!(
                    AMINO_ACIDS.contains(residue),
                    "{:?} has stray residue {}",
                    class,
                    *residue as char
                );
            }
        }
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let mut seen = AMINO_ACIDS.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), AMINO_ACIDS.len());
    }

    #[test]
    fn test_charge_classes_partition_charged() {
        for &residue in CHARGED {
            assert_ne!(
                ResidueClass::ChargedPositive.contains(residue),
                ResidueClass::ChargedNegative.contains(residue)
            );
        }
    }
}
