//! Genotypes and gametes.

use serde::{Deserialize, Serialize};

use crate::genetics::allele::{Allele, AllelePair, InvalidGenotype, Locus};
use crate::genetics::phenotype::Phenotype;

/// An organism's allele composition across both loci.
///
/// The loci are independent (no linkage).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genotype {
    pub color: AllelePair,
    pub shape: AllelePair,
}

impl Genotype {
    /// Create a genotype from already-validated pairs
    pub fn new(color: AllelePair, shape: AllelePair) -> Self {
        Self { color, shape }
    }

    /// Parse a genotype from two-character pair strings, e.g. ("Yy", "Rr").
    ///
    /// This is the validating gate: selector input that is not drawn from
    /// the locus alphabets is rejected here, before any computation.
    pub fn parse(color: &str, shape: &str) -> Result<Self, InvalidGenotype> {
        Ok(Self {
            color: AllelePair::parse(Locus::Color, color)?,
            shape: AllelePair::parse(Locus::Shape, shape)?,
        })
    }

    /// Four-letter label, e.g. "YyRr"
    pub fn label(&self) -> String {
        let mut s = self.color.label(Locus::Color);
        s.push_str(&self.shape.label(Locus::Shape));
        s
    }

    /// Observable traits under the dominance rule
    pub fn phenotype(&self) -> Phenotype {
        Phenotype {
            color: self.color.expression(),
            shape: self.shape.expression(),
        }
    }
}

/// A reproductive cell: one allele per locus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gamete {
    pub color: Allele,
    pub shape: Allele,
}

impl Gamete {
    /// Two-letter label, e.g. "YR"
    pub fn label(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.color.to_char(Locus::Color));
        s.push(self.shape.to_char(Locus::Shape));
        s
    }
}
