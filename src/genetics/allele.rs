//! Loci, alleles, and allele pairs.
//!
//! The two pea loci track seed color (Y/y) and seed shape (R/r). A pair is
//! parsed from a two-character string at the selector boundary; once parsed,
//! a malformed pair is unrepresentable.

use serde::{Deserialize, Serialize};

use crate::genetics::phenotype::Expression;

/// A gene position on the pea genome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locus {
    /// Seed color: Y (yellow, dominant) / y (green, recessive)
    Color,
    /// Seed shape: R (round, dominant) / r (wrinkled, recessive)
    Shape,
}

impl Locus {
    /// Letter written for the dominant allele at this locus
    pub fn dominant_char(&self) -> char {
        match self {
            Locus::Color => 'Y',
            Locus::Shape => 'R',
        }
    }

    /// Letter written for the recessive allele at this locus
    pub fn recessive_char(&self) -> char {
        match self {
            Locus::Color => 'y',
            Locus::Shape => 'r',
        }
    }
}

impl std::fmt::Display for Locus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locus::Color => write!(f, "color"),
            Locus::Shape => write!(f, "shape"),
        }
    }
}

/// One gene copy at a locus.
///
/// `Dominant` sorts before `Recessive`, which is what canonical pair ordering
/// relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Allele {
    Dominant,
    Recessive,
}

impl Allele {
    /// Parse a single allele letter for the given locus
    pub fn from_char(locus: Locus, c: char) -> Option<Self> {
        if c == locus.dominant_char() {
            Some(Allele::Dominant)
        } else if c == locus.recessive_char() {
            Some(Allele::Recessive)
        } else {
            None
        }
    }

    /// Letter written for this allele at the given locus
    pub fn to_char(&self, locus: Locus) -> char {
        match self {
            Allele::Dominant => locus.dominant_char(),
            Allele::Recessive => locus.recessive_char(),
        }
    }
}

/// The two gene copies an organism carries at one locus.
///
/// The stored order is meaningful for gamete enumeration (it fixes the
/// Punnett row/column order), not for expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllelePair {
    pub first: Allele,
    pub second: Allele,
}

impl AllelePair {
    /// Parse a two-character pair like "Yy" for the given locus.
    ///
    /// Rejects anything that is not exactly two letters from the locus
    /// alphabet.
    pub fn parse(locus: Locus, value: &str) -> Result<Self, InvalidGenotype> {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() != 2 {
            return Err(InvalidGenotype::WrongLength {
                locus,
                value: value.to_string(),
            });
        }

        let first = Allele::from_char(locus, chars[0])
            .ok_or(InvalidGenotype::UnknownAllele { locus, found: chars[0] })?;
        let second = Allele::from_char(locus, chars[1])
            .ok_or(InvalidGenotype::UnknownAllele { locus, found: chars[1] })?;

        Ok(Self { first, second })
    }

    /// Unite one allele inherited from each parent into a canonical pair.
    ///
    /// Tie-break rule: dominant before recessive, so a mixed pair always
    /// reads "Yy", never "yY".
    pub fn unite(from_parent1: Allele, from_parent2: Allele) -> Self {
        if from_parent2 < from_parent1 {
            Self {
                first: from_parent2,
                second: from_parent1,
            }
        } else {
            Self {
                first: from_parent1,
                second: from_parent2,
            }
        }
    }

    /// Trait expressed by this pair: dominant if at least one copy is dominant
    pub fn expression(&self) -> Expression {
        if self.first == Allele::Dominant || self.second == Allele::Dominant {
            Expression::Dominant
        } else {
            Expression::Recessive
        }
    }

    /// True if the stored order follows the canonical tie-break rule
    pub fn is_canonical(&self) -> bool {
        self.first <= self.second
    }

    /// Two-letter label for the given locus, e.g. "Yy"
    pub fn label(&self, locus: Locus) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.first.to_char(locus));
        s.push(self.second.to_char(locus));
        s
    }
}

/// Errors raised when an allele pair string is malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGenotype {
    WrongLength { locus: Locus, value: String },
    UnknownAllele { locus: Locus, found: char },
}

impl std::fmt::Display for InvalidGenotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength { locus, value } => {
                write!(
                    f,
                    "{} allele pair must be exactly 2 characters, got {:?}",
                    locus, value
                )
            }
            Self::UnknownAllele { locus, found } => {
                write!(f, "{:?} is not a valid {} allele", found, locus)
            }
        }
    }
}

impl std::error::Error for InvalidGenotype {}
