//! Phenotype derivation - the observable traits of a genotype.
//!
//! Phenotypes are aggregated by enumerated key rather than by display label,
//! so the frequency table cannot drift with presentation wording.

use serde::{Deserialize, Serialize};

/// How a trait is expressed under the dominance rule.
///
/// `Dominant` sorts first so frequency tables iterate in the conventional
/// order (yellow-round, yellow-wrinkled, green-round, green-wrinkled).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Expression {
    Dominant,
    Recessive,
}

/// Observable traits of a pea: one expression per locus
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Phenotype {
    pub color: Expression,
    pub shape: Expression,
}

impl Phenotype {
    /// Display name of the color trait
    pub fn color_name(&self) -> &'static str {
        match self.color {
            Expression::Dominant => "Yellow",
            Expression::Recessive => "Green",
        }
    }

    /// Display name of the shape trait
    pub fn shape_name(&self) -> &'static str {
        match self.shape {
            Expression::Dominant => "Round",
            Expression::Recessive => "Wrinkled",
        }
    }

    /// Combined display label, e.g. "Yellow Round"
    pub fn label(&self) -> String {
        format!("{} {}", self.color_name(), self.shape_name())
    }
}
