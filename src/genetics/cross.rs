//! The cross engine: gamete enumeration, Punnett grid, and frequency table.
//!
//! Everything here is pure and deterministic. A cross walks a fixed 4x4
//! gamete space, so results are exact theoretical ratios, never samples.

use std::collections::BTreeMap;

use crate::genetics::allele::AllelePair;
use crate::genetics::genotype::{Gamete, Genotype};
use crate::genetics::phenotype::Phenotype;

/// Number of gametes each parent contributes
pub const GAMETES_PER_PARENT: usize = 4;

/// Number of cells in the Punnett grid
pub const GRID_CELLS: usize = GAMETES_PER_PARENT * GAMETES_PER_PARENT;

/// Enumerate the four gametes of a genotype in FOIL order.
///
/// The order (c0 s0, c0 s1, c1 s0, c1 s1) is user-facing: it fixes the
/// row and column order of the Punnett grid and must never change.
pub fn gametes_of(genotype: &Genotype) -> [Gamete; GAMETES_PER_PARENT] {
    let c = [genotype.color.first, genotype.color.second];
    let s = [genotype.shape.first, genotype.shape.second];

    [
        Gamete { color: c[0], shape: s[0] },
        Gamete { color: c[0], shape: s[1] },
        Gamete { color: c[1], shape: s[0] },
        Gamete { color: c[1], shape: s[1] },
    ]
}

/// One cell of the Punnett grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Combined genotype in canonical form (dominant letter first)
    pub genotype: Genotype,
    /// Traits expressed by the combined genotype
    pub phenotype: Phenotype,
}

impl GridCell {
    /// Four-letter canonical label, e.g. "YyRr"
    pub fn label(&self) -> String {
        self.genotype.label()
    }
}

/// Result of crossing two parents.
///
/// Ephemeral by design: a fresh value per invocation, superseded entirely
/// by the next cross.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossResult {
    /// Parent 1 gametes (Punnett grid rows)
    pub p1_gametes: [Gamete; GAMETES_PER_PARENT],
    /// Parent 2 gametes (Punnett grid columns)
    pub p2_gametes: [Gamete; GAMETES_PER_PARENT],
    /// The 16 combined genotypes in row-major generation order
    pub grid: Vec<GridCell>,
    /// Offspring counts per phenotype; counts always sum to 16
    pub frequencies: BTreeMap<Phenotype, u32>,
}

impl CrossResult {
    /// Total offspring count across all phenotypes (always 16)
    pub fn total(&self) -> u32 {
        self.frequencies.values().sum()
    }

    /// Count for a single phenotype (0 if absent from this cross)
    pub fn count(&self, phenotype: Phenotype) -> u32 {
        self.frequencies.get(&phenotype).copied().unwrap_or(0)
    }

    /// Cell at (row, col), row indexing parent 1 gametes
    pub fn cell(&self, row: usize, col: usize) -> &GridCell {
        &self.grid[row * GAMETES_PER_PARENT + col]
    }

    /// Frequency table reduced by its greatest common divisor,
    /// in phenotype order (e.g. the classic 9:3:3:1)
    pub fn ratio(&self) -> Vec<(Phenotype, u32)> {
        let divisor = self
            .frequencies
            .values()
            .copied()
            .fold(0, gcd);

        self.frequencies
            .iter()
            .map(|(&phenotype, &count)| (phenotype, count / divisor.max(1)))
            .collect()
    }

    /// Reduced ratio as a display string, e.g. "9:3:3:1"
    pub fn ratio_label(&self) -> String {
        self.ratio()
            .iter()
            .map(|(_, n)| n.to_string())
            .collect::<Vec<_>>()
            .join(":")
    }
}

/// Cross two parents and return the full Punnett grid plus frequency table.
///
/// Outer loop walks parent 1 gametes, inner loop parent 2 gametes, so the
/// grid is row-major with parent 1 on the rows. Each cell unites one allele
/// per locus from each gamete, canonically ordered.
pub fn cross(parent1: &Genotype, parent2: &Genotype) -> CrossResult {
    let p1_gametes = gametes_of(parent1);
    let p2_gametes = gametes_of(parent2);

    let mut grid = Vec::with_capacity(GRID_CELLS);
    let mut frequencies: BTreeMap<Phenotype, u32> = BTreeMap::new();

    for g1 in &p1_gametes {
        for g2 in &p2_gametes {
            let genotype = Genotype::new(
                AllelePair::unite(g1.color, g2.color),
                AllelePair::unite(g1.shape, g2.shape),
            );
            let phenotype = genotype.phenotype();

            *frequencies.entry(phenotype).or_insert(0) += 1;
            grid.push(GridCell { genotype, phenotype });
        }
    }

    CrossResult {
        p1_gametes,
        p2_gametes,
        grid,
        frequencies,
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::phenotype::Expression;

    fn genotype(color: &str, shape: &str) -> Genotype {
        Genotype::parse(color, shape).unwrap()
    }

    #[test]
    fn test_gamete_enumeration_foil_order() {
        let g = genotype("Yy", "Rr");
        let labels: Vec<String> = gametes_of(&g).iter().map(|g| g.label()).collect();
        assert_eq!(labels, ["YR", "Yr", "yR", "yr"]);
    }

    #[test]
    fn test_homozygous_gametes_repeat() {
        let g = genotype("YY", "rr");
        let labels: Vec<String> = gametes_of(&g).iter().map(|g| g.label()).collect();
        // Homozygous loci still enumerate 4 gametes, with repeats
        assert_eq!(labels, ["Yr", "Yr", "Yr", "Yr"]);
    }

    #[test]
    fn test_classic_dihybrid_ratio() {
        let parent = genotype("Yy", "Rr");
        let result = cross(&parent, &parent);

        let count = |color, shape| result.count(Phenotype { color, shape });
        assert_eq!(count(Expression::Dominant, Expression::Dominant), 9);
        assert_eq!(count(Expression::Dominant, Expression::Recessive), 3);
        assert_eq!(count(Expression::Recessive, Expression::Dominant), 3);
        assert_eq!(count(Expression::Recessive, Expression::Recessive), 1);
        assert_eq!(result.ratio_label(), "9:3:3:1");
    }

    #[test]
    fn test_f1_uniformity() {
        let result = cross(&genotype("YY", "RR"), &genotype("yy", "rr"));

        assert_eq!(result.grid.len(), GRID_CELLS);
        for cell in &result.grid {
            assert_eq!(cell.label(), "YyRr");
        }
        assert_eq!(result.frequencies.len(), 1);
        assert_eq!(result.total(), 16);
    }

    #[test]
    fn test_grid_cells_match_gamete_indices() {
        let result = cross(&genotype("Yy", "Rr"), &genotype("yy", "Rr"));

        for row in 0..GAMETES_PER_PARENT {
            for col in 0..GAMETES_PER_PARENT {
                let cell = result.cell(row, col);
                let expected = Genotype::new(
                    AllelePair::unite(result.p1_gametes[row].color, result.p2_gametes[col].color),
                    AllelePair::unite(result.p1_gametes[row].shape, result.p2_gametes[col].shape),
                );
                assert_eq!(cell.genotype, expected);
            }
        }
    }

    #[test]
    fn test_monohybrid_component_ratio() {
        // Heterozygous color, fixed shape: 12 yellow to 4 green
        let result = cross(&genotype("Yy", "RR"), &genotype("Yy", "RR"));

        let yellow = result.count(Phenotype {
            color: Expression::Dominant,
            shape: Expression::Dominant,
        });
        let green = result.count(Phenotype {
            color: Expression::Recessive,
            shape: Expression::Dominant,
        });
        assert_eq!(yellow, 12);
        assert_eq!(green, 4);
        assert_eq!(result.ratio_label(), "3:1");
    }

    #[test]
    fn test_deterministic_repeat() {
        let p1 = genotype("Yy", "rr");
        let p2 = genotype("yy", "Rr");

        let first = cross(&p1, &p2);
        let second = cross(&p1, &p2);
        assert_eq!(first, second);
    }
}
