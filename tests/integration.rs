//! Integration tests for the MENDEL cross engine

use std::collections::BTreeMap;

use mendel::genetics::{
    cross, gametes_of, Expression, Genotype, Phenotype, GAMETES_PER_PARENT, GRID_CELLS,
};
use mendel::Config;

fn genotype(color: &str, shape: &str) -> Genotype {
    Genotype::parse(color, shape).expect("valid genotype")
}

/// All 9 genotypes the selector can produce
fn all_genotypes() -> Vec<Genotype> {
    let mut genotypes = Vec::new();
    for color in ["YY", "Yy", "yy"] {
        for shape in ["RR", "Rr", "rr"] {
            genotypes.push(genotype(color, shape));
        }
    }
    genotypes
}

#[test]
fn test_conservation_over_all_parent_pairs() {
    // 81 parent pairs: every cross yields 16 cells and counts summing to 16
    for parent1 in all_genotypes() {
        for parent2 in all_genotypes() {
            let result = cross(&parent1, &parent2);

            assert_eq!(result.grid.len(), GRID_CELLS);
            assert_eq!(result.total(), 16);
        }
    }
}

#[test]
fn test_classic_dihybrid_ratio() {
    let parent = genotype("Yy", "Rr");
    let result = cross(&parent, &parent);

    let expected: BTreeMap<Phenotype, u32> = [
        (Expression::Dominant, Expression::Dominant, 9),
        (Expression::Dominant, Expression::Recessive, 3),
        (Expression::Recessive, Expression::Dominant, 3),
        (Expression::Recessive, Expression::Recessive, 1),
    ]
    .into_iter()
    .map(|(color, shape, count)| (Phenotype { color, shape }, count))
    .collect();

    assert_eq!(result.frequencies, expected);
}

#[test]
fn test_f1_uniformity() {
    // Pure dominant x pure recessive: 16 identical heterozygous offspring
    let result = cross(&genotype("YY", "RR"), &genotype("yy", "rr"));

    for cell in &result.grid {
        assert_eq!(cell.label(), "YyRr");
    }

    let yellow_round = Phenotype {
        color: Expression::Dominant,
        shape: Expression::Dominant,
    };
    assert_eq!(result.frequencies.len(), 1);
    assert_eq!(result.count(yellow_round), 16);
}

#[test]
fn test_symmetry_of_frequencies() {
    // Swapping parents transposes the grid but preserves the statistics
    for parent1 in all_genotypes() {
        for parent2 in all_genotypes() {
            let forward = cross(&parent1, &parent2);
            let backward = cross(&parent2, &parent1);

            assert_eq!(
                forward.frequencies, backward.frequencies,
                "asymmetric frequencies for {} x {}",
                parent1.label(),
                parent2.label()
            );
        }
    }
}

#[test]
fn test_determinism() {
    for parent1 in all_genotypes() {
        for parent2 in all_genotypes() {
            let first = cross(&parent1, &parent2);
            let second = cross(&parent1, &parent2);

            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_canonical_labels_everywhere() {
    // Mixed pairs always read dominant-first: never "yY" or "rR"
    for parent1 in all_genotypes() {
        for parent2 in all_genotypes() {
            let result = cross(&parent1, &parent2);

            for cell in &result.grid {
                let label = cell.label();
                assert!(!label.contains("yY"), "non-canonical label {}", label);
                assert!(!label.contains("rR"), "non-canonical label {}", label);
                assert!(cell.genotype.color.is_canonical());
                assert!(cell.genotype.shape.is_canonical());
            }
        }
    }
}

/// Counts grouped by color expression alone
fn color_marginal(parent1: &Genotype, parent2: &Genotype) -> BTreeMap<Expression, u32> {
    let result = cross(parent1, parent2);
    let mut marginal = BTreeMap::new();
    for (phenotype, count) in &result.frequencies {
        *marginal.entry(phenotype.color).or_insert(0) += count;
    }
    marginal
}

#[test]
fn test_locus_independence() {
    // Changing only the shape pairs must not move the color marginal
    let shapes = ["RR", "Rr", "rr"];

    for color1 in ["YY", "Yy", "yy"] {
        for color2 in ["YY", "Yy", "yy"] {
            let reference =
                color_marginal(&genotype(color1, "RR"), &genotype(color2, "RR"));

            for shape1 in shapes {
                for shape2 in shapes {
                    let marginal =
                        color_marginal(&genotype(color1, shape1), &genotype(color2, shape2));
                    assert_eq!(
                        marginal, reference,
                        "color marginal moved for shapes {} x {}",
                        shape1, shape2
                    );
                }
            }
        }
    }
}

#[test]
fn test_gamete_order_is_stable() {
    let labels: Vec<String> = gametes_of(&genotype("Yy", "Rr"))
        .iter()
        .map(|g| g.label())
        .collect();
    assert_eq!(labels, ["YR", "Yr", "yR", "yr"]);
    assert_eq!(labels.len(), GAMETES_PER_PARENT);
}

#[test]
fn test_grid_follows_generation_order() {
    let result = cross(&genotype("Yy", "Rr"), &genotype("yy", "rr"));

    // Row 0 pairs parent 1's first gamete (YR) with each parent 2 gamete (yr)
    assert_eq!(result.cell(0, 0).label(), "YyRr");
    // Row 2 starts parent 1's third gamete (yR)
    assert_eq!(result.cell(2, 0).label(), "yyRr");
    // Last cell pairs the two final gametes (yr x yr)
    assert_eq!(result.cell(3, 3).label(), "yyrr");
}

#[test]
fn test_invalid_genotypes_rejected() {
    assert!(Genotype::parse("Y", "Rr").is_err());
    assert!(Genotype::parse("YYY", "Rr").is_err());
    assert!(Genotype::parse("YX", "Rr").is_err());
    assert!(Genotype::parse("Yy", "R?").is_err());
    assert!(Genotype::parse("", "").is_err());
    // Alphabets do not cross loci
    assert!(Genotype::parse("RR", "YY").is_err());
}

#[test]
fn test_config_default_parents_cross() {
    // The configured defaults produce the uniform F1 generation
    let config = Config::default();
    let (parent1, parent2) = config.default_parents().expect("default parents valid");

    let result = cross(&parent1, &parent2);
    assert_eq!(result.frequencies.len(), 1);
    assert_eq!(result.ratio_label(), "1");
}
