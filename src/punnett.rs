//! Text rendering of a cross result for the CLI.

use crate::genetics::{CrossResult, GAMETES_PER_PARENT};

/// Render the Punnett grid as an aligned text table.
///
/// Parent 1 gametes label the rows, parent 2 gametes the columns, matching
/// the generation order of the grid.
pub fn render(result: &CrossResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:>7}", "P1\\P2"));
    for gamete in &result.p2_gametes {
        out.push_str(&format!(" | {:^4}", gamete.label()));
    }
    out.push('\n');

    out.push_str(&"-".repeat(7 + GAMETES_PER_PARENT * 7));
    out.push('\n');

    for (row, gamete) in result.p1_gametes.iter().enumerate() {
        out.push_str(&format!("{:>7}", gamete.label()));
        for col in 0..GAMETES_PER_PARENT {
            out.push_str(&format!(" | {:^4}", result.cell(row, col).label()));
        }
        out.push('\n');
    }

    out
}

/// One-line frequency summary, e.g.
/// "Yellow Round: 9/16 | Yellow Wrinkled: 3/16 | ..."
pub fn summary(result: &CrossResult) -> String {
    let total = result.total();
    result
        .frequencies
        .iter()
        .map(|(phenotype, count)| format!("{}: {}/{}", phenotype.label(), count, total))
        .collect::<Vec<_>>()
        .join(" | ")
}
