use crate::solver::{LineRelationship, SystemReport};

use super::equation::fmt_num;

/// Render a `SystemReport` into human-readable lines for CLI/demos.
pub fn solve_summary(report: &SystemReport) -> Vec<String> {
    let mut lines = match report.relationship {
        LineRelationship::UniquePoint { x, y } => vec![
            "Unique solution:".to_string(),
            format!("x = {}", fmt_num(x)),
            format!("y = {}", fmt_num(y)),
        ],
        LineRelationship::Parallel => vec!["No solution (parallel lines).".to_string()],
        LineRelationship::Coincident => {
            vec!["Infinitely many solutions (coincident lines).".to_string()]
        }
    };
    lines.push(format!(
        "Determinant: {}",
        fmt_num(report.diagnostics.determinant)
    ));
    if report.diagnostics.oversized {
        lines.push(
            "Warning: solution magnitude exceeds the sanity bound; the system is nearly singular."
                .to_string(),
        );
    }
    lines
}
