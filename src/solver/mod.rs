//! Classification of a two-equation system and Cramer's-rule intersection.

use crate::equation::LinearEquation;

/// Tolerance for treating a determinant or cross term as zero. Exact equality
/// is a known fragility here; small float error must not flip a parallel pair
/// into a wildly scaled "unique" point.
pub const EPSILON: f64 = 1e-9;

/// Soft sanity bound on solution magnitude. Crossing it does not change the
/// classification, it only sets the `oversized` diagnostic.
pub const MAGNITUDE_BOUND: f64 = 1e12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineRelationship {
    UniquePoint { x: f64, y: f64 },
    Parallel,
    Coincident,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemDiagnostics {
    pub determinant: f64,
    /// Cramer numerator for x: `c1·b2 − c2·b1`.
    pub x_numerator: f64,
    /// Cramer numerator for y: `a1·c2 − a2·c1`.
    pub y_numerator: f64,
    /// Unique solution exists but its magnitude exceeds `MAGNITUDE_BOUND`;
    /// the system is nearly singular.
    pub oversized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemReport {
    pub relationship: LineRelationship,
    pub diagnostics: SystemDiagnostics,
}

/// Classify the pair as intersecting, parallel, or coincident. Vertical and
/// horizontal lines are ordinary rows here; no special cases.
pub fn classify(eq1: &LinearEquation, eq2: &LinearEquation) -> LineRelationship {
    solve_system(eq1, eq2).relationship
}

/// `classify` plus the determinant-level diagnostics the rendering layer and
/// the worksheet walkthrough report from.
pub fn solve_system(eq1: &LinearEquation, eq2: &LinearEquation) -> SystemReport {
    let (a1, b1, c1) = (eq1.a(), eq1.b(), eq1.c());
    let (a2, b2, c2) = (eq2.a(), eq2.b(), eq2.c());

    let determinant = a1 * b2 - a2 * b1;
    let x_numerator = c1 * b2 - c2 * b1;
    let y_numerator = a1 * c2 - a2 * c1;

    let relationship = if determinant.abs() > EPSILON {
        LineRelationship::UniquePoint {
            x: x_numerator / determinant,
            y: y_numerator / determinant,
        }
    } else if y_numerator.abs() <= EPSILON && (b1 * c2 - b2 * c1).abs() <= EPSILON {
        // Zero determinant and consistent cross products: the same line twice.
        LineRelationship::Coincident
    } else {
        LineRelationship::Parallel
    };

    let oversized = matches!(
        relationship,
        LineRelationship::UniquePoint { x, y } if x.abs() > MAGNITUDE_BOUND || y.abs() > MAGNITUDE_BOUND
    );

    SystemReport {
        relationship,
        diagnostics: SystemDiagnostics {
            determinant,
            x_numerator,
            y_numerator,
            oversized,
        },
    }
}
