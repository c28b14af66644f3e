//! Numeric feedback for the guess-and-check ("discovery learning") front end:
//! evaluate both lines at a guessed x and tell the learner where to look next.

use crate::equation::LinearEquation;
use crate::solver::{classify, LineRelationship};

/// How close the two y values must be for a guess to count as found.
pub const GUESS_TOLERANCE: f64 = 1e-2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuessFeedback {
    /// The two y values agree within `GUESS_TOLERANCE`; `y` is their midpoint.
    Near { x: f64, y: f64 },
    MoveRight { gap: f64 },
    MoveLeft { gap: f64 },
    /// Exactly one line is vertical, which pins the intersection outright.
    VerticalIntersection { x: f64, y: f64 },
    /// Two vertical lines never meet at a guessed x; the pair is either
    /// parallel or coincident.
    BothVertical { relationship: LineRelationship },
}

pub fn evaluate_guess(eq1: &LinearEquation, eq2: &LinearEquation, x: f64) -> GuessFeedback {
    match (eq1.x_intercept_if_vertical(), eq2.x_intercept_if_vertical()) {
        (None, None) => {
            let y1 = sloped_y(eq1, x);
            let y2 = sloped_y(eq2, x);
            let gap = y1 - y2;
            if gap.abs() < GUESS_TOLERANCE {
                GuessFeedback::Near {
                    x,
                    y: (y1 + y2) / 2.0,
                }
            } else if y1 < y2 {
                GuessFeedback::MoveRight { gap: gap.abs() }
            } else {
                GuessFeedback::MoveLeft { gap: gap.abs() }
            }
        }
        (Some(x0), None) => GuessFeedback::VerticalIntersection {
            x: x0,
            y: sloped_y(eq2, x0),
        },
        (None, Some(x0)) => GuessFeedback::VerticalIntersection {
            x: x0,
            y: sloped_y(eq1, x0),
        },
        (Some(_), Some(_)) => GuessFeedback::BothVertical {
            relationship: classify(eq1, eq2),
        },
    }
}

// Only called with b != 0.
fn sloped_y(eq: &LinearEquation, x: f64) -> f64 {
    (eq.c() - eq.a() * x) / eq.b()
}
