//! String-based convenience API for quick experimentation.

pub use crate::equation::{LinearEquation, Variable};
pub use crate::solver::LineRelationship;
pub use crate::ui::{classify_eqs, parse, solve_eqs, worksheet_eqs};
