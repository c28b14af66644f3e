//! Core solver for two-variable linear systems (SPLDV): classification of a
//! pair of lines, exact intersection via Cramer's rule, guided elimination
//! worksheets, and parsing of `a*x + b*y = c` equation text.

pub mod discovery;
pub mod equation;
pub mod error;
pub mod format;
pub mod parser;
pub mod prelude;
pub mod solver;
pub mod ui;
pub mod worksheet;

pub use discovery::{evaluate_guess, GuessFeedback, GUESS_TOLERANCE};
pub use equation::{LineDescriptor, LinearEquation, Variable};
pub use error::{Result, SpldvError};
pub use format::{pretty_equation, solve_summary, worksheet_summary};
pub use parser::parse_equation;
pub use solver::{
    classify, solve_system, LineRelationship, SystemDiagnostics, SystemReport, EPSILON,
    MAGNITUDE_BOUND,
};
pub use worksheet::{
    back_substitute, eliminate, plan_elimination, solve_reduced, EliminationPlan, ReducedEquation,
    Worksheet,
};
