//! Formatting helpers for rendering equations and solver output.

pub mod equation;
pub mod solve;
pub mod worksheet;

pub use equation::pretty_equation;
pub use solve::solve_summary;
pub use worksheet::worksheet_summary;
