//! String-based convenience API for quick usage and demos.

use crate::equation::{LinearEquation, Variable};
use crate::error::Result;
use crate::format::{solve_summary, worksheet_summary};
use crate::parser::parse_equation;
use crate::solver::{classify as classify_system, solve_system, LineRelationship};
use crate::worksheet::Worksheet;

pub fn parse(input: &str) -> Result<LinearEquation> {
    parse_equation(input)
}

pub fn classify_eqs(first: &str, second: &str) -> Result<LineRelationship> {
    Ok(classify_system(
        &parse_equation(first)?,
        &parse_equation(second)?,
    ))
}

pub fn solve_eqs(first: &str, second: &str) -> Result<Vec<String>> {
    let report = solve_system(&parse_equation(first)?, &parse_equation(second)?);
    Ok(solve_summary(&report))
}

pub fn worksheet_eqs(first: &str, second: &str, eliminate: Variable) -> Result<Vec<String>> {
    let worksheet = Worksheet::build(parse_equation(first)?, parse_equation(second)?, eliminate)?;
    Ok(worksheet_summary(&worksheet))
}
