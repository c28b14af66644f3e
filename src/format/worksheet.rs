use crate::equation::Variable;
use crate::worksheet::Worksheet;

use super::equation::{fmt_num, pretty_equation};

/// Render the elimination walkthrough as numbered-step lines for the guided
/// worksheet front end.
pub fn worksheet_summary(ws: &Worksheet) -> Vec<String> {
    let survivor = ws.reduced.variable;
    let eliminated = ws.plan.eliminate;
    let (x, y) = ws.solution();
    vec![
        format!("Equation 1: {}", pretty_equation(&ws.eq1)),
        format!("Equation 2: {}", pretty_equation(&ws.eq2)),
        format!(
            "Eliminate {}: multiply equation 1 by {} and equation 2 by {}, then subtract.",
            var_name(eliminated),
            fmt_num(ws.plan.multiplier1),
            fmt_num(ws.plan.multiplier2),
        ),
        format!(
            "Reduced equation: {}*{} = {}",
            fmt_num(ws.reduced.coefficient),
            var_name(survivor),
            fmt_num(ws.reduced.constant),
        ),
        format!("{} = {}", var_name(survivor), fmt_num(ws.solved)),
        format!(
            "Substitute back: {} = {}",
            var_name(eliminated),
            fmt_num(ws.substituted)
        ),
        format!("Solution: ({}, {})", fmt_num(x), fmt_num(y)),
    ]
}

fn var_name(var: Variable) -> &'static str {
    match var {
        Variable::X => "x",
        Variable::Y => "y",
    }
}
