//! Guided elimination/substitution walkthrough as explicit, caller-owned
//! state. Each step is a pure function over immutable records, threaded by
//! the front end instead of stashed in ambient session storage.

use crate::equation::{LinearEquation, Variable};
use crate::error::{Result, SpldvError};
use crate::solver::{classify, LineRelationship, EPSILON};

/// How to eliminate one variable: scale each equation by the other's
/// coefficient of that variable, then subtract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliminationPlan {
    pub eliminate: Variable,
    pub multiplier1: f64,
    pub multiplier2: f64,
}

/// The single-variable equation `coefficient · variable = constant` left
/// after elimination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedEquation {
    pub variable: Variable,
    pub coefficient: f64,
    pub constant: f64,
}

/// One completed walkthrough: the original system, the elimination plan, the
/// reduced equation, the solved value, and the back-substituted value.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    pub eq1: LinearEquation,
    pub eq2: LinearEquation,
    pub plan: EliminationPlan,
    pub reduced: ReducedEquation,
    pub solved: f64,
    pub substituted: f64,
}

pub fn plan_elimination(
    eq1: &LinearEquation,
    eq2: &LinearEquation,
    eliminate: Variable,
) -> EliminationPlan {
    EliminationPlan {
        eliminate,
        multiplier1: eq2.coefficient(eliminate),
        multiplier2: eq1.coefficient(eliminate),
    }
}

/// Apply the plan: `multiplier1·eq1 − multiplier2·eq2` cancels the chosen
/// variable and leaves a single-variable equation. The surviving coefficient
/// is (up to sign) the system determinant, so it vanishes exactly when the
/// lines are parallel or coincident.
pub fn eliminate(
    eq1: &LinearEquation,
    eq2: &LinearEquation,
    plan: &EliminationPlan,
) -> Result<ReducedEquation> {
    let survivor = plan.eliminate.other();
    let coefficient =
        plan.multiplier1 * eq1.coefficient(survivor) - plan.multiplier2 * eq2.coefficient(survivor);
    let constant = plan.multiplier1 * eq1.c() - plan.multiplier2 * eq2.c();

    if coefficient.abs() <= EPSILON {
        let kind = match classify(eq1, eq2) {
            LineRelationship::Coincident => "coincident lines, infinitely many solutions",
            _ => "parallel lines, no solution",
        };
        return Err(SpldvError::Singular(kind.to_string()));
    }

    Ok(ReducedEquation {
        variable: survivor,
        coefficient,
        constant,
    })
}

pub fn solve_reduced(reduced: &ReducedEquation) -> f64 {
    reduced.constant / reduced.coefficient
}

/// Solve `eq` for the remaining variable given the value of `known`.
/// `None` when `eq` does not mention the remaining variable.
pub fn back_substitute(eq: &LinearEquation, known: Variable, value: f64) -> Option<f64> {
    let target = known.other();
    let coeff = eq.coefficient(target);
    if coeff == 0.0 {
        return None;
    }
    Some((eq.c() - eq.coefficient(known) * value) / coeff)
}

impl Worksheet {
    /// Run every step in order and record the intermediate state. Fails with
    /// `Singular` when the system has no unique solution.
    pub fn build(eq1: LinearEquation, eq2: LinearEquation, target: Variable) -> Result<Self> {
        let plan = plan_elimination(&eq1, &eq2, target);
        let reduced = eliminate(&eq1, &eq2, &plan)?;
        let solved = solve_reduced(&reduced);
        let substituted = back_substitute(&eq1, reduced.variable, solved)
            .or_else(|| back_substitute(&eq2, reduced.variable, solved))
            .ok_or_else(|| {
                SpldvError::Singular("neither equation mentions the eliminated variable".to_string())
            })?;
        Ok(Worksheet {
            eq1,
            eq2,
            plan,
            reduced,
            solved,
            substituted,
        })
    }

    /// The solution as an `(x, y)` pair regardless of elimination order.
    pub fn solution(&self) -> (f64, f64) {
        match self.reduced.variable {
            Variable::X => (self.solved, self.substituted),
            Variable::Y => (self.substituted, self.solved),
        }
    }
}
