use spldv::{
    back_substitute, eliminate, plan_elimination, solve_reduced, LinearEquation, SpldvError,
    Variable, Worksheet,
};

fn eq(a: f64, b: f64, c: f64) -> LinearEquation {
    LinearEquation::new(a, b, c).unwrap_or_else(|e| panic!("invalid equation ({a}, {b}, {c}): {e}"))
}

#[test]
fn walkthrough_matches_cramer_for_both_targets() {
    let first = eq(1.0, -1.0, 2.0);
    let second = eq(2.0, 1.0, 7.0);
    for target in [Variable::X, Variable::Y] {
        let worksheet = Worksheet::build(first, second, target)
            .unwrap_or_else(|e| panic!("build failed for {target:?}: {e}"));
        let (x, y) = worksheet.solution();
        assert!((x - 3.0).abs() < 1e-9, "x for {target:?}: {x}");
        assert!((y - 1.0).abs() < 1e-9, "y for {target:?}: {y}");
    }
}

#[test]
fn individual_steps_expose_intermediate_state() {
    // 2x + 3y = 7, x - 4y = 1
    let first = eq(2.0, 3.0, 7.0);
    let second = eq(1.0, -4.0, 1.0);

    let plan = plan_elimination(&first, &second, Variable::X);
    assert_eq!(plan.multiplier1, 1.0);
    assert_eq!(plan.multiplier2, 2.0);

    let reduced = eliminate(&first, &second, &plan).unwrap_or_else(|e| panic!("eliminate: {e}"));
    assert_eq!(reduced.variable, Variable::Y);
    assert_eq!(reduced.coefficient, 11.0);
    assert_eq!(reduced.constant, 5.0);

    let y = solve_reduced(&reduced);
    assert!((y - 5.0 / 11.0).abs() < 1e-12);

    let x = back_substitute(&first, Variable::Y, y)
        .unwrap_or_else(|| panic!("equation 1 must mention x"));
    assert!((x - 31.0 / 11.0).abs() < 1e-12);
}

#[test]
fn parallel_system_reports_singular() {
    let err = Worksheet::build(eq(1.0, 1.0, 5.0), eq(2.0, 2.0, 3.0), Variable::X)
        .expect_err("parallel lines must not build a worksheet");
    assert!(matches!(err, SpldvError::Singular(_)));
    assert!(err.to_string().contains("parallel"), "{err}");
}

#[test]
fn coincident_system_reports_singular() {
    let err = Worksheet::build(eq(1.0, 1.0, 5.0), eq(2.0, 2.0, 10.0), Variable::Y)
        .expect_err("coincident lines must not build a worksheet");
    assert!(err.to_string().contains("coincident"), "{err}");
}

#[test]
fn eliminating_an_absent_variable_is_singular() {
    // Neither horizontal line mentions x; the plan multiplies both rows by zero
    let err = Worksheet::build(eq(0.0, 1.0, 4.0), eq(0.0, 1.0, 5.0), Variable::X)
        .expect_err("parallel horizontals must not build a worksheet");
    assert!(err.to_string().contains("parallel"), "{err}");
}

#[test]
fn back_substitute_requires_the_variable() {
    // y = 4 has no x term to solve for
    assert_eq!(back_substitute(&eq(0.0, 1.0, 4.0), Variable::Y, 4.0), None);
}

#[test]
fn substitution_falls_back_to_the_second_equation() {
    // Equation 1 is y = 4; x must come from equation 2
    let worksheet = Worksheet::build(eq(0.0, 1.0, 4.0), eq(1.0, 1.0, 7.0), Variable::X)
        .unwrap_or_else(|e| panic!("build: {e}"));
    let (x, y) = worksheet.solution();
    assert!((x - 3.0).abs() < 1e-9, "x = {x}");
    assert!((y - 4.0).abs() < 1e-9, "y = {y}");
}
