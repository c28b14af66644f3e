use spldv::{evaluate_guess, GuessFeedback, LineRelationship, LinearEquation};

fn eq(a: f64, b: f64, c: f64) -> LinearEquation {
    LinearEquation::new(a, b, c).unwrap_or_else(|e| panic!("invalid equation ({a}, {b}, {c}): {e}"))
}

// x - y = 2 and 2x + y = 7, intersecting at (3, 1)
fn sample_system() -> (LinearEquation, LinearEquation) {
    (eq(1.0, -1.0, 2.0), eq(2.0, 1.0, 7.0))
}

#[test]
fn guess_at_the_intersection_is_near() {
    let (first, second) = sample_system();
    match evaluate_guess(&first, &second, 3.0) {
        GuessFeedback::Near { x, y } => {
            assert_eq!(x, 3.0);
            assert!((y - 1.0).abs() < 1e-9, "y = {y}");
        }
        other => panic!("expected near feedback, got {other:?}"),
    }
}

#[test]
fn guess_just_off_the_intersection_is_still_near() {
    let (first, second) = sample_system();
    assert!(matches!(
        evaluate_guess(&first, &second, 2.999),
        GuessFeedback::Near { .. }
    ));
}

#[test]
fn guess_left_of_the_intersection_hints_right() {
    let (first, second) = sample_system();
    match evaluate_guess(&first, &second, 0.0) {
        GuessFeedback::MoveRight { gap } => assert!((gap - 9.0).abs() < 1e-9, "gap = {gap}"),
        other => panic!("expected a move-right hint, got {other:?}"),
    }
}

#[test]
fn guess_right_of_the_intersection_hints_left() {
    let (first, second) = sample_system();
    match evaluate_guess(&first, &second, 5.0) {
        GuessFeedback::MoveLeft { gap } => assert!((gap - 6.0).abs() < 1e-9, "gap = {gap}"),
        other => panic!("expected a move-left hint, got {other:?}"),
    }
}

#[test]
fn one_vertical_line_pins_the_intersection() {
    // x = 3 crossed with y = 4; the guess value is irrelevant
    let feedback = evaluate_guess(&eq(1.0, 0.0, 3.0), &eq(0.0, 1.0, 4.0), -7.0);
    assert_eq!(feedback, GuessFeedback::VerticalIntersection { x: 3.0, y: 4.0 });
}

#[test]
fn two_vertical_lines_report_their_relationship() {
    assert_eq!(
        evaluate_guess(&eq(1.0, 0.0, 3.0), &eq(2.0, 0.0, 6.0), 0.0),
        GuessFeedback::BothVertical {
            relationship: LineRelationship::Coincident
        }
    );
    assert_eq!(
        evaluate_guess(&eq(1.0, 0.0, 3.0), &eq(1.0, 0.0, 5.0), 0.0),
        GuessFeedback::BothVertical {
            relationship: LineRelationship::Parallel
        }
    );
}
