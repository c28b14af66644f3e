use crate::equation::LinearEquation;

/// Render the general form, e.g. `2x - y = 7`, `y = 4`, `1.5x = 3`.
pub fn pretty_equation(eq: &LinearEquation) -> String {
    let mut lhs = String::new();
    push_term(&mut lhs, eq.a(), "x");
    push_term(&mut lhs, eq.b(), "y");
    format!("{lhs} = {}", fmt_num(eq.c()))
}

fn push_term(out: &mut String, coeff: f64, var: &str) {
    if coeff == 0.0 {
        return;
    }
    if out.is_empty() {
        if coeff < 0.0 {
            out.push('-');
        }
    } else {
        out.push_str(if coeff < 0.0 { " - " } else { " + " });
    }
    let magnitude = coeff.abs();
    if magnitude != 1.0 {
        out.push_str(&fmt_num(magnitude));
    }
    out.push_str(var);
}

/// Integers without a decimal point, everything else to four places with
/// trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
