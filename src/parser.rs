//! Parser for linear-equation text such as `2*x + 3*y - 6 = 0` or
//! `1/2x - y = 4`. Coefficients are accumulated exactly as rationals and only
//! converted to f64 once the equation is normalized to `a·x + b·y = c`.

use crate::equation::{LinearEquation, Variable};
use crate::error::{Result, SpldvError};
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{alpha1, char, digit1, multispace0};
use nom::combinator::{all_consuming, map, map_opt, opt, recognize};
use nom::error::VerboseError;
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded, separated_pair, tuple};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Num, One, ToPrimitive, Zero};

/// A linear form `x·coeff + y·coeff + constant` built up while parsing one
/// side of the equation.
#[derive(Debug, Clone)]
struct LinearForm {
    x: BigRational,
    y: BigRational,
    constant: BigRational,
}

impl LinearForm {
    fn zero() -> Self {
        Self {
            x: BigRational::zero(),
            y: BigRational::zero(),
            constant: BigRational::zero(),
        }
    }

    fn constant(value: BigRational) -> Self {
        Self {
            constant: value,
            ..Self::zero()
        }
    }

    fn term(var: Variable, coeff: BigRational) -> Self {
        let mut form = Self::zero();
        match var {
            Variable::X => form.x = coeff,
            Variable::Y => form.y = coeff,
        }
        form
    }

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            constant: self.constant + other.constant,
        }
    }

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            constant: self.constant - other.constant,
        }
    }

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            constant: -self.constant,
        }
    }
}

/// Parse one equation into general form. Both `... = 0` and `... = c` shapes
/// are accepted; terms may sit on either side of the `=`.
pub fn parse_equation(input: &str) -> Result<LinearEquation> {
    let (lhs, rhs) = input
        .split_once('=')
        .ok_or_else(|| SpldvError::Parse("equation must contain '='".to_string()))?;
    let LinearForm { x, y, constant } = parse_side(lhs)?.sub(parse_side(rhs)?);
    LinearEquation::new(to_f64(&x)?, to_f64(&y)?, to_f64(&(-constant))?)
}

fn parse_side(input: &str) -> Result<LinearForm> {
    match all_consuming(ws(parse_sum))(input) {
        Ok((_, form)) => Ok(form),
        Err(e) => Err(SpldvError::Parse(format!("{e:?}"))),
    }
}

fn to_f64(value: &BigRational) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| SpldvError::Parse("coefficient does not fit in an f64".to_string()))
}

fn parse_sum(input: &str) -> IResult<&str, LinearForm, VerboseError<&str>> {
    let (rest, init) = parse_term(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_term),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => acc.add(rhs),
            '-' => acc.sub(rhs),
            _ => unreachable!(),
        },
    )(rest)
}

fn parse_term(input: &str) -> IResult<&str, LinearForm, VerboseError<&str>> {
    if let Ok((rest, term)) = preceded(ws(char('-')), parse_term)(input) {
        return Ok((rest, term.neg()));
    }
    alt((parse_scaled_variable, parse_bare_variable, parse_constant))(input)
}

fn parse_scaled_variable(input: &str) -> IResult<&str, LinearForm, VerboseError<&str>> {
    map(
        pair(
            parse_coefficient,
            preceded(opt(ws(char('*'))), parse_variable),
        ),
        |(coeff, var)| LinearForm::term(var, coeff),
    )(input)
}

fn parse_bare_variable(input: &str) -> IResult<&str, LinearForm, VerboseError<&str>> {
    map(parse_variable, |var| {
        LinearForm::term(var, BigRational::one())
    })(input)
}

fn parse_constant(input: &str) -> IResult<&str, LinearForm, VerboseError<&str>> {
    map(parse_coefficient, LinearForm::constant)(input)
}

fn parse_variable(input: &str) -> IResult<&str, Variable, VerboseError<&str>> {
    map_opt(ws(alpha1), |name: &str| match name {
        "x" | "X" => Some(Variable::X),
        "y" | "Y" => Some(Variable::Y),
        _ => None,
    })(input)
}

fn parse_coefficient(input: &str) -> IResult<&str, BigRational, VerboseError<&str>> {
    alt((parse_decimal, parse_fraction, parse_integer))(input)
}

fn parse_fraction(input: &str) -> IResult<&str, BigRational, VerboseError<&str>> {
    map_opt(
        separated_pair(parse_int, ws(char('/')), parse_int),
        |(numer, denom)| {
            if denom.is_zero() {
                None
            } else {
                Some(BigRational::new(numer, denom))
            }
        },
    )(input)
}

fn parse_decimal(input: &str) -> IResult<&str, BigRational, VerboseError<&str>> {
    map_opt(
        ws(recognize(tuple((
            opt(char('-')),
            digit1,
            char('.'),
            digit1,
        )))),
        |s: &str| {
            let (int_part, frac_part) = s.split_once('.')?;
            let digits = format!("{int_part}{frac_part}");
            let numer = BigInt::from_str_radix(&digits, 10).ok()?;
            let denom = num_traits::pow(BigInt::from(10), frac_part.len());
            Some(BigRational::new(numer, denom))
        },
    )(input)
}

fn parse_integer(input: &str) -> IResult<&str, BigRational, VerboseError<&str>> {
    map(parse_int, BigRational::from_integer)(input)
}

fn parse_int(input: &str) -> IResult<&str, BigInt, VerboseError<&str>> {
    map(ws(recognize(pair(opt(char('-')), digit1))), |s: &str| {
        BigInt::from_str_radix(s, 10).unwrap()
    })(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}
