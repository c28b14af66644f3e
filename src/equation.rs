//! General-form linear equation `a·x + b·y = c` and per-line queries.

use std::fmt;

use crate::error::{Result, SpldvError};

/// One of the two unknowns of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    X,
    Y,
}

impl Variable {
    pub fn other(self) -> Variable {
        match self {
            Variable::X => Variable::Y,
            Variable::Y => Variable::X,
        }
    }
}

/// A line in general form `a·x + b·y = c`. Invariant: a and b are not both
/// zero, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEquation {
    a: f64,
    b: f64,
    c: f64,
}

/// Shape of the line as the plotting layer needs it: either a slope/intercept
/// pair or a vertical `x = const`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineDescriptor {
    Sloped { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

impl LinearEquation {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if a == 0.0 && b == 0.0 {
            return Err(SpldvError::InvalidEquation);
        }
        Ok(Self { a, b, c })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn coefficient(&self, var: Variable) -> f64 {
        match var {
            Variable::X => self.a,
            Variable::Y => self.b,
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.b == 0.0
    }

    pub fn is_horizontal(&self) -> bool {
        self.a == 0.0
    }

    /// y at the given x, or `None` for a vertical line where y is undefined.
    /// Never substitutes a NaN/infinity sentinel for the missing value.
    pub fn evaluate_y(&self, x: f64) -> Option<f64> {
        if self.b == 0.0 {
            None
        } else {
            Some((self.c - self.a * x) / self.b)
        }
    }

    /// `c/a` for a vertical line, `None` otherwise. The construction invariant
    /// guarantees a != 0 whenever b == 0.
    pub fn x_intercept_if_vertical(&self) -> Option<f64> {
        if self.b == 0.0 {
            Some(self.c / self.a)
        } else {
            None
        }
    }

    /// Residual membership test: `|a·x + b·y − c| <= tolerance`.
    pub fn contains(&self, x: f64, y: f64, tolerance: f64) -> bool {
        (self.a * x + self.b * y - self.c).abs() <= tolerance
    }

    pub fn descriptor(&self) -> LineDescriptor {
        if self.b == 0.0 {
            LineDescriptor::Vertical { x: self.c / self.a }
        } else {
            LineDescriptor::Sloped {
                slope: -self.a / self.b,
                intercept: self.c / self.b,
            }
        }
    }

    /// Evenly spaced `(x, y)` points over `[x_min, x_max]` for plotting.
    /// `None` for a vertical line; callers plot those from the descriptor.
    pub fn sample(&self, x_min: f64, x_max: f64, samples: usize) -> Option<Vec<(f64, f64)>> {
        if self.b == 0.0 {
            return None;
        }
        if samples == 0 {
            return Some(Vec::new());
        }
        let step = if samples == 1 {
            0.0
        } else {
            (x_max - x_min) / (samples - 1) as f64
        };
        Some(
            (0..samples)
                .map(|i| {
                    let x = x_min + step * i as f64;
                    (x, (self.c - self.a * x) / self.b)
                })
                .collect(),
        )
    }
}

impl fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty_equation(self))
    }
}
