use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpldvError>;

#[derive(Debug, Error)]
pub enum SpldvError {
    #[error("invalid equation: coefficients a and b are both zero")]
    InvalidEquation,
    #[error("parse error: {0}")]
    Parse(String),
    #[error("no unique solution: {0}")]
    Singular(String),
}
