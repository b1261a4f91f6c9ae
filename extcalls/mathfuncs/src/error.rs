use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("arguments must be of type `float` or `int`")]
    NotNumeric,

    #[error("result `{0}` is not a finite number")]
    NonFinite(f64),
}

pub type Result<T> = std::result::Result<T, MathError>;
