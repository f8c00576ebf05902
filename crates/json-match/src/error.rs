use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Unsupported types for {operator} operator")]
    TypeMismatch { operator: &'static str },
}
