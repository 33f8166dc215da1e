#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SumError {
    #[error("event must be a JSON object, got {kind}")]
    InvalidEvent { kind: &'static str },
    #[error("invalid number literal {literal}")]
    InvalidNumber { literal: String },
    #[error("cannot add {left} and {right}")]
    UnsupportedOperands {
        left: &'static str,
        right: &'static str,
    },
    #[error("integer {value} is too large to add to a float")]
    IntegerTooLarge { value: String },
}
