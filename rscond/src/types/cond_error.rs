use std::{error::Error as StdError, rc::Rc};

use thiserror::Error;

/// Errors that can be carried through the evaluator as data.
///
/// A `CondError` wrapped in `CondValue::Err` is never thrown; the control
/// operators report it and hand it back to the caller as the result.
#[derive(Error, Debug, Clone)]
pub enum CondError {
    #[error("value error: {0}")]
    Value(String),
    #[error("argument error: {0}")]
    Argument(String),
    #[error("invalid op: {0}")]
    InvalidOp(String),
    #[error("runtime error: {0}")]
    Runtime(String),
    #[error("internal error: {0}")]
    Internal(String),
    #[error("{0}")]
    Misc(String),
    #[error("{0}")]
    External(Rc<dyn StdError>),
}

pub type CondResult<T> = Result<T, CondError>;

impl CondError {
    pub fn value(msg: &str) -> CondError {
        CondError::Value(msg.to_owned())
    }

    pub fn argument(msg: &str) -> CondError {
        CondError::Argument(msg.to_owned())
    }

    pub fn invalid_op(msg: &str) -> CondError {
        CondError::InvalidOp(msg.to_owned())
    }

    pub fn runtime(msg: &str) -> CondError {
        CondError::Runtime(msg.to_owned())
    }

    pub fn internal(msg: &str) -> CondError {
        CondError::Internal(msg.to_owned())
    }

    pub fn misc(msg: &str) -> CondError {
        CondError::Misc(msg.to_owned())
    }

    /// Wraps a foreign error so it can travel as a `CondValue`.
    pub fn external<E: StdError + 'static>(err: E) -> CondError {
        CondError::External(Rc::new(err))
    }

    pub fn type_string(&self) -> &'static str {
        use CondError::*;

        match self {
            Value(_) => "VALUE",
            Argument(_) => "ARGUMENT",
            InvalidOp(_) => "INVALID OP",
            Runtime(_) => "RUNTIME",
            Internal(_) => "INTERNAL",
            Misc(_) => "MISC",
            External(_) => "EXTERNAL",
        }
    }
}

impl PartialEq for CondError {
    fn eq(&self, other: &Self) -> bool {
        self.type_string() == other.type_string() && self.to_string() == other.to_string()
    }
}
