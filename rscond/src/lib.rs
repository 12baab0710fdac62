//! RsCond provides ternary (`if_`) and coalescing (`or`) operators over
//! dynamically typed values whose concrete type is only known at runtime.
//!
//! Any argument may be a plain value or a deferred computation, a
//! [`CondFunc`] that takes no arguments. Deferred arguments are only run
//! when the operator actually needs them, so the side effects of the
//! branch that is not taken never happen.
//!
//! What counts as false is deliberately narrow:
//!   * `Null` and `false`
//!   * numeric zero
//!   * strings that are empty, parse as a zero float or parse as a false
//!     boolean literal (`"0"`, `"0.0"`, `"f"`, `"false"`, ...)
//!
//! Everything else, including empty lists and maps, is truthy. An error
//! carried as a value short-circuits both operators: it is reported to the
//! context's [`DiagnosticSink`] and returned as the result.
//!
//! The basic example of how to use:
//! ```
//! use rscond::{CondContext, CondValue, MemorySink};
//!
//! let sink = MemorySink::new();
//! let ctx = CondContext::with_sink(sink.clone());
//!
//! let res = ctx.if_(&[0.into(), "yes".into(), "no".into()]);
//! assert_eq!(res, "no".into());
//!
//! // the fallback is never computed when the condition is truthy
//! let res = ctx.or(&[
//!     "set".into(),
//!     CondValue::lazy("expensive", || -> i64 { unreachable!() }),
//! ]);
//! assert_eq!(res, "set".into());
//! assert!(sink.is_empty());
//! ```
mod context;
mod interp;
mod types;

pub use context::{
    coalesce, if_, or, time_call, CondContext, DiagnosticSink, MemorySink, StdoutSink, TimedCall,
    TracingSink,
};
pub use interp::{is_zero, parse_bool_literal, resolve, IsZero};
pub use types::{CondError, CondFunc, CondResult, CondValue, CondValueDyn};

#[cfg(feature = "json")]
pub use serde_json;

#[cfg(test)]
mod tests;
