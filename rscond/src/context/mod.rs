use std::rc::Rc;

mod diagnostics;
mod timing;

use crate::{
    interp::{resolve, IsZero},
    CondError, CondFunc, CondValue,
};
pub use diagnostics::{DiagnosticSink, MemorySink, StdoutSink, TracingSink};
pub use timing::TimedCall;

/// The CondContext is the entry point for evaluating conditional and
/// coalescing expressions. It owns the sink that receives the lines the
/// operators print as a side effect; everything else about a call is
/// determined by its arguments.
#[derive(Clone)]
pub struct CondContext {
    sink: Rc<dyn DiagnosticSink>,
}

// How a resolved condition steers an operator.
enum Verdict {
    Truthy(CondValue),
    Falsy,
    Failed(CondValue),
}

impl CondContext {
    /// Constructs a context that reports to standard output.
    pub fn new() -> CondContext {
        CondContext::with_sink(StdoutSink)
    }

    pub fn with_sink<S: DiagnosticSink + 'static>(sink: S) -> CondContext {
        CondContext {
            sink: Rc::new(sink),
        }
    }

    /// `cond ? on_true : on_false` over a variable argument list.
    ///
    /// With only a condition the resolved condition is returned. A missing
    /// false branch reads as `Null`, and arguments past the third are
    /// ignored. If the condition resolves to an error the error is reported
    /// and returned without touching either branch.
    ///
    /// # Panics
    /// Panics when `args` is empty.
    pub fn if_(&self, args: &[CondValue]) -> CondValue {
        assert!(!args.is_empty(), "if_ called without a condition");

        let condition = resolve(args[0].clone());
        if args.len() == 1 {
            return condition;
        }

        let on_false = args.get(2).cloned().unwrap_or(CondValue::Null);
        self.branch(condition, args[1].clone(), on_false)
    }

    pub fn ternary(&self, cond: CondValue, on_true: CondValue, on_false: CondValue) -> CondValue {
        self.branch(resolve(cond), on_true, on_false)
    }

    /// Two argument form of [`CondContext::ternary`], falls back to `Null`.
    pub fn when(&self, cond: CondValue, on_true: CondValue) -> CondValue {
        self.ternary(cond, on_true, CondValue::Null)
    }

    /// `cond || fallback` over a variable argument list. Only the first two
    /// arguments take part.
    ///
    /// # Panics
    /// Panics when `args` is empty.
    pub fn or(&self, args: &[CondValue]) -> CondValue {
        assert!(!args.is_empty(), "or called without a condition");

        let condition = resolve(args[0].clone());
        if args.len() == 1 {
            return condition;
        }

        self.fallback(condition, args[1].clone())
    }

    /// The resolved condition when it is truthy, otherwise the resolved
    /// fallback. The fallback is never resolved for a truthy condition.
    pub fn or_else(&self, cond: CondValue, fallback: CondValue) -> CondValue {
        self.fallback(resolve(cond), fallback)
    }

    /// Chains [`CondContext::or_else`] across `args`: returns the first
    /// truthy value, the first error, or failing both the resolved last
    /// argument. Arguments after the deciding one are never resolved.
    pub fn coalesce(&self, args: &[CondValue]) -> CondValue {
        let (last, rest) = match args.split_last() {
            Some(split) => split,
            None => return CondValue::Null,
        };

        for arg in rest.iter() {
            match self.judge(resolve(arg.clone())) {
                Verdict::Truthy(val) | Verdict::Failed(val) => return val,
                Verdict::Falsy => {}
            }
        }

        resolve(last.clone())
    }

    /// Runs `func` through the invoker, reports how long it took and
    /// returns the report line.
    pub fn time_call(&self, func: &CondFunc) -> String {
        self.time_call_report(func).line()
    }

    pub fn time_call_report(&self, func: &CondFunc) -> TimedCall {
        let timed = TimedCall::run(func);

        self.sink.emit(timed.line().trim_end());
        timed
    }

    fn branch(&self, condition: CondValue, on_true: CondValue, on_false: CondValue) -> CondValue {
        match self.judge(condition) {
            Verdict::Truthy(_) => {
                tracing::debug!("taking true branch");
                resolve(on_true)
            }
            Verdict::Falsy => {
                tracing::debug!("taking false branch");
                resolve(on_false)
            }
            Verdict::Failed(err) => err,
        }
    }

    fn fallback(&self, condition: CondValue, fallback: CondValue) -> CondValue {
        match self.judge(condition) {
            Verdict::Truthy(val) | Verdict::Failed(val) => val,
            Verdict::Falsy => resolve(fallback),
        }
    }

    // A value carries exactly one variant, so at most one arm applies.
    fn judge(&self, condition: CondValue) -> Verdict {
        let falsy = match &condition {
            CondValue::Null => true,
            CondValue::Bool(b) => !*b,
            CondValue::Err(err) => {
                self.report(err);
                return Verdict::Failed(condition.clone());
            }
            val => val.is_zero(),
        };

        if falsy {
            Verdict::Falsy
        } else {
            Verdict::Truthy(condition)
        }
    }

    fn report(&self, err: &CondError) {
        tracing::debug!(kind = err.type_string(), "condition resolved to an error");
        self.sink.emit(&err.to_string());
    }
}

impl Default for CondContext {
    fn default() -> Self {
        CondContext::new()
    }
}

/// [`CondContext::if_`] on a context that reports to standard output.
pub fn if_(args: &[CondValue]) -> CondValue {
    CondContext::new().if_(args)
}

/// [`CondContext::or`] on a context that reports to standard output.
pub fn or(args: &[CondValue]) -> CondValue {
    CondContext::new().or(args)
}

pub fn coalesce(args: &[CondValue]) -> CondValue {
    CondContext::new().coalesce(args)
}

pub fn time_call(func: &CondFunc) -> String {
    CondContext::new().time_call(func)
}
