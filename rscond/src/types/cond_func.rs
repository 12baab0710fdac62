use std::{fmt, rc::Rc};

use crate::CondValue;

pub type CondFuncBody = dyn Fn(&[CondValue]) -> Vec<CondValue>;

/// A callable value.
///
/// Functions with an arity of zero are deferred computations: the invoker
/// runs them to get at the value they stand for. Functions that need
/// arguments are opaque to the evaluator and are passed around untouched.
#[derive(Clone)]
pub struct CondFunc {
    name: String,
    arity: usize,
    body: Rc<CondFuncBody>,
}

impl CondFunc {
    pub fn new<F>(name: &str, arity: usize, body: F) -> CondFunc
    where
        F: Fn(&[CondValue]) -> Vec<CondValue> + 'static,
    {
        CondFunc {
            name: name.to_owned(),
            arity,
            body: Rc::new(body),
        }
    }

    /// A zero argument computation that may produce any number of results.
    pub fn thunk<F>(name: &str, body: F) -> CondFunc
    where
        F: Fn() -> Vec<CondValue> + 'static,
    {
        CondFunc::new(name, 0, move |_| body())
    }

    /// A zero argument computation producing exactly one result.
    pub fn lazy<T, F>(name: &str, body: F) -> CondFunc
    where
        T: Into<CondValue>,
        F: Fn() -> T + 'static,
    {
        CondFunc::new(name, 0, move |_| vec![body().into()])
    }

    pub fn name<'a>(&'a self) -> &'a str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn is_thunk(&self) -> bool {
        self.arity == 0
    }

    pub fn call(&self, args: &[CondValue]) -> Vec<CondValue> {
        (self.body)(args)
    }

    pub fn ptr_eq(&self, other: &CondFunc) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for CondFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}/{}>", self.name, self.arity)
    }
}

impl fmt::Display for CondFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name)
    }
}
