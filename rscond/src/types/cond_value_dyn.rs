use std::{any::Any, fmt};

use crate::CondValue;

/// Hook for caller defined values that the evaluator should carry around
/// without knowing their shape.
pub trait CondValueDyn: fmt::Debug + fmt::Display {
    fn as_type(&self) -> CondValue;
    fn eq(&self, rhs: &CondValue) -> bool;
    fn any_ref<'a>(&'a self) -> &'a dyn Any;

    // Opaque values are truthy unless they say otherwise, eg. a wrapper
    // around a counter may want zero to read as false.
    fn is_zero(&self) -> bool {
        false
    }
}
