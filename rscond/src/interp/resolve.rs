use crate::CondValue;

/// Turns a possibly deferred value into a concrete one.
///
/// Zero argument functions are invoked exactly once. No results resolve to
/// `Null`, a single result to itself and several results to a `List` in the
/// order they were produced. Anything else, including functions that expect
/// arguments, comes back unchanged.
pub fn resolve(value: CondValue) -> CondValue {
    match value {
        CondValue::Func(ref func) if func.is_thunk() => {
            let mut outputs = func.call(&[]);

            tracing::trace!(func = func.name(), outputs = outputs.len(), "invoked deferred value");

            match outputs.len() {
                0 => CondValue::Null,
                1 => outputs.remove(0),
                _ => CondValue::List(outputs),
            }
        }
        _ => value,
    }
}
