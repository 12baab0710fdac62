mod resolve;
mod zero;

pub use resolve::resolve;
pub use zero::{is_zero, parse_bool_literal, IsZero};
