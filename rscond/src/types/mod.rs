pub mod cond_error;
pub mod cond_func;
pub mod cond_value;
pub mod cond_value_dyn;

pub use cond_error::{CondError, CondResult};
pub use cond_func::CondFunc;
pub use cond_value::CondValue;
pub use cond_value_dyn::CondValueDyn;
