use chrono::{offset::Utc, serde::ts_milliseconds, DateTime, Duration};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DeserializeAs, DurationMilliSeconds, SerializeAs};
use std::{collections::HashMap, fmt, rc::Rc};

#[cfg(feature = "json")]
use serde_json::value::Value;

use crate::{CondError, CondFunc, CondResult, CondValueDyn};

pub type CondTimeStamp = DateTime<Utc>;
pub type CondValueVec = Vec<CondValue>;
pub type CondValueMap = HashMap<String, CondValue>;

/// The dynamic value every operator works over.
///
/// `Null` doubles as the "absent" marker: it is what a computation with no
/// results resolves to and what a missing false branch defaults to.
// Only plain data variants are serializable. Callables, opaque values and
// errors only exist at runtime.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum CondValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    String(String),
    Bytes(Vec<u8>),
    List(CondValueVec),
    Map(CondValueMap),
    Null,
    #[serde(with = "ts_milliseconds")]
    TimeStamp(CondTimeStamp),
    #[serde(
        serialize_with = "DurationMilliSeconds::<i64>::serialize_as",
        deserialize_with = "DurationMilliSeconds::<i64>::deserialize_as"
    )]
    Duration(Duration),
    #[serde(skip_serializing, skip_deserializing)]
    Func(CondFunc),
    #[serde(skip_serializing, skip_deserializing)]
    Dyn(Rc<dyn CondValueDyn>),
    #[serde(skip_serializing, skip_deserializing)]
    Err(CondError),
}

impl CondValue {
    pub fn from_int(val: i64) -> CondValue {
        CondValue::Int(val)
    }

    pub fn from_uint(val: u64) -> CondValue {
        CondValue::UInt(val)
    }

    pub fn from_float(val: f64) -> CondValue {
        CondValue::Float(val)
    }

    pub fn from_bool(val: bool) -> CondValue {
        CondValue::Bool(val)
    }

    pub fn true_() -> CondValue {
        CondValue::Bool(true)
    }

    pub fn false_() -> CondValue {
        CondValue::Bool(false)
    }

    pub fn from_string(val: String) -> CondValue {
        CondValue::String(val)
    }

    pub fn from_str(val: &str) -> CondValue {
        CondValue::String(val.to_owned())
    }

    pub fn from_bytes(val: Vec<u8>) -> CondValue {
        CondValue::Bytes(val)
    }

    pub fn from_list(val: Vec<CondValue>) -> CondValue {
        CondValue::List(val)
    }

    pub fn from_map(val: HashMap<String, CondValue>) -> CondValue {
        CondValue::Map(val)
    }

    pub fn from_null() -> CondValue {
        CondValue::Null
    }

    pub fn from_timestamp(val: DateTime<Utc>) -> CondValue {
        CondValue::TimeStamp(val)
    }

    pub fn from_duration(val: Duration) -> CondValue {
        CondValue::Duration(val)
    }

    pub fn from_func(val: CondFunc) -> CondValue {
        CondValue::Func(val)
    }

    /// Shorthand for a deferred computation with a single result.
    pub fn lazy<T, F>(name: &str, body: F) -> CondValue
    where
        T: Into<CondValue>,
        F: Fn() -> T + 'static,
    {
        CondValue::Func(CondFunc::lazy(name, body))
    }

    pub fn from_dyn(val: Rc<dyn CondValueDyn>) -> CondValue {
        CondValue::Dyn(val)
    }

    pub fn from_err(val: CondError) -> CondValue {
        CondValue::Err(val)
    }

    pub fn value_error(msg: &str) -> CondValue {
        CondError::value(msg).into()
    }

    pub fn runtime_error(msg: &str) -> CondValue {
        CondError::runtime(msg).into()
    }

    pub fn into_result(self) -> CondResult<CondValue> {
        match self {
            CondValue::Err(e) => Err(e),
            _ => Ok(self),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CondValue::Null)
    }

    pub fn is_err(&self) -> bool {
        matches!(self, CondValue::Err(_))
    }

    pub fn is_func(&self) -> bool {
        matches!(self, CondValue::Func(_))
    }

    /// True for callables that take no arguments, the only kind the invoker runs.
    pub fn is_thunk(&self) -> bool {
        match self {
            CondValue::Func(f) => f.is_thunk(),
            _ => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            CondValue::Int(_) => "int",
            CondValue::UInt(_) => "uint",
            CondValue::Float(_) => "float",
            CondValue::Bool(_) => "bool",
            CondValue::String(_) => "string",
            CondValue::Bytes(_) => "bytes",
            CondValue::List(_) => "list",
            CondValue::Map(_) => "map",
            CondValue::Null => "null",
            CondValue::TimeStamp(_) => "timestamp",
            CondValue::Duration(_) => "duration",
            CondValue::Func(_) => "func",
            CondValue::Dyn(_) => "dyn",
            CondValue::Err(_) => "err",
        }
    }
}

impl PartialEq for CondValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CondValue::Int(a), CondValue::Int(b)) => a == b,
            (CondValue::UInt(a), CondValue::UInt(b)) => a == b,
            (CondValue::Float(a), CondValue::Float(b)) => a == b,
            (CondValue::Bool(a), CondValue::Bool(b)) => a == b,
            (CondValue::String(a), CondValue::String(b)) => a == b,
            (CondValue::Bytes(a), CondValue::Bytes(b)) => a == b,
            (CondValue::List(a), CondValue::List(b)) => a == b,
            (CondValue::Map(a), CondValue::Map(b)) => a == b,
            (CondValue::Null, CondValue::Null) => true,
            (CondValue::TimeStamp(a), CondValue::TimeStamp(b)) => a == b,
            (CondValue::Duration(a), CondValue::Duration(b)) => a == b,
            (CondValue::Func(a), CondValue::Func(b)) => a.ptr_eq(b),
            (CondValue::Dyn(a), rhs) => CondValueDyn::eq(a.as_ref(), rhs),
            (lhs, CondValue::Dyn(b)) => CondValueDyn::eq(b.as_ref(), lhs),
            (CondValue::Err(a), CondValue::Err(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for CondValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CondValue::*;

        match self {
            Int(val) => write!(f, "{}", val),
            UInt(val) => write!(f, "{}", val),
            Float(val) => write!(f, "{}", val),
            Bool(val) => write!(f, "{}", val),
            String(val) => write!(f, "{}", val),
            Bytes(val) => write!(f, "{:?}", val),
            List(val) => {
                write!(f, "[")?;
                for (i, v) in val.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Map(val) => {
                let mut keys: Vec<_> = val.keys().collect();
                keys.sort();

                write!(f, "{{")?;
                for (i, k) in keys.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, val[k])?;
                }
                write!(f, "}}")
            }
            Null => write!(f, "null"),
            TimeStamp(val) => write!(f, "{}", val.to_rfc3339()),
            Duration(val) => write!(f, "{}", val),
            Func(val) => write!(f, "{}", val),
            Dyn(val) => write!(f, "{}", val),
            Err(val) => write!(f, "{}", val),
        }
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for CondValue {
            fn from(val: $t) -> CondValue {
                CondValue::from_int(val as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for CondValue {
            fn from(val: $t) -> CondValue {
                CondValue::from_uint(val as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for CondValue {
    fn from(val: f64) -> CondValue {
        CondValue::from_float(val)
    }
}

impl From<f32> for CondValue {
    fn from(val: f32) -> CondValue {
        CondValue::from_float(val as f64)
    }
}

impl From<bool> for CondValue {
    fn from(val: bool) -> CondValue {
        CondValue::from_bool(val)
    }
}

impl From<&str> for CondValue {
    fn from(val: &str) -> CondValue {
        CondValue::from_str(val)
    }
}

impl From<String> for CondValue {
    fn from(val: String) -> CondValue {
        CondValue::from_string(val)
    }
}

impl<T: Into<CondValue>> From<Vec<T>> for CondValue {
    fn from(val: Vec<T>) -> CondValue {
        CondValue::from_list(val.into_iter().map(|x| x.into()).collect())
    }
}

impl<T: Into<CondValue>> From<HashMap<String, T>> for CondValue {
    fn from(val: HashMap<String, T>) -> CondValue {
        CondValue::from_map(val.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<CondValue>> From<Option<T>> for CondValue {
    fn from(val: Option<T>) -> CondValue {
        match val {
            Some(v) => v.into(),
            None => CondValue::from_null(),
        }
    }
}

impl From<DateTime<Utc>> for CondValue {
    fn from(val: DateTime<Utc>) -> CondValue {
        CondValue::from_timestamp(val)
    }
}

impl From<Duration> for CondValue {
    fn from(val: Duration) -> CondValue {
        CondValue::from_duration(val)
    }
}

impl From<CondFunc> for CondValue {
    fn from(val: CondFunc) -> CondValue {
        CondValue::from_func(val)
    }
}

impl From<CondError> for CondValue {
    fn from(val: CondError) -> CondValue {
        CondValue::from_err(val)
    }
}

#[cfg(feature = "json")]
impl From<&Value> for CondValue {
    fn from(value: &Value) -> CondValue {
        match value {
            Value::Number(val) => {
                if let Some(val) = val.as_i64() {
                    return CondValue::from_int(val);
                }

                if let Some(val) = val.as_u64() {
                    return CondValue::from_uint(val);
                }

                CondValue::from_float(val.as_f64().unwrap_or(f64::NAN))
            }
            Value::String(val) => CondValue::from_string(val.clone()),
            Value::Bool(val) => CondValue::from_bool(*val),
            Value::Array(val) => CondValue::from_list(val.iter().map(CondValue::from).collect()),
            Value::Null => CondValue::from_null(),
            Value::Object(val) => CondValue::from_map(
                val.iter()
                    .map(|(k, v)| (k.clone(), CondValue::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(feature = "json")]
impl From<Value> for CondValue {
    fn from(value: Value) -> CondValue {
        CondValue::from(&value)
    }
}
