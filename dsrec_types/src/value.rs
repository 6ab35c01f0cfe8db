use derive_more::{Deref, DerefMut, From, Into};
use std::fmt;

/// One field of a record.
///
/// Signed and unsigned integers are distinct variants so that a codec can
/// report what it was given, but they compare equal when they denote the same
/// integer.
///
/// Floats compare by bit pattern, so every value equals its own decoded copy:
/// `NaN == NaN`, and `0.0 != -0.0`.
#[derive(From, Clone, Debug)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Int(slf), Self::Int(oth)) => slf == oth,
            (Self::UInt(slf), Self::UInt(oth)) => slf == oth,
            (Self::Int(i), Self::UInt(u)) | (Self::UInt(u), Self::Int(i)) => {
                u64::try_from(*i).map_or(false, |i| i == *u)
            }
            (Self::Float(slf), Self::Float(oth)) => slf.to_bits() == oth.to_bits(),
            (Self::Bool(slf), Self::Bool(oth)) => slf == oth,
            (Self::Str(slf), Self::Str(oth)) => slf == oth,
            (Self::Bytes(slf), Self::Bytes(oth)) => slf == oth,
            (Self::List(slf), Self::List(oth)) => slf == oth,
            _ => false,
        }
    }
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        ValueType::from(self)
    }
}

/* Literals that are not covered by the derived `From`s. */
macro_rules! impl_from_widening {
    ($variant:ident, $target:ty, $($src:ty),+) => {
        $(
            impl From<$src> for Value {
                fn from(v: $src) -> Self {
                    Value::$variant(<$target>::from(v))
                }
            }
        )+
    };
}
impl_from_widening!(Int, i64, i8, i16, i32);
impl_from_widening!(UInt, u64, u8, u16, u32);
impl_from_widening!(Float, f64, f32);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}
impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ValueType {
    Int,
    UInt,
    Float,
    Bool,
    Str,
    Bytes,
    List,
}
impl From<&Value> for ValueType {
    fn from(v: &Value) -> Self {
        match v {
            Value::Int(_) => ValueType::Int,
            Value::UInt(_) => ValueType::UInt,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Bool,
            Value::Str(_) => ValueType::Str,
            Value::Bytes(_) => ValueType::Bytes,
            Value::List(_) => ValueType::List,
        }
    }
}
impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An ordered, fixed-arity tuple of values. The arity is dictated by the codec list
/// the record is written with.
#[derive(From, Into, Deref, DerefMut, PartialEq, Clone, Default, Debug)]
pub struct Record(Vec<Value>);

impl FromIterator<Value> for Record {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[Value]> for Record {
    fn as_ref(&self) -> &[Value] {
        &self.0
    }
}

impl IntoIterator for Record {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Builds a [`Record`] from heterogeneous literals.
///
/// ```
/// use dsrec_types::{record, value::Value};
///
/// let rec = record![5u8, 3.14, "cat"];
/// assert_eq!(rec[2], Value::Str("cat".into()));
/// ```
#[macro_export]
macro_rules! record {
    ($($v:expr),* $(,)?) => {
        $crate::value::Record::from(vec![$($crate::value::Value::from($v)),*])
    };
}
