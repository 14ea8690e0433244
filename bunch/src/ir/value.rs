use crate::analysis::format;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A dynamically-typed field value.
///
/// Integers and integral floats are equal and hash the same. NaN is equal to
/// itself so that equality stays reflexive.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    None,
    Boolean(bool),
    Integer(i64),
    Float(#[serde(with = "float_format")] f64),
    String(Arc<str>),
    Tuple(Arc<[Value]>),
}

impl Value {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn to_boolean(&self) -> Option<bool> {
        if let Self::Boolean(boolean) = self {
            Some(*boolean)
        } else {
            None
        }
    }

    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(integer) => Some(*integer),
            Self::Float(float) => float_to_integer(*float),
            _ => None,
        }
    }

    pub fn to_float(&self) -> Option<f64> {
        match self {
            Self::Integer(integer) => Some(*integer as f64),
            Self::Float(float) => Some(*float),
            _ => None,
        }
    }

    pub fn to_str(&self) -> Option<&str> {
        if let Self::String(string) = self {
            Some(string)
        } else {
            None
        }
    }

    pub fn to_tuple(&self) -> Option<&[Value]> {
        if let Self::Tuple(values) = self {
            Some(values)
        } else {
            None
        }
    }

    pub fn repr(&self) -> String {
        format::format_value(self)
    }
}

// Floats in the i64 range without a fractional part.
fn float_to_integer(float: f64) -> Option<i64> {
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

fn compare_integer_and_float(integer: i64, float: f64) -> Option<Ordering> {
    if let Some(other) = float_to_integer(float) {
        return Some(integer.cmp(&other));
    }

    (integer as f64)
        .partial_cmp(&float)
        .map(|ordering| match ordering {
            // Only reachable by floats outside the i64 range.
            Ordering::Equal if float > 0.0 => Ordering::Less,
            Ordering::Equal => Ordering::Greater,
            ordering => ordering,
        })
}

// Formats like JSON have no non-finite numbers, so they are written as
// `{"float": "nan"}`, `{"float": "inf"}` or `{"float": "-inf"}`.
mod float_format {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize, Serialize)]
    #[serde(untagged)]
    enum Float {
        Finite(f64),
        NonFinite(TaggedFloat),
    }

    // An externally tagged newtype only matches a single-entry map, so
    // tuples such as `["nan"]` are left to other variants.
    #[derive(Deserialize, Serialize)]
    enum TaggedFloat {
        #[serde(rename = "float")]
        Float(NonFinite),
    }

    #[derive(Deserialize, Serialize)]
    enum NonFinite {
        #[serde(rename = "nan")]
        Nan,
        #[serde(rename = "inf")]
        Infinity,
        #[serde(rename = "-inf")]
        NegativeInfinity,
    }

    pub fn serialize<S: Serializer>(float: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let float = if float.is_nan() {
            Float::NonFinite(TaggedFloat::Float(NonFinite::Nan))
        } else if *float == f64::INFINITY {
            Float::NonFinite(TaggedFloat::Float(NonFinite::Infinity))
        } else if *float == f64::NEG_INFINITY {
            Float::NonFinite(TaggedFloat::Float(NonFinite::NegativeInfinity))
        } else {
            Float::Finite(*float)
        };

        float.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(match Float::deserialize(deserializer)? {
            Float::Finite(float) => float,
            Float::NonFinite(TaggedFloat::Float(NonFinite::Nan)) => f64::NAN,
            Float::NonFinite(TaggedFloat::Float(NonFinite::Infinity)) => f64::INFINITY,
            Float::NonFinite(TaggedFloat::Float(NonFinite::NegativeInfinity)) => {
                f64::NEG_INFINITY
            }
        })
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Boolean(one), Self::Boolean(other)) => one == other,
            (Self::Integer(one), Self::Integer(other)) => one == other,
            (Self::Float(one), Self::Float(other)) => {
                one == other || one.is_nan() && other.is_nan()
            }
            (Self::Integer(integer), Self::Float(float))
            | (Self::Float(float), Self::Integer(integer)) => {
                float_to_integer(*float) == Some(*integer)
            }
            (Self::String(one), Self::String(other)) => one == other,
            (Self::Tuple(one), Self::Tuple(other)) => one == other,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::None, Self::None) => Some(Ordering::Equal),
            (Self::Boolean(one), Self::Boolean(other)) => one.partial_cmp(other),
            (Self::Integer(one), Self::Integer(other)) => one.partial_cmp(other),
            (Self::Float(one), Self::Float(other)) => {
                if one.is_nan() && other.is_nan() {
                    Some(Ordering::Equal)
                } else {
                    one.partial_cmp(other)
                }
            }
            (Self::Integer(integer), Self::Float(float)) => {
                compare_integer_and_float(*integer, *float)
            }
            (Self::Float(float), Self::Integer(integer)) => {
                compare_integer_and_float(*integer, *float).map(Ordering::reverse)
            }
            (Self::String(one), Self::String(other)) => one.partial_cmp(other),
            (Self::Tuple(one), Self::Tuple(other)) => one.partial_cmp(other),
            _ => None,
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        match self {
            Self::None => 0u8.hash(hasher),
            Self::Boolean(boolean) => {
                1u8.hash(hasher);
                boolean.hash(hasher);
            }
            Self::Integer(integer) => {
                2u8.hash(hasher);
                integer.hash(hasher);
            }
            Self::Float(float) => {
                if let Some(integer) = float_to_integer(*float) {
                    2u8.hash(hasher);
                    integer.hash(hasher);
                } else {
                    let float = if float.is_nan() { f64::NAN } else { *float };

                    3u8.hash(hasher);
                    float.to_bits().hash(hasher);
                }
            }
            Self::String(string) => {
                4u8.hash(hasher);
                string.hash(hasher);
            }
            Self::Tuple(values) => {
                5u8.hash(hasher);
                values.hash(hasher);
            }
        }
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::String(string) => write!(formatter, "{}", string),
            _ => write!(formatter, "{}", self.repr()),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::None
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

impl From<i32> for Value {
    fn from(integer: i32) -> Self {
        Self::Integer(integer.into())
    }
}

impl From<i64> for Value {
    fn from(integer: i64) -> Self {
        Self::Integer(integer)
    }
}

impl From<u32> for Value {
    fn from(integer: u32) -> Self {
        Self::Integer(integer.into())
    }
}

impl From<f32> for Value {
    fn from(float: f32) -> Self {
        Self::Float(float.into())
    }
}

impl From<f64> for Value {
    fn from(float: f64) -> Self {
        Self::Float(float)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::String(string.into())
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Self::String(string.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Tuple(values.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
