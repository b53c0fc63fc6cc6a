//! Typed values that variables of the dialogue state can take.

mod parse;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::warn;

/// The shared `None` value.
pub static NONE: Value = Value::None;

/// A value for a variable of the network.
///
/// Values are immutable once built and compare structurally. Doubles are
/// compared by bit pattern (with `-0.0` folded into `0.0`) so that values can
/// key hash maps and ordered maps alike.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    None,
    Boolean(bool),
    Double(f64),
    /// Fixed-length numeric vector.
    DoubleArray(Vec<f64>),
    String(String),
    /// Ordered sequence of values, used both as a set and as nested data.
    List(Vec<Value>),
}

impl Value {
    /// Get the `None` value.
    pub fn none() -> Self {
        NONE.clone()
    }

    /// Build a value from its string representation.
    ///
    /// See [`parse`](self) for the grammar: numbers, booleans, `none`,
    /// numeric arrays and bracketed lists are recognised, anything else is
    /// kept as a string.
    pub fn parse(input: &str) -> Self {
        parse::parse_value(input)
    }

    /// Build a value from an optional string, `None` when absent.
    pub fn parse_optional(input: Option<&str>) -> Self {
        input.map(Value::parse).unwrap_or_default()
    }

    /// Check if this is the `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Get the numeric content of a double value.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Get the content of a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Number of elements: characters for strings, items for arrays and
    /// lists, 0 for `None` and 1 otherwise.
    pub fn length(&self) -> usize {
        match self {
            Value::None => 0,
            Value::String(s) => s.chars().count(),
            Value::DoubleArray(ds) => ds.len(),
            Value::List(vs) => vs.len(),
            Value::Boolean(_) | Value::Double(_) => 1,
        }
    }

    /// Get the sub-values of a container value (empty for scalars).
    pub fn sub_values(&self) -> Vec<Value> {
        match self {
            Value::DoubleArray(ds) => ds.iter().map(|d| Value::Double(*d)).collect(),
            Value::List(vs) => vs.clone(),
            _ => Vec::new(),
        }
    }

    /// Check if the value contains another one: list membership, array
    /// membership of a double, or substring for strings.
    pub fn contains(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(vs), _) => vs.contains(other),
            (Value::DoubleArray(ds), Value::Double(d)) => {
                ds.iter().any(|x| canonical(*x).to_bits() == canonical(*d).to_bits())
            }
            (Value::String(s), Value::String(sub)) => s.contains(sub.as_str()),
            _ => false,
        }
    }

    /// Concatenate two values.
    ///
    /// Strings are joined with a single space and `None` is neutral. Any
    /// other pairing is unsupported and yields `None`.
    pub fn concatenate(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Value::String(format!("{} {}", a, b)),
            (Value::None, _) => other.clone(),
            (_, Value::None) => self.clone(),
            _ => {
                warn!(left = %self, right = %other, "Concatenation not supported");
                Value::none()
            }
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::None => 0,
            Value::Boolean(_) => 1,
            Value::Double(_) => 2,
            Value::DoubleArray(_) => 3,
            Value::String(_) => 4,
            Value::List(_) => 5,
        }
    }
}

/// Fold `-0.0` into `0.0` so equal doubles share a bit pattern.
fn canonical(d: f64) -> f64 {
    if d == 0.0 {
        0.0
    } else {
        d
    }
}

fn cmp_doubles(a: f64, b: f64) -> Ordering {
    canonical(a).total_cmp(&canonical(b))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::None, Value::None) => Ordering::Equal,
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Double(a), Value::Double(b)) => cmp_doubles(*a, *b),
            (Value::DoubleArray(a), Value::DoubleArray(b)) => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| cmp_doubles(*x, *y))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Value::None => {}
            Value::Boolean(b) => b.hash(state),
            Value::Double(d) => canonical(*d).to_bits().hash(state),
            Value::DoubleArray(ds) => {
                ds.len().hash(state);
                for d in ds {
                    canonical(*d).to_bits().hash(state);
                }
            }
            Value::String(s) => s.hash(state),
            Value::List(vs) => vs.hash(state),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Double(d) => write!(f, "{}", d),
            Value::DoubleArray(ds) => {
                let items: Vec<String> = ds.iter().map(|d| d.to_string()).collect();
                write!(f, "[{}]", items.join(","))
            }
            Value::String(s) => write!(f, "{}", s),
            Value::List(vs) => {
                let items: Vec<String> = vs.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(","))
            }
        }
    }
}

impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Value::parse(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<Vec<f64>> for Value {
    fn from(ds: Vec<f64>) -> Self {
        Value::DoubleArray(ds)
    }
}

impl From<Vec<Value>> for Value {
    fn from(vs: Vec<Value>) -> Self {
        Value::List(vs)
    }
}

/// String literals go through the value grammar, so `"true"` becomes a
/// boolean and `"0.5"` a double.
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::parse(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::parse(&s)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::none(),
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Double).unwrap_or_default(),
            serde_json::Value::String(s) => Value::parse(s),
            serde_json::Value::Array(items) => {
                let doubles: Option<Vec<f64>> = items.iter().map(|i| i.as_f64()).collect();
                match doubles {
                    Some(ds) if !ds.is_empty() => Value::DoubleArray(ds),
                    _ => Value::List(items.iter().map(Value::from).collect()),
                }
            }
            serde_json::Value::Object(_) => Value::String(json.to_string()),
        }
    }
}
