use std::{collections::BTreeMap, fmt};

use anyhow::{bail, Context};
use itertools::Itertools;
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};
use vecalg::Vector;

/// A loosely typed value of a configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Table(BTreeMap<String, Value>),
}

impl Value {
    /// Returns a human-readable name of the kind of value stored.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Table(_) => "table",
        }
    }

    pub fn as_table(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut BTreeMap<String, Value>> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    /// If this is a list of numbers, returns its length.
    pub fn numeric_len(&self) -> Option<usize> {
        match self {
            Value::List(items) if items.iter().all(|v| matches!(v, Value::Number(_))) => {
                Some(items.len())
            }
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => b.fmt(f),
            Value::Number(n) => n.fmt(f),
            Value::String(s) => write!(f, "{s:?}"),
            Value::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            Value::Table(table) => write!(
                f,
                "{{{}}}",
                table.iter().map(|(k, v)| format!("{k} = {v}")).join(", ")
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// Copies a vector out by index into a list of numbers.
impl<T, const N: usize> From<Vector<T, N>> for Value
where
    T: AsPrimitive<f64>,
{
    fn from(vector: Vector<T, N>) -> Self {
        Value::List(
            vector
                .into_array()
                .into_iter()
                .map(|elem| Value::Number(elem.as_()))
                .collect(),
        )
    }
}

/// Types that can be read out of a [`Value`].
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> anyhow::Result<Self>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> anyhow::Result<Self> {
        Ok(value.clone())
    }
}

/// Strings; numbers are converted to their textual form.
impl FromValue for String {
    fn from_value(value: &Value) -> anyhow::Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => bail!("value is not a string (found {})", other.type_name()),
        }
    }
}

/// Booleans; numbers are truncated to an integer and are `true` if that is non-zero.
impl FromValue for bool {
    fn from_value(value: &Value) -> anyhow::Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Number(n) => Ok(*n as i64 != 0),
            other => bail!(
                "value is neither a number nor a boolean (found {})",
                other.type_name()
            ),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> anyhow::Result<Self> {
        match value {
            Value::Number(n) => Ok(*n),
            other => bail!("value is not a number (found {})", other.type_name()),
        }
    }
}

impl FromValue for Vec<String> {
    fn from_value(value: &Value) -> anyhow::Result<Self> {
        match value {
            Value::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    String::from_value(item).with_context(|| format!("list entry {i}"))
                })
                .collect(),
            other => bail!("value is not a list (found {})", other.type_name()),
        }
    }
}

/// Vectors are read from lists of exactly `N` numbers, copied in by index. Each number is
/// converted to `T` with `as` semantics.
impl<T, const N: usize> FromValue for Vector<T, N>
where
    T: Copy + 'static,
    f64: AsPrimitive<T>,
{
    fn from_value(value: &Value) -> anyhow::Result<Self> {
        let items = match value {
            Value::List(items) => items,
            other => bail!("expected a vector, found {}", other.type_name()),
        };
        if items.len() != N {
            bail!(
                "expected a vector with {} components, found {} values",
                N,
                items.len()
            );
        }

        let mut numbers = Vector::<f64, N>::splat(0.0);
        for (i, item) in items.iter().enumerate() {
            numbers[i] = f64::from_value(item).with_context(|| format!("vector component {i}"))?;
        }
        Ok(numbers.cast())
    }
}

#[cfg(test)]
mod tests {
    use vecalg::{vec2, vec3, Vec3f, Vec3i};

    use super::*;

    fn list(items: &[f64]) -> Value {
        Value::List(items.iter().copied().map(Value::Number).collect())
    }

    #[test]
    fn read_vectors() {
        let v = Vec3f::from_value(&list(&[1.0, 2.5, -3.0])).unwrap();
        assert_eq!(v, [1.0, 2.5, -3.0]);

        let v = Vec3i::from_value(&list(&[1.9, 2.5, -3.5])).unwrap();
        assert_eq!(v, [1, 2, -3]);
    }

    #[test]
    fn read_vector_errors() {
        let err = Vec3f::from_value(&list(&[1.0, 2.0])).unwrap_err();
        assert!(err.to_string().contains("3 components"), "{err}");

        let err = Vec3f::from_value(&Value::Number(1.0)).unwrap_err();
        assert!(err.to_string().contains("found number"), "{err}");

        let mixed = Value::List(vec![Value::Number(1.0), Value::from("a")]);
        assert!(Vector::<f64, 2>::from_value(&mixed).is_err());
    }

    #[test]
    fn read_scalars() {
        assert!(bool::from_value(&Value::Bool(true)).unwrap());
        assert!(bool::from_value(&Value::Number(2.0)).unwrap());
        assert!(!bool::from_value(&Value::Number(0.5)).unwrap());
        assert!(bool::from_value(&Value::from("yes")).is_err());

        assert_eq!(String::from_value(&Value::from("abc")).unwrap(), "abc");
        assert_eq!(String::from_value(&Value::Number(3.0)).unwrap(), "3");
        assert_eq!(f64::from_value(&Value::Number(0.25)).unwrap(), 0.25);

        let names = Value::List(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(Vec::<String>::from_value(&names).unwrap(), ["a", "b"]);
    }

    #[test]
    fn write_vectors() {
        assert_eq!(Value::from(vec3(1, 2, 3)), list(&[1.0, 2.0, 3.0]));
        assert_eq!(Value::from(vec2(0.5f32, 1.5)).numeric_len(), Some(2));
    }

    #[test]
    fn display() {
        let mut table = BTreeMap::new();
        table.insert("pos".to_string(), list(&[1.0, 2.5]));
        table.insert("name".to_string(), Value::from("wand"));
        assert_eq!(
            Value::Table(table).to_string(),
            r#"{name = "wand", pos = [1, 2.5]}"#
        );
    }
}
