use indexmap::IndexMap;

/// A decoded tree value, the only input type the renderer accepts.
///
/// Obtain one from any `serde::Serialize` type through the crate-level
/// entry points, or convert a `serde_json::Value` directly:
///
/// ```
/// use serde_json::json;
/// use yamlhtml::Value;
///
/// let tree = Value::from(json!({"name": "soda", "price": 10.23}));
/// assert!(matches!(tree, Value::Map(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    /// String-keyed mapping. Insertion order is preserved in storage but
    /// keys are always rendered in ascending byte order.
    Map(IndexMap<String, Value>),
}

/// Numeric leaf, keeping integers apart from floats so the rendered text
/// matches the lexical form the document was decoded from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Normalized float used for threshold-style policy decisions.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::PosInt(u) => *u as f64,
            Number::NegInt(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// NaN and infinities have no textual form; the renderer skips them.
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Float(f) => f.is_finite(),
            _ => true,
        }
    }

    fn from_json(n: &serde_json::Number) -> Self {
        if let Some(u) = n.as_u64() {
            return Number::PosInt(u);
        }
        if let Some(i) = n.as_i64() {
            return Number::NegInt(i);
        }
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::PosInt(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value < 0 {
            Number::NegInt(value)
        } else {
            Number::PosInt(value as u64)
        }
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::PosInt(value as u64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::from(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(Number::from_json(&n)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from(value))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[rstest::rstest]
    fn test_from_json_value() {
        let tree = Value::from(json!({
            "active": true,
            "count": 3,
            "ratio": -0.5,
            "tags": ["a", null]
        }));

        let Value::Map(map) = tree else {
            panic!("expected a map");
        };
        assert_eq!(map["active"], Value::Bool(true));
        assert_eq!(map["count"], Value::Number(Number::PosInt(3)));
        assert_eq!(map["ratio"], Value::Number(Number::Float(-0.5)));
        assert_eq!(
            map["tags"],
            Value::Array(vec![Value::String("a".to_string()), Value::Null])
        );
    }

    #[rstest::rstest]
    fn test_number_conversions() {
        assert_eq!(Number::from(7u64), Number::PosInt(7));
        assert_eq!(Number::from(7i64), Number::PosInt(7));
        assert_eq!(Number::from(-7i64), Number::NegInt(-7));
        assert_eq!(Number::from(1.5), Number::Float(1.5));
    }

    #[rstest::rstest]
    fn test_number_as_f64() {
        assert_eq!(Number::PosInt(10).as_f64(), 10.0);
        assert_eq!(Number::NegInt(-2).as_f64(), -2.0);
        assert_eq!(Number::Float(10.23).as_f64(), 10.23);
    }

    #[rstest::rstest]
    fn test_number_is_finite() {
        assert!(Number::PosInt(u64::MAX).is_finite());
        assert!(Number::Float(1e300).is_finite());
        assert!(!Number::Float(f64::NAN).is_finite());
        assert!(!Number::Float(f64::INFINITY).is_finite());
    }
}
