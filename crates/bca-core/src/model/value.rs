use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Loosely typed value kept in an extras bag or returned by a chained lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<ArgValue>),
}

impl ArgValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Integers are accepted where a float is expected.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ArgValue]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Converts a JSON value; objects and nulls have no representation and yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(flag) => Some(Self::Bool(*flag)),
            Value::Number(number) => number
                .as_i64()
                .map(Self::Int)
                .or_else(|| number.as_f64().map(Self::Float)),
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Array(items) => Some(Self::List(
                items.iter().filter_map(Self::from_json).collect(),
            )),
            Value::Null | Value::Object(_) => None,
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for ArgValue {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Named values that have no dedicated field, kept in insertion order.
pub type Extras = IndexMap<String, ArgValue>;

/// Uniform read access to a named setting, wherever it lives.
pub trait ArgumentLookup {
    fn lookup(&self, name: &str) -> Option<ArgValue>;

    fn lookup_bool(&self, name: &str) -> Option<bool> {
        self.lookup(name).and_then(|value| value.as_bool())
    }

    fn lookup_i64(&self, name: &str) -> Option<i64> {
        self.lookup(name).and_then(|value| value.as_i64())
    }

    fn lookup_f64(&self, name: &str) -> Option<f64> {
        self.lookup(name).and_then(|value| value.as_f64())
    }

    fn lookup_text(&self, name: &str) -> Option<String> {
        self.lookup(name)
            .and_then(|value| value.as_str().map(ToOwned::to_owned))
    }
}

#[cfg(test)]
mod tests {
    use super::ArgValue;
    use serde_json::json;

    #[test]
    fn json_values_convert_to_typed_variants() {
        assert_eq!(ArgValue::from_json(&json!(true)), Some(ArgValue::Bool(true)));
        assert_eq!(ArgValue::from_json(&json!(3)), Some(ArgValue::Int(3)));
        assert_eq!(ArgValue::from_json(&json!(0.5)), Some(ArgValue::Float(0.5)));
        assert_eq!(
            ArgValue::from_json(&json!(["scat", 2])),
            Some(ArgValue::List(vec![ArgValue::from("scat"), ArgValue::Int(2)]))
        );
        assert_eq!(ArgValue::from_json(&json!({"a": 1})), None);
        assert_eq!(ArgValue::from_json(&json!(null)), None);
    }

    #[test]
    fn integers_are_accepted_as_floats_but_not_the_reverse() {
        assert_eq!(ArgValue::Int(4).as_f64(), Some(4.0));
        assert_eq!(ArgValue::Float(4.0).as_i64(), None);
        assert_eq!(ArgValue::from("x").as_bool(), None);
    }

    #[test]
    fn values_serialize_untagged() {
        let rendered = serde_json::to_string(&ArgValue::List(vec![
            ArgValue::Bool(false),
            ArgValue::Float(1.5),
            ArgValue::from("outp"),
        ]))
        .expect("value should serialize");
        assert_eq!(rendered, r#"[false,1.5,"outp"]"#);
    }
}
