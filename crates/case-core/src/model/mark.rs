use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Anotación del runner (skip, xfail, marcas propias...).
///
/// El motor no interpreta su contenido: sólo la transporta hasta el caso al
/// que pertenece o la conserva intacta sobre la función.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub kwargs: IndexMap<String, Value>,
}

impl Mark {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               args: Vec::new(),
               kwargs: IndexMap::new() }
    }

    pub fn skip() -> Self {
        Self::new("skip")
    }

    pub fn skip_because(reason: impl Into<String>) -> Self {
        Self::skip().with_kwarg("reason", Value::String(reason.into()))
    }

    pub fn xfail(reason: impl Into<String>) -> Self {
        Self::new("xfail").with_kwarg("reason", Value::String(reason.into()))
    }

    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn xfail_carries_reason_kwarg() {
        let m = Mark::xfail("This number is negative");
        assert!(m.is_named("xfail"));
        assert_eq!(m.kwargs.get("reason"), Some(&json!("This number is negative")));
    }

    #[test]
    fn empty_fields_are_not_serialized() {
        let v = serde_json::to_value(Mark::skip()).expect("serialize");
        assert_eq!(v, json!({"name": "skip"}));
    }
}
