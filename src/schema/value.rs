//! Path-tracking accessors over raw JSON objects.

use serde_json::{Map, Value};

use super::SchemaError;

type Result<T> = std::result::Result<T, SchemaError>;

/// A JSON object together with its path from the response root.
pub(crate) struct Obj<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Obj<'a> {
    /// Interpret `value` as an object located at `path`.
    pub fn new(value: &'a Value, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(SchemaError::new(
                display_path(&path),
                format!("expected object, found {}", kind_of(other)),
            )),
        }
    }

    /// Path of a field below this object.
    pub fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.map.keys().map(String::as_str)
    }

    /// Look up a field, treating `null` as absent.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn missing(&self, key: &str) -> SchemaError {
        SchemaError::new(self.field_path(key), "required field is missing")
    }

    fn wrong_type(&self, key: &str, expected: &str, found: &Value) -> SchemaError {
        SchemaError::new(
            self.field_path(key),
            format!("expected {}, found {}", expected, kind_of(found)),
        )
    }

    pub fn req_str(&self, key: &str) -> Result<String> {
        self.opt_str(key)?.ok_or_else(|| self.missing(key))
    }

    pub fn opt_str(&self, key: &str) -> Result<Option<String>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.wrong_type(key, "string", other)),
        }
    }

    /// A string field that some API versions send as a number (ids).
    pub fn req_id(&self, key: &str) -> Result<String> {
        match self.get(key) {
            None => Err(self.missing(key)),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(other) => Err(self.wrong_type(key, "string or number", other)),
        }
    }

    pub fn req_f64(&self, key: &str) -> Result<f64> {
        self.opt_f64(key)?.ok_or_else(|| self.missing(key))
    }

    pub fn opt_f64(&self, key: &str) -> Result<Option<f64>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| SchemaError::new(self.field_path(key), "number out of range")),
            Some(other) => Err(self.wrong_type(key, "number", other)),
        }
    }

    pub fn req_obj(&self, key: &str) -> Result<Obj<'a>> {
        self.opt_obj(key)?.ok_or_else(|| self.missing(key))
    }

    pub fn opt_obj(&self, key: &str) -> Result<Option<Obj<'a>>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => Obj::new(value, self.field_path(key)).map(Some),
        }
    }

    pub fn req_array(&self, key: &str) -> Result<&'a [Value]> {
        match self.get(key) {
            None => Err(self.missing(key)),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(self.wrong_type(key, "array", other)),
        }
    }

    /// An optional array; absent reads as empty.
    pub fn opt_array(&self, key: &str) -> Result<&'a [Value]> {
        match self.get(key) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(self.wrong_type(key, "array", other)),
        }
    }

    /// Elements of an array field as objects, each with an indexed path.
    pub fn objects_in(&self, key: &str, items: &'a [Value]) -> Result<Vec<Obj<'a>>> {
        let base = self.field_path(key);
        items
            .iter()
            .enumerate()
            .map(|(i, item)| Obj::new(item, format!("{}[{}]", base, i)))
            .collect()
    }

    /// Entries of an object-valued map field; absent reads as empty.
    pub fn entries(&self, key: &str) -> Result<Vec<(&'a str, Obj<'a>)>> {
        let Some(map) = self.opt_obj(key)? else {
            return Ok(Vec::new());
        };
        map.map
            .iter()
            .map(|(id, value)| Ok((id.as_str(), Obj::new(value, map.field_path(id))?)))
            .collect()
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
