use serde_json::Value;

/// A single datum extracted from a chart input record, ready to be written
/// out as a JavaScript literal.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Num(f64),
    Bool(bool),
}

impl FieldValue {
    /// Render as a JavaScript literal: strings quoted, everything else bare.
    pub fn to_js(&self) -> String {
        match self {
            FieldValue::Str(s) => format!("'{}'", js_escape(s)),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Num(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }

    /// Plain text form, used for row and column labels.
    pub fn to_label(&self) -> String {
        match self {
            FieldValue::Str(s) => s.clone(),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Num(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }
}

/// Capability interface for chart input records. An accessor is a field name;
/// `None` means the record has no such field, which aborts the render that
/// asked for it.
pub trait Record {
    fn field(&self, accessor: &str) -> Option<FieldValue>;
}

/// JSON objects are the stock record type: accessor = object key.
impl Record for Value {
    fn field(&self, accessor: &str) -> Option<FieldValue> {
        match self.as_object()?.get(accessor)? {
            Value::String(s) => Some(FieldValue::Str(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(FieldValue::Int(i))
                } else {
                    n.as_f64().map(FieldValue::Num)
                }
            }
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            _ => None,
        }
    }
}

/// Escape a string for embedding inside a single-quoted JavaScript literal.
pub fn js_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}
