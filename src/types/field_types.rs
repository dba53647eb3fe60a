use std::collections::HashMap;
use std::hash::BuildHasher;

/// The input type a rule-builder declares for a field. Only used to decide
/// how values are rendered by [`format`](crate::format()).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InputType {
    #[default]
    String,
    Number,
    Boolean,
    Date,
    Time,
    DateTime,
}

impl InputType {
    /// Resolve an HTML-ish input type name (`"text"`, `"datetime-local"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name.trim().to_ascii_lowercase().as_str() {
            "string" | "text" | "textarea" | "select" => InputType::String,
            "number" | "integer" | "float" | "decimal" | "range" => InputType::Number,
            "boolean" | "bool" | "checkbox" | "toggle" => InputType::Boolean,
            "date" => InputType::Date,
            "time" => InputType::Time,
            "datetime" | "datetime-local" | "timestamp" => InputType::DateTime,
            _ => return None,
        };
        Some(ty)
    }
}

/// Per-field input type lookup consulted by the formatter.
///
/// Implemented for [`FieldTypeMap`], [`NoFieldTypes`], a plain
/// `HashMap<String, InputType>` and any `Fn(&str) -> Option<InputType>`.
pub trait FieldTypes {
    fn input_type(&self, field: &str) -> Option<InputType>;
}

/// A lookup that declares no types; every value renders by its own kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFieldTypes;

impl FieldTypes for NoFieldTypes {
    fn input_type(&self, _field: &str) -> Option<InputType> {
        None
    }
}

impl<F> FieldTypes for F
where
    F: Fn(&str) -> Option<InputType>,
{
    fn input_type(&self, field: &str) -> Option<InputType> {
        self(field)
    }
}

/// Field name to [`InputType`] map.
#[derive(Debug, Clone, Default)]
pub struct FieldTypeMap {
    types: HashMap<String, InputType>,
}

impl FieldTypeMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the input type of a field.
    #[must_use]
    pub fn set(mut self, field: &str, input_type: InputType) -> Self {
        self.insert(field, input_type);
        self
    }

    pub fn insert(&mut self, field: &str, input_type: InputType) {
        self.types.insert(field.to_owned(), input_type);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<InputType> {
        self.types.get(field).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FieldTypes for FieldTypeMap {
    fn input_type(&self, field: &str) -> Option<InputType> {
        self.get(field)
    }
}

impl<K: Into<String>> FromIterator<(K, InputType)> for FieldTypeMap {
    fn from_iter<I: IntoIterator<Item = (K, InputType)>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<S: BuildHasher> FieldTypes for HashMap<String, InputType, S> {
    fn input_type(&self, field: &str) -> Option<InputType> {
        self.get(field).copied()
    }
}

impl From<HashMap<String, InputType>> for FieldTypeMap {
    fn from(types: HashMap<String, InputType>) -> Self {
        Self { types }
    }
}
