use serde::{Deserialize, Serialize};

/// A named, user-defined validation rule expressed as a regular expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeType {
    pub id: String,
    pub name: String,
    pub pattern: String,
}

impl AttributeType {
    pub fn new(id: impl Into<String>, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}
