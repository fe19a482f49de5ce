use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    DataObject,
    Collection,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::DataObject => write!(f, "data object"),
            ObjectKind::Collection => write!(f, "collection"),
        }
    }
}

/// Handle to an object in the remote store. The store owns the object; this
/// is only its path and kind as last observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    pub kind: ObjectKind,
    pub path: String,
}

impl ObjectRef {
    pub fn data_object(path: impl Into<String>) -> Self {
        ObjectRef {
            kind: ObjectKind::DataObject,
            path: path.into(),
        }
    }

    pub fn collection(path: impl Into<String>) -> Self {
        ObjectRef {
            kind: ObjectKind::Collection,
            path: path.into(),
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.path)
    }
}

/// An attribute-value-unit triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Avu {
    pub attribute: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Avu {
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Avu {
            attribute: attribute.into(),
            value: value.into(),
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

impl fmt::Display for Avu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "({}, {}, {})", self.attribute, self.value, unit),
            None => write!(f, "({}, {})", self.attribute, self.value),
        }
    }
}
