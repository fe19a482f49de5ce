use crate::object::ObjectRef;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The request never produced a usable answer (connection refused,
    /// timeout, unexpected HTTP status, ...).
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The remote system answered with an error status of its own.
    #[error("Remote error {code}: {message}")]
    Remote { code: i64, message: String },

    #[error("Unexpected response: {message}")]
    Protocol { message: String },
}

impl CatalogError {
    pub fn transport(message: impl Into<String>) -> Self {
        CatalogError::Transport {
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        CatalogError::Protocol {
            message: message.into(),
        }
    }

    /// Whether retrying the same call later could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, CatalogError::Transport { .. })
    }
}

/// Attribute assignment stopped partway through an object's batch.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Error setting AVUs on {object} after {applied} attribute(s), at {attribute:?}: {source}")]
pub struct AssignError {
    pub object: ObjectRef,
    /// Attributes already added before the failure. They are not rolled back.
    pub applied: usize,
    pub attribute: String,
    #[source]
    pub source: CatalogError,
}
