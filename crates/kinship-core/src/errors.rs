use kinship_core_types::RequestId;
use thiserror::Error;

/// Result type alias using KinshipError
pub type Result<T> = std::result::Result<T, KinshipError>;

/// Result type alias using the structured ExError
pub type ExResult<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used by the HTTP layer, the CLI and
/// tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,

    // Lookup
    NotFound,
    AlreadyExists,

    // Integration
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// True for outcomes caused by the caller's input rather than the system
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput | ExErrorKind::NotFound | ExErrorKind::AlreadyExists
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a person id or name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for person graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KinshipError {
    // ===== Validation Errors =====
    /// Name missing or blank
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// A person named as their own parent or child
    #[error("{name} cannot be their own parent or child")]
    SelfRelation { name: String },

    /// A relative named as both parent and child of the same person
    #[error("{name} cannot be both a parent and a child of {subject}")]
    ConflictingRelation { name: String, subject: String },

    // ===== Lookup Errors =====
    /// No person with this name
    #[error("Person not found: {name}")]
    PersonNotFound { name: String },

    /// A second person with an existing name
    #[error("A person named {name} already exists")]
    DuplicateName { name: String },

    // ===== Storage Errors =====
    /// The underlying store failed
    #[error("Storage error in {op}: {message}")]
    Storage { op: String, message: String },

    /// A stored document could not be encoded or decoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl KinshipError {
    /// Build a storage error for the given store operation
    pub fn storage(op: impl Into<String>, message: impl Into<String>) -> Self {
        KinshipError::Storage {
            op: op.into(),
            message: message.into(),
        }
    }
}

impl From<KinshipError> for ExError {
    fn from(err: KinshipError) -> Self {
        let message = err.to_string();
        match err {
            KinshipError::InvalidName { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            KinshipError::SelfRelation { name } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(name)
                .with_message(message),
            KinshipError::ConflictingRelation { name, .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_entity_id(name)
                    .with_message(message)
            }
            KinshipError::PersonNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(name)
                .with_message("Person not found"),
            KinshipError::DuplicateName { name } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(name)
                .with_message(message),
            KinshipError::Storage { op, message } => ExError::new(ExErrorKind::Persistence)
                .with_op(op)
                .with_message(message),
            KinshipError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for KinshipError {
    fn from(err: serde_json::Error) -> Self {
        KinshipError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::AlreadyExists, "ERR_ALREADY_EXISTS"),
            (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ExErrorKind::InvalidInput.is_client_error());
        assert!(ExErrorKind::NotFound.is_client_error());
        assert!(!ExErrorKind::Persistence.is_client_error());
        assert!(!ExErrorKind::Internal.is_client_error());
    }

    #[test]
    fn test_display_includes_code_op_and_entity() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("person_delete")
            .with_entity_id("Alice")
            .with_message("Person not found");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_NOT_FOUND]"));
        assert!(rendered.contains("person_delete"));
        assert!(rendered.contains("Alice"));
    }
}
