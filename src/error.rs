use thiserror::Error;

/// Central error type for the Config Vault backend
#[derive(Error, Debug)]
pub enum VaultError {
    // ============================================================================
    // Attribute Type Errors
    // ============================================================================
    #[error("Attribute type with ID {0} not found")]
    AttributeTypeNotFound(String),

    #[error("Attribute type with name {0} not found")]
    AttributeTypeNameNotFound(String),

    #[error("Attribute type with ID {0} already exists")]
    AttributeTypeExists(String),

    #[error("Attribute type with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Unknown attribute type: {0}")]
    UnknownAttributeType(String),

    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Attribute type name cannot be empty")]
    EmptyName,

    #[error("Attribute type pattern cannot be empty")]
    EmptyPattern,

    #[error("Invalid regex pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid regex pattern in attribute type '{type_name}': {reason}")]
    InvalidStoredPattern { type_name: String, reason: String },

    #[error("Value '{value}' does not match pattern for attribute type '{type_name}'")]
    PatternMismatch { value: String, type_name: String },

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Failed to save to storage: {0}")]
    StorageSaveFailed(String),

    #[error("Failed to load from storage: {0}")]
    StorageLoadFailed(String),

    #[error("Failed to create directory: {0}")]
    DirectoryCreationFailed(String),

    // ============================================================================
    // Generic/System Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lock error")]
    LockError,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl VaultError {
    /// True for the "record is absent" family of errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            VaultError::AttributeTypeNotFound(_)
                | VaultError::AttributeTypeNameNotFound(_)
                | VaultError::UnknownAttributeType(_)
        )
    }
}

// Implement conversion from PoisonError for RwLock guards
impl<T> From<std::sync::PoisonError<T>> for VaultError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        VaultError::LockError
    }
}

// Implement conversion to String for host commands
impl From<VaultError> for String {
    fn from(error: VaultError) -> Self {
        error.to_string()
    }
}

// Helper type alias for Results
pub type VaultResult<T> = Result<T, VaultError>;
