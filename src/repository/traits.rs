//! Repository trait definitions
//!
//! These traits define the abstract interfaces for data access operations.
//! Different implementations can provide different storage backends.

use crate::error::VaultResult;
use crate::models::AttributeType;

/// Repository for attribute types
///
/// Lookups by id fail with `AttributeTypeNotFound`; lookups by name fail with
/// `AttributeTypeNameNotFound`. Implementations are shared across threads.
pub trait AttributeTypeRepository: Send + Sync {
    /// Insert a new attribute type, failing if its id is already taken
    fn create(&self, attribute_type: AttributeType) -> VaultResult<AttributeType>;

    fn get_by_id(&self, id: &str) -> VaultResult<AttributeType>;

    fn get_by_name(&self, name: &str) -> VaultResult<AttributeType>;

    fn list(&self) -> VaultResult<Vec<AttributeType>>;

    /// Replace an existing attribute type wholesale
    fn update(&self, attribute_type: AttributeType) -> VaultResult<AttributeType>;

    fn delete(&self, id: &str) -> VaultResult<()>;

    /// Check if an attribute type exists for an id
    fn has_attribute_type(&self, id: &str) -> VaultResult<bool> {
        match self.get_by_id(id) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Count stored attribute types
    fn count_attribute_types(&self) -> VaultResult<usize> {
        Ok(self.list()?.len())
    }
}
