//! Repository factory for creating repository instances
//!
//! This factory provides a centralized way to create repository instances
//! with the appropriate backend based on configuration.

use super::file::FileAttributeTypeRepository;
use super::traits::AttributeTypeRepository;
use crate::config::AppConfig;
use crate::error::VaultResult;
use std::path::PathBuf;
use std::sync::Arc;

/// Repository factory for creating repository instances
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a file-based attribute type repository
    ///
    /// # Arguments
    /// * `store_path` - Path to the store file (e.g., "attribute_types.json")
    ///
    /// # Returns
    /// A shared trait object implementing AttributeTypeRepository
    pub fn create_attribute_type_repository(
        store_path: PathBuf,
    ) -> VaultResult<Arc<dyn AttributeTypeRepository>> {
        Ok(Arc::new(FileAttributeTypeRepository::new(store_path)?))
    }

    /// Create the attribute type repository at the configured location
    pub fn from_config(config: &AppConfig) -> VaultResult<Arc<dyn AttributeTypeRepository>> {
        Self::create_attribute_type_repository(config.attribute_types_path())
    }
}
