use crate::app_log;
use crate::config::AppConfig;
use crate::error::VaultResult;
use crate::logger::LogLevel;
use crate::models::AttributeType;
use crate::repository::{AttributeTypeRepository, RepositoryFactory};
use crate::service::AttributeService;
use std::sync::Arc;

/// Operations exposed to the desktop host
pub struct AttributeApp {
    attribute_service: AttributeService,
}

impl AttributeApp {
    /// Wire the file repository and service for `config`
    pub fn startup(config: &AppConfig) -> VaultResult<Self> {
        let repo = RepositoryFactory::from_config(config)?;
        app_log!(
            LogLevel::Info,
            "Attribute type store ready at {}",
            config.attribute_types_path().display()
        );
        Ok(Self::with_repository(repo))
    }

    pub fn with_repository(repo: Arc<dyn AttributeTypeRepository>) -> Self {
        Self {
            attribute_service: AttributeService::new(repo),
        }
    }

    pub fn create_attribute_type(&self, name: &str, pattern: &str) -> VaultResult<AttributeType> {
        self.attribute_service.create_attribute_type(name, pattern)
    }

    pub fn get_attribute_type(&self, id: &str) -> VaultResult<AttributeType> {
        self.attribute_service.get_attribute_type(id)
    }

    pub fn update_attribute_type(
        &self,
        id: &str,
        name: &str,
        pattern: &str,
    ) -> VaultResult<AttributeType> {
        self.attribute_service.update_attribute_type(id, name, pattern)
    }

    pub fn delete_attribute_type(&self, id: &str) -> VaultResult<()> {
        self.attribute_service.delete_attribute_type(id)
    }

    pub fn list_attribute_types(&self) -> VaultResult<Vec<AttributeType>> {
        self.attribute_service.list_attribute_types()
    }

    pub fn validate_attribute_value(&self, type_name: &str, value: &str) -> VaultResult<()> {
        self.attribute_service.validate_value(type_name, value)
    }
}
