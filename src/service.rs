//! Attribute type service
//!
//! Input validation and identifier assignment in front of the repository.

use crate::app_log;
use crate::error::{VaultError, VaultResult};
use crate::logger::LogLevel;
use crate::models::AttributeType;
use crate::repository::AttributeTypeRepository;
use regex::Regex;
use std::sync::Arc;

pub struct AttributeService {
    repo: Arc<dyn AttributeTypeRepository>,
}

impl AttributeService {
    pub fn new(repo: Arc<dyn AttributeTypeRepository>) -> Self {
        Self { repo }
    }

    pub fn create_attribute_type(&self, name: &str, pattern: &str) -> VaultResult<AttributeType> {
        Self::validate_attribute_type(name, pattern)?;

        if self.name_taken(name)? {
            app_log!(LogLevel::Warn, "Rejected duplicate attribute type name '{}'", name);
            return Err(VaultError::DuplicateName(name.to_string()));
        }

        let attribute_type = AttributeType::new(uuid::Uuid::new_v4().to_string(), name, pattern);
        let created = self.repo.create(attribute_type)?;
        app_log!(LogLevel::Info, "Created attribute type '{}' ({})", created.name, created.id);
        Ok(created)
    }

    pub fn get_attribute_type(&self, id: &str) -> VaultResult<AttributeType> {
        self.repo.get_by_id(id)
    }

    pub fn get_attribute_type_by_name(&self, name: &str) -> VaultResult<AttributeType> {
        self.repo.get_by_name(name)
    }

    pub fn update_attribute_type(
        &self,
        id: &str,
        name: &str,
        pattern: &str,
    ) -> VaultResult<AttributeType> {
        Self::validate_attribute_type(name, pattern)?;

        let existing = self.repo.get_by_id(id)?;

        if existing.name != name && self.name_taken(name)? {
            app_log!(LogLevel::Warn, "Rejected rename of {} to duplicate name '{}'", id, name);
            return Err(VaultError::DuplicateName(name.to_string()));
        }

        let updated = self.repo.update(AttributeType::new(id, name, pattern))?;
        app_log!(LogLevel::Info, "Updated attribute type '{}' ({})", updated.name, updated.id);
        Ok(updated)
    }

    pub fn delete_attribute_type(&self, id: &str) -> VaultResult<()> {
        self.repo.delete(id)?;
        app_log!(LogLevel::Info, "Deleted attribute type {}", id);
        Ok(())
    }

    pub fn list_attribute_types(&self) -> VaultResult<Vec<AttributeType>> {
        self.repo.list()
    }

    /// Check `value` against the pattern of the attribute type named `type_name`
    ///
    /// Matching is an unanchored search; patterns anchor themselves with `^`/`$`.
    pub fn validate_value(&self, type_name: &str, value: &str) -> VaultResult<()> {
        let attribute_type = self.repo.get_by_name(type_name).map_err(|e| {
            if e.is_not_found() {
                VaultError::UnknownAttributeType(type_name.to_string())
            } else {
                e
            }
        })?;

        let regex =
            Regex::new(&attribute_type.pattern).map_err(|e| VaultError::InvalidStoredPattern {
                type_name: type_name.to_string(),
                reason: e.to_string(),
            })?;

        if !regex.is_match(value) {
            return Err(VaultError::PatternMismatch {
                value: value.to_string(),
                type_name: type_name.to_string(),
            });
        }

        Ok(())
    }

    fn name_taken(&self, name: &str) -> VaultResult<bool> {
        match self.repo.get_by_name(name) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn validate_attribute_type(name: &str, pattern: &str) -> VaultResult<()> {
        if name.is_empty() {
            return Err(VaultError::EmptyName);
        }

        if pattern.is_empty() {
            return Err(VaultError::EmptyPattern);
        }

        Regex::new(pattern).map_err(|e| VaultError::InvalidPattern(e.to_string()))?;

        Ok(())
    }
}
