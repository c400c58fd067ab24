pub mod app;
#[cfg(feature = "tauri")]
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod repository;
pub mod service;

pub use app::AttributeApp;
pub use config::AppConfig;
pub use error::{VaultError, VaultResult};
pub use models::AttributeType;
pub use repository::{AttributeTypeRepository, FileAttributeTypeRepository, RepositoryFactory};
pub use service::AttributeService;
