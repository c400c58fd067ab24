//! Repository Pattern Implementation
//!
//! This module provides abstract interfaces for data access, allowing easy
//! swapping of storage backends.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      AttributeTypeRepository trait      │
//! │  (Abstract interface for data access)   │
//! └──────────────┬──────────────────────────┘
//!                │
//!     ┌──────────▼──────────────────┐
//!     │ FileAttributeTypeRepository │
//!     │                             │
//!     │ - JSON array on disk        │
//!     │ - In-memory map + RwLock    │
//!     └─────────────────────────────┘
//! ```

pub mod factory;
pub mod file;
pub mod traits;

// Re-export main types
pub use factory::RepositoryFactory;
pub use file::FileAttributeTypeRepository;
pub use traits::AttributeTypeRepository;
