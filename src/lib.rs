//! # LRS Toolkit
//!
//! Small game-side helpers shared across projects.
//!
//! ## Overview
//!
//! The toolkit is a set of independent leaves, each usable on its own:
//!
//! - **Host**: A minimal host object graph with typed component handles
//! - **Singleton**: Lazily resolved singleton services in two strategies,
//!   one that requires an author-placed instance and one that creates it
//! - **Math**: Range remapping, isometric projection, projectile launch
//!   velocity and hit-direction decomposition
//! - **Animation**: Animator parameter lookup
//! - **Pool**: Object pooling with a fire-and-forget delayed release
//! - **Editor**: Default project folder scaffolding

pub mod animation;
pub mod config;
pub mod editor;
pub mod host;
pub mod math;
pub mod pool;
pub mod singleton;

// Core module re-exports
pub use animation::*;
pub use config::ToolkitConfig;
pub use editor::*;
pub use host::*;
pub use math::*;
pub use pool::*;
pub use singleton::*;

pub use cgmath;

/// Core error type for the toolkit.
#[derive(thiserror::Error, Debug)]
pub enum ToolkitError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A host object is not (or no longer) alive
    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// A required singleton has no instance in the scene
    #[error("An instance of {0} is needed in the scene, but there is none")]
    MissingSingleton(String),

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A pool refused an element
    #[error("Pool release failed: {0}")]
    PoolRelease(String),
}

/// Result type used throughout the toolkit.
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Version information for the toolkit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
