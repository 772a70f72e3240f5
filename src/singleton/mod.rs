//! # Singleton Module
//!
//! Lazily resolved, one-per-type services for host-managed objects.
//!
//! Two strategies are provided and deliberately kept apart because they
//! fail differently:
//!
//! - [`RequiredSingleton`]: the instance must be placed by the author. A
//!   missing instance is logged as an error and resolves to `None`.
//! - [`AutoSingleton`]: the instance is created on demand. Resolution never
//!   fails.
//!
//! Both cache their handle in the [`ServiceRegistry`] of a
//! [`crate::HostContext`]. A cached handle whose object the host destroyed
//! counts as absent.

pub mod auto;
pub mod registry;
pub mod required;

pub use auto::*;
pub use registry::*;
pub use required::*;

/// Outcome of an instance activating under a singleton strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The instance is (now) the cached singleton
    Retained,
    /// The instance was a duplicate and its object has been destroyed
    Destroyed,
    /// Nothing was enforced because the host is not playing
    Skipped,
}
