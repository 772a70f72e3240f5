//! # Service Registry
//!
//! Type-keyed storage for singleton handles.

use crate::Handle;
use log::debug;
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Holds at most one handle per component type.
///
/// # Examples
///
/// ```
/// use lrs_toolkit::{SceneGraph, ServiceRegistry};
///
/// struct Score(u32);
///
/// let mut scene = SceneGraph::new();
/// let mut services = ServiceRegistry::new();
///
/// let score = scene.spawn_with("Score", Score(0));
/// services.register(score.clone());
/// assert_eq!(services.get::<Score>(), Some(score));
///
/// services.unregister::<Score>();
/// assert!(services.get::<Score>().is_none());
/// ```
#[derive(Default)]
pub struct ServiceRegistry {
    /// Each value is a `Handle<T>` keyed by `TypeId::of::<T>()`
    services: HashMap<TypeId, Box<dyn Any>>,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caches `handle` as the service for `T`, returning the previous one.
    pub fn register<T: 'static>(&mut self, handle: Handle<T>) -> Option<Handle<T>> {
        debug!(
            "Registering {} (object {})",
            std::any::type_name::<T>(),
            handle.object_id()
        );
        self.services
            .insert(TypeId::of::<T>(), Box::new(handle))
            .and_then(|previous| previous.downcast::<Handle<T>>().ok())
            .map(|previous| *previous)
    }

    /// Removes and returns the service for `T`.
    pub fn unregister<T: 'static>(&mut self) -> Option<Handle<T>> {
        self.services
            .remove(&TypeId::of::<T>())
            .and_then(|handle| handle.downcast::<Handle<T>>().ok())
            .map(|handle| *handle)
    }

    /// Returns the cached service for `T`, whether or not it is still alive.
    pub fn get<T: 'static>(&self) -> Option<Handle<T>> {
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|handle| handle.downcast_ref::<Handle<T>>())
            .cloned()
    }

    /// Whether a handle is cached for `T`.
    pub fn contains<T: 'static>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<T>())
    }

    /// Number of cached services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no service is cached.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Drops every cached handle.
    pub fn clear(&mut self) {
        self.services.clear();
    }
}
