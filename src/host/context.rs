//! # Host Context
//!
//! Top-level owner of the scene graph and the singleton service registry.

use super::{Handle, SceneGraph};
use crate::ServiceRegistry;

/// Shared state an application creates once and passes to the singleton
/// strategies.
///
/// Keeps the object graph and the registry together so a cached service
/// can be checked against the graph it was resolved from.
#[derive(Default)]
pub struct HostContext {
    /// Live host objects
    pub scene: SceneGraph,
    /// Cached singleton handles, one per type
    pub services: ServiceRegistry,
}

impl HostContext {
    /// Creates a context around a playing, empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context around an existing scene.
    pub fn with_scene(scene: SceneGraph) -> Self {
        Self {
            scene,
            services: ServiceRegistry::new(),
        }
    }

    /// Returns the cached service for `T` if its object is still alive.
    pub fn live_service<T: 'static>(&self) -> Option<Handle<T>> {
        self.services
            .get::<T>()
            .and_then(|handle| handle.or_null(&self.scene))
    }

    /// Like [`HostContext::live_service`], but also evicts a cached handle
    /// whose object has been destroyed.
    pub fn resolve_cached<T: 'static>(&mut self) -> Option<Handle<T>> {
        let live = self.live_service::<T>();
        if live.is_none() && self.services.contains::<T>() {
            self.services.unregister::<T>();
        }
        live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inventory;

    #[test]
    fn test_destroyed_service_is_evicted() {
        let mut ctx = HostContext::new();
        let handle = ctx.scene.spawn_with("Inventory", Inventory);
        ctx.services.register(handle.clone());

        assert_eq!(ctx.resolve_cached::<Inventory>(), Some(handle.clone()));

        ctx.scene.destroy(handle.object_id());
        assert!(ctx.live_service::<Inventory>().is_none());
        assert!(ctx.services.contains::<Inventory>());

        assert!(ctx.resolve_cached::<Inventory>().is_none());
        assert!(!ctx.services.contains::<Inventory>());
    }
}
