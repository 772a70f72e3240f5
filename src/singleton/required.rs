//! # Required Singleton
//!
//! Singletons that must be placed in the scene by the author.

use super::Activation;
use crate::{short_type_name, Handle, HostContext, ToolkitError, ToolkitResult};
use log::{debug, error};
use std::marker::PhantomData;

/// Resolution strategy for an author-placed singleton of type `T`.
///
/// A missing instance is a broken precondition: [`RequiredSingleton::instance`]
/// logs an error and returns `None` rather than creating one.
///
/// # Examples
///
/// ```
/// use lrs_toolkit::{Activation, HostContext, RequiredSingleton};
///
/// struct GameManager;
///
/// let mut ctx = HostContext::new();
/// let manager = RequiredSingleton::<GameManager>::new();
/// assert!(manager.instance(&mut ctx).is_none());
///
/// let placed = ctx.scene.spawn_with("GameManager", GameManager);
/// assert_eq!(manager.activate(&mut ctx, &placed), Activation::Retained);
/// assert_eq!(manager.instance(&mut ctx), Some(placed));
/// ```
pub struct RequiredSingleton<T> {
    persist_across_scenes: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Default for RequiredSingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> RequiredSingleton<T> {
    /// Creates a strategy whose instance is destroyed on scene loads.
    pub fn new() -> Self {
        Self {
            persist_across_scenes: false,
            _marker: PhantomData,
        }
    }

    /// Creates a strategy whose retained instance survives scene loads.
    pub fn persistent() -> Self {
        Self::new().with_persistence(true)
    }

    /// Sets whether the retained instance survives scene loads.
    pub fn with_persistence(mut self, persist_across_scenes: bool) -> Self {
        self.persist_across_scenes = persist_across_scenes;
        self
    }

    /// Whether the retained instance survives scene loads.
    pub fn persists_across_scenes(&self) -> bool {
        self.persist_across_scenes
    }

    /// Resolves the singleton.
    ///
    /// Returns the cached instance, or caches the first instance found in
    /// the scene. Logs an error and returns `None` when there is none.
    pub fn instance(&self, ctx: &mut HostContext) -> Option<Handle<T>> {
        if let Some(handle) = ctx.resolve_cached::<T>() {
            return Some(handle);
        }

        match ctx.scene.find_first::<T>() {
            Some(handle) => {
                debug!("Resolved {} from scene", short_type_name::<T>());
                ctx.services.register(handle.clone());
                Some(handle)
            }
            None => {
                error!(
                    "An instance of {} is needed in the scene, but there is none.",
                    std::any::type_name::<T>()
                );
                None
            }
        }
    }

    /// Resolves the singleton, turning a missing instance into an error.
    pub fn require(&self, ctx: &mut HostContext) -> ToolkitResult<Handle<T>> {
        self.instance(ctx).ok_or_else(|| {
            ToolkitError::MissingSingleton(std::any::type_name::<T>().to_string())
        })
    }

    /// Whether a live instance is cached.
    pub fn is_initialized(&self, ctx: &HostContext) -> bool {
        ctx.live_service::<T>().is_some()
    }

    /// Called when an instance becomes active in the scene.
    ///
    /// Whichever instance resolves first wins; any other activating
    /// instance has its object destroyed.
    pub fn activate(&self, ctx: &mut HostContext, handle: &Handle<T>) -> Activation {
        if self.instance(ctx).as_ref() != Some(handle) {
            debug!(
                "Destroying duplicate {} on object {}",
                short_type_name::<T>(),
                handle.object_id()
            );
            ctx.scene.destroy(handle.object_id());
            return Activation::Destroyed;
        }

        ctx.services.register(handle.clone());
        if self.persist_across_scenes {
            if let Err(e) = ctx.scene.mark_persistent(handle.object_id()) {
                debug!("Could not persist {}: {}", short_type_name::<T>(), e);
            }
        }
        Activation::Retained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct LevelDirector;

    #[test]
    fn test_missing_instance_resolves_to_none() {
        let mut ctx = HostContext::new();
        let director = RequiredSingleton::<LevelDirector>::new();

        assert!(director.instance(&mut ctx).is_none());
        assert!(!director.is_initialized(&ctx));
        assert!(ctx.services.is_empty());
        assert_eq!(ctx.scene.object_count(), 0);
    }

    #[test]
    fn test_require_reports_missing_singleton() {
        let mut ctx = HostContext::new();
        let result = RequiredSingleton::<LevelDirector>::new().require(&mut ctx);

        match result {
            Err(ToolkitError::MissingSingleton(name)) => assert!(name.ends_with("LevelDirector")),
            other => panic!("expected MissingSingleton, got {:?}", other),
        }
    }

    #[test]
    fn test_instance_is_found_and_cached() {
        let mut ctx = HostContext::new();
        let placed = ctx.scene.spawn_with("Director", LevelDirector);
        let director = RequiredSingleton::<LevelDirector>::new();

        assert!(!director.is_initialized(&ctx));
        assert_eq!(director.instance(&mut ctx), Some(placed.clone()));
        assert!(director.is_initialized(&ctx));
        assert_eq!(ctx.services.get::<LevelDirector>(), Some(placed));
    }

    #[test]
    fn test_first_found_wins_regardless_of_activation_order() {
        let mut ctx = HostContext::new();
        let first = ctx.scene.spawn_with("Director A", LevelDirector);
        let second = ctx.scene.spawn_with("Director B", LevelDirector);
        let director = RequiredSingleton::<LevelDirector>::new();

        assert_eq!(director.activate(&mut ctx, &second), Activation::Destroyed);
        assert_eq!(director.activate(&mut ctx, &first), Activation::Retained);

        assert!(ctx.scene.is_alive(first.object_id()));
        assert!(!ctx.scene.is_alive(second.object_id()));
        assert_eq!(director.instance(&mut ctx), Some(first));
    }

    #[test]
    fn test_persistent_instance_survives_scene_load() {
        let mut ctx = HostContext::new();
        let placed = ctx.scene.spawn_with("Director", LevelDirector);
        let _scenery = ctx.scene.spawn("Scenery");
        let director = RequiredSingleton::<LevelDirector>::persistent();
        assert!(director.persists_across_scenes());

        director.activate(&mut ctx, &placed);
        assert_eq!(ctx.scene.load_scene(), 1);
        assert_eq!(director.instance(&mut ctx), Some(placed));
    }

    #[test]
    fn test_scene_load_invalidates_non_persistent_instance() {
        let mut ctx = HostContext::new();
        let placed = ctx.scene.spawn_with("Director", LevelDirector);
        let director = RequiredSingleton::<LevelDirector>::new();

        director.activate(&mut ctx, &placed);
        ctx.scene.load_scene();

        assert!(!director.is_initialized(&ctx));
        assert!(director.instance(&mut ctx).is_none());
    }
}
