//! # Auto Singleton
//!
//! Singletons that are created on first use when the scene has none.

use super::Activation;
use crate::{short_type_name, Handle, HostContext};
use log::debug;
use std::marker::PhantomData;

/// Resolution strategy for an always-available singleton of type `T`.
///
/// [`AutoSingleton::instance`] never fails: when neither the registry nor
/// the scene has an instance, a new object named `"<Type> Auto-Generated"`
/// is spawned with `T::default()` attached.
///
/// # Examples
///
/// ```
/// use lrs_toolkit::{AutoSingleton, HostContext};
///
/// #[derive(Default)]
/// struct AudioManager {
///     volume: f32,
/// }
///
/// let mut ctx = HostContext::new();
/// let audio = AutoSingleton::<AudioManager>::new();
/// assert!(audio.try_get_instance(&ctx).is_none());
///
/// let handle = audio.instance(&mut ctx);
/// handle.borrow_mut().volume = 0.5;
///
/// assert!(audio.has_instance(&ctx));
/// assert_eq!(ctx.scene.name(handle.object_id()), Some("AudioManager Auto-Generated"));
/// ```
pub struct AutoSingleton<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Default + 'static> Default for AutoSingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + 'static> AutoSingleton<T> {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Name given to objects created by [`AutoSingleton::instance`].
    pub fn generated_name() -> String {
        format!("{} Auto-Generated", short_type_name::<T>())
    }

    /// Resolves the singleton, creating it if necessary.
    pub fn instance(&self, ctx: &mut HostContext) -> Handle<T> {
        if let Some(handle) = ctx.resolve_cached::<T>() {
            return handle;
        }

        let handle = match ctx.scene.find_first::<T>() {
            Some(handle) => {
                debug!("Resolved {} from scene", short_type_name::<T>());
                handle
            }
            None => {
                debug!("Creating {}", Self::generated_name());
                ctx.scene.spawn_with(Self::generated_name(), T::default())
            }
        };
        ctx.services.register(handle.clone());
        handle
    }

    /// Whether a live instance is cached.
    pub fn has_instance(&self, ctx: &HostContext) -> bool {
        ctx.live_service::<T>().is_some()
    }

    /// Returns the cached instance without resolving or creating one.
    pub fn try_get_instance(&self, ctx: &HostContext) -> Option<Handle<T>> {
        ctx.live_service::<T>()
    }

    /// Called when an instance becomes active in the scene.
    ///
    /// Does nothing unless the host is playing. An instance that is not
    /// the live cached instance has its object destroyed, including when
    /// nothing is cached yet.
    pub fn activate(&self, ctx: &mut HostContext, handle: &Handle<T>) -> Activation {
        if !ctx.scene.is_playing() {
            return Activation::Skipped;
        }

        if ctx.resolve_cached::<T>().as_ref() == Some(handle) {
            return Activation::Retained;
        }

        debug!(
            "Destroying {} on object {}: not the cached instance",
            short_type_name::<T>(),
            handle.object_id()
        );
        ctx.scene.destroy(handle.object_id());
        Activation::Destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct SaveService {
        slot: u8,
    }

    #[test]
    fn test_instance_creates_exactly_once() {
        let mut ctx = HostContext::new();
        let saves = AutoSingleton::<SaveService>::new();

        let first = saves.instance(&mut ctx);
        let second = saves.instance(&mut ctx);

        assert_eq!(first, second);
        assert_eq!(ctx.scene.object_count(), 1);
        assert_eq!(ctx.scene.find_all::<SaveService>().len(), 1);
        assert_eq!(first.borrow().slot, 0);
    }

    #[test]
    fn test_generated_name() {
        assert_eq!(
            AutoSingleton::<SaveService>::generated_name(),
            "SaveService Auto-Generated"
        );
    }

    #[test]
    fn test_existing_instance_is_preferred_over_creation() {
        let mut ctx = HostContext::new();
        let placed = ctx.scene.spawn_with("Saves", SaveService { slot: 3 });
        let saves = AutoSingleton::<SaveService>::new();

        assert_eq!(saves.instance(&mut ctx), placed);
        assert_eq!(ctx.scene.object_count(), 1);
    }

    #[test]
    fn test_try_get_instance_never_creates() {
        let mut ctx = HostContext::new();
        ctx.scene.spawn_with("Saves", SaveService::default());
        let saves = AutoSingleton::<SaveService>::new();

        assert!(saves.try_get_instance(&ctx).is_none());
        assert!(!saves.has_instance(&ctx));
        assert_eq!(ctx.scene.object_count(), 1);
        assert!(ctx.services.is_empty());
    }

    #[test]
    fn test_destroyed_instance_is_recreated() {
        let mut ctx = HostContext::new();
        let saves = AutoSingleton::<SaveService>::new();
        let original = saves.instance(&mut ctx);

        ctx.scene.destroy(original.object_id());
        assert!(!saves.has_instance(&ctx));

        let replacement = saves.instance(&mut ctx);
        assert_ne!(original, replacement);
        assert!(saves.has_instance(&ctx));
    }

    #[test]
    fn test_activation_destroys_duplicates_while_playing() {
        let mut ctx = HostContext::new();
        let saves = AutoSingleton::<SaveService>::new();
        let current = saves.instance(&mut ctx);
        let duplicate = ctx.scene.spawn_with("Saves Copy", SaveService::default());

        assert_eq!(saves.activate(&mut ctx, &current), Activation::Retained);
        assert_eq!(saves.activate(&mut ctx, &duplicate), Activation::Destroyed);
        assert!(!ctx.scene.is_alive(duplicate.object_id()));
        assert_eq!(saves.try_get_instance(&ctx), Some(current));
    }

    #[test]
    fn test_activation_without_cached_instance_destroys() {
        let mut ctx = HostContext::new();
        let saves = AutoSingleton::<SaveService>::new();
        let placed = ctx.scene.spawn_with("Saves", SaveService::default());

        assert_eq!(saves.activate(&mut ctx, &placed), Activation::Destroyed);
        assert!(!ctx.scene.is_alive(placed.object_id()));
        assert!(saves.try_get_instance(&ctx).is_none());

        // The next access provisions a fresh instance instead.
        let created = saves.instance(&mut ctx);
        assert_ne!(created, placed);
        assert_eq!(saves.activate(&mut ctx, &created), Activation::Retained);
    }

    #[test]
    fn test_resolved_scene_instance_survives_activation() {
        let mut ctx = HostContext::new();
        let saves = AutoSingleton::<SaveService>::new();
        let placed = ctx.scene.spawn_with("Saves", SaveService { slot: 2 });

        assert_eq!(saves.instance(&mut ctx), placed);
        assert_eq!(saves.activate(&mut ctx, &placed), Activation::Retained);
        assert!(ctx.scene.is_alive(placed.object_id()));
    }

    #[test]
    fn test_activation_is_skipped_in_edit_mode() {
        let mut ctx = HostContext::with_scene(crate::SceneGraph::edit_mode());
        let saves = AutoSingleton::<SaveService>::new();
        let current = saves.instance(&mut ctx);
        let duplicate = ctx.scene.spawn_with("Saves Copy", SaveService::default());

        assert_eq!(saves.activate(&mut ctx, &duplicate), Activation::Skipped);
        assert!(ctx.scene.is_alive(duplicate.object_id()));
        assert_eq!(saves.try_get_instance(&ctx), Some(current));
    }
}
