//! # Host Module
//!
//! The host object graph the singleton strategies resolve against.
//!
//! A [`SceneGraph`] owns named objects, each carrying any number of typed
//! components. Components are handed out as [`Handle`]s, which compare by
//! identity and stay usable after their object is destroyed; use
//! [`Handle::or_null`] to treat a destroyed object as absent.

pub mod context;
pub mod scene;

pub use context::*;
pub use scene::*;

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Unique identifier for host objects.
pub type ObjectId = Uuid;

/// Shared handle to a component of type `T` attached to a host object.
///
/// Handles are single-threaded and cheap to clone. Two handles are equal
/// only when they point at the same component instance.
pub struct Handle<T> {
    object: ObjectId,
    component: Rc<RefCell<T>>,
}

impl<T> Handle<T> {
    pub(crate) fn new(object: ObjectId, component: Rc<RefCell<T>>) -> Self {
        Self { object, component }
    }

    /// Returns the id of the object this component is attached to.
    pub fn object_id(&self) -> ObjectId {
        self.object
    }

    /// Immutably borrows the component.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.component.borrow()
    }

    /// Mutably borrows the component.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.component.borrow_mut()
    }

    /// Returns `Some(self)` while the owning object is alive, `None` once
    /// the host has destroyed it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrs_toolkit::SceneGraph;
    ///
    /// let mut scene = SceneGraph::new();
    /// let handle = scene.spawn_with("Camera", 60.0_f32);
    /// assert!(handle.clone().or_null(&scene).is_some());
    ///
    /// scene.destroy(handle.object_id());
    /// assert!(handle.or_null(&scene).is_none());
    /// ```
    pub fn or_null(self, scene: &SceneGraph) -> Option<Self> {
        scene.is_alive(self.object).then_some(self)
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            object: self.object,
            component: Rc::clone(&self.component),
        }
    }
}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.component, &other.component)
    }
}

impl<T> Eq for Handle<T> {}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("object", &self.object)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

/// Returns the unqualified name of a type, e.g. `AudioManager` for
/// `my_game::audio::AudioManager`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
