//! # Scene Graph
//!
//! Live host objects and their components.

use super::{Handle, ObjectId};
use crate::{ToolkitError, ToolkitResult};
use log::debug;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// A host object: a named container for components.
struct HostObject {
    id: ObjectId,
    name: String,
    /// Survives [`SceneGraph::load_scene`]
    persistent: bool,
    /// Each entry is an `Rc<RefCell<T>>` for some component type `T`
    components: Vec<Rc<dyn Any>>,
}

impl HostObject {
    fn component<T: 'static>(&self) -> Option<Handle<T>> {
        self.components.iter().find_map(|component| {
            Rc::clone(component)
                .downcast::<RefCell<T>>()
                .ok()
                .map(|component| Handle::new(self.id, component))
        })
    }
}

/// The set of live host objects.
///
/// Objects are kept in creation order, which is the order lookups such as
/// [`SceneGraph::find_first`] walk them in.
pub struct SceneGraph {
    objects: Vec<HostObject>,
    playing: bool,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Creates an empty graph in the playing state.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            playing: true,
        }
    }

    /// Creates an empty graph in edit mode (not playing).
    pub fn edit_mode() -> Self {
        Self {
            objects: Vec::new(),
            playing: false,
        }
    }

    /// Whether the host is actively running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Switches between running and edit mode.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Creates an empty object and returns its id.
    pub fn spawn(&mut self, name: impl Into<String>) -> ObjectId {
        let id = Uuid::new_v4();
        self.objects.push(HostObject {
            id,
            name: name.into(),
            persistent: false,
            components: Vec::new(),
        });
        id
    }

    /// Creates an object with a single component attached.
    pub fn spawn_with<T: 'static>(&mut self, name: impl Into<String>, component: T) -> Handle<T> {
        let id = self.spawn(name);
        let component = Rc::new(RefCell::new(component));
        if let Some(object) = self.objects.last_mut() {
            object.components.push(component.clone());
        }
        Handle::new(id, component)
    }

    /// Attaches a component to an existing object.
    pub fn add_component<T: 'static>(
        &mut self,
        id: ObjectId,
        component: T,
    ) -> ToolkitResult<Handle<T>> {
        let object = self.object_mut(id)?;
        let component = Rc::new(RefCell::new(component));
        object.components.push(component.clone());
        Ok(Handle::new(id, component))
    }

    /// Returns the first live component of type `T` in creation order.
    pub fn find_first<T: 'static>(&self) -> Option<Handle<T>> {
        self.objects.iter().find_map(HostObject::component::<T>)
    }

    /// Returns every live component of type `T` in creation order.
    pub fn find_all<T: 'static>(&self) -> Vec<Handle<T>> {
        self.objects
            .iter()
            .filter_map(HostObject::component::<T>)
            .collect()
    }

    /// Destroys an object and all of its components.
    ///
    /// Returns false if the object was not alive.
    pub fn destroy(&mut self, id: ObjectId) -> bool {
        let before = self.objects.len();
        self.objects.retain(|object| object.id != id);
        let destroyed = self.objects.len() != before;
        if destroyed {
            debug!("Destroyed host object {}", id);
        }
        destroyed
    }

    /// Whether the object is still part of the graph.
    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.objects.iter().any(|object| object.id == id)
    }

    /// Returns the name of a live object.
    pub fn name(&self, id: ObjectId) -> Option<&str> {
        self.objects
            .iter()
            .find(|object| object.id == id)
            .map(|object| object.name.as_str())
    }

    /// Number of live objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Keeps an object alive across [`SceneGraph::load_scene`].
    pub fn mark_persistent(&mut self, id: ObjectId) -> ToolkitResult<()> {
        self.object_mut(id)?.persistent = true;
        Ok(())
    }

    /// Whether an object survives scene loads.
    pub fn is_persistent(&self, id: ObjectId) -> bool {
        self.objects
            .iter()
            .any(|object| object.id == id && object.persistent)
    }

    /// Transitions to a new scene, destroying every non-persistent object.
    ///
    /// Returns the number of destroyed objects.
    pub fn load_scene(&mut self) -> usize {
        let before = self.objects.len();
        self.objects.retain(|object| object.persistent);
        let destroyed = before - self.objects.len();
        debug!(
            "Scene loaded: {} objects destroyed, {} persisted",
            destroyed,
            self.objects.len()
        );
        destroyed
    }

    fn object_mut(&mut self, id: ObjectId) -> ToolkitResult<&mut HostObject> {
        self.objects
            .iter_mut()
            .find(|object| object.id == id)
            .ok_or(ToolkitError::ObjectNotFound(id))
    }
}
