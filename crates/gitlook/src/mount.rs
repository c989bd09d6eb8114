//! Mount points: named slots a host exposes for rendered scenes.
//!
//! A [`MountPoint`] owns at most one rendered [`VisualGraph`] at a time.
//! Rendering into it replaces the previous graph; the old [`SceneHandle`]
//! keeps the orphaned graph alive but nothing paints it anymore.
//!
//! Hosts make mount points discoverable through [`MountRegistry`]. The
//! in-memory [`MountTable`] is the registry used by tests and the CLI.

use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use indexmap::IndexMap;
use log::debug;

use crate::graph::VisualGraph;

/// Shared handle to a rendered graph.
///
/// The sequencer holds only weak references to it, so timers firing after
/// the graph is replaced or dropped become no-ops.
pub type SceneHandle = Rc<RefCell<VisualGraph>>;

/// A named slot that displays one rendered scene.
#[derive(Debug)]
pub struct MountPoint {
    id: String,
    content: RefCell<Option<SceneHandle>>,
}

impl MountPoint {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: RefCell::new(None),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Removes the rendered content, if any.
    pub fn clear(&self) {
        if self.content.borrow_mut().take().is_some() {
            debug!(mount = self.id.as_str(); "Mount point cleared");
        }
    }

    /// Installs `graph` as the content of this mount point and returns its
    /// handle.
    pub fn install(&self, graph: VisualGraph) -> SceneHandle {
        let handle = Rc::new(RefCell::new(graph));
        *self.content.borrow_mut() = Some(Rc::clone(&handle));
        handle
    }

    /// Returns the handle to the currently displayed graph.
    pub fn graph(&self) -> Option<SceneHandle> {
        self.content.borrow().clone()
    }

    /// Borrows the currently displayed graph.
    pub fn content(&self) -> Ref<'_, Option<SceneHandle>> {
        self.content.borrow()
    }

    pub fn is_empty(&self) -> bool {
        self.content.borrow().is_none()
    }
}

/// Lookup of mount points by identifier.
pub trait MountRegistry {
    /// Returns the mount point named `id`, if the host provides one.
    fn resolve(&self, id: &str) -> Option<Rc<MountPoint>>;
}

/// An insertion-ordered, in-memory [`MountRegistry`].
#[derive(Debug, Default)]
pub struct MountTable {
    mounts: IndexMap<String, Rc<MountPoint>>,
}

impl MountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mount point named `id`, replacing any existing one.
    pub fn insert(&mut self, id: impl Into<String>) -> Rc<MountPoint> {
        let id = id.into();
        let mount = Rc::new(MountPoint::new(id.clone()));
        self.mounts.insert(id, Rc::clone(&mount));
        mount
    }

    pub fn remove(&mut self, id: &str) -> Option<Rc<MountPoint>> {
        self.mounts.shift_remove(id)
    }

    pub fn clear(&mut self) {
        self.mounts.clear();
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    /// Returns the mount identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.mounts.keys().map(String::as_str)
    }
}

impl MountRegistry for MountTable {
    fn resolve(&self, id: &str) -> Option<Rc<MountPoint>> {
        self.mounts.get(id).cloned()
    }
}
