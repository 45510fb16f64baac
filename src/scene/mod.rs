//! Tagged node groups: flat node storage with class-tag lookup.
//!
//! The host viewer owns the scene; this crate addresses nodes transiently,
//! a group at a time, by class tag (see [`tags`]). A tag that matches zero
//! nodes is a silent no-op on every path.

mod node;
pub mod tags;

pub use node::SceneNode;
use rustc_hash::FxHashMap;

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Flat node storage with a class-tag index.
///
/// Nodes are kept in insertion order; the index maps each class tag to the
/// positions of its member nodes so group writes touch only the group.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    /// Nodes in insertion order.
    nodes: Vec<SceneNode>,
    /// Class tag -> node positions.
    tag_index: FxHashMap<String, Vec<usize>>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, indexing its tags. Returns the node's id.
    pub fn add_node(&mut self, node: SceneNode) -> usize {
        let id = self.nodes.len();
        for tag in node.tags() {
            self.tag_index.entry(tag.clone()).or_default().push(id);
        }
        self.nodes.push(node);
        id
    }

    /// Read access to a node by id.
    #[must_use]
    pub fn node(&self, id: usize) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// Read access to all nodes (insertion order).
    #[must_use]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Nodes carrying the given class tag, in insertion order.
    pub fn nodes_by_tag<'a>(
        &'a self,
        tag: &str,
    ) -> impl Iterator<Item = &'a SceneNode> {
        self.tag_index
            .get(tag)
            .into_iter()
            .flatten()
            .filter_map(|&id| self.nodes.get(id))
    }

    /// Run `f` over every node carrying the given class tag.
    ///
    /// An unknown tag matches zero nodes and does nothing.
    pub fn for_each_tagged<F>(&mut self, tag: &str, mut f: F)
    where
        F: FnMut(&mut SceneNode),
    {
        let Some(ids) = self.tag_index.get(tag) else {
            return;
        };
        for &id in ids {
            if let Some(node) = self.nodes.get_mut(id) {
                f(node);
            }
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct class tags.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.tag_index.len()
    }

    /// Whether the scene holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove all nodes and tags.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.tag_index.clear();
    }
}
