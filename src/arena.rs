use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

const NO_CHILDREN: &[Index] = &[];

/// Data payload for one outline entry.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Single line of content, never contains a line break
    pub text: String,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Tree node in the arena-based outline structure.
#[derive(Debug)]
pub struct OutlineNode {
    /// Outline entry data for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for top-level nodes
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in document order
    pub children: Vec<Index>,
}

/// Arena-based outline: an ordered forest of nodes.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Handles stay valid across sibling-list mutations, so the edit engine can
/// resolve an address once and mutate without re-walking stale positions.
#[derive(Debug)]
pub struct OutlineArena {
    /// Arena storage for all outline nodes
    arena: Arena<OutlineNode>,
    /// Indices of top-level nodes, in document order
    roots: Vec<Index>,
}

impl Default for OutlineArena {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
        }
    }

    /// Inserts a node as the last child of `parent` (last top-level node for None).
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node_idx = self.insert_detached(data);
        let position = self.sibling_list(parent).len();
        self.attach(node_idx, parent, position);
        node_idx
    }

    /// Inserts a node into the arena without linking it anywhere.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_detached(&mut self, data: NodeData) -> Index {
        self.arena.insert(OutlineNode {
            data,
            parent: None,
            children: Vec::new(),
        })
    }

    /// Links a detached node into the sibling list of `parent` at `position`.
    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, node_idx: Index, parent: Option<Index>, position: usize) {
        match parent {
            Some(parent_idx) => {
                if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                    parent_node.children.insert(position, node_idx);
                }
            }
            None => self.roots.insert(position, node_idx),
        }
        if let Some(node) = self.arena.get_mut(node_idx) {
            node.parent = parent;
        }
    }

    /// Unlinks a node from its sibling list. The node and its descendants
    /// stay in the arena and can be re-attached.
    #[instrument(level = "trace", skip(self))]
    pub fn detach(&mut self, node_idx: Index) {
        let parent = self.arena.get(node_idx).and_then(|node| node.parent);
        match parent {
            Some(parent_idx) => {
                if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                    parent_node.children.retain(|&child| child != node_idx);
                }
            }
            None => self.roots.retain(|&root| root != node_idx),
        }
        if let Some(node) = self.arena.get_mut(node_idx) {
            node.parent = None;
        }
    }

    /// Detaches a node and drops it and all its descendants from the arena.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_subtree(&mut self, node_idx: Index) {
        self.detach(node_idx);
        for idx in self.subtree_indices(node_idx) {
            self.arena.remove(idx);
        }
    }

    /// Pre-order indices of the subtree rooted at `node_idx`, itself included.
    #[instrument(level = "trace", skip(self))]
    pub fn subtree_indices(&self, node_idx: Index) -> Vec<Index> {
        let mut indices = Vec::new();
        let mut stack = vec![node_idx];
        while let Some(current_idx) = stack.pop() {
            if let Some(node) = self.arena.get(current_idx) {
                indices.push(current_idx);
                for &child in node.children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        indices
    }

    /// Whether `node_idx` lies inside the subtree rooted at `root_idx`,
    /// the root itself included. Walks the parent chain, not addresses.
    #[instrument(level = "trace", skip(self))]
    pub fn is_in_subtree(&self, node_idx: Index, root_idx: Index) -> bool {
        let mut current = Some(node_idx);
        while let Some(idx) = current {
            if idx == root_idx {
                return true;
            }
            current = self.arena.get(idx).and_then(|node| node.parent);
        }
        false
    }

    /// Parent and position of a node within its sibling list, None when the
    /// node is detached or unknown.
    #[instrument(level = "trace", skip(self))]
    pub fn position_in_siblings(&self, node_idx: Index) -> Option<(Option<Index>, usize)> {
        let parent = self.arena.get(node_idx)?.parent;
        let position = self
            .sibling_list(parent)
            .iter()
            .position(|&sibling| sibling == node_idx)?;
        Some((parent, position))
    }

    /// The ordered sibling list below `parent` (top-level list for None).
    pub fn sibling_list(&self, parent: Option<Index>) -> &[Index] {
        match parent {
            Some(parent_idx) => self
                .arena
                .get(parent_idx)
                .map(|node| node.children.as_slice())
                .unwrap_or(NO_CHILDREN),
            None => &self.roots,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&OutlineNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut OutlineNode> {
        self.arena.get_mut(idx)
    }

    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIterator {
        PreOrderIterator::new(self)
    }

    /// Maximum nesting depth of the forest, 0 for an empty outline.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(|&root| self.calculate_depth(root))
            .max()
            .unwrap_or(0)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}

/// Depth-first pre-order traversal over the whole forest.
pub struct PreOrderIterator<'a> {
    arena: &'a OutlineArena,
    stack: Vec<(Index, usize)>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(arena: &'a OutlineArena) -> Self {
        let stack = arena
            .roots()
            .iter()
            .rev()
            .map(|&root| (root, 0))
            .collect();
        Self { arena, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, usize, &'a OutlineNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((current_idx, depth)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((current_idx, depth, node));
            }
        }
        None
    }
}
