//! Arena holding the parent-pointer tree built by a search run.

use rolling_block_core::BlockState;

/// Handle to a node stored in a [`SearchTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in discovery order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug)]
struct Node {
    state: BlockState,
    parent: Option<NodeId>,
    depth: usize,
}

/// Discovered states and the predecessor each was first reached from.
///
/// Nodes are appended in discovery order and never removed until the tree is
/// cleared for the next run. Only the root has no parent.
#[derive(Clone, Debug, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    pub(crate) fn insert_root(&mut self, state: BlockState) -> NodeId {
        self.push(Node {
            state,
            parent: None,
            depth: 0,
        })
    }

    pub(crate) fn insert_child(
        &mut self,
        parent: NodeId,
        depth: usize,
        state: BlockState,
    ) -> NodeId {
        self.push(Node {
            state,
            parent: Some(parent),
            depth,
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Node holding the start state, once a run has begun.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    /// Number of nodes discovered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Reports whether the tree holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Block state recorded for the node.
    #[must_use]
    pub fn state(&self, node: NodeId) -> Option<BlockState> {
        self.nodes.get(node.0).map(|entry| entry.state)
    }

    /// Node the given node was first reached from.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|entry| entry.parent)
    }

    /// Number of rolls separating the node from the root.
    #[must_use]
    pub fn depth(&self, node: NodeId) -> Option<usize> {
        self.nodes.get(node.0).map(|entry| entry.depth)
    }

    /// States from the root to `node`, inclusive, in roll order.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Vec<BlockState> {
        let mut states = Vec::new();
        let mut cursor = Some(node);

        while let Some(id) = cursor {
            let Some(entry) = self.nodes.get(id.0) else {
                break;
            };
            states.push(entry.state);
            cursor = entry.parent;
        }

        states.reverse();
        states
    }
}
