// Back-pointer arena for search paths.
//
// Every frontier extension records one node: the move that entered the
// diagonal (none for the starting point) followed by the length of the snake
// taken afterwards. A node points at the node it was extended from, so the
// winning path is recovered by a single walk from the terminating node back
// to the root.

use crate::edit::{EditScript, Op};

/// Index of a node in a [`Trace`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone, Copy)]
struct Node {
    parent: Option<NodeId>,
    /// `None` only for the root.
    op: Option<Op>,
    /// Keep operations following `op`.
    snake: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Trace {
    nodes: Vec<Node>,
}

impl Trace {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
        }
    }

    /// Starting point of the search, reached by a snake of `snake` keeps.
    pub fn root(&mut self, snake: usize) -> NodeId {
        self.insert(Node {
            parent: None,
            op: None,
            snake,
        })
    }

    /// Extend `parent` by one edit `op` and a snake of `snake` keeps.
    pub fn extend(&mut self, parent: NodeId, op: Op, snake: usize) -> NodeId {
        debug_assert!(op != Op::Keep, "frontier moves are additions or deletions");
        self.insert(Node {
            parent: Some(parent),
            op: Some(op),
            snake,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Rebuild the full script ending at `tip`.
    ///
    /// `len` is the expected script length and only sizes the allocation.
    pub fn script(&self, tip: NodeId, len: usize) -> EditScript {
        let mut chain = Vec::new();
        let mut cur = Some(tip);
        while let Some(id) = cur {
            chain.push(id);
            cur = self.nodes[id.0].parent;
        }

        let mut script = EditScript::with_capacity(len);
        for id in chain.into_iter().rev() {
            let node = &self.nodes[id.0];
            if let Some(op) = node.op {
                script.push(op);
            }
            script.push_n(Op::Keep, node.snake);
        }
        script
    }

    fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}
