//! Path nodes and the per-query search tree.
//!
//! Nodes live in an arena ([`SearchTree`]) and refer to their parent by
//! [`NodeId`] handle. A finished search hands the caller a [`Path`], which
//! owns a copy of the goal node and its ancestors only.

use std::fmt;

use cellpath_core::Point;

use crate::distance::manhattan;

/// Handle of a [`Node`] within the tree or path that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One explored cell.
///
/// `step` is the accumulated cost from the start: each edge adds 1 plus the
/// local cost of the cell it enters, so `step >= depth`. `depth` is the
/// plain edge count. `heuristic` is `step` plus the Manhattan distance to
/// the goal. Both sums saturate at `i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    position: Point,
    parent: Option<NodeId>,
    step: i32,
    depth: usize,
    heuristic: i32,
}

impl Node {
    pub(crate) fn start(position: Point, goal: Point) -> Self {
        Self {
            position,
            parent: None,
            step: 0,
            depth: 0,
            heuristic: manhattan(position, goal),
        }
    }

    pub(crate) fn child(
        parent_id: NodeId,
        parent: &Node,
        position: Point,
        local_cost: u32,
        goal: Point,
    ) -> Self {
        let cost = i32::try_from(local_cost).unwrap_or(i32::MAX);
        let step = parent.step.saturating_add(1).saturating_add(cost);
        Self {
            position,
            parent: Some(parent_id),
            step,
            depth: parent.depth + 1,
            heuristic: step.saturating_add(manhattan(position, goal)),
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn step(&self) -> i32 {
        self.step
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn heuristic(&self) -> i32 {
        self.heuristic
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.parent.is_none()
    }

    /// Manhattan estimate from this node to `p`.
    #[inline]
    pub fn estimate_to(&self, p: Point) -> i32 {
        manhattan(self.position, p)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[PathNode] {}", self.position)
    }
}

/// Arena of nodes built during one path search.
#[derive(Debug, Default)]
pub(crate) struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Copy `id` and its ancestors out of the arena, start first.
    ///
    /// Parent handles in the returned path index into the path itself.
    pub(crate) fn extract(&self, id: NodeId) -> Path {
        let mut chain = Vec::with_capacity(self.get(id).depth + 1);
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = *self.get(ci);
            cur = node.parent;
            chain.push(node);
        }
        chain.reverse();
        for (i, node) in chain.iter_mut().enumerate() {
            node.parent = i.checked_sub(1).map(NodeId);
        }
        Path { nodes: chain }
    }
}

/// Route returned by a successful path search: the goal node together with
/// its chain of ancestors back to the start node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<Node>,
}

impl Path {
    /// Nodes from start to goal.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The start node.
    pub fn start(&self) -> &Node {
        &self.nodes[0]
    }

    /// The terminal node (the goal).
    pub fn goal(&self) -> &Node {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Parent of `node` within this path.
    pub fn parent(&self, node: &Node) -> Option<&Node> {
        node.parent.map(|id| &self.nodes[id.0])
    }

    /// Cells from start to goal inclusive, rebuilt by following parent links
    /// back from the goal.
    pub fn points(&self) -> Vec<Point> {
        let goal = self.goal();
        let mut points = Vec::with_capacity(goal.depth + 1);
        let mut cur = Some(goal);
        while let Some(node) = cur {
            points.push(node.position);
            cur = self.parent(node);
        }
        points.reverse();
        points
    }

    /// Number of cells on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Accumulated cost of the goal node.
    #[inline]
    pub fn step(&self) -> i32 {
        self.goal().step
    }
}
