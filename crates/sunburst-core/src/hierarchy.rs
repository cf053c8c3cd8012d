// File: crates/sunburst-core/src/hierarchy.rs
// Summary: Arena view of the input tree with aggregated values, sorted children and navigation queries.

use crate::tree::Node;

/// Index into `Hierarchy::nodes`. Ids are stable only until the next rebuild.
pub type NodeId = usize;

#[derive(Clone, Debug)]
pub struct HNode {
    pub name: String,
    /// Value carried by the input record itself (leaves).
    pub own_value: Option<f64>,
    /// Aggregated value: own value plus the sum of the children.
    pub value: f64,
    pub depth: usize,
    /// Longest distance to a descendant leaf.
    pub height: usize,
    pub parent: Option<NodeId>,
    /// Sorted by descending `value`.
    pub children: Vec<NodeId>,
}

impl HNode {
    pub fn is_leaf(&self) -> bool { self.children.is_empty() }
}

#[derive(Clone, Debug)]
pub struct Hierarchy {
    nodes: Vec<HNode>,
    order: Vec<NodeId>,
}

impl Hierarchy {
    /// Build, sum and sort. The root gets id 0.
    pub fn build(root: &Node) -> Self {
        let mut nodes = Vec::with_capacity(root.count());
        push_node(&mut nodes, root, None, 0);
        // Children have larger ids than their parent, so a reverse sweep sums bottom-up.
        for id in (0..nodes.len()).rev() {
            let (sum, height) = nodes[id].children.iter().fold((0.0, 0), |(s, h), &c| {
                (s + nodes[c].value, h.max(nodes[c].height + 1))
            });
            let node = &mut nodes[id];
            node.value = node.own_value.unwrap_or(0.0) + sum;
            node.height = height;
        }
        for id in 0..nodes.len() {
            let mut children = std::mem::take(&mut nodes[id].children);
            children.sort_by(|&a, &b| nodes[b].value.total_cmp(&nodes[a].value));
            nodes[id].children = children;
        }
        let mut h = Self { nodes, order: Vec::new() };
        h.order = h.preorder();
        h
    }

    fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id].children.iter().rev());
        }
        out
    }

    pub fn root(&self) -> NodeId { 0 }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn node(&self, id: NodeId) -> &HNode { &self.nodes[id] }

    pub fn nodes(&self) -> &[HNode] { &self.nodes }

    /// All nodes in pre-order of the sorted tree.
    pub fn descendants(&self) -> &[NodeId] { &self.order }

    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied().filter(|&id| self.nodes[id].is_leaf())
    }

    /// Self first, root last.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = vec![id];
        let mut cur = self.nodes[id].parent;
        while let Some(p) = cur {
            out.push(p);
            cur = self.nodes[p].parent;
        }
        out
    }

    /// True when `node` is `ancestor` or lies beneath it.
    pub fn is_descendant(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.nodes[id].parent;
        }
        false
    }

    /// First node with `name` in sorted pre-order.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.order.iter().copied().find(|&id| self.nodes[id].name == name)
    }

    /// First node with `name` in input pre-order, the order `Node::find` walks.
    /// Ids are assigned in that order.
    pub fn first_in_input_order(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name)
    }

    /// Share of the parent's value, rounded to a whole percent. Root is 100.
    pub fn percent_of_parent(&self, id: NodeId) -> f64 {
        match self.nodes[id].parent {
            None => 100.0,
            Some(p) => {
                let pv = self.nodes[p].value;
                if pv <= 0.0 { 0.0 } else { (self.nodes[id].value / pv * 100.0).round() }
            }
        }
    }

    /// 1-based position among siblings by descending value. Root is 1.
    pub fn rank(&self, id: NodeId) -> usize {
        match self.nodes[id].parent {
            None => 1,
            Some(p) => self.nodes[p].children.iter().position(|&c| c == id).map_or(1, |i| i + 1),
        }
    }
}

fn push_node(nodes: &mut Vec<HNode>, n: &Node, parent: Option<NodeId>, depth: usize) -> NodeId {
    let id = nodes.len();
    nodes.push(HNode {
        name: n.name.clone(),
        own_value: n.value.filter(|v| v.is_finite()),
        value: 0.0,
        depth,
        height: 0,
        parent,
        children: Vec::with_capacity(n.children.len()),
    });
    for c in &n.children {
        let cid = push_node(nodes, c, Some(id), depth + 1);
        nodes[id].children.push(cid);
    }
    id
}
