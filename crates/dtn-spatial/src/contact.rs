//! Contact graph representation and construction.
//!
//! # Data layout
//!
//! Nodes are addressed by their *slot*, the position of their snapshot in
//! the input slice.  Adjacency uses **Compressed Sparse Row (CSR)** format:
//! the neighbors of slot `s` occupy
//!
//! ```text
//! adj[ adj_start[s] .. adj_start[s+1] ]
//! ```
//!
//! Each neighbor list is in ascending slot order.  When the input is a
//! [`Frame`] (sorted by `NodeId`), that is also ascending `NodeId` order,
//! which keeps every downstream iteration deterministic.
//!
//! # Construction
//!
//! Exhaustive pairwise comparison, O(n²) haversine evaluations per frame.
//! Each unordered pair is tested exactly once and, if within range, recorded
//! in both directions, so the relation is symmetric by construction.

use dtn_core::{IdMap, NodeId};
use dtn_trace::{Frame, NodeSnapshot};

/// Symmetric "within communication range" relation among the nodes active
/// at one timestamp.
#[derive(Clone, Debug)]
pub struct ContactGraph {
    /// Node id of each slot.
    ids: Vec<NodeId>,
    /// Slot of each node id.
    slots: IdMap<NodeId, u32>,
    /// CSR row pointer.  Length = `ids.len() + 1`.
    adj_start: Vec<u32>,
    /// Concatenated neighbor slots.
    adj: Vec<u32>,
}

impl ContactGraph {
    /// A graph with no nodes.
    pub fn empty() -> Self {
        Self {
            ids:       Vec::new(),
            slots:     IdMap::default(),
            adj_start: vec![0],
            adj:       Vec::new(),
        }
    }

    /// Build the contact graph for a whole frame.
    pub fn for_frame(frame: &Frame, radius_m: f64) -> Self {
        Self::from_snapshots(frame.nodes(), radius_m)
    }

    /// Build the contact graph for an arbitrary slice of snapshots.
    ///
    /// An edge `i - j` exists iff `i != j` and
    /// `distance_m(i, j) <= radius_m`.  If an id appears more than once,
    /// only its first snapshot participates.
    pub fn from_snapshots(nodes: &[NodeSnapshot], radius_m: f64) -> Self {
        let mut ids: Vec<NodeId> = Vec::with_capacity(nodes.len());
        let mut slots: IdMap<NodeId, u32> = IdMap::default();
        let mut members: Vec<&NodeSnapshot> = Vec::with_capacity(nodes.len());
        for node in nodes {
            if !slots.contains_key(&node.id) {
                slots.insert(node.id, ids.len() as u32);
                ids.push(node.id);
                members.push(node);
            }
        }

        let n = members.len();
        let mut lists: Vec<Vec<u32>> = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if members[i].distance_m(members[j]) <= radius_m {
                    lists[i].push(j as u32);
                    lists[j].push(i as u32);
                }
            }
        }

        // Slot i receives all j < i (pushed while scanning row j) before
        // any j > i (pushed while scanning row i), so lists are ascending.
        let mut adj_start = Vec::with_capacity(n + 1);
        let mut adj = Vec::with_capacity(lists.iter().map(Vec::len).sum());
        adj_start.push(0);
        for list in lists {
            adj.extend(list);
            adj_start.push(adj.len() as u32);
        }

        Self { ids, slots, adj_start, adj }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of distinct nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of undirected contacts.
    pub fn edge_count(&self) -> usize {
        self.adj.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn contains(&self, id: NodeId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Neighbors of `id` in ascending slot order.  Empty if `id` is not
    /// active in this frame or has no contacts.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let range = match self.slots.get(&id) {
            Some(&s) => {
                self.adj_start[s as usize] as usize..self.adj_start[s as usize + 1] as usize
            }
            None => 0..0,
        };
        self.adj[range].iter().map(|&s| self.ids[s as usize])
    }

    /// Number of contacts of `id` (0 if absent).
    pub fn degree(&self, id: NodeId) -> usize {
        self.slots
            .get(&id)
            .map(|&s| (self.adj_start[s as usize + 1] - self.adj_start[s as usize]) as usize)
            .unwrap_or(0)
    }

    /// `true` if `a` and `b` are within range of each other.
    pub fn are_neighbors(&self, a: NodeId, b: NodeId) -> bool {
        let Some(&sb) = self.slots.get(&b) else {
            return false;
        };
        match self.slots.get(&a) {
            Some(&sa) => {
                let start = self.adj_start[sa as usize] as usize;
                let end   = self.adj_start[sa as usize + 1] as usize;
                self.adj[start..end].binary_search(&sb).is_ok()
            }
            None => false,
        }
    }
}
