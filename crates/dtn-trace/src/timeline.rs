//! Snapshot, frame, and timeline types.

use std::collections::BTreeMap;

use dtn_core::{GeoPoint, IdMap, NodeId, Timestamp};

// ── NodeSnapshot ──────────────────────────────────────────────────────────────

/// One node's reported position and battery level at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSnapshot {
    pub id:      NodeId,
    pub pos:     GeoPoint,
    /// Battery level, percent (0–100).
    pub battery: u8,
}

impl NodeSnapshot {
    #[inline]
    pub fn new(id: NodeId, pos: GeoPoint, battery: u8) -> Self {
        Self { id, pos, battery }
    }

    #[inline]
    pub fn distance_m(&self, other: &NodeSnapshot) -> f64 {
        self.pos.distance_m(other.pos)
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// All nodes active at a single timestamp.
///
/// Nodes are kept sorted by id so that every consumer (contact graph
/// construction, random origin selection) sees them in a stable order.
#[derive(Clone, Debug)]
pub struct Frame {
    time:  Timestamp,
    nodes: Vec<NodeSnapshot>,
    index: IdMap<NodeId, usize>,
}

impl Frame {
    /// Build a frame.  If a node id occurs more than once, its first
    /// snapshot wins.
    pub fn new(time: Timestamp, mut nodes: Vec<NodeSnapshot>) -> Self {
        // Stable sort keeps insertion order among equal ids, so dedup keeps
        // the first-reported snapshot.
        nodes.sort_by_key(|n| n.id);
        nodes.dedup_by_key(|n| n.id);

        let index = nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();
        Self { time, nodes, index }
    }

    #[inline]
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// Snapshots sorted by ascending `NodeId`.
    #[inline]
    pub fn nodes(&self) -> &[NodeSnapshot] {
        &self.nodes
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&NodeSnapshot> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ── Timeline ──────────────────────────────────────────────────────────────────

/// Frames in strictly increasing timestamp order plus the global id set.
///
/// Immutable once built; shared read-only by every trial.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    frames:   Vec<Frame>,
    node_ids: Vec<NodeId>,
}

impl Timeline {
    /// Assemble a timeline from frames in any order.  Frames sharing a
    /// timestamp are merged (earlier frames' snapshots win on id clashes).
    pub fn from_frames(frames: impl IntoIterator<Item = Frame>) -> Self {
        let mut builder = TimelineBuilder::new();
        for frame in frames {
            let time = frame.time;
            for snap in frame.nodes {
                builder.push(time, snap);
            }
        }
        builder.build()
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Number of distinct timestamps.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Every node id that appears anywhere in the trace, ascending.
    #[inline]
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    pub fn times(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.frames.iter().map(Frame::time)
    }

    /// Total number of snapshots across all frames.
    pub fn snapshot_count(&self) -> usize {
        self.frames.iter().map(Frame::len).sum()
    }
}

// ── TimelineBuilder ───────────────────────────────────────────────────────────

/// Accumulates snapshots in arbitrary order and groups them by timestamp.
#[derive(Default)]
pub struct TimelineBuilder {
    by_time: BTreeMap<Timestamp, Vec<NodeSnapshot>>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `snap` was observed at `time`.
    pub fn push(&mut self, time: Timestamp, snap: NodeSnapshot) -> &mut Self {
        self.by_time.entry(time).or_default().push(snap);
        self
    }

    pub fn build(self) -> Timeline {
        let frames: Vec<Frame> = self
            .by_time
            .into_iter()
            .map(|(time, nodes)| Frame::new(time, nodes))
            .collect();

        let mut node_ids: Vec<NodeId> = frames
            .iter()
            .flat_map(|f| f.nodes.iter().map(|n| n.id))
            .collect();
        node_ids.sort_unstable();
        node_ids.dedup();

        Timeline { frames, node_ids }
    }
}
