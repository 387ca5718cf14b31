//! Rejection sampling of (origin, destination, send-time) triples.
//!
//! # One attempt
//!
//! ```text
//! ① send_index  ← uniform over all timestamps but the last
//! ② origin      ← uniform over nodes active at send_index
//! ③ destination ← uniform over all trace node ids except origin
//! ④ accept iff origin and destination are, at SOME timestamp of the whole
//!    trace, simultaneously active and at least min_separation_m apart
//! ```
//!
//! Step ④ is a "this pair is worth simulating" filter.  It does not depend
//! on the chosen send-time: a pair can be accepted even if its only
//! well-separated co-observation happens before `send_index`.
//!
//! Step ④ is a pure function of the unordered pair, so verdicts are
//! memoised per sampler.

use dtn_core::{IdMap, NodeId, SimRng, Timestamp};
use dtn_trace::Timeline;

/// A sampled trial specification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    pub origin:      NodeId,
    pub destination: NodeId,
    /// Index of the send-time frame in the timeline.
    pub send_index:  usize,
    pub send_time:   Timestamp,
}

/// Result of [`PairSampler::sample`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sampled {
    /// A valid pair was found after `rejections` failed attempts.
    Pair { pair: Pair, rejections: u64 },
    /// The rejection budget ran out; exactly `rejections` attempts were made.
    GaveUp { rejections: u64 },
}

/// Draws valid trial pairs from a timeline.
pub struct PairSampler<'a> {
    timeline:         &'a Timeline,
    min_separation_m: f64,
    verdicts:         IdMap<(NodeId, NodeId), bool>,
}

impl<'a> PairSampler<'a> {
    pub fn new(timeline: &'a Timeline, min_separation_m: f64) -> Self {
        Self { timeline, min_separation_m, verdicts: IdMap::default() }
    }

    /// Attempt until a pair is accepted or `max_rejections` attempts have
    /// been rejected.
    pub fn sample(&mut self, rng: &mut SimRng, max_rejections: u64) -> Sampled {
        let mut rejections = 0;
        while rejections < max_rejections {
            match self.try_sample(rng) {
                Some(pair) => return Sampled::Pair { pair, rejections },
                None => rejections += 1,
            }
        }
        Sampled::GaveUp { rejections }
    }

    /// One sampling attempt.  `None` means the attempt was rejected.
    pub fn try_sample(&mut self, rng: &mut SimRng) -> Option<Pair> {
        let frames = self.timeline.frames();
        if frames.len() < 2 {
            return None;
        }

        let send_index = rng.gen_range(0..frames.len() - 1);
        let frame = &frames[send_index];
        let origin = rng.choose(frame.nodes())?.id;

        let destination = self.choose_destination(origin, rng)?;

        if !self.is_meaningful(origin, destination) {
            return None;
        }

        Some(Pair { origin, destination, send_index, send_time: frame.time() })
    }

    /// `true` if `a` and `b` are co-observed at least `min_separation_m`
    /// apart somewhere in the timeline.
    pub fn is_meaningful(&mut self, a: NodeId, b: NodeId) -> bool {
        let key = if a <= b { (a, b) } else { (b, a) };
        if let Some(&verdict) = self.verdicts.get(&key) {
            return verdict;
        }
        let verdict = separated_somewhere(self.timeline, a, b, self.min_separation_m);
        self.verdicts.insert(key, verdict);
        verdict
    }

    /// Uniform over all trace ids except `origin`, without allocating.
    fn choose_destination(&self, origin: NodeId, rng: &mut SimRng) -> Option<NodeId> {
        let ids = self.timeline.node_ids();
        let skip = ids.binary_search(&origin);
        let candidates = ids.len() - usize::from(skip.is_ok());
        if candidates == 0 {
            return None;
        }
        let mut k = rng.gen_range(0..candidates);
        if let Ok(pos) = skip {
            if k >= pos {
                k += 1;
            }
        }
        Some(ids[k])
    }
}

/// Scan the whole timeline for a timestamp where both nodes are active and
/// at least `min_m` apart.
pub fn separated_somewhere(timeline: &Timeline, a: NodeId, b: NodeId, min_m: f64) -> bool {
    if a == b {
        return false;
    }
    timeline.frames().iter().any(|frame| match (frame.get(a), frame.get(b)) {
        (Some(na), Some(nb)) => na.distance_m(nb) >= min_m,
        _ => false,
    })
}
