//! The experiment runner: repeated trials per policy case.

use tracing::{debug, info, warn};

use dtn_core::{ShardId, ShardRngs, SimConfig, split_evenly};
use dtn_policy::{ForwardingPolicy, Policy, PolicyKind};
use dtn_trace::Timeline;

use crate::{
    AggregateResult, CaseReport, CaseStatus, ExperimentObserver, PairSampler, PropagationEngine,
    Sampled, SimError, SimResult, TrialResult,
};

/// Everything one case produced, trials in (round, shard) order.
struct CaseOutcome {
    trials:     Vec<TrialResult>,
    rejections: u64,
    gave_up:    bool,
}

/// What one shard produced in one round.
struct RoundOutcome {
    trials:     Vec<TrialResult>,
    rejections: u64,
}

/// Runs policy cases over a shared, read-only timeline.
///
/// # Sharding
///
/// A case runs on `config.shards` independent workers, each owning its own
/// [`PairSampler`] and [`ShardRngs`] for the whole case.  Work is handed out
/// in rounds: the trials still missing and the rejection budget still left
/// (`retry_multiplier × trials_per_case` for the whole case) are both split
/// evenly across the workers (see [`split_evenly`]).  A worker stops at its
/// trial share or its budget share; the next round redistributes whatever is
/// left.  The case gives up only once the case-wide budget is spent.
///
/// Round results are concatenated in shard order, so the outcome does not
/// depend on scheduling.  With one shard there is exactly one round.
///
/// With the `parallel` feature, workers run on Rayon's pool.
pub struct ExperimentRunner<'a> {
    timeline: &'a Timeline,
    config:   SimConfig,
}

impl<'a> ExperimentRunner<'a> {
    /// Validate `config` and the timeline.
    ///
    /// # Errors
    ///
    /// - [`SimError::EmptyTimeline`] if no records were loaded.
    /// - [`SimError::TimelineTooShort`] with a single timestamp (send-times
    ///   are drawn from every timestamp but the last).
    /// - [`SimError::Config`] if a config value is out of range.
    pub fn new(timeline: &'a Timeline, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        if timeline.is_empty() {
            return Err(SimError::EmptyTimeline);
        }
        if timeline.len() < 2 {
            return Err(SimError::TimelineTooShort { timestamps: timeline.len() });
        }
        Ok(Self { timeline, config })
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline {
        self.timeline
    }

    /// Run every case in `kinds`, in order.
    pub fn run_all<O: ExperimentObserver>(
        &self,
        kinds:    &[PolicyKind],
        observer: &mut O,
    ) -> Vec<CaseReport> {
        let reports = kinds
            .iter()
            .map(|&kind| self.run_kind(kind, observer))
            .collect();
        observer.on_experiment_end();
        reports
    }

    /// Run one built-in case, instantiated from the config's thresholds.
    pub fn run_kind<O: ExperimentObserver>(&self, kind: PolicyKind, observer: &mut O) -> CaseReport {
        let policy = Policy::from_kind(kind, &self.config);
        self.run_case(&policy, observer)
    }

    /// Run one case with an arbitrary policy.
    pub fn run_case<P, O>(&self, policy: &P, observer: &mut O) -> CaseReport
    where
        P: ForwardingPolicy + ?Sized,
        O: ExperimentObserver,
    {
        let kind = policy.kind();
        info!(
            policy = %kind,
            trials = self.config.trials_per_case,
            shards = self.config.shards,
            "running case: {}",
            kind.description()
        );
        observer.on_case_start(kind, &self.config);

        let outcome = self.run_shards(policy);

        let mut result = AggregateResult::default();
        for trial in &outcome.trials {
            result.record(trial);
            observer.on_trial_end(kind, trial);
        }
        let rejected_attempts = outcome.rejections;

        let status = if outcome.gave_up {
            warn!(
                policy = %kind,
                initiated = result.initiated,
                rejected  = rejected_attempts,
                "could not find enough valid pairs; ending case early"
            );
            CaseStatus::InsufficientConnectivity
        } else {
            CaseStatus::Completed
        };

        let report = CaseReport { policy: kind, result, status, rejected_attempts };
        info!(
            policy    = %kind,
            initiated = result.initiated,
            delivered = result.delivered,
            rate_pct  = result.delivery_rate_pct(),
            "case finished"
        );
        observer.on_case_end(&report);
        report
    }

    // ── Shards ────────────────────────────────────────────────────────────

    fn run_shards<P: ForwardingPolicy + ?Sized>(&self, policy: &P) -> CaseOutcome {
        let engine = PropagationEngine::new(
            self.timeline,
            policy,
            self.config.comm_radius_m,
            self.config.max_hops,
        );
        let mut shards: Vec<Shard<'_>> = (0..self.config.shards)
            .map(|i| Shard::new(self.timeline, &self.config, ShardId(i)))
            .collect();

        let target = u64::from(self.config.trials_per_case);
        let bound = self.config.retry_bound();
        let mut case = CaseOutcome {
            trials:     Vec::with_capacity(target as usize),
            rejections: 0,
            gave_up:    false,
        };

        let mut round = 0u32;
        while (case.trials.len() as u64) < target {
            if case.rejections >= bound {
                case.gave_up = true;
                break;
            }
            round += 1;
            let targets = split_evenly(target - case.trials.len() as u64, self.config.shards);
            let budgets = split_evenly(bound - case.rejections, self.config.shards);

            for outcome in Self::run_round(&engine, &mut shards, targets, budgets) {
                case.rejections += outcome.rejections;
                case.trials.extend(outcome.trials);
            }
            debug!(
                round,
                initiated = case.trials.len(),
                rejected  = case.rejections,
                "round finished"
            );
        }
        case
    }

    /// Give every shard its trial and budget share for one round.
    fn run_round<P: ForwardingPolicy + ?Sized>(
        engine:  &PropagationEngine<'_, P>,
        shards:  &mut [Shard<'_>],
        targets: Vec<u64>,
        budgets: Vec<u64>,
    ) -> Vec<RoundOutcome> {
        #[cfg(not(feature = "parallel"))]
        {
            shards
                .iter_mut()
                .zip(targets)
                .zip(budgets)
                .map(|((shard, target), budget)| shard.run(engine, target, budget))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            shards
                .par_iter_mut()
                .zip(targets)
                .zip(budgets)
                .map(|((shard, target), budget)| shard.run(engine, target, budget))
                .collect()
        }
    }
}

// ── Shard ─────────────────────────────────────────────────────────────────────

/// One trial worker.  Its RNG streams and pair-validity memo persist across
/// rounds of a case.
struct Shard<'t> {
    id:      ShardId,
    rngs:    ShardRngs,
    sampler: PairSampler<'t>,
}

impl<'t> Shard<'t> {
    fn new(timeline: &'t Timeline, config: &SimConfig, id: ShardId) -> Self {
        Self {
            id,
            rngs:    ShardRngs::new(config.seed, id),
            sampler: PairSampler::new(timeline, config.min_separation_m),
        }
    }

    /// Sample and propagate until `target` trials are initiated or `budget`
    /// attempts have been rejected.
    fn run<P: ForwardingPolicy + ?Sized>(
        &mut self,
        engine: &PropagationEngine<'_, P>,
        target: u64,
        budget: u64,
    ) -> RoundOutcome {
        let mut outcome = RoundOutcome { trials: Vec::with_capacity(target as usize), rejections: 0 };

        while (outcome.trials.len() as u64) < target {
            match self.sampler.sample(&mut self.rngs.sampler, budget - outcome.rejections) {
                Sampled::Pair { pair, rejections } => {
                    outcome.rejections += rejections;
                    debug!(
                        shard       = self.id.0,
                        origin      = pair.origin.0,
                        destination = pair.destination.0,
                        send_time   = pair.send_time.0,
                        "trial initiated"
                    );
                    let trial = engine.run(pair, &mut self.rngs.policy);
                    if let (Some(hops), Some(latency)) = (trial.hops(), trial.latency_secs()) {
                        debug!(shard = self.id.0, hops, latency_secs = latency, "delivered");
                    }
                    outcome.trials.push(trial);
                }
                Sampled::GaveUp { rejections } => {
                    outcome.rejections += rejections;
                    break;
                }
            }
        }
        outcome
    }
}
