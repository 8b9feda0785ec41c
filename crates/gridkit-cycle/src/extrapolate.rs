//! Cycle detection and extrapolation.

use crate::config::ExtrapolationConfig;
use crate::error::CycleError;
use crate::record::CycleRecord;
use std::fmt;
use std::hash::Hash;

/// A detected cycle in the state sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cycle {
    /// First iteration of the repeating section.
    pub start: u64,
    /// Number of iterations per repetition.
    pub length: u64,
}

/// The outcome of extrapolating to a target iteration count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extrapolation<S, R> {
    /// State after `target` transitions.
    pub state: S,
    /// Result produced by transition number `target`.
    pub result: R,
    /// The cycle that made extrapolation possible, if one was found.
    pub cycle: Option<Cycle>,
    /// Transitions actually run.
    pub simulated: u64,
    /// The requested iteration count.
    pub target: u64,
}

impl<S, R> Extrapolation<S, R> {
    /// Length of the detected cycle, or 1 when none was found.
    pub fn cycle_length(&self) -> u64 {
        self.cycle.map_or(1, |c| c.length)
    }

    /// Transitions left over after skipping whole cycles:
    /// `(target - simulated) mod cycle_length`.
    ///
    /// Always 0 when no cycle was found.
    pub fn remainder(&self) -> u64 {
        (self.target - self.simulated) % self.cycle_length()
    }

    /// Whole cycles skipped instead of simulated.
    pub fn cycles_skipped(&self) -> u64 {
        match self.cycle {
            Some(c) => (self.target - self.simulated) / c.length,
            None => 0,
        }
    }
}

/// Runs a transition function toward a target iteration count, stopping as
/// soon as a state repeats and reading the answer off the recorded cycle.
///
/// The cost is bounded by the pre-cycle prefix plus one full cycle, not by
/// the target.
///
/// # Examples
///
/// ```
/// use gridkit_cycle::Extrapolator;
///
/// // A counter modulo 7 that reports its value times two.
/// let mut extrapolator = Extrapolator::new();
/// let out = extrapolator
///     .run(0u64, 1_000_000_000_000, |s| *s, |s| ((s + 1) % 7, (s + 1) % 7 * 2))
///     .unwrap();
/// assert_eq!(out.state, 1_000_000_000_000 % 7);
/// assert_eq!(out.result, out.state * 2);
/// assert_eq!(out.cycle_length(), 7);
/// assert!(out.simulated <= 7);
/// ```
pub struct Extrapolator<'a, K, S, R> {
    config: ExtrapolationConfig,
    record: CycleRecord<K, S, R>,
    observer: Option<Box<dyn FnMut(u64) + 'a>>,
}

impl<'a, K, S, R> Extrapolator<'a, K, S, R>
where
    K: Hash + Eq,
    S: Clone,
    R: Clone,
{
    /// An extrapolator with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ExtrapolationConfig::default(),
            record: CycleRecord::new(),
            observer: None,
        }
    }

    /// An extrapolator with `config`, checked up front.
    pub fn with_config(config: ExtrapolationConfig) -> Result<Self, CycleError> {
        config.validate()?;
        Ok(Self {
            config,
            record: CycleRecord::new(),
            observer: None,
        })
    }

    /// Call `observer` with the iteration index before every iteration.
    ///
    /// Hosts use this for progress reporting; it cannot alter the run.
    pub fn on_iteration(mut self, observer: impl FnMut(u64) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// What the last run recorded.
    pub fn record(&self) -> &CycleRecord<K, S, R> {
        &self.record
    }

    /// Compute the state and result after `target` applications of `step`,
    /// starting from `initial`.
    ///
    /// `key` projects a state onto whatever part of it decides future
    /// behaviour; two states with equal keys are treated as the same state
    /// even if they differ elsewhere.
    ///
    /// Returns `Err(CycleError::ZeroTarget)` for `target == 0` and
    /// `Err(CycleError::HistoryLimit)` if the configured limit is reached
    /// without a cycle.
    pub fn run(
        &mut self,
        initial: S,
        target: u64,
        mut key: impl FnMut(&S) -> K,
        mut step: impl FnMut(&S) -> (S, R),
    ) -> Result<Extrapolation<S, R>, CycleError> {
        if target == 0 {
            return Err(CycleError::ZeroTarget);
        }
        self.record.clear();

        let mut state = initial;
        let mut iteration: u64 = 0;
        while iteration < target {
            if let Some(observer) = self.observer.as_mut() {
                observer(iteration);
            }

            let i = self.record.len();
            if let Some(first) = self.record.observe(key(&state), i) {
                // The state about to be transformed repeats the one from
                // iteration `first`, so every later result repeats too.
                let cycle = Cycle {
                    start: first as u64,
                    length: iteration - first as u64,
                };
                log::debug!(
                    "cycle of length {} at iteration {iteration} (first seen at {first})",
                    cycle.length
                );
                return Ok(self.from_cycle(cycle, iteration, target));
            }

            if let Some(limit) = self.config.history_limit {
                if i >= limit {
                    return Err(CycleError::HistoryLimit { limit });
                }
            }

            let (next, result) = step(&state);
            self.record.push(next.clone(), result);
            state = next;
            iteration += 1;
            log::trace!("iteration {iteration} of {target}");
        }

        log::debug!("no cycle within {target} iterations");
        let (state, result) = self.record.at(self.record.len() - 1);
        Ok(Extrapolation {
            state: state.clone(),
            result: result.clone(),
            cycle: None,
            simulated: target,
            target,
        })
    }

    fn from_cycle(&self, cycle: Cycle, simulated: u64, target: u64) -> Extrapolation<S, R> {
        let offset = (target - cycle.start - 1) % cycle.length;
        let index = (offset + cycle.start) as usize;
        let (state, result) = self.record.at(index);
        Extrapolation {
            state: state.clone(),
            result: result.clone(),
            cycle: Some(cycle),
            simulated,
            target,
        }
    }
}

impl<K, S, R> Default for Extrapolator<'_, K, S, R>
where
    K: Hash + Eq,
    S: Clone,
    R: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, S, R> fmt::Debug for Extrapolator<'_, K, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extrapolator")
            .field("config", &self.config)
            .field("recorded", &self.record.len())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// One-shot [`Extrapolator::run`] with the default configuration.
pub fn extrapolate<K, S, R>(
    initial: S,
    target: u64,
    key: impl FnMut(&S) -> K,
    step: impl FnMut(&S) -> (S, R),
) -> Result<Extrapolation<S, R>, CycleError>
where
    K: Hash + Eq,
    S: Clone,
    R: Clone,
{
    Extrapolator::new().run(initial, target, key, step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_core::{Direction, Point2};
    use gridkit_test_utils::{init_logging, PeriodicCounter};
    use proptest::prelude::*;
    use std::cell::Cell;

    // ── Cycle arithmetic ────────────────────────────────────────

    #[test]
    fn matches_direct_simulation_at_large_n() {
        init_logging();
        let counter = PeriodicCounter::new(3, 5);
        let out = extrapolate(0, 1000, |s| *s, |s| counter.step(*s)).unwrap();
        assert!(counter.calls() <= 8);
        assert_eq!((out.state, out.result), counter.simulate(1000));
        assert_eq!(out.cycle, Some(Cycle { start: 3, length: 5 }));
        assert_eq!(out.cycle_length(), 5);
    }

    #[test]
    fn target_before_the_cycle_is_plain_simulation() {
        let counter = PeriodicCounter::new(10, 4);
        let out = extrapolate(0, 6, |s| *s, |s| counter.step(*s)).unwrap();
        assert_eq!(out.cycle, None);
        assert_eq!(out.cycle_length(), 1);
        assert_eq!(out.simulated, 6);
        assert_eq!((out.state, out.result), (6, 60));
        assert_eq!(out.remainder(), 0);
        assert_eq!(out.cycles_skipped(), 0);
    }

    #[test]
    fn skipped_and_remaining_transitions_add_up() {
        let counter = PeriodicCounter::new(2, 3);
        let out = extrapolate(0, 20, |s| *s, |s| counter.step(*s)).unwrap();
        // States 0,1,2,3,4 then back to 2: detected at iteration 5.
        assert_eq!(out.simulated, 5);
        assert_eq!(out.cycles_skipped(), 5);
        assert_eq!(out.remainder(), 0);
        assert_eq!(
            out.simulated + out.cycles_skipped() * out.cycle_length() + out.remainder(),
            out.target
        );
    }

    #[test]
    fn partial_cycle_leaves_a_remainder() {
        let counter = PeriodicCounter::new(2, 3);
        let out = extrapolate(0, 21, |s| *s, |s| counter.step(*s)).unwrap();
        assert_eq!(out.simulated, 5);
        assert_eq!(out.cycles_skipped(), 5);
        assert_eq!(out.remainder(), 1);
        assert_eq!(
            out.simulated + out.cycles_skipped() * out.cycle_length() + out.remainder(),
            out.target
        );
        assert_eq!((out.state, out.result), counter.simulate(21));
    }

    #[test]
    fn fixed_point_is_a_cycle_of_one() {
        let out = extrapolate(7u8, u64::MAX, |s| *s, |s| (*s, 'x')).unwrap();
        assert_eq!(out.cycle, Some(Cycle { start: 0, length: 1 }));
        assert_eq!((out.state, out.result), (7, 'x'));
    }

    #[test]
    fn key_may_ignore_part_of_the_state() {
        // A walker turning clockwise each step; elapsed time is carried
        // along but excluded from the key.
        let out = extrapolate(
            (Direction::Up, 0u64),
            1_000_000_001,
            |&(heading, _)| heading,
            |&(heading, t)| {
                let next = (heading.rotate(gridkit_core::Turn::Clockwise), t + 1);
                (next, Point2::from(next.0))
            },
        )
        .unwrap();
        assert_eq!(out.cycle_length(), 4);
        assert_eq!(out.state.0, Direction::Right);
        assert_eq!(out.result, Point2::new(1, 0));
        // Elapsed time comes from the recorded state, not the target.
        assert!(out.state.1 <= 4);
    }

    // ── Configuration and bookkeeping ───────────────────────────

    #[test]
    fn zero_target_rejected() {
        assert_eq!(
            extrapolate(0, 0, |s: &u32| *s, |s| (s + 1, ())),
            Err(CycleError::ZeroTarget)
        );
    }

    #[test]
    fn history_limit_stops_a_long_prefix() {
        let config = ExtrapolationConfig {
            history_limit: Some(10),
        };
        let mut ex = Extrapolator::with_config(config).unwrap();
        let err = ex.run(0u64, 1_000, |s| *s, |s| (s + 1, ())).unwrap_err();
        assert_eq!(err, CycleError::HistoryLimit { limit: 10 });
        assert_eq!(ex.record().len(), 10);

        // A cycle inside the limit still succeeds.
        let out = ex.run(0u64, 1_000, |s| *s, |s| ((s + 1) % 4, ())).unwrap();
        assert_eq!(out.cycle_length(), 4);
    }

    #[test]
    fn invalid_config_rejected_up_front() {
        let config = ExtrapolationConfig {
            history_limit: Some(0),
        };
        assert!(matches!(
            Extrapolator::<u8, u8, u8>::with_config(config),
            Err(CycleError::HistoryLimitZero)
        ));
    }

    #[test]
    fn record_is_reset_between_runs() {
        let mut ex = Extrapolator::new();
        ex.run(0u32, 100, |s| *s, |s| ((s + 1) % 3, *s)).unwrap();
        assert_eq!(ex.record().len(), 3);
        assert_eq!(ex.record().first_seen(&2), Some(2));
        assert_eq!(ex.record().entry(0), Some((&1, &0)));

        ex.run(5u32, 2, |s| *s, |s| (s + 1, *s)).unwrap();
        assert_eq!(ex.record().len(), 2);
        assert_eq!(ex.record().first_seen(&0), None);
    }

    #[test]
    fn observer_sees_every_iteration() {
        let seen = Cell::new(0u64);
        let mut ex = Extrapolator::new().on_iteration(|i| seen.set(i + 1));
        ex.run(0u64, 50, |s| *s, |s| ((s + 1) % 6, ())).unwrap();
        // Iterations 0..=6 run; the last one detects the repeat.
        assert_eq!(seen.get(), 7);
    }

    proptest! {
        #[test]
        fn agrees_with_brute_force(prefix in 0u64..12, period in 1u64..12, target in 1u64..300) {
            let counter = PeriodicCounter::new(prefix, period);
            let expected = counter.simulate(target);
            counter.reset();
            let out = extrapolate(0, target, |s| *s, |s| counter.step(*s)).unwrap();
            prop_assert_eq!((out.state, out.result), expected);
            prop_assert!(counter.calls() as u64 <= prefix + period);
        }
    }
}
