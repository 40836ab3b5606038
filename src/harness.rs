use std::fmt::{self, Debug, Formatter};
use std::hint;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::accumulator::{Accumulator, Oracle};
use crate::error::HarnessResult;
use crate::point::{Dataset, Point};
use crate::strategy::{Strategy, StrategyRegistry};

/// The result of verifying a single strategy with [Harness::verify_all].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrialOutcome {

    /// The name under which the strategy is registered.
    pub strategy: &'static str,

    /// The final accumulator if the traversal was correct, otherwise the
    /// violation.
    pub result: HarnessResult<Accumulator>
}

impl TrialOutcome {

    /// Indicates whether the strategy matched the oracle.
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Owns the dataset and the strategy table, and runs trials that traverse the
/// dataset with a strategy and verify the result against the [Oracle].
///
/// The dataset is generated once on construction and only ever lent out as a
/// shared slice afterwards, so no trial can observe changes made by another.
pub struct Harness {
    dataset: Dataset,
    oracle: Oracle,
    strategies: StrategyRegistry
}

impl Harness {

    /// Generates a dataset of `count` points and registers the
    /// [standard strategies](StrategyRegistry::standard).
    ///
    /// # Example
    ///
    /// ```
    /// use foreach_bench::Harness;
    ///
    /// let harness = Harness::setup(1000);
    ///
    /// for outcome in harness.verify_all() {
    ///     assert!(outcome.passed(), "{} failed", outcome.strategy);
    /// }
    /// ```
    pub fn setup(count: usize) -> Harness {
        Harness::with_strategies(count, StrategyRegistry::standard())
    }

    /// Generates a dataset of `count` points and uses the given strategies.
    pub fn with_strategies(count: usize, strategies: StrategyRegistry)
            -> Harness {
        debug!(count, strategies = strategies.len(), "generating dataset");

        let dataset = Dataset::generate(count);
        let oracle = Oracle::for_dataset(&dataset);

        Harness {
            dataset,
            oracle,
            strategies
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn oracle(&self) -> &Oracle {
        &self.oracle
    }

    pub fn strategies(&self) -> &StrategyRegistry {
        &self.strategies
    }

    /// Runs a single trial: a fresh [Accumulator] observes every point the
    /// strategy hands to its callback, and the final state is checked against
    /// the oracle.
    ///
    /// # Errors
    ///
    /// [HarnessError::CorrectnessViolation](crate::HarnessError) if the
    /// traversal skipped, repeated, or invented points.
    pub fn run_trial(&self, name: &'static str, strategy: Strategy)
            -> HarnessResult<Accumulator> {
        let mut accumulator = Accumulator::new();

        strategy(self.dataset.points(),
            &mut |point: &Point| accumulator.observe(point));

        if let Err(violation) = self.oracle.check(name, &accumulator) {
            warn!(strategy = name, %violation, "correctness violation");
            return Err(violation);
        }

        Ok(accumulator)
    }

    /// Runs `iterations` trials of `strategy` back to back and returns the
    /// total time spent inside them.
    ///
    /// # Errors
    ///
    /// The first [HarnessError::CorrectnessViolation](crate::HarnessError).
    /// No further trials are run after it and the time measured so far is
    /// discarded, as it belongs to an incorrect traversal.
    pub fn time_trials(&self, name: &'static str, strategy: Strategy,
            iterations: u64) -> HarnessResult<Duration> {
        let mut total = Duration::ZERO;

        for _ in 0..iterations {
            let start = Instant::now();
            let result = self.run_trial(name, strategy);
            total += start.elapsed();

            hint::black_box(result?);
        }

        Ok(total)
    }

    /// Runs one trial for every registered strategy, ordered by name. A
    /// violation is recorded in the outcome of its strategy and does not
    /// prevent the remaining strategies from running.
    pub fn verify_all(&self) -> Vec<TrialOutcome> {
        self.strategies.sorted()
            .into_iter()
            .map(|(strategy, function)| {
                debug!(strategy, "verifying");

                TrialOutcome {
                    strategy,
                    result: self.run_trial(strategy, function)
                }
            })
            .collect()
    }
}

impl Debug for Harness {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harness")
            .field("count", &self.dataset.len())
            .field("strategies", &self.strategies)
            .finish()
    }
}
