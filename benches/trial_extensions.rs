use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::WallTime;

use foreach_bench::{Harness, HarnessError, HarnessResult, Strategy};

use tracing::error;

/// A trait with harness-related extensions for [BenchmarkGroup].
pub(crate) trait TrialBenchmarkGroup {

    /// Benchmarks `strategy` under the id `name`. Every iteration is a full
    /// trial of the `harness`, including the correctness check. The first
    /// violation stops the row from running any further trials and is
    /// returned after the measurement. It is logged as soon as it occurs, so
    /// the report criterion prints for the row afterwards is marked void.
    fn bench_strategy(&mut self, harness: &Harness, name: &'static str,
        strategy: Strategy) -> HarnessResult<()>;
}

impl<'a> TrialBenchmarkGroup for BenchmarkGroup<'a, WallTime> {

    fn bench_strategy(&mut self, harness: &Harness, name: &'static str,
        strategy: Strategy) -> HarnessResult<()>
    {
        let mut violation: Option<HarnessError> = None;

        self.bench_function(name, |bencher| bencher.iter_custom(|iter_count| {
            if violation.is_some() {
                return Duration::ZERO;
            }

            match harness.time_trials(name, strategy, iter_count) {
                Ok(total) => total,
                Err(error) => {
                    error!(strategy = name, %error,
                        "timing of this row is void");
                    violation = Some(error);
                    Duration::ZERO
                }
            }
        }));

        match violation {
            Some(error) => Err(error),
            None => Ok(())
        }
    }
}
