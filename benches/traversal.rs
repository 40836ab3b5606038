use criterion::{Criterion, Throughput};

use foreach_bench::{Harness, HarnessConfig, TrialOutcome};

use tracing::{error, info};

use crate::trial_extensions::TrialBenchmarkGroup;

/// Runs every strategy of the harness as a row of the `foreach` group. A row
/// is only timed if a verification trial passes first.
pub(crate) fn traversal_benchmark(c: &mut Criterion, harness: &Harness,
        config: &HarnessConfig) -> Vec<TrialOutcome> {
    let mut group = c.benchmark_group("foreach");
    group.sample_size(config.sample_size)
        .warm_up_time(config.warm_up_time)
        .measurement_time(config.measurement_time)
        .throughput(Throughput::Elements(harness.dataset().len() as u64));

    let mut outcomes = Vec::new();

    for (name, strategy) in harness.strategies().sorted() {
        let result = harness.run_trial(name, strategy)
            .and_then(|accumulator| group.bench_strategy(harness, name, strategy)
                .map(|_| accumulator));

        match &result {
            Ok(_) => info!(strategy = name, "passed"),
            Err(violation) =>
                error!(strategy = name, %violation, "failed")
        }

        outcomes.push(TrialOutcome {
            strategy: name,
            result
        });
    }

    group.finish();
    outcomes
}
