use std::process;

use criterion::Criterion;

use foreach_bench::{Harness, HarnessConfig};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod traversal;
mod trial_extensions;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    init_tracing();

    let config = HarnessConfig::default();
    let harness = Harness::setup(config.count);
    let mut criterion = Criterion::default().configure_from_args();

    info!(count = config.count, strategies = harness.strategies().len(),
        expected_sum = harness.oracle().expected().sum(),
        "starting traversal benchmark");

    let outcomes =
        traversal::traversal_benchmark(&mut criterion, &harness, &config);
    criterion.final_summary();

    let failed = outcomes.iter()
        .filter(|outcome| !outcome.passed())
        .count();

    if failed > 0 {
        error!(failed, total = outcomes.len(), "strategies failed verification");
        process::exit(1);
    }

    info!(total = outcomes.len(), "all strategies passed verification");
}
