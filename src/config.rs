use std::time::Duration;

/// The number of points in the dataset of a default run.
pub const DEFAULT_COUNT: usize = 1_000_000;

/// Settings of a benchmark run. There are no flags or environment variables
/// for these, a run always uses [HarnessConfig::default] unless the caller
/// builds its own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarnessConfig {

    /// The number of points to generate.
    pub count: usize,

    /// The number of samples the timing facility collects per strategy.
    pub sample_size: usize,

    /// How long each strategy runs before measurement starts.
    pub warm_up_time: Duration,

    /// The target duration of the measurement of each strategy.
    pub measurement_time: Duration
}

impl HarnessConfig {

    /// Returns this config with the dataset size replaced by `count`.
    pub fn with_count(mut self, count: usize) -> HarnessConfig {
        self.count = count;
        self
    }
}

impl Default for HarnessConfig {
    fn default() -> HarnessConfig {
        HarnessConfig {
            count: DEFAULT_COUNT,
            sample_size: 50,
            warm_up_time: Duration::from_secs(1),
            measurement_time: Duration::from_secs(5)
        }
    }
}
