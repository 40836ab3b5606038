//! This crate measures how different ways of traversing a large slice compare
//! in performance. A [Dataset] of points `(i, i)` is generated once, and every
//! registered [Strategy] walks it while a per-element callback tracks the
//! running minimum, maximum, and sum of the coordinates in an [Accumulator].
//!
//! All strategies perform the same single forward pass over the same plain
//! data, they only differ in the traversal mechanism: iterators, index
//! arithmetic, checked and unchecked access, bulk-apply adapters, or raw
//! pointers. Since the dataset is known, the correct statistics of a full
//! traversal follow in closed form. The [Oracle] checks every trial against
//! them, so a strategy that skips or repeats points is reported as a
//! [HarnessError::CorrectnessViolation] instead of producing a misleading
//! timing.
//!
//! The timings themselves are collected by the criterion bench under
//! `benches/`, which runs each strategy of a [Harness] as its own row.
//!
//! # Example
//!
//! ```
//! use foreach_bench::{Harness, Point, StrategyRegistry};
//!
//! fn while_loop(points: &[Point], callback: &mut dyn FnMut(&Point)) {
//!     let mut index = 0;
//!
//!     while index < points.len() {
//!         callback(&points[index]);
//!         index += 1;
//!     }
//! }
//!
//! fn skip_first(points: &[Point], callback: &mut dyn FnMut(&Point)) {
//!     for point in points.iter().skip(1) {
//!         callback(point);
//!     }
//! }
//!
//! let mut strategies = StrategyRegistry::standard();
//! strategies.register("skip first", skip_first);
//!
//! let harness = Harness::with_strategies(5, strategies);
//! let accumulator = harness.run_trial("while loop", while_loop).unwrap();
//!
//! assert_eq!(0, accumulator.min());
//! assert_eq!(4, accumulator.max());
//! assert_eq!(10, accumulator.sum());
//!
//! let failed = harness.verify_all()
//!     .into_iter()
//!     .filter(|outcome| !outcome.passed())
//!     .map(|outcome| outcome.strategy)
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(vec!["skip first"], failed);
//! ```

mod accumulator;
mod config;
mod error;
mod harness;
mod point;
pub mod strategy;


pub use accumulator::{Accumulator, Oracle};
pub use config::{DEFAULT_COUNT, HarnessConfig};
pub use error::{HarnessError, HarnessResult, Statistic};
pub use harness::{Harness, TrialOutcome};
pub use point::{Dataset, Point};
pub use strategy::{Strategy, StrategyRegistry, STANDARD_STRATEGIES};
