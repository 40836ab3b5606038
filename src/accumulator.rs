use crate::error::{HarnessError, HarnessResult, Statistic};
use crate::point::{Dataset, Point};

/// The transient state of a single trial: a running minimum over the
/// x-coordinates, a running maximum over the y-coordinates, the sum of the
/// x-coordinates, and the number of visited points. A fresh accumulator is
/// created for every trial.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Accumulator {
    min: i64,
    max: i64,
    sum: i64,
    visits: usize
}

impl Accumulator {

    /// Creates an accumulator that has not observed any points yet. The
    /// minimum starts at [i64::MAX] and the maximum at [i64::MIN], so the first
    /// observed point replaces both.
    pub fn new() -> Accumulator {
        Accumulator {
            min: i64::MAX,
            max: i64::MIN,
            sum: 0,
            visits: 0
        }
    }

    /// Updates the statistics with the given point. Coordinates are truncated
    /// towards zero.
    ///
    /// # Example
    ///
    /// ```
    /// use foreach_bench::{Accumulator, Point};
    ///
    /// let mut accumulator = Accumulator::new();
    /// accumulator.observe(&Point::new(3.0, 7.0));
    /// accumulator.observe(&Point::new(1.0, 2.0));
    ///
    /// assert_eq!(1, accumulator.min());
    /// assert_eq!(7, accumulator.max());
    /// assert_eq!(4, accumulator.sum());
    /// assert_eq!(2, accumulator.visits());
    /// ```
    #[inline]
    pub fn observe(&mut self, point: &Point) {
        let x = point.x() as i64;
        let y = point.y() as i64;

        if x < self.min {
            self.min = x;
        }

        if y > self.max {
            self.max = y;
        }

        self.sum += x;
        self.visits += 1;
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// The number of times [Accumulator::observe] was called.
    pub fn visits(&self) -> usize {
        self.visits
    }

    fn statistic(&self, statistic: Statistic) -> i64 {
        match statistic {
            Statistic::Minimum => self.min,
            Statistic::Maximum => self.max,
            Statistic::Sum => self.sum,
            Statistic::Visits => self.visits as i64
        }
    }
}

impl Default for Accumulator {
    fn default() -> Accumulator {
        Accumulator::new()
    }
}

/// The closed-form expectation for a full forward traversal of a dataset
/// generated by [Dataset::generate]. Since the point at index `i` is
/// `Point(i, i)`, the minimum is `0`, the maximum is `count - 1`, and the sum
/// is the arithmetic series `(min + max) * count / 2`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Oracle {
    count: usize
}

impl Oracle {

    /// Creates an oracle for a generated dataset with `count` points.
    pub fn new(count: usize) -> Oracle {
        Oracle { count }
    }

    /// Creates an oracle for the given dataset.
    pub fn for_dataset(dataset: &Dataset) -> Oracle {
        Oracle::new(dataset.len())
    }

    /// The number of points this oracle expects to be visited.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The accumulator state a correct traversal ends with. For an empty
    /// dataset, this is the untouched state of [Accumulator::new].
    pub fn expected(&self) -> Accumulator {
        if self.count == 0 {
            return Accumulator::new();
        }

        let count = self.count as i64;
        let min = 0;
        let max = count - 1;

        Accumulator {
            min,
            max,
            sum: (min + max) * count / 2,
            visits: self.count
        }
    }

    /// Compares the given accumulator against [Oracle::expected]. The minimum,
    /// maximum, sum, and visit count are checked in that order and the first
    /// mismatch is reported.
    ///
    /// # Errors
    ///
    /// [HarnessError::CorrectnessViolation] naming `strategy` and the first
    /// diverging statistic.
    pub fn check(&self, strategy: &'static str, actual: &Accumulator)
            -> HarnessResult<()> {
        let expected = self.expected();
        let statistics = [
            Statistic::Minimum,
            Statistic::Maximum,
            Statistic::Sum,
            Statistic::Visits
        ];

        for statistic in statistics {
            let expected_value = expected.statistic(statistic);
            let actual_value = actual.statistic(statistic);

            if expected_value != actual_value {
                return Err(HarnessError::CorrectnessViolation {
                    strategy,
                    statistic,
                    expected: expected_value,
                    actual: actual_value
                });
            }
        }

        Ok(())
    }
}
