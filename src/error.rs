use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The aggregate statistics of an [Accumulator](crate::Accumulator) that the
/// [Oracle](crate::Oracle) compares.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Statistic {

    /// The running minimum over all x-coordinates.
    Minimum,

    /// The running maximum over all y-coordinates.
    Maximum,

    /// The sum over all x-coordinates.
    Sum,

    /// The number of times the per-element callback was invoked.
    Visits
}

impl Display for Statistic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Minimum => write!(f, "minimum"),
            Statistic::Maximum => write!(f, "maximum"),
            Statistic::Sum => write!(f, "sum"),
            Statistic::Visits => write!(f, "visits")
        }
    }
}

/// An enumeration of the different errors that can occur while running a
/// trial of the [Harness](crate::Harness).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HarnessError {

    /// This error is raised if the statistics a strategy computed do not
    /// match the closed-form expectation for the dataset. A timing attached
    /// to such a traversal is meaningless, so the affected row is flagged.
    CorrectnessViolation {

        /// The name of the strategy whose traversal was incorrect.
        strategy: &'static str,

        /// The first statistic which diverged.
        statistic: Statistic,

        /// The value the oracle expected.
        expected: i64,

        /// The value the traversal produced.
        actual: i64
    }
}

impl Display for HarnessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::CorrectnessViolation {
                strategy,
                statistic,
                expected,
                actual
            } => write!(f,
                "strategy `{}` computed {} = {}, expected {}",
                strategy, statistic, actual, expected)
        }
    }
}

impl Error for HarnessError { }

/// Syntactic sugar for `Result<T, HarnessError>`.
pub type HarnessResult<T> = Result<T, HarnessError>;
