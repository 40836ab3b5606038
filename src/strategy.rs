use hashbrown::HashMap;

use std::fmt::{self, Debug, Formatter};

use crate::point::Point;

/// A traversal strategy. It receives a read-only view of the points and a
/// type-erased callback, and must invoke the callback exactly once for every
/// point, in index order. Strategies differ only in the mechanism they use to
/// walk the slice.
pub type Strategy = fn(&[Point], &mut dyn FnMut(&Point));

/// Advances an explicit iterator with [Iterator::next].
#[allow(clippy::while_let_on_iterator)]
pub fn iterator_next(points: &[Point], callback: &mut dyn FnMut(&Point)) {
    let mut iter = points.iter();

    while let Some(point) = iter.next() {
        callback(point);
    }
}

/// A plain `for` loop over the slice.
pub fn for_loop(points: &[Point], callback: &mut dyn FnMut(&Point)) {
    for point in points {
        callback(point);
    }
}

/// Copies the points into a private vector first and consumes that copy.
pub fn for_loop_owned_copy(points: &[Point],
        callback: &mut dyn FnMut(&Point)) {
    for point in points.to_vec() {
        callback(&point);
    }
}

/// Iterates over the points by value.
pub fn copied_iterator(points: &[Point], callback: &mut dyn FnMut(&Point)) {
    for point in points.iter().copied() {
        callback(&point);
    }
}

/// Hands the callback to [Iterator::for_each].
pub fn for_each(points: &[Point], callback: &mut dyn FnMut(&Point)) {
    points.iter().for_each(callback);
}

/// Drives the traversal through [Iterator::fold] with a unit accumulator.
pub fn fold(points: &[Point], callback: &mut dyn FnMut(&Point)) {
    points.iter().fold((), |(), point| callback(point));
}

/// Counts an index up to the length and accesses `points[index]`.
#[allow(clippy::needless_range_loop)]
pub fn index_operator(points: &[Point], callback: &mut dyn FnMut(&Point)) {
    for index in 0..points.len() {
        callback(&points[index]);
    }
}

/// Counts an index up to the length and accesses the point with the checked
/// [slice::get].
///
/// # Panics
///
/// If [slice::get] reports an index below the length as out of bounds.
pub fn checked_get(points: &[Point], callback: &mut dyn FnMut(&Point)) {
    for index in 0..points.len() {
        callback(points.get(index).expect("index below length is in bounds"));
    }
}

/// Counts an index up to the length and accesses the point with
/// [slice::get_unchecked].
pub fn unchecked_get(points: &[Point], callback: &mut dyn FnMut(&Point)) {
    for index in 0..points.len() {
        callback(unsafe { points.get_unchecked(index) });
    }
}

/// Walks a raw pointer from the start of the slice to its end, which is
/// computed once before the loop.
pub fn pointer_cursor(points: &[Point], callback: &mut dyn FnMut(&Point)) {
    let range = points.as_ptr_range();
    let end = range.end;
    let mut cursor = range.start;

    while cursor != end {
        unsafe {
            callback(&*cursor);
            cursor = cursor.add(1);
        }
    }
}

/// The built-in strategies with their display names.
pub const STANDARD_STRATEGIES: &[(&str, Strategy)] = &[
    ("iterator next", iterator_next),
    ("for loop", for_loop),
    ("for loop over owned copy", for_loop_owned_copy),
    ("copied iterator", copied_iterator),
    ("for_each", for_each),
    ("fold", fold),
    ("index operator", index_operator),
    ("get", checked_get),
    ("get_unchecked", unchecked_get),
    ("pointer cursor", pointer_cursor)
];

/// A mapping from human-readable names to [Strategy] values. The order in
/// which strategies are registered is irrelevant, each one is run
/// independently. [StrategyRegistry::sorted] provides a stable order for
/// reporting.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: HashMap<&'static str, Strategy>
}

impl StrategyRegistry {

    /// Creates a new, empty registry.
    pub fn new() -> StrategyRegistry {
        StrategyRegistry {
            strategies: HashMap::new()
        }
    }

    /// Creates a registry containing all [STANDARD_STRATEGIES].
    ///
    /// # Example
    ///
    /// ```
    /// use foreach_bench::StrategyRegistry;
    ///
    /// let registry = StrategyRegistry::standard();
    ///
    /// assert!(registry.get("for loop").is_some());
    /// assert!(registry.get("while loop").is_none());
    /// ```
    pub fn standard() -> StrategyRegistry {
        let mut registry = StrategyRegistry::new();

        for &(name, strategy) in STANDARD_STRATEGIES {
            registry.register(name, strategy);
        }

        registry
    }

    /// Registers `strategy` under `name`. If the name was already taken, the
    /// previously registered strategy is replaced and returned.
    pub fn register(&mut self, name: &'static str, strategy: Strategy)
            -> Option<Strategy> {
        self.strategies.insert(name, strategy)
    }

    /// Gets the strategy registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Strategy> {
        self.strategies.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// All registered strategies ordered by name.
    pub fn sorted(&self) -> Vec<(&'static str, Strategy)> {
        let mut strategies = self.strategies.iter()
            .map(|(&name, &strategy)| (name, strategy))
            .collect::<Vec<_>>();
        strategies.sort_unstable_by_key(|&(name, _)| name);
        strategies
    }
}

impl Debug for StrategyRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.sorted().into_iter().map(|(name, _)| name))
            .finish()
    }
}
