use std::slice;

/// An immutable pair of coordinates. Points are created once while generating
/// a [Dataset] and never modified afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64
}

impl Point {

    /// Creates a new point with the given coordinates.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// The x-coordinate of this point.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y-coordinate of this point.
    pub fn y(&self) -> f64 {
        self.y
    }
}

/// The ordered, read-only input that every strategy traverses. The element at
/// index `i` is always `Point(i, i)`, which makes the aggregate statistics of
/// a full traversal computable in closed form (see [Oracle](crate::Oracle)).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    points: Vec<Point>
}

impl Dataset {

    /// Generates a dataset of `count` points, where the point at index `i` has
    /// both coordinates equal to `i`.
    ///
    /// # Example
    ///
    /// ```
    /// use foreach_bench::{Dataset, Point};
    ///
    /// let dataset = Dataset::generate(3);
    ///
    /// assert_eq!(3, dataset.len());
    /// assert_eq!(Point::new(2.0, 2.0), dataset.points()[2]);
    /// ```
    pub fn generate(count: usize) -> Dataset {
        let mut points = Vec::with_capacity(count);

        for i in 0..count {
            points.push(Point::new(i as f64, i as f64));
        }

        Dataset { points }
    }

    /// The number of points in this dataset.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Indicates whether this dataset contains no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A read-only view of the points, in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// An iterator over the points, in index order.
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl AsRef<[Point]> for Dataset {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> slice::Iter<'a, Point> {
        self.iter()
    }
}
