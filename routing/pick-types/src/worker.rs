//! Worker positions.

use nalgebra::Point2;

/// A worker's position at the moment a route is requested.
///
/// Workers are owned by the tracking system; routing only ever borrows a
/// snapshot slice for the duration of one call.
///
/// # Example
///
/// ```
/// use pick_types::Worker;
///
/// let worker = Worker::new("w-17", 120.0, 40.0);
/// assert_eq!(worker.id(), "w-17");
/// assert_eq!(worker.position().x, 120.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worker {
    id: String,
    position: Point2<f64>,
}

impl Worker {
    /// Creates a worker at plane coordinates.
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self::at(id, Point2::new(x, y))
    }

    /// Creates a worker at a point.
    #[must_use]
    pub fn at(id: impl Into<String>, position: Point2<f64>) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }

    /// Returns the worker id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the worker position.
    #[must_use]
    pub const fn position(&self) -> &Point2<f64> {
        &self.position
    }

    /// Euclidean distance from the worker to a point.
    #[must_use]
    pub fn distance_to(&self, point: &Point2<f64>) -> f64 {
        nalgebra::distance(&self.position, point)
    }
}
