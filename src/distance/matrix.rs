//! Dense distance matrix over a point set.

use crate::models::Point;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Rows and columns are positions in the point slice the matrix was built
/// from, so coincident points keep separate entries.
///
/// # Examples
///
/// ```
/// use tour_heuristics::models::Point;
/// use tour_heuristics::distance::DistanceMatrix;
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 8.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.tour_length(&[0, 1, 2]) - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix from point coordinates.
    pub fn from_points(points: &[Point]) -> Self {
        let size = points.len();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = points[i].distance_to(points[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { data, size }
    }

    /// Distance between the points at positions `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of the closed tour visiting `order` (positions into the matrix).
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        let open: f64 = order.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(order[order.len() - 1], order[0])
    }
}
