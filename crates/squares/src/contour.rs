use glam::Vec2;
use itertools::Itertools;
use serde::Serialize;

/// One traced boundary.
///
/// A closed contour is implicitly joined from its last point back to its
/// first; the closing point is not repeated. An open contour runs from one
/// grid border crossing to another.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contour {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

impl Contour {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, including the closing segment of a closed
    /// contour.
    pub fn segments(&self) -> Vec<(Vec2, Vec2)> {
        if self.closed {
            self.points
                .iter()
                .copied()
                .circular_tuple_windows()
                .collect()
        } else {
            self.points.iter().copied().tuple_windows().collect()
        }
    }

    /// Shoelace area, positive for counter-clockwise winding. Open contours
    /// are measured as if closed.
    pub fn signed_area(&self) -> f32 {
        if self.points.len() < 3 {
            return 0.0;
        }
        0.5 * self
            .points
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| a.perp_dot(*b))
            .sum::<f32>()
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn perimeter(&self) -> f32 {
        self.segments().iter().map(|(a, b)| a.distance(*b)).sum()
    }
}
