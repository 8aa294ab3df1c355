//! Geometric primitives for layout analysis.
//!
//! Boxes use the `(x0, y0, x1, y1)` convention of the upstream layout source:
//! `x0`/`y0` are the minimum coordinates and `x1`/`y1` the maximum ones. The
//! direction of the y axis is whatever the source uses; for PDF-derived layouts
//! the origin sits at the bottom-left of the page, so a large `y1` means "near
//! the top".

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// An axis-aligned bounding box in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum x coordinate
    pub x0: f64,
    /// Minimum y coordinate
    pub y0: f64,
    /// Maximum x coordinate
    pub x1: f64,
    /// Maximum y coordinate
    pub y1: f64,
}

impl Rect {
    /// Create a new box from its corner coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use contract_oxide::geometry::Rect;
    ///
    /// let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The box as an `(x0, y0, x1, y1)` tuple.
    pub fn to_tuple(&self) -> (f64, f64, f64, f64) {
        (self.x0, self.y0, self.x1, self.y1)
    }

    /// Compute the union of this box with another.
    ///
    /// Returns the smallest box that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// use contract_oxide::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// let r2 = Rect::new(5.0, 5.0, 20.0, 20.0);
    /// assert_eq!(r1.union(&r2), Rect::new(0.0, 0.0, 20.0, 20.0));
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Smallest box enclosing every box in `rects`, or `None` when there are none.
    pub fn enclosing<I>(rects: I) -> Option<Rect>
    where
        I: IntoIterator,
        I::Item: Borrow<Rect>,
    {
        rects
            .into_iter()
            .map(|r| {
                let r: &Rect = r.borrow();
                *r
            })
            .reduce(|acc, r| acc.union(&r))
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    fn from((x0, y0, x1, y1): (f64, f64, f64, f64)) -> Self {
        Rect::new(x0, y0, x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let r = Rect::new(5.0, 10.0, 105.0, 60.0);
        assert_eq!(r.x0, 5.0);
        assert_eq!(r.y0, 10.0);
        assert_eq!(r.x1, 105.0);
        assert_eq!(r.y1, 60.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
    }

    #[test]
    fn test_rect_from_tuple() {
        let r: Rect = (1.0, 2.0, 3.0, 4.0).into();
        assert_eq!(r.to_tuple(), (1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_rect_union() {
        let r1 = Rect::new(0.0, 0.0, 50.0, 50.0);
        let r2 = Rect::new(25.0, -5.0, 75.0, 40.0);
        let union = r1.union(&r2);

        assert_eq!(union, Rect::new(0.0, -5.0, 75.0, 50.0));
        assert_eq!(r2.union(&r1), union);
    }

    #[test]
    fn test_enclosing() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 20.0, 20.0),
        ];
        assert_eq!(Rect::enclosing(&rects), Some(Rect::new(0.0, 0.0, 20.0, 20.0)));
    }

    #[test]
    fn test_enclosing_owned_boxes() {
        let rects = vec![Rect::new(3.0, 1.0, 4.0, 2.0), Rect::new(-1.0, 0.5, 2.0, 8.0)];
        assert_eq!(Rect::enclosing(rects), Some(Rect::new(-1.0, 0.5, 4.0, 8.0)));
    }

    #[test]
    fn test_enclosing_empty() {
        let rects: [Rect; 0] = [];
        assert_eq!(Rect::enclosing(&rects), None);
    }
}
