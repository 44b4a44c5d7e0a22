//! Generic geometry primitives.
//!
//! Fixed-dimension [`Point`]s and [`Vector`]s, plus [`LineSegment`], [`Ray`]
//! and 2D [`Polygon`] with intersection and containment queries. All
//! comparisons against zero use a fixed tolerance ([`math::TOLERANCE`]), not
//! exact predicates.
//!
//! ```
//! use geoprim::{LineSegment, Point};
//!
//! let a = LineSegment::new(Point::new([0.0, 0.0]), Point::new([4.0, 0.0]));
//! let b = LineSegment::new(Point::new([2.0, -2.0]), Point::new([2.0, 2.0]));
//! assert_eq!(a.intersect(&b), Some(Point::new([2.0, 0.0])));
//! ```

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeoprimError, Result};
pub use geometry::{LineSegment, Point, Polygon, Ray, Vector};
pub use math::{Coord, Tolerance};
