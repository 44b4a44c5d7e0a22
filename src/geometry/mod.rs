mod format;
mod point;
mod polygon;
mod ray;
mod segment;
mod vector;

pub use point::Point;
pub use polygon::Polygon;
pub use ray::Ray;
pub use segment::LineSegment;
pub use vector::Vector;

