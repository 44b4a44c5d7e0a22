//! Walks through the primitives and prints each result.
//!
//! ```text
//! cargo run --example tour
//! RUST_LOG=geoprim=trace cargo run --example tour
//! ```

use geoprim::{LineSegment, Point, Polygon, Ray, Result, Vector};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for geoprim.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geoprim=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geoprim=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let v1 = Vector::new([3.0_f32, 4.0]);
    let v2 = Vector::new([1.0_f32, 2.0]);
    println!("v1 = {v1}, v2 = {v2}");
    println!("v1 + v2 = {}, v1 - v2 = {}", v1 + v2, v1 - v2);
    println!("dot = {}, cross = {}", v1.dot(&v2), v1.cross_2d(&v2));
    println!("|v1| = {}, v1 normalized = {}", v1.magnitude(), v1.normalized()?);
    println!("v1 moved = {}", v1.moved(0.0, 0.0, 0.0, 5.0));
    let c = Vector::cross_product(&Vector::new([1.0, 2.0, 3.0]), &Vector::new([4.0, 5.0, 6.0]));
    println!("3D cross = {c}");

    let r1 = Ray::new(Point::new([0.0, 0.0]), Vector::new([1.0, 1.0]));
    let r2 = Ray::new(Point::new([3.0, 0.0]), Vector::new([-1.0, 1.0]));
    println!("{r1}\n{r2}");
    match r1.intersect_ray(&r2) {
        Some(t) => println!("rays meet at t = {t}, point {}", r1.at(t)),
        None => println!("rays do not meet"),
    }
    let seg = LineSegment::new(Point::new([1.0, 0.0]), Point::new([1.0, 3.0]));
    if let Some(t) = r1.intersect_segment(&seg) {
        println!("ray hits {seg} at t = {t}, point {}", r1.at(t));
    }

    let tri: Polygon<f64> = [[0.0, 0.0], [4.0, 0.0], [2.0, 3.0]]
        .into_iter()
        .map(Point::new)
        .collect();
    let quad: Polygon<f64> = [[1.0, 1.0], [3.0, 1.0], [3.0, 2.0], [1.0, 2.0]]
        .into_iter()
        .map(Point::new)
        .collect();
    println!("{tri}");
    println!("area = {}, convex = {}", tri.area(), tri.is_convex());
    println!("inside (2, 1) = {}", tri.is_inside(&Point::new([2.0, 1.0])));
    println!("normal[0] = {}", tri.normal(0)?);
    let cut = LineSegment::new(Point::new([-1.0, 1.0]), Point::new([5.0, 1.0]));
    if let Some(hit) = tri.intersect_segment(&cut) {
        println!("segment hits at {hit}");
    }
    println!("tri ∩ quad = {}", tri.intersects(&quad));

    Ok(())
}
