use nalgebra as na;
use rand::Rng;

use quickhull2d::ConvexHull;

fn main() {
    let mut rng = rand::thread_rng();
    let (low, high) = (0.0, 200.0);
    let points: Vec<_> = (0..20)
        .map(|_| na::Point2::new(rng.gen_range(low..high), rng.gen_range(low..high)))
        .collect();

    let hull = match ConvexHull::quickhull(&points) {
        Ok(hull) => hull,
        Err(e) => {
            eprintln!("no hull: {}", e);
            return;
        }
    };

    println!("Convex hull points:");
    for p in hull.vertices() {
        println!("  ({:.3}, {:.3})", p.x, p.y);
    }
    println!("Edges to draw:");
    for (a, b) in hull.edges() {
        println!("  ({:.3}, {:.3}) -> ({:.3}, {:.3})", a.x, a.y, b.x, b.y);
    }
    println!("Area: {:.3}", hull.area());
}
