//! Convex Hull サンプル

use crate::catalog::SampleCandidate;
use crate::error::Result;
use crate::sample::{SampleContext, SampleFactory, SampleMetadata, SampleView};

const NAMESPACE: &str = "samples::GeometryEngine";

pub fn candidate() -> SampleCandidate {
    SampleCandidate::new(NAMESPACE, SampleFactory::of::<ConvexHull>())
        .with_metadata(
            SampleMetadata::new(
                "Convex Hull",
                "Create a convex hull for a given set of points. The hull is a polygon with \
                 the minimum area that encloses every input point.",
                "Points are placed on a grid. The hull vertices are listed in \
                 counter-clockwise order starting from the lowest, leftmost point.",
            )
            .with_tags(["Analysis", "ConvexHull", "GeometryEngine", "polygon"]),
        )
        .with_path(file!())
        .with_image("convex_hull.jpg")
}

/// 平面上の点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// o→a と o→b の外積（正なら反時計回り）
fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Andrew's monotone chain による凸包
///
/// 反時計回り、最下端（同値なら最左端）の点から開始する。
/// 一直線上の点は端点のみを残す。
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<Point> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);

    // 開始点を最下端・最左端に揃える
    if let Some(start) = lower
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)))
        .map(|(i, _)| i)
    {
        lower.rotate_left(start);
    }
    lower
}

/// 多角形の面積（shoelace formula）
pub fn polygon_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let twice: f64 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice.abs() / 2.0
}

const INPUT: [Point; 9] = [
    Point::new(-3.0, 1.0),
    Point::new(-1.0, 4.0),
    Point::new(0.0, 0.0),
    Point::new(1.0, 2.0),
    Point::new(2.0, -2.0),
    Point::new(3.0, 3.0),
    Point::new(4.0, 0.0),
    Point::new(1.0, -1.0),
    Point::new(-2.0, -1.0),
];

#[derive(Debug, Default)]
pub struct ConvexHull;

impl SampleView for ConvexHull {
    fn title(&self) -> &str {
        "Convex Hull"
    }

    fn render(&self, _ctx: &SampleContext) -> Result<Vec<String>> {
        let hull = convex_hull(&INPUT);

        let mut lines = vec![format!("Input points: {}", INPUT.len())];
        lines.extend(INPUT.iter().map(|p| format!("  ({:>5.1}, {:>5.1})", p.x, p.y)));
        lines.push(format!("Hull vertices: {}", hull.len()));
        lines.extend(hull.iter().map(|p| format!("  ({:>5.1}, {:>5.1})", p.x, p.y)));
        lines.push(format!("Hull area: {:.2}", polygon_area(&hull)));
        Ok(lines)
    }
}
