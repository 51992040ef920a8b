//! Contour geometry types

use imageproc::point::Point;

/// Axis-aligned pixel extent of a contour.
///
/// `width` and `height` count pixels inclusively, so a single point is 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Closed outline of one connected foreground region.
///
/// Points are in tracing order. Straight runs are stored by their end points only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    /// Builds a contour from a dense 8-connected chain, dropping repeated points and
    /// interior points of straight runs. The traced polygon is unchanged.
    pub fn from_chain(chain: Vec<Point<i32>>) -> Self {
        Self {
            points: compress_chain(chain),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enclosed polygon area (shoelace formula), always non-negative.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }

        let twice_signed: i64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y)
            })
            .sum();

        twice_signed.unsigned_abs() as f64 / 2.0
    }

    /// Perimeter of the closed polygon, including the closing segment.
    pub fn arc_length(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }

        (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                f64::from(b.x - a.x).hypot(f64::from(b.y - a.y))
            })
            .sum()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let Some(first) = self.points.first() else {
            return BoundingBox::default();
        };

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        BoundingBox {
            x: min_x,
            y: min_y,
            width: (max_x - min_x) as u32 + 1,
            height: (max_y - min_y) as u32 + 1,
        }
    }
}

fn step(from: Point<i32>, to: Point<i32>) -> (i32, i32) {
    ((to.x - from.x).signum(), (to.y - from.y).signum())
}

/// Removes every point whose incoming and outgoing steps point the same way.
fn compress_chain(mut chain: Vec<Point<i32>>) -> Vec<Point<i32>> {
    chain.dedup();
    if chain.len() > 1 && chain.first() == chain.last() {
        chain.pop();
    }

    let n = chain.len();
    if n < 3 {
        return chain;
    }

    let kept: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = chain[(i + n - 1) % n];
            let cur = chain[i];
            let next = chain[(i + 1) % n];
            step(prev, cur) != step(cur, next)
        })
        .map(|i| chain[i])
        .collect();

    // A chain with no turns at all is degenerate (every step identical); keep it.
    if kept.is_empty() { chain } else { kept }
}
