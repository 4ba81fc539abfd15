//! Normalization pipeline turning a raw gesture into a canonical point cloud.
//!
//! The fixed order is resample, then scale, then translate: resampling works
//! on raw path lengths while scaling and translation operate on the already
//! evenly spaced cloud. Reordering changes the output.

use crate::point::{distance, Point, ORIGIN};

/// Number of points in every canonical cloud.
pub const NUM_POINTS: usize = 32;

/// Resamples a gesture path into exactly `n` evenly spaced points.
///
/// Path length is accumulated only between consecutive points of the same
/// stroke, so strokes are resampled independently while the output stays one
/// flat sequence. Whenever the walked distance reaches the target interval, a
/// point is interpolated on the current segment and re-inserted into a
/// working copy of the input so the rest of the segment is walked from it.
/// The caller's slice is never mutated.
///
/// A gesture with zero total path length has no interval to walk; it yields
/// `n` copies of its first point.
///
/// Expects a non-empty input; gestures too short to resample are rejected
/// before reaching this function (see [`crate::PointCloud::new`]).
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let mut work: Vec<Point> = points.to_vec();
    let total = path_length(&work);
    if total == 0.0 {
        return vec![work[0]; n];
    }
    let interval = total / (n - 1) as f64;

    let mut walked = 0.0;
    let mut out = Vec::with_capacity(n);
    out.push(work[0]);
    let mut i = 1;
    while i < work.len() {
        if work[i].stroke_id == work[i - 1].stroke_id {
            let d = distance(work[i - 1], work[i]);
            if walked + d >= interval {
                let t = (interval - walked) / d;
                let q = Point::new(
                    work[i - 1].x + t * (work[i].x - work[i - 1].x),
                    work[i - 1].y + t * (work[i].y - work[i - 1].y),
                    work[i].stroke_id,
                );
                out.push(q);
                // The next iteration walks the remainder of this segment
                // starting from q.
                work.insert(i, q);
                walked = 0.0;
            } else {
                walked += d;
            }
        }
        i += 1;
    }
    // Accumulated rounding can leave the walk one point short of n.
    if out.len() == n - 1 {
        out.push(work[work.len() - 1]);
    }
    out
}

/// Scales a cloud so the longer side of its bounding box has length 1.
///
/// The shorter axis maps into `[0, shorter/longer]`, preserving aspect ratio.
/// A degenerate box (all points coincident) collapses to the origin instead
/// of dividing by zero.
pub fn scale(points: &[Point]) -> Vec<Point> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    let size = (max_x - min_x).max(max_y - min_y);
    if size == 0.0 {
        return points
            .iter()
            .map(|p| Point::new(0.0, 0.0, p.stroke_id))
            .collect();
    }
    points
        .iter()
        .map(|p| Point::new((p.x - min_x) / size, (p.y - min_y) / size, p.stroke_id))
        .collect()
}

/// Translates a cloud so its centroid lands on `target`.
pub fn translate_to(points: &[Point], target: Point) -> Vec<Point> {
    let c = centroid(points);
    points
        .iter()
        .map(|p| Point::new(p.x + target.x - c.x, p.y + target.y - c.y, p.stroke_id))
        .collect()
}

/// Arithmetic mean of the cloud's coordinates; stroke ids are ignored.
pub fn centroid(points: &[Point]) -> Point {
    let mut x = 0.0;
    let mut y = 0.0;
    for p in points {
        x += p.x;
        y += p.y;
    }
    let n = points.len() as f64;
    Point::new(x / n, y / n, 0)
}

/// Total length traversed by the path, summed per stroke.
pub fn path_length(points: &[Point]) -> f64 {
    let mut total = 0.0;
    for i in 1..points.len() {
        if points[i].stroke_id == points[i - 1].stroke_id {
            total += distance(points[i - 1], points[i]);
        }
    }
    total
}

/// Runs the full pipeline: resample to [`NUM_POINTS`], scale, translate to
/// the origin.
pub fn normalize(points: &[Point]) -> Vec<Point> {
    let resampled = resample(points, NUM_POINTS);
    let scaled = scale(&resampled);
    translate_to(&scaled, ORIGIN)
}

#[cfg(test)]
mod tests {
    use super::{centroid, path_length, resample, scale};
    use crate::point::Point;

    #[test]
    fn path_length_skips_stroke_jumps() {
        let pts = [
            Point::new(0.0, 0.0, 1),
            Point::new(3.0, 4.0, 1),
            Point::new(100.0, 100.0, 2),
            Point::new(103.0, 104.0, 2),
        ];
        assert!((path_length(&pts) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn centroid_averages_coordinates() {
        let pts = [
            Point::new(0.0, 0.0, 1),
            Point::new(2.0, 0.0, 1),
            Point::new(2.0, 2.0, 1),
            Point::new(0.0, 2.0, 1),
        ];
        let c = centroid(&pts);
        assert!((c.x - 1.0).abs() < 1e-12);
        assert!((c.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn resample_splits_long_segments() {
        let pts = [Point::new(0.0, 0.0, 1), Point::new(10.0, 0.0, 1)];
        let out = resample(&pts, 8);
        assert_eq!(out.len(), 8);
        for (k, p) in out.iter().enumerate() {
            let expected = 10.0 * k as f64 / 7.0;
            assert!((p.x - expected).abs() < 1e-9);
            assert!(p.y.abs() < 1e-12);
        }
    }

    #[test]
    fn resample_zero_length_path_repeats_first_point() {
        let pts = [Point::new(5.0, 5.0, 1), Point::new(5.0, 5.0, 1)];
        let out = resample(&pts, 8);
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|p| p.x == 5.0 && p.y == 5.0));
    }

    #[test]
    fn scale_degenerate_box_collapses_to_origin() {
        let pts = [Point::new(7.0, 7.0, 1); 4];
        let out = scale(&pts);
        assert!(out.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }
}
