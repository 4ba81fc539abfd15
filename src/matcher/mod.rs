//! Greedy point-cloud correspondence and the template match metric.
//!
//! `cloud_distance` is a greedy, not optimal, bipartite assignment: cheap and
//! deterministic, at the cost of depending on which cloud drives the
//! traversal and where it starts. `greedy_cloud_match` compensates by
//! evaluating both directions over a subsampled set of start offsets.

#[cfg(feature = "rayon")]
pub(crate) mod rayon;

use crate::point::{distance, Point};
use crate::template::PointCloud;

/// Weighted greedy one-to-one matching cost from `pts1` onto `pts2`.
///
/// Walks `pts1` circularly from `start`, pairing each point with the nearest
/// still-unmatched point of `pts2` (ties go to the lowest scanned index).
/// Pairs made early in the traversal weigh close to 1, pairs made just
/// before wrapping back to `start` close to 0. Both clouds must have the
/// same length. O(n²).
pub fn cloud_distance(pts1: &[Point], pts2: &[Point], start: usize) -> f64 {
    let n = pts1.len();
    debug_assert_eq!(n, pts2.len());
    let mut matched = vec![false; n];
    let mut sum = 0.0;
    let mut i = start;
    loop {
        let mut index = 0;
        let mut min = f64::INFINITY;
        for (j, taken) in matched.iter().enumerate() {
            if !taken {
                let d = distance(pts1[i], pts2[j]);
                if d < min {
                    min = d;
                    index = j;
                }
            }
        }
        matched[index] = true;
        let weight = 1.0 - ((i + n - start) % n) as f64 / n as f64;
        sum += weight * min;
        i = (i + 1) % n;
        if i == start {
            break;
        }
    }
    sum
}

/// Minimum cloud distance over subsampled start offsets, both directions.
///
/// Scanning every start offset would cost O(n³); stepping by floor(n^0.5)
/// keeps alignment quality close to the full scan at O(n^2.5), since nearby
/// offsets produce similar greedy matchings. Evaluating the metric with each
/// cloud as the traversal driver makes the result symmetric in its
/// arguments.
pub fn greedy_cloud_match(points: &[Point], template: &[Point]) -> f64 {
    let n = points.len();
    let step = (n as f64).powf(0.5).floor() as usize;
    let mut min = f64::INFINITY;
    let mut i = 0;
    while i < n {
        let d1 = cloud_distance(points, template, i);
        let d2 = cloud_distance(template, points, i);
        min = min.min(d1).min(d2);
        i += step;
    }
    min
}

/// Sequential scan for the template closest to `candidate`.
///
/// Returns the index of the first template achieving the minimum distance,
/// with the distance itself; `None` on an empty template list.
pub(crate) fn best_template(candidate: &[Point], templates: &[PointCloud]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, tpl) in templates.iter().enumerate() {
        let d = greedy_cloud_match(candidate, tpl.points());
        match best {
            Some((_, b)) if d >= b => {}
            _ => best = Some((i, d)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::{cloud_distance, greedy_cloud_match};
    use crate::point::Point;

    fn ring(n: usize, radius: f64) -> Vec<Point> {
        (0..n)
            .map(|k| {
                let a = std::f64::consts::TAU * k as f64 / n as f64;
                Point::new(radius * a.cos(), radius * a.sin(), 1)
            })
            .collect()
    }

    #[test]
    fn self_distance_is_zero_for_every_start() {
        let cloud = ring(32, 0.5);
        for start in 0..cloud.len() {
            assert_eq!(cloud_distance(&cloud, &cloud, start), 0.0);
        }
    }

    #[test]
    fn distance_is_never_negative() {
        let a = ring(32, 0.5);
        let b = ring(32, 0.3);
        for start in [0, 5, 17, 31] {
            assert!(cloud_distance(&a, &b, start) >= 0.0);
        }
    }

    #[test]
    fn match_is_symmetric_in_its_arguments() {
        let a = ring(32, 0.5);
        let mut b = ring(32, 0.4);
        b[3].x += 0.2;
        b[9].y -= 0.1;
        let ab = greedy_cloud_match(&a, &b);
        let ba = greedy_cloud_match(&b, &a);
        assert_eq!(ab, ba);
    }
}
