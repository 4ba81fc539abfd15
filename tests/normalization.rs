use strokematch::normalize::{centroid, normalize, resample, scale, translate_to};
use strokematch::{Point, NUM_POINTS, ORIGIN};

fn bounding_box(points: &[Point]) -> (f64, f64) {
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
    (max_x - min_x, max_y - min_y)
}

fn zigzag(points_per_stroke: usize, strokes: u32) -> Vec<Point> {
    let mut out = Vec::new();
    for s in 1..=strokes {
        for k in 0..points_per_stroke {
            let x = 10.0 * k as f64 + 3.0 * s as f64;
            let wiggle = if k % 2 == 0 { 0.0 } else { 25.0 };
            let y = wiggle + 40.0 * s as f64;
            out.push(Point::new(x, y, s));
        }
    }
    out
}

#[test]
fn resample_always_yields_exact_cardinality() {
    for gesture in [
        zigzag(2, 1),
        zigzag(3, 1),
        zigzag(7, 2),
        zigzag(50, 1),
        zigzag(11, 4),
        vec![Point::new(0.0, 0.0, 1), Point::new(1000.0, 0.0, 1)],
    ] {
        let out = resample(&gesture, NUM_POINTS);
        assert_eq!(out.len(), NUM_POINTS, "input had {} points", gesture.len());
    }
}

#[test]
fn resample_preserves_equal_spacing_within_a_stroke() {
    let line = [Point::new(0.0, 0.0, 1), Point::new(31.0, 0.0, 1)];
    let out = resample(&line, NUM_POINTS);
    for (k, p) in out.iter().enumerate() {
        assert!((p.x - k as f64).abs() < 1e-9);
    }
}

#[test]
fn scale_maps_longer_axis_to_unit_length() {
    for gesture in [zigzag(5, 1), zigzag(9, 3), zigzag(40, 2)] {
        let resampled = resample(&gesture, NUM_POINTS);
        let scaled = scale(&resampled);
        let (w, h) = bounding_box(&scaled);
        assert!((w.max(h) - 1.0).abs() < 1e-9);
        assert!(scaled.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}

#[test]
fn translate_to_origin_centers_the_centroid() {
    let scaled = scale(&resample(&zigzag(12, 2), NUM_POINTS));
    let translated = translate_to(&scaled, ORIGIN);
    let c = centroid(&translated);
    assert!(c.x.abs() < 1e-9);
    assert!(c.y.abs() < 1e-9);
}

#[test]
fn pipeline_is_idempotent_on_canonical_clouds() {
    let line = [Point::new(4.0, 9.0, 1), Point::new(310.0, 9.0, 1)];
    let once = normalize(&line);
    let twice = normalize(&once);
    for (a, b) in once.iter().zip(twice.iter()) {
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
    }
}

#[test]
fn degenerate_gesture_normalizes_to_origin_cloud() {
    let coincident = vec![Point::new(42.0, 17.0, 1); 12];
    let out = normalize(&coincident);
    assert_eq!(out.len(), NUM_POINTS);
    assert!(out.iter().all(|p| p.x == 0.0 && p.y == 0.0));
}
