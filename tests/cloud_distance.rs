use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strokematch::normalize::normalize;
use strokematch::{cloud_distance, greedy_cloud_match, Point};

fn random_gesture(rng: &mut StdRng, len: usize, strokes: u32) -> Vec<Point> {
    (0..len)
        .map(|k| {
            let stroke_id = 1 + (k as u32 * strokes) / len as u32;
            Point::new(
                rng.random_range(0.0..300.0),
                rng.random_range(0.0..300.0),
                stroke_id,
            )
        })
        .collect()
}

#[test]
fn distance_is_non_negative_for_random_clouds() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let a = normalize(&random_gesture(&mut rng, 25, 2));
        let b = normalize(&random_gesture(&mut rng, 40, 3));
        for start in [0, 5, 10, 15, 20, 25, 30] {
            assert!(cloud_distance(&a, &b, start) >= 0.0);
        }
    }
}

#[test]
fn self_distance_is_zero_from_any_start() {
    let mut rng = StdRng::seed_from_u64(11);
    let cloud = normalize(&random_gesture(&mut rng, 30, 2));
    for start in 0..cloud.len() {
        assert_eq!(cloud_distance(&cloud, &cloud, start), 0.0);
    }
    assert_eq!(greedy_cloud_match(&cloud, &cloud), 0.0);
}

#[test]
fn greedy_match_ignores_argument_order() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..10 {
        let a = normalize(&random_gesture(&mut rng, 35, 1));
        let b = normalize(&random_gesture(&mut rng, 20, 2));
        assert_eq!(greedy_cloud_match(&a, &b), greedy_cloud_match(&b, &a));
    }
}

#[test]
fn distinct_shapes_are_farther_apart_than_noisy_copies() {
    let line: Vec<Point> = (0..20)
        .map(|k| Point::new(10.0 * k as f64, 0.0, 1))
        .collect();
    let mut rng = StdRng::seed_from_u64(31);
    let noisy: Vec<Point> = line
        .iter()
        .map(|p| {
            Point::new(
                p.x + rng.random_range(-1.0..1.0),
                p.y + rng.random_range(-1.0..1.0),
                p.stroke_id,
            )
        })
        .collect();
    let circle: Vec<Point> = (0..20)
        .map(|k| {
            let a = std::f64::consts::TAU * k as f64 / 20.0;
            Point::new(100.0 + 50.0 * a.cos(), 100.0 + 50.0 * a.sin(), 1)
        })
        .collect();

    let line_cloud = normalize(&line);
    let near = greedy_cloud_match(&line_cloud, &normalize(&noisy));
    let far = greedy_cloud_match(&line_cloud, &normalize(&circle));
    assert!(near < far);
}
