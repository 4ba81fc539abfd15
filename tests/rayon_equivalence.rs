#![cfg(feature = "rayon")]

use strokematch::{Point, Recognizer, RecognizerConfig};

fn spiral(turns: f64, len: usize) -> Vec<Point> {
    (0..len)
        .map(|k| {
            let t = k as f64 / (len - 1) as f64;
            let a = std::f64::consts::TAU * turns * t;
            let r = 20.0 + 100.0 * t;
            Point::new(150.0 + r * a.cos(), 150.0 + r * a.sin(), 1)
        })
        .collect()
}

#[test]
fn parallel_matches_sequential() {
    let sequential = Recognizer::new();
    let parallel = Recognizer::new().with_config(RecognizerConfig { parallel: true });

    for gesture in [
        spiral(1.5, 40),
        spiral(0.25, 12),
        vec![
            Point::new(0.0, 0.0, 1),
            Point::new(50.0, 80.0, 1),
            Point::new(90.0, 10.0, 2),
            Point::new(20.0, 60.0, 2),
        ],
    ] {
        let seq = sequential.recognize(&gesture).unwrap();
        let par = parallel.recognize(&gesture).unwrap();
        assert_eq!(seq.name, par.name);
        assert_eq!(seq.score, par.score);
    }
}
