use gesture_recognizer::registry::{CARET, CHECK_V, GREATER_THAN, LESS_THAN};
use gesture_recognizer::*;

fn zigzag(points: usize) -> Stroke {
    (0..points)
        .map(|i| Point::new(i as f64 * 10.0, if i % 2 == 0 { 0.0 } else { 25.0 }))
        .collect()
}

fn max_deviation(a: &Stroke, b: &Stroke) -> f64 {
    a.points()
        .iter()
        .zip(b.points())
        .map(|(p, q)| p.distance_to(q))
        .fold(0.0, f64::max)
}

#[test]
fn test_output_has_exactly_n_points() {
    let strokes = [
        Stroke::from_pairs(&[(0.0, 0.0), (100.0, 0.0)]),
        Stroke::from_pairs(LESS_THAN),
        Stroke::from_pairs(CARET),
        zigzag(3),
        zigzag(200),
    ];
    for stroke in &strokes {
        for n in [2, 3, 10, 64, 128, 500] {
            let resampled = resample(stroke, n).unwrap();
            assert_eq!(resampled.len(), n, "{} input points, n = {}", stroke.len(), n);
        }
    }
}

#[test]
fn test_first_point_preserved() {
    let stroke = Stroke::from_pairs(&[(80.0, 20.0), (40.0, 50.0), (80.0, 80.0)]);
    let resampled = resample(&stroke, 64).unwrap();
    assert_eq!(resampled.first(), Some(&Point::new(80.0, 20.0)));
}

#[test]
fn test_points_are_evenly_spaced() {
    let stroke = Stroke::from_pairs(&[(0.0, 0.0), (90.0, 0.0)]);
    let resampled = resample(&stroke, 10).unwrap();

    for (i, p) in resampled.points().iter().enumerate() {
        assert!((p.x - i as f64 * 10.0).abs() < 1e-9, "point {} at {:?}", i, p);
        assert_eq!(p.y, 0.0);
    }
}

#[test]
fn test_last_point_reaches_end_of_path() {
    let stroke = Stroke::from_pairs(CHECK_V);
    let resampled = resample(&stroke, 64).unwrap();
    let end = Point::new(0.8, 0.1);
    assert!(resampled.last().unwrap().distance_to(&end) < 1e-6);
}

#[test]
fn test_input_is_not_modified() {
    let stroke = Stroke::from_pairs(GREATER_THAN);
    let copy = stroke.clone();
    resample(&stroke, 64).unwrap();
    assert_eq!(stroke, copy);
}

#[test]
fn test_zero_length_path_repeats_first_point() {
    let stroke = Stroke::from_pairs(&[(50.0, 50.0); 5]);
    let resampled = resample(&stroke, 64).unwrap();

    assert_eq!(resampled.len(), 64);
    assert!(resampled.points().iter().all(|p| *p == Point::new(50.0, 50.0)));
}

#[test]
fn test_duplicate_consecutive_points_tolerated() {
    let stroke = Stroke::from_pairs(&[
        (0.0, 0.0),
        (0.0, 0.0),
        (50.0, 0.0),
        (50.0, 0.0),
        (50.0, 0.0),
        (100.0, 0.0),
    ]);
    let resampled = resample(&stroke, 11).unwrap();

    assert_eq!(resampled.len(), 11);
    assert!(resampled.points().iter().all(|p| p.is_finite()));
    assert!((resampled.points()[5].x - 50.0).abs() < 1e-9);
}

#[test]
fn test_resample_count_below_two_rejected() {
    let stroke = Stroke::from_pairs(LESS_THAN);
    assert_eq!(
        resample(&stroke, 1).unwrap_err(),
        RecognitionError::InvalidResampleCount { n: 1 }
    );
    assert_eq!(
        resample(&stroke, 0).unwrap_err(),
        RecognitionError::InvalidResampleCount { n: 0 }
    );
}

#[test]
fn test_short_stroke_rejected() {
    let single = Stroke::from_pairs(&[(10.0, 10.0)]);
    assert_eq!(
        resample(&single, 64).unwrap_err(),
        RecognitionError::InvalidStroke { points: 1 }
    );
    assert_eq!(
        resample(&Stroke::default(), 64).unwrap_err(),
        RecognitionError::InvalidStroke { points: 0 }
    );
}

#[test]
fn test_non_finite_coordinate_rejected() {
    let stroke = Stroke::from_pairs(&[(0.0, 0.0), (f64::NAN, 5.0), (10.0, 10.0)]);
    assert_eq!(
        resample(&stroke, 64).unwrap_err(),
        RecognitionError::NonFiniteCoordinate { index: 1 }
    );

    let stroke = Stroke::from_pairs(&[(0.0, 0.0), (10.0, f64::INFINITY)]);
    assert_eq!(
        resample(&stroke, 64).unwrap_err(),
        RecognitionError::NonFiniteCoordinate { index: 1 }
    );
}

#[test]
fn test_resampling_twice_is_stable_for_templates() {
    for pairs in [LESS_THAN, GREATER_THAN, CHECK_V, CARET] {
        let once = resample(&Stroke::from_pairs(pairs), 64).unwrap();
        let twice = resample(&once, 64).unwrap();
        let deviation = max_deviation(&once, &twice);
        assert!(deviation < 0.01, "deviation {} for {:?}", deviation, pairs);
    }
}

#[test]
fn test_resampling_twice_is_stable_for_curves() {
    let spiral: Stroke = (0..40)
        .map(|i| {
            let t = i as f64 * 0.3;
            Point::new(120.0 + t * 8.0 * t.cos(), 45.0 + t * 5.0 * t.sin())
        })
        .collect();
    let arc: Stroke = (0..200)
        .map(|i| {
            let theta = 0.9 * std::f64::consts::TAU * i as f64 / 200.0;
            Point::new(100.0 + 80.0 * theta.cos(), 100.0 + 80.0 * theta.sin())
        })
        .collect();

    for (stroke, tolerance) in [(spiral, 0.03), (arc, 1e-3)] {
        let bb = stroke.bounding_box().unwrap();
        let diagonal = bb.width().hypot(bb.height());

        let once = resample(&stroke, 64).unwrap();
        let twice = resample(&once, 64).unwrap();
        let deviation = max_deviation(&once, &twice) / diagonal;
        assert!(deviation < tolerance, "relative deviation {}", deviation);
    }
}

#[test]
fn test_huge_finite_coordinates_stay_finite() {
    let stroke = Stroke::from_pairs(&[(-1e200, 0.0), (1e200, 5.0), (0.0, 1e200)]);

    let resampled = resample(&stroke, 64).unwrap();
    assert_eq!(resampled.len(), 64);
    let normalized = normalize(&resampled);
    assert!(normalized
        .points()
        .iter()
        .all(|p| p.is_finite() && (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)));

    let result = Recognizer::reference().unwrap().classify(&stroke).unwrap();
    assert!(result.score.is_finite(), "score {}", result.score);
}

#[test]
fn test_overflowing_span_rejected() {
    let stroke = Stroke::from_pairs(&[(-f64::MAX, 0.0), (f64::MAX, 10.0)]);
    let err = resample(&stroke, 64).unwrap_err();
    assert_eq!(err, RecognitionError::CoordinateOverflow);
    assert!(err.is_input_error());

    assert_eq!(
        Recognizer::reference().unwrap().classify(&stroke).unwrap_err(),
        RecognitionError::CoordinateOverflow
    );
}
