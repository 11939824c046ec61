use gesture_recognizer::algorithms::DirectionAngleMatcher;
use gesture_recognizer::pipeline::StrokeMatcher;
use gesture_recognizer::*;
use std::f64::consts::PI;

fn prepared(pairs: &[(f64, f64)]) -> NormalizedStroke {
    normalize(&resample(&Stroke::from_pairs(pairs), 64).unwrap())
}

#[test]
fn test_identical_strokes_score_zero() {
    let a = prepared(&[(0.0, 0.0), (40.0, 30.0), (80.0, 0.0)]);
    assert!(distance(&a, &a).unwrap().abs() < 1e-12);
}

#[test]
fn test_distance_ignores_position_and_scale() {
    let a = prepared(&[(0.0, 0.0), (40.0, 30.0), (80.0, 0.0)]);
    let b = prepared(&[(500.0, 500.0), (700.0, 650.0), (900.0, 500.0)]);
    assert!(distance(&a, &b).unwrap() < 1e-6);
}

#[test]
fn test_reversed_stroke_scores_high() {
    let forward = prepared(&[(0.0, 0.0), (100.0, 0.0)]);
    let backward = prepared(&[(100.0, 0.0), (0.0, 0.0)]);
    let score = distance(&forward, &backward).unwrap();
    assert!((score - 63.0 * PI).abs() < 1e-6, "score {}", score);
}

#[test]
fn test_angle_sequence_has_one_entry_per_segment() {
    let stroke = resample(&Stroke::from_pairs(&[(0.0, 0.0), (10.0, 10.0)]), 64).unwrap();
    let angles = AngleSequence::from_points(stroke.points());
    assert_eq!(angles.len(), 63);
    assert!(angles.angles().iter().all(|a| (a - PI / 4.0).abs() < 1e-9));
}

#[test]
fn test_zero_length_segment_has_zero_direction() {
    let points = [Point::new(5.0, 5.0), Point::new(5.0, 5.0)];
    assert_eq!(AngleSequence::from_points(&points).angles(), [0.0]);
}

#[test]
fn test_raw_and_wrapped_differ_across_the_seam() {
    let above = AngleSequence::from_points(&[Point::new(0.0, 0.0), Point::new(-1.0, 0.001)]);
    let below = AngleSequence::from_points(&[Point::new(0.0, 0.0), Point::new(-1.0, -0.001)]);

    let raw = above.distance(&below, AngleMetric::Raw).unwrap();
    let wrapped = above.distance(&below, AngleMetric::Wrapped).unwrap();

    assert!((raw - (2.0 * PI - 0.002)).abs() < 1e-5, "raw {}", raw);
    assert!((wrapped - 0.002).abs() < 1e-5, "wrapped {}", wrapped);
}

#[test]
fn test_wrapped_difference_bounded_by_pi() {
    let metric = AngleMetric::Wrapped;
    for (a, b) in [(PI, -PI), (3.0, -3.0), (0.0, PI), (-2.5, 2.5), (1.0, 1.0)] {
        let d = metric.difference(a, b);
        assert!((0.0..=PI + 1e-12).contains(&d), "{} vs {} gave {}", a, b, d);
    }
    assert!(metric.difference(PI, -PI) < 1e-12);
    assert!((AngleMetric::Raw.difference(PI, -PI) - 2.0 * PI).abs() < 1e-12);
}

#[test]
fn test_length_mismatch_rejected() {
    let three = normalize(&Stroke::from_pairs(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]));
    let four = normalize(&Stroke::from_pairs(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)]));

    assert_eq!(
        distance(&three, &four).unwrap_err(),
        RecognitionError::LengthMismatch { candidate: 3, template: 4 }
    );
}

#[test]
fn test_matcher_confidence_range() {
    let matcher = DirectionAngleMatcher::new(AngleMetric::Wrapped);
    assert_eq!(matcher.name(), "DirectionAngle(wrapped)");
    assert_eq!(matcher.confidence(0.0, 64), 1.0);
    assert_eq!(matcher.confidence(63.0 * PI, 64), 0.0);
    assert_eq!(matcher.confidence(f64::INFINITY, 64), 0.0);

    let raw = DirectionAngleMatcher::new(AngleMetric::Raw);
    assert_eq!(raw.name(), "DirectionAngle(raw)");
    assert!((raw.worst_distance(64) - 63.0 * 2.0 * PI).abs() < 1e-9);
}

#[test]
fn test_metric_parses_from_str() {
    assert_eq!("raw".parse::<AngleMetric>().unwrap(), AngleMetric::Raw);
    assert_eq!("Wrapped".parse::<AngleMetric>().unwrap(), AngleMetric::Wrapped);
    assert!("euclid".parse::<AngleMetric>().is_err());
    assert_eq!(AngleMetric::default(), AngleMetric::Wrapped);
}
