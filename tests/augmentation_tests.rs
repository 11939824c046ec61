use gesture_recognizer::augmentation::*;
use gesture_recognizer::config::AugmentationConfig;
use gesture_recognizer::registry::{CARET, CHECK_V};
use gesture_recognizer::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn seeded_config(seed: u64) -> AugmentationConfig {
    AugmentationConfig {
        seed: Some(seed),
        ..AugmentationConfig::default()
    }
}

#[test]
fn test_same_seed_same_variants() {
    let stroke = Stroke::from_pairs(CHECK_V);
    let mut a = StrokeAugmenter::from_config(&seeded_config(42));
    let mut b = StrokeAugmenter::from_config(&seeded_config(42));

    let first = a.variants("V", &stroke, 5).unwrap();
    let second = b.variants("V", &stroke, 5).unwrap();

    assert_eq!(a.len(), 5);
    for (x, y) in first.iter().zip(&second) {
        assert_eq!(x.stroke, y.stroke);
        assert_eq!(x.source_label, "V");
        assert_eq!(x.augmentations_applied.len(), 5);
    }
    assert_ne!(first[0].stroke, first[1].stroke);
}

#[test]
fn test_density_within_configured_range() {
    let stroke = Stroke::from_pairs(CARET);
    let mut augmenter = StrokeAugmenter::new(Some(3)).add(DensityAugmentation::new((10, 80)));

    for variant in augmenter.variants("^", &stroke, 20).unwrap() {
        assert!((10..=80).contains(&variant.stroke.len()));
        assert_eq!(variant.params["point_count"], variant.stroke.len());
    }
}

#[test]
fn test_zero_jitter_returns_input() {
    let stroke = Stroke::from_pairs(CHECK_V);
    let mut rng = StdRng::seed_from_u64(0);
    let mut params = HashMap::new();

    let jittered = JitterAugmentation::new(0.0)
        .apply(&stroke, &mut rng, &mut params)
        .unwrap();
    assert_eq!(jittered, stroke);
}

#[test]
fn test_full_turn_rotation_is_identity() {
    let stroke = Stroke::from_pairs(CARET);
    let rotated = rotate(&stroke, std::f64::consts::TAU);
    for (p, q) in stroke.points().iter().zip(rotated.points()) {
        assert!(p.distance_to(q) < 1e-12);
    }
}

#[test]
fn test_augmented_variants_recognized() {
    let recognizer = Recognizer::reference().unwrap();
    let mut augmenter = StrokeAugmenter::from_config(&seeded_config(7));
    let mut correct = 0;
    let mut total = 0;

    for template in recognizer.registry() {
        let variants = augmenter.variants(&template.label, &template.stroke, 25).unwrap();
        for variant in variants {
            let label = recognizer.classify_label(&variant.stroke).unwrap();
            if label.as_template() == Some(template.label.as_str()) {
                correct += 1;
            }
            total += 1;
        }
    }

    let accuracy = correct as f64 / total as f64;
    assert!(accuracy >= 0.9, "accuracy {:.3}", accuracy);
}
