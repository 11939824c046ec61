//! Synthetic stroke variants for robustness testing.
//!
//! Each augmentation draws its parameters from a shared seeded RNG, so a
//! fixed seed reproduces the same variant set.

pub mod geometric;
pub mod noise;

pub use geometric::*;
pub use noise::*;

use crate::config::AugmentationConfig;
use crate::geometry::Stroke;
use crate::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A transformation producing a perturbed copy of a stroke
pub trait StrokeAugmentation: Send + Sync {
    /// Apply the augmentation; parameters applied are added to `params`
    fn apply(
        &self,
        stroke: &Stroke,
        rng: &mut StdRng,
        params: &mut HashMap<String, Value>,
    ) -> Result<Stroke>;

    /// Get a human-readable description of this augmentation
    fn description(&self) -> String;
}

/// A variant together with the label it was generated from
#[derive(Debug, Clone, Serialize)]
pub struct AugmentedStroke {
    pub source_label: String,
    pub stroke: Stroke,
    pub augmentations_applied: Vec<String>,
    pub params: HashMap<String, Value>,
}

pub(crate) fn random_in_range(rng: &mut StdRng, (min, max): (f64, f64)) -> f64 {
    if min >= max {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

/// Applies a fixed chain of augmentations in order.
pub struct StrokeAugmenter {
    augmentations: Vec<Box<dyn StrokeAugmentation>>,
    rng: StdRng,
}

impl StrokeAugmenter {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            augmentations: Vec::new(),
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
        }
    }

    /// The standard chain: redensify, scale, rotate, translate, jitter.
    pub fn from_config(config: &AugmentationConfig) -> Self {
        Self::new(config.seed)
            .add(DensityAugmentation::new(config.point_count_range))
            .add(ScaleAugmentation::new(config.scale_range))
            .add(RotationAugmentation::new(config.rotation_range_degrees))
            .add(TranslationAugmentation::new(config.translation_range))
            .add(JitterAugmentation::new(config.jitter_std))
    }

    pub fn add<A: StrokeAugmentation + 'static>(mut self, augmentation: A) -> Self {
        self.augmentations.push(Box::new(augmentation));
        self
    }

    pub fn len(&self) -> usize {
        self.augmentations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.augmentations.is_empty()
    }

    pub fn augment(&mut self, label: &str, stroke: &Stroke) -> Result<AugmentedStroke> {
        let mut current = stroke.clone();
        let mut params = HashMap::new();
        let mut applied = Vec::with_capacity(self.augmentations.len());

        for augmentation in &self.augmentations {
            current = augmentation.apply(&current, &mut self.rng, &mut params)?;
            applied.push(augmentation.description());
        }

        Ok(AugmentedStroke {
            source_label: label.to_string(),
            stroke: current,
            augmentations_applied: applied,
            params,
        })
    }

    pub fn variants(&mut self, label: &str, stroke: &Stroke, count: usize) -> Result<Vec<AugmentedStroke>> {
        (0..count).map(|_| self.augment(label, stroke)).collect()
    }
}
