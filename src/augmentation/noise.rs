use crate::augmentation::StrokeAugmentation;
use crate::geometry::{Point, Stroke};
use crate::Result;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Gaussian per-point jitter. The standard deviation is relative to the
/// stroke's bounding-box diagonal so it stays meaningful at any scale.
pub struct JitterAugmentation {
    relative_std: f64,
}

impl JitterAugmentation {
    pub fn new(relative_std: f64) -> Self {
        Self { relative_std }
    }
}

impl StrokeAugmentation for JitterAugmentation {
    fn apply(
        &self,
        stroke: &Stroke,
        rng: &mut StdRng,
        params: &mut HashMap<String, Value>,
    ) -> Result<Stroke> {
        let diagonal = stroke
            .bounding_box()
            .map(|bb| bb.width().hypot(bb.height()))
            .unwrap_or(0.0);
        let sigma = self.relative_std * diagonal;
        params.insert("jitter_sigma".to_string(), json!(sigma));

        let normal = match Normal::new(0.0, sigma) {
            Ok(normal) if sigma > 0.0 => normal,
            _ => return Ok(stroke.clone()),
        };

        Ok(stroke
            .points()
            .iter()
            .map(|p| Point::new(p.x + normal.sample(rng), p.y + normal.sample(rng)))
            .collect())
    }

    fn description(&self) -> String {
        format!("Jitter(std={:.3})", self.relative_std)
    }
}
