use crate::augmentation::{random_in_range, StrokeAugmentation};
use crate::geometry::{Point, Stroke};
use crate::Result;
use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Shifts every point by the same random offset
pub struct TranslationAugmentation {
    range: (f64, f64),
}

impl TranslationAugmentation {
    pub fn new(range: (f64, f64)) -> Self {
        Self { range }
    }
}

impl StrokeAugmentation for TranslationAugmentation {
    fn apply(
        &self,
        stroke: &Stroke,
        rng: &mut StdRng,
        params: &mut HashMap<String, Value>,
    ) -> Result<Stroke> {
        let dx = random_in_range(rng, self.range);
        let dy = random_in_range(rng, self.range);
        params.insert("translation".to_string(), json!([dx, dy]));
        Ok(stroke.map_points(|p| Point::new(p.x + dx, p.y + dy)))
    }

    fn description(&self) -> String {
        format!("Translation({:.1}..{:.1})", self.range.0, self.range.1)
    }
}

/// Uniform scale about the origin
pub struct ScaleAugmentation {
    range: (f64, f64),
}

impl ScaleAugmentation {
    pub fn new(range: (f64, f64)) -> Self {
        Self { range }
    }
}

impl StrokeAugmentation for ScaleAugmentation {
    fn apply(
        &self,
        stroke: &Stroke,
        rng: &mut StdRng,
        params: &mut HashMap<String, Value>,
    ) -> Result<Stroke> {
        let factor = random_in_range(rng, self.range);
        params.insert("scale".to_string(), json!(factor));
        Ok(stroke.map_points(|p| Point::new(p.x * factor, p.y * factor)))
    }

    fn description(&self) -> String {
        format!("Scale({:.2}..{:.2})", self.range.0, self.range.1)
    }
}

/// Rotation about the bounding-box center
pub struct RotationAugmentation {
    range_degrees: (f64, f64),
}

impl RotationAugmentation {
    pub fn new(range_degrees: (f64, f64)) -> Self {
        Self { range_degrees }
    }
}

impl StrokeAugmentation for RotationAugmentation {
    fn apply(
        &self,
        stroke: &Stroke,
        rng: &mut StdRng,
        params: &mut HashMap<String, Value>,
    ) -> Result<Stroke> {
        let degrees = random_in_range(rng, self.range_degrees);
        params.insert("rotation_degrees".to_string(), json!(degrees));
        Ok(rotate(stroke, degrees.to_radians()))
    }

    fn description(&self) -> String {
        format!(
            "Rotation({:.1}..{:.1} deg)",
            self.range_degrees.0, self.range_degrees.1
        )
    }
}

/// Rotates `stroke` by `radians` about its bounding-box center.
pub fn rotate(stroke: &Stroke, radians: f64) -> Stroke {
    let Some(center) = stroke.bounding_box().map(|bb| bb.center()) else {
        return stroke.clone();
    };
    let (sin, cos) = radians.sin_cos();
    stroke.map_points(|p| {
        let x = p.x - center.x;
        let y = p.y - center.y;
        Point::new(center.x + x * cos - y * sin, center.y + x * sin + y * cos)
    })
}

/// Re-samples the stroke to a random point count, imitating capture devices
/// that report pointer moves at different rates.
pub struct DensityAugmentation {
    point_count_range: (usize, usize),
}

impl DensityAugmentation {
    pub fn new(point_count_range: (usize, usize)) -> Self {
        Self { point_count_range }
    }
}

impl StrokeAugmentation for DensityAugmentation {
    fn apply(
        &self,
        stroke: &Stroke,
        rng: &mut StdRng,
        params: &mut HashMap<String, Value>,
    ) -> Result<Stroke> {
        let (min, max) = self.point_count_range;
        let count = if min >= max { min } else { rng.gen_range(min..=max) };
        params.insert("point_count".to_string(), json!(count));
        crate::algorithms::resample(stroke, count)
    }

    fn description(&self) -> String {
        format!(
            "Density({}..{} points)",
            self.point_count_range.0, self.point_count_range.1
        )
    }
}
