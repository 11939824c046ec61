use crate::algorithms::normalize::NormalizedStroke;
use crate::error::RecognitionError;
use crate::geometry::Point;
use crate::pipeline::StrokeMatcher;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// How two segment directions are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMetric {
    /// Plain `|a - b|`. Directions either side of the +/-pi seam score close
    /// to 2*pi apart even when nearly parallel.
    Raw,
    /// Shortest angular difference, always within [0, pi].
    #[default]
    Wrapped,
}

impl AngleMetric {
    pub fn difference(self, a: f64, b: f64) -> f64 {
        let delta = a - b;
        match self {
            AngleMetric::Raw => delta.abs(),
            AngleMetric::Wrapped => delta.sin().atan2(delta.cos()).abs(),
        }
    }

    /// Largest value [`AngleMetric::difference`] can return.
    pub fn max_difference(self) -> f64 {
        match self {
            AngleMetric::Raw => 2.0 * PI,
            AngleMetric::Wrapped => PI,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AngleMetric::Raw => "raw",
            AngleMetric::Wrapped => "wrapped",
        }
    }
}

impl std::str::FromStr for AngleMetric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(AngleMetric::Raw),
            "wrapped" => Ok(AngleMetric::Wrapped),
            other => Err(format!("Unknown angle metric: {other} (expected raw or wrapped)")),
        }
    }
}

/// Segment directions of a point sequence, one per consecutive pair.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleSequence {
    angles: Vec<f64>,
}

impl AngleSequence {
    /// A zero-length segment has direction 0.
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            angles: points.windows(2).map(|w| w[0].direction_to(&w[1])).collect(),
        }
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Sum of per-index direction differences under `metric`.
    pub fn distance(&self, other: &AngleSequence, metric: AngleMetric) -> Result<f64> {
        if self.len() != other.len() {
            return Err(RecognitionError::length_mismatch(self.len() + 1, other.len() + 1));
        }
        Ok(self
            .angles
            .iter()
            .zip(&other.angles)
            .map(|(&a, &b)| metric.difference(a, b))
            .sum())
    }
}

/// Direction-angle distance between two normalized strokes of equal length,
/// using the wrapped metric.
pub fn distance(candidate: &NormalizedStroke, template: &NormalizedStroke) -> Result<f64> {
    DirectionAngleMatcher::default().distance(candidate, template)
}

/// Scores strokes by summed segment-direction differences. Lower is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionAngleMatcher {
    pub metric: AngleMetric,
}

impl DirectionAngleMatcher {
    pub fn new(metric: AngleMetric) -> Self {
        Self { metric }
    }
}

impl StrokeMatcher for DirectionAngleMatcher {
    fn name(&self) -> &str {
        match self.metric {
            AngleMetric::Raw => "DirectionAngle(raw)",
            AngleMetric::Wrapped => "DirectionAngle(wrapped)",
        }
    }

    fn distance(&self, candidate: &NormalizedStroke, template: &NormalizedStroke) -> Result<f64> {
        if candidate.len() != template.len() {
            return Err(RecognitionError::length_mismatch(candidate.len(), template.len()));
        }
        let candidate_angles = AngleSequence::from_points(candidate.points());
        let template_angles = AngleSequence::from_points(template.points());
        candidate_angles.distance(&template_angles, self.metric)
    }

    fn worst_distance(&self, points: usize) -> f64 {
        points.saturating_sub(1) as f64 * self.metric.max_difference()
    }
}
