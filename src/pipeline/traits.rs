use crate::algorithms::NormalizedStroke;
use crate::Result;

/// One step of stroke preprocessing.
pub trait PipelineStage: Send + Sync {
    type Input;
    type Output;

    /// Execute this stage of the pipeline
    fn execute(&self, input: Self::Input) -> Result<Self::Output>;

    /// Get the name of this stage for logging/debugging
    fn stage_name(&self) -> &str;
}

/// Similarity metric between two preprocessed strokes.
pub trait StrokeMatcher: Send + Sync {
    /// Returns the name of the matcher
    fn name(&self) -> &str;

    /// Distance between candidate and template. Lower is more similar; 0 is identical.
    fn distance(&self, candidate: &NormalizedStroke, template: &NormalizedStroke) -> Result<f64>;

    /// Upper bound on [`StrokeMatcher::distance`] for strokes of `points` points,
    /// used to turn a distance into a confidence.
    fn worst_distance(&self, points: usize) -> f64;

    /// Maps a distance onto [0, 1], where 1 is a perfect match.
    fn confidence(&self, distance: f64, points: usize) -> f64 {
        let worst = self.worst_distance(points);
        if worst <= 0.0 || !distance.is_finite() {
            return 0.0;
        }
        (1.0 - distance / worst).clamp(0.0, 1.0)
    }
}
