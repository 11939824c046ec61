use crate::algorithms::{NormalizedStroke, DEFAULT_RESAMPLE_COUNT};
use crate::error::RecognitionError;
use crate::geometry::Stroke;
use crate::pipeline::{NormalizeStage, PipelineStage, ResampleStage, StageTime};
use crate::Result;
use instant::Instant;
use tracing::{debug, warn};

/// Resample followed by normalize. Every stroke compared by a recognizer,
/// candidate or template, goes through the same preprocessor.
#[derive(Debug, Clone, Copy)]
pub struct Preprocessor {
    resample: ResampleStage,
    normalize: NormalizeStage,
}

/// Preprocessed stroke plus per-stage timings
#[derive(Debug, Clone)]
pub struct PreprocessOutput {
    pub stroke: NormalizedStroke,
    pub stage_timings: Vec<StageTime>,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self {
            resample: ResampleStage::new(DEFAULT_RESAMPLE_COUNT),
            normalize: NormalizeStage,
        }
    }
}

impl Preprocessor {
    pub fn new(resample_count: usize) -> Result<Self> {
        if resample_count < 2 {
            return Err(RecognitionError::InvalidResampleCount { n: resample_count });
        }
        Ok(Self {
            resample: ResampleStage::new(resample_count),
            normalize: NormalizeStage,
        })
    }

    pub fn resample_count(&self) -> usize {
        self.resample.count()
    }

    pub fn run(&self, stroke: Stroke) -> Result<NormalizedStroke> {
        self.run_timed(stroke).map(|output| output.stroke)
    }

    pub fn run_timed(&self, stroke: Stroke) -> Result<PreprocessOutput> {
        let mut stage_timings = Vec::with_capacity(2);
        let input_points = stroke.len();

        let resampled = timed_stage(&self.resample, stroke, &mut stage_timings)?;
        let normalized = timed_stage(&self.normalize, resampled, &mut stage_timings)?;

        debug!(
            input_points,
            output_points = normalized.len(),
            total_ms = stage_timings.iter().map(|t| t.duration_ms).sum::<f64>(),
            "Stroke preprocessed"
        );

        Ok(PreprocessOutput {
            stroke: normalized,
            stage_timings,
        })
    }
}

fn timed_stage<S: PipelineStage>(
    stage: &S,
    input: S::Input,
    timings: &mut Vec<StageTime>,
) -> Result<S::Output> {
    let start = Instant::now();
    let output = stage.execute(input);
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    match &output {
        Ok(_) => timings.push(StageTime {
            stage_name: stage.stage_name().to_string(),
            duration_ms,
        }),
        Err(e) => warn!(stage = stage.stage_name(), duration_ms, error = %e, "Pipeline stage failed"),
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_timed_records_both_stages() {
        let preprocessor = Preprocessor::new(32).unwrap();
        let stroke = Stroke::from_pairs(&[(0.0, 0.0), (30.0, 40.0), (60.0, 0.0)]);

        let output = preprocessor.run_timed(stroke).unwrap();
        assert_eq!(output.stroke.len(), 32);
        let names: Vec<&str> = output.stage_timings.iter().map(|t| t.stage_name.as_str()).collect();
        assert_eq!(names, ["Resample", "Normalize"]);
    }

    #[test]
    fn test_invalid_count_rejected() {
        assert_eq!(
            Preprocessor::new(1).unwrap_err(),
            RecognitionError::InvalidResampleCount { n: 1 }
        );
        assert_eq!(Preprocessor::default().resample_count(), DEFAULT_RESAMPLE_COUNT);
    }
}
