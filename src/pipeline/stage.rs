use crate::algorithms::{normalize, resample, NormalizedStroke};
use crate::geometry::Stroke;
use crate::pipeline::PipelineStage;
use crate::Result;

/// Stage that resamples a stroke to a fixed point count
#[derive(Debug, Clone, Copy)]
pub struct ResampleStage {
    count: usize,
}

impl ResampleStage {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl PipelineStage for ResampleStage {
    type Input = Stroke;
    type Output = Stroke;

    fn execute(&self, input: Self::Input) -> Result<Self::Output> {
        resample(&input, self.count)
    }

    fn stage_name(&self) -> &str {
        "Resample"
    }
}

/// Stage that maps a stroke into the unit square
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeStage;

impl PipelineStage for NormalizeStage {
    type Input = Stroke;
    type Output = NormalizedStroke;

    fn execute(&self, input: Self::Input) -> Result<Self::Output> {
        Ok(normalize(&input))
    }

    fn stage_name(&self) -> &str {
        "Normalize"
    }
}
