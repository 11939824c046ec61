use thiserror::Error;

/// Errors surfaced by the recognition pipeline.
///
/// Degenerate geometry (zero-length paths, zero-extent bounding boxes) is
/// valid input and never produces one of these.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecognitionError {
    /// Fewer than two points were supplied.
    #[error("Invalid stroke: at least 2 points required, got {points}")]
    InvalidStroke { points: usize },

    /// A coordinate was NaN or infinite.
    #[error("Invalid stroke: non-finite coordinate at point {index}")]
    NonFiniteCoordinate { index: usize },

    /// The stroke's extent or path length does not fit in an `f64`.
    #[error("Invalid stroke: coordinate span overflows f64")]
    CoordinateOverflow,

    /// Resampling needs at least two output points.
    #[error("Invalid resample count {n}: must be at least 2")]
    InvalidResampleCount { n: usize },

    /// Candidate and template angle sequences differ in length.
    #[error("Length mismatch: candidate has {candidate} points, template has {template}")]
    LengthMismatch { candidate: usize, template: usize },

    #[error("Duplicate template label: {0}")]
    DuplicateTemplate(String),

    #[error("Invalid template '{label}': at least 2 points required, got {points}")]
    InvalidTemplate { label: String, points: usize },
}

impl RecognitionError {
    pub fn invalid_stroke(points: usize) -> Self {
        Self::InvalidStroke { points }
    }

    pub fn length_mismatch(candidate: usize, template: usize) -> Self {
        Self::LengthMismatch { candidate, template }
    }

    /// True for errors caused by the caller's stroke rather than configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidStroke { .. }
                | Self::NonFiniteCoordinate { .. }
                | Self::CoordinateOverflow
        )
    }
}
