pub mod algorithms;
pub mod augmentation;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod pipeline;
pub mod recognizer;
pub mod registry;

pub use algorithms::{distance, normalize, resample, AngleMetric, AngleSequence, NormalizedStroke};
pub use error::RecognitionError;
pub use geometry::{BoundingBox, Point, Stroke};
pub use pipeline::{Label, MatchResult, TemplateScore};
pub use recognizer::{classify, Recognizer};
pub use registry::{Template, TemplateRegistry};

pub type Result<T> = std::result::Result<T, RecognitionError>;
