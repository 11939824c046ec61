use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome label of a classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Template(String),
    Unrecognized,
}

impl Label {
    pub fn as_template(&self) -> Option<&str> {
        match self {
            Label::Template(name) => Some(name),
            Label::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Label::Template(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Template(name) => write!(f, "{name}"),
            Label::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Result of classifying one stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Best template, or `Unrecognized` when no templates are registered
    pub label: Label,

    /// Distance to the best template (`f64::INFINITY` when unrecognized)
    pub score: f64,

    /// Score mapped to 0-1, where 1 is a perfect match
    pub confidence: f64,

    /// Processing time in milliseconds
    pub execution_time_ms: f64,

    /// Name of the matcher used
    pub matcher_name: String,
}

impl MatchResult {
    pub fn unrecognized(matcher_name: &str) -> Self {
        Self {
            label: Label::Unrecognized,
            score: f64::INFINITY,
            confidence: 0.0,
            execution_time_ms: 0.0,
            matcher_name: matcher_name.to_string(),
        }
    }

    pub fn with_execution_time(mut self, ms: f64) -> Self {
        self.execution_time_ms = ms;
        self
    }
}

/// Distance from a candidate to one template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateScore {
    pub label: String,
    pub score: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageTime {
    pub stage_name: String,
    pub duration_ms: f64,
}
