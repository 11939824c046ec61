//! Span wrapping one classification.

use crate::pipeline::MatchResult;
use std::time::Instant;
use tracing::{field, span, Level, Span};

pub struct RecognitionSpan {
    span: Span,
    start_time: Instant,
}

impl RecognitionSpan {
    /// Opens a span tagged with the thread's correlation id, if one is set.
    pub fn new(matcher: &str, input_points: usize) -> Self {
        let span = match crate::logging::get_correlation_id() {
            Some(correlation_id) => span!(
                Level::INFO,
                "classify",
                matcher = matcher,
                input_points = input_points,
                label = field::Empty,
                score = field::Empty,
                correlation_id = %correlation_id
            ),
            None => span!(
                Level::INFO,
                "classify",
                matcher = matcher,
                input_points = input_points,
                label = field::Empty,
                score = field::Empty
            ),
        };

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    pub fn record_result(&self, result: &MatchResult) {
        let duration = self.start_time.elapsed();
        self.span.record("label", field::display(&result.label));
        self.span.record("score", result.score);

        tracing::info!(
            parent: &self.span,
            label = %result.label,
            score = result.score,
            confidence = result.confidence,
            execution_time_us = duration.as_micros() as u64,
            "Stroke classified"
        );
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}
