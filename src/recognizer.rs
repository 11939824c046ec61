use crate::algorithms::{AngleMetric, DirectionAngleMatcher, NormalizedStroke};
use crate::config::RecognizerConfig;
use crate::geometry::Stroke;
use crate::logging::RecognitionSpan;
use crate::pipeline::{Label, MatchResult, Preprocessor, StrokeMatcher, TemplateScore};
use crate::registry::{Template, TemplateRegistry};
use crate::Result;
use instant::Instant;
use rayon::prelude::*;
use std::borrow::Cow;
use tracing::debug;

/// Classifies complete strokes against a fixed template registry.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
pub struct Recognizer {
    registry: TemplateRegistry,
    preprocessor: Preprocessor,
    matcher: Box<dyn StrokeMatcher>,
    /// Preprocessed templates, index-aligned with `registry`
    prepared: Option<Vec<NormalizedStroke>>,
}

impl Recognizer {
    /// Reference registry with default configuration.
    pub fn reference() -> Result<Self> {
        Self::new(TemplateRegistry::reference(), &RecognizerConfig::default())
    }

    pub fn new(registry: TemplateRegistry, config: &RecognizerConfig) -> Result<Self> {
        Self::with_matcher(
            registry,
            config,
            Box::new(DirectionAngleMatcher::new(config.angle_metric)),
        )
    }

    pub fn with_matcher(
        registry: TemplateRegistry,
        config: &RecognizerConfig,
        matcher: Box<dyn StrokeMatcher>,
    ) -> Result<Self> {
        let preprocessor = Preprocessor::new(config.resample_count)?;

        let prepared = if config.precompute_templates {
            let strokes = registry
                .iter()
                .map(|t| preprocessor.run(t.stroke.clone()))
                .collect::<Result<Vec<_>>>()?;
            Some(strokes)
        } else {
            None
        };

        debug!(
            templates = registry.len(),
            resample_count = config.resample_count,
            matcher = matcher.name(),
            cached = config.precompute_templates,
            "Recognizer initialized"
        );

        Ok(Self {
            registry,
            preprocessor,
            matcher,
            prepared,
        })
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn resample_count(&self) -> usize {
        self.preprocessor.resample_count()
    }

    pub fn matcher_name(&self) -> &str {
        self.matcher.name()
    }

    /// Best-matching template for `stroke`.
    ///
    /// Fails only for an invalid stroke. With an empty registry the result is
    /// [`Label::Unrecognized`]. Ties go to the earliest registered template.
    pub fn classify(&self, stroke: &Stroke) -> Result<MatchResult> {
        let start = Instant::now();
        let span = RecognitionSpan::new(self.matcher.name(), stroke.len());
        let _guard = span.enter();

        let candidate = self.preprocessor.run(stroke.clone())?;

        let mut best: Option<(&str, f64)> = None;
        for (index, template) in self.registry.iter().enumerate() {
            let prepared = self.prepared_template(index, template)?;
            let score = self.matcher.distance(&candidate, &prepared)?;
            debug!(template = %template.label, score, "Template scored");
            if best.map_or(true, |(_, best_score)| score.total_cmp(&best_score).is_lt()) {
                best = Some((template.label.as_str(), score));
            }
        }

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        let result = match best {
            Some((label, score)) => MatchResult {
                label: Label::Template(label.to_string()),
                score,
                confidence: self.matcher.confidence(score, candidate.len()),
                execution_time_ms: elapsed_ms,
                matcher_name: self.matcher.name().to_string(),
            },
            None => {
                MatchResult::unrecognized(self.matcher.name()).with_execution_time(elapsed_ms)
            }
        };

        span.record_result(&result);
        Ok(result)
    }

    /// Label only, for callers that dispatch on the outcome.
    pub fn classify_label(&self, stroke: &Stroke) -> Result<Label> {
        self.classify(stroke).map(|r| r.label)
    }

    /// Every template's score, best first. Equal scores keep registry order.
    pub fn rank(&self, stroke: &Stroke) -> Result<Vec<TemplateScore>> {
        let candidate = self.preprocessor.run(stroke.clone())?;

        let mut scores = self
            .registry
            .iter()
            .enumerate()
            .map(|(index, template)| {
                let prepared = self.prepared_template(index, template)?;
                let score = self.matcher.distance(&candidate, &prepared)?;
                Ok(TemplateScore {
                    label: template.label.clone(),
                    score,
                    confidence: self.matcher.confidence(score, candidate.len()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        scores.sort_by(|a, b| a.score.total_cmp(&b.score));
        Ok(scores)
    }

    /// Classifies many strokes in parallel; results keep input order.
    pub fn classify_batch(&self, strokes: &[Stroke]) -> Vec<Result<MatchResult>> {
        strokes.par_iter().map(|s| self.classify(s)).collect()
    }

    fn prepared_template(
        &self,
        index: usize,
        template: &Template,
    ) -> Result<Cow<'_, NormalizedStroke>> {
        match &self.prepared {
            Some(prepared) => Ok(Cow::Borrowed(&prepared[index])),
            None => self.preprocessor.run(template.stroke.clone()).map(Cow::Owned),
        }
    }
}

/// One-shot classification without building a long-lived [`Recognizer`].
pub fn classify(candidate: &Stroke, templates: &TemplateRegistry, n: usize) -> Result<MatchResult> {
    let config = RecognizerConfig {
        resample_count: n,
        angle_metric: AngleMetric::default(),
        precompute_templates: false,
    };
    Recognizer::new(templates.clone(), &config)?.classify(candidate)
}
