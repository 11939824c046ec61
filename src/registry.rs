//! Named template library.
//!
//! A registry is assembled once through [`RegistryBuilder`] and has no
//! mutating methods afterwards, so it can be shared freely between threads.

use crate::error::RecognitionError;
use crate::geometry::Stroke;
use crate::Result;
use serde::{Deserialize, Serialize};

/// `<`: start audio capture
pub const LESS_THAN: &[(f64, f64)] = &[(0.8, 0.2), (0.4, 0.5), (0.8, 0.8)];
/// `>`: start video capture
pub const GREATER_THAN: &[(f64, f64)] = &[(0.2, 0.2), (0.6, 0.5), (0.2, 0.8)];
/// `V`: notify guardians
pub const CHECK_V: &[(f64, f64)] = &[(0.2, 0.1), (0.5, 0.8), (0.8, 0.1)];
/// `^`: alert police
pub const CARET: &[(f64, f64)] = &[(0.5, 0.8), (0.3, 0.3), (0.7, 0.3), (0.5, 0.8)];

/// A labelled reference stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub label: String,
    pub stroke: Stroke,
}

/// Ordered, label-unique collection of templates.
///
/// Iteration order is registration order; classification ties resolve to the
/// earliest template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// A registry with no templates; every classification is unrecognized.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The four built-in gestures: `<`, `>`, `V`, `^`.
    pub fn reference() -> Self {
        Self {
            templates: [
                ("<", LESS_THAN),
                (">", GREATER_THAN),
                ("V", CHECK_V),
                ("^", CARET),
            ]
            .into_iter()
            .map(|(label, pairs)| Template {
                label: label.to_string(),
                stroke: Stroke::from_pairs(pairs),
            })
            .collect(),
        }
    }

    pub fn from_templates<I>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = Template>,
    {
        templates
            .into_iter()
            .try_fold(RegistryBuilder::default(), |builder, t| {
                builder.with_template(t.label, t.stroke)
            })
            .map(RegistryBuilder::build)
    }

    pub fn get(&self, label: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.label == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.label.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateRegistry {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

/// Collects templates, rejecting duplicate labels and unusable strokes.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    templates: Vec<Template>,
}

impl RegistryBuilder {
    pub fn with_template(mut self, label: impl Into<String>, stroke: Stroke) -> Result<Self> {
        let label = label.into();
        if self.templates.iter().any(|t| t.label == label) {
            return Err(RecognitionError::DuplicateTemplate(label));
        }
        match stroke.validate() {
            Ok(()) => {}
            Err(RecognitionError::InvalidStroke { points }) => {
                return Err(RecognitionError::InvalidTemplate { label, points });
            }
            Err(e) => return Err(e),
        }
        self.templates.push(Template { label, stroke });
        Ok(self)
    }

    pub fn with_pairs(self, label: impl Into<String>, pairs: &[(f64, f64)]) -> Result<Self> {
        self.with_template(label, Stroke::from_pairs(pairs))
    }

    pub fn build(self) -> TemplateRegistry {
        TemplateRegistry {
            templates: self.templates,
        }
    }
}
