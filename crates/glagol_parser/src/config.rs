//! Configuration for sentence analysis.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many templates an analysis collects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatchPolicy {
    /// Stop at the first template that parses.
    #[default]
    FirstTemplate,
    /// Try every template and report each one that parses.
    AllTemplates,
}

/// Configuration for a [`Pipeline`](crate::Pipeline).
///
/// Controls the enumeration budget, the template policy, and which templates
/// are tried.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipelineConfig {
    /// Maximum concrete sequences tried per sentence, across all templates.
    pub max_sequences: usize,

    /// Template policy.
    pub policy: MatchPolicy,

    /// Restricts analysis to these template ids, in grammar order.
    /// `None` tries every template.
    pub templates: Option<Vec<String>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_sequences: 10_000,
            policy: MatchPolicy::FirstTemplate,
            templates: None,
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration with a small budget, for tests and latency-bound callers.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_sequences: 256,
            ..Self::default()
        }
    }

    /// Creates a configuration that collects every matching template.
    #[must_use]
    pub fn exhaustive() -> Self {
        Self {
            policy: MatchPolicy::AllTemplates,
            ..Self::default()
        }
    }

    /// Builder method to set the sequence budget.
    #[must_use]
    pub fn with_max_sequences(mut self, max: usize) -> Self {
        self.max_sequences = max;
        self
    }

    /// Builder method to set the template policy.
    #[must_use]
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder method to restrict the template set.
    #[must_use]
    pub fn with_templates<I, S>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.templates = Some(templates.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if the template with this id should be tried.
    #[must_use]
    pub fn allows(&self, template_id: &str) -> bool {
        self.templates
            .as_ref()
            .is_none_or(|ids| ids.iter().any(|id| id == template_id))
    }
}
