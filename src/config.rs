//! Run configuration.

use std::path::PathBuf;

/// Input file analysed when no other path is configured.
pub const DEFAULT_INPUT: &str = "audio.wav";

/// What to do when the decoded buffer holds no samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyInputPolicy {
    /// Fail with [`AudioStatsError::EmptyInput`](crate::AudioStatsError::EmptyInput).
    #[default]
    Reject,
    /// Evaluate the formulas anyway; the means and deviations come out as `NaN` or `0`.
    Propagate,
}

/// Settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Audio file to analyse.
    pub input: PathBuf,
    /// Handling of zero-length input.
    pub empty_input: EmptyInputPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            empty_input: EmptyInputPolicy::default(),
        }
    }
}

impl AnalysisConfig {
    /// Configuration for `input` with default policies.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Sets the empty-input policy.
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }
}
