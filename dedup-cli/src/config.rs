//! CLI Configuration

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dedup_core::{DuplicateMatcher, MatcherConfig, SimilarityKind};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Matching policy after file and flag overrides.
    pub matcher: MatcherConfig,
    /// Print machine-readable JSON instead of tables.
    pub json: bool,
}

impl CliConfig {
    /// Builds the configuration from an optional JSON file and flag overrides.
    ///
    /// Flags win over the file; the file wins over built-in defaults.
    pub fn load(
        config_path: Option<&Path>,
        threshold: Option<f64>,
        similarity: Option<SimilarityKind>,
        json: bool,
    ) -> Result<Self> {
        let mut matcher = match config_path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                MatcherConfig::from_json(&raw)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => MatcherConfig::default(),
        };

        if let Some(threshold) = threshold {
            matcher = matcher.with_threshold(threshold);
        }
        if let Some(similarity) = similarity {
            matcher = matcher.with_similarity(similarity);
        }
        matcher.validate()?;

        Ok(CliConfig { matcher, json })
    }

    /// Builds the matcher for this configuration.
    pub fn matcher(&self) -> Result<DuplicateMatcher> {
        Ok(DuplicateMatcher::from_config(self.matcher.clone())?)
    }
}
