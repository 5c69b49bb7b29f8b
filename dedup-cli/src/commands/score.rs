//! Score Command
//!
//! Prints the similarity of two strings with the configured strategy.

use anyhow::Result;

use crate::config::CliConfig;

/// Returns the similarity percentage of `a` and `b`.
///
/// Inputs are lower-cased the same way composite keys are.
pub fn score(config: &CliConfig, a: &str, b: &str) -> Result<f64> {
    let matcher = config.matcher()?;
    Ok(matcher.score_keys(&a.to_lowercase(), &b.to_lowercase()) * 100.0)
}

/// Prints the similarity percentage of `a` and `b`.
pub fn run(config: &CliConfig, a: &str, b: &str) -> Result<()> {
    let score = score(config, a, b)?;
    let strategy = config.matcher.similarity;

    if config.json {
        println!(
            "{}",
            serde_json::json!({ "similarity": strategy, "score": score })
        );
    } else {
        println!("{:.2}% ({})", score, strategy);
    }

    Ok(())
}
