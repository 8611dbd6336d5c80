use crate::{
    baseline::baseline_method,
    debate::debate_method,
    evaluator::Evaluator,
    llm::Llm,
    types::{ExperimentResults, GenerationSettings, TestCase},
};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, instrument};

pub const DEFAULT_MODEL: &str = "claude-3-opus-20240229";
pub const DEFAULT_SEED: i64 = 2024;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub model: String,
    pub seed: i64,
    pub max_tokens: u32,
    pub verbose: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self { model: DEFAULT_MODEL.to_string(), seed: DEFAULT_SEED, max_tokens: DEFAULT_MAX_TOKENS, verbose: false }
    }
}

impl ExperimentConfig {
    /// Greedy decoding; only the token cap differs between strategies and judges.
    pub fn generation(&self) -> GenerationSettings {
        GenerationSettings { model: self.model.clone(), seed: self.seed, temperature: 0.0, max_tokens: self.max_tokens }
    }
}

fn progress(n: usize) -> ProgressBar {
    let pb = ProgressBar::new(n as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} [{elapsed_precise}<{eta_precise}]") {
        pb.set_style(style);
    }
    pb
}

/// Baseline and debate per case, both graded for correctness, then the style check.
/// Strictly sequential; the first failed call ends the run.
#[instrument(skip_all, fields(cases = testset.len(), model = %cfg.model))]
pub async fn run_experiment(client: &dyn Llm, judge: &dyn Evaluator, cfg: &ExperimentConfig, testset: &[TestCase])
-> Result<ExperimentResults> {
    let settings = cfg.generation();
    let mut results = ExperimentResults::with_capacity(testset.len());
    let pb = progress(testset.len());

    for (i, case) in testset.iter().enumerate() {
        let claim = case.claim.trim();

        let baseline = baseline_method(client, &settings, claim).await?;
        let debate = debate_method(client, &settings, claim, cfg.verbose).await?;

        let baseline_ok = judge.judge_outcome(claim, case.expected, &baseline).await?;
        let debate_ok = judge.judge_outcome(claim, case.expected, &debate.verdict).await?;
        let style_ok = judge.judge_style(claim, &baseline, &debate.transcript).await?;
        debug!(case = i, baseline_ok, debate_ok, style_ok, "case scored");

        results.baseline_correctness.push(baseline_ok);
        results.debate_correctness.push(debate_ok);
        results.style_check.push(style_ok);
        results.baseline_predictions.push(baseline);
        results.debate_predictions.push(debate.verdict);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(results)
}
