use anyhow::Result;
use clap::Parser;
use debatescore_rs::{
    evaluator::LlmJudge,
    experiment::{run_experiment, ExperimentConfig, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SEED},
    llm::openai::LlmClient,
    scoring::ExperimentSummary,
    testset::generate_testset,
};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins for everything except the crate's own info events,
/// which `--verbose` always turns on.
fn log_filter(verbose: bool, rust_log: Option<String>) -> Result<EnvFilter> {
  let filter = rust_log
    .and_then(|s| EnvFilter::try_new(s).ok())
    .unwrap_or_else(|| EnvFilter::new("warn"));
  if !verbose { return Ok(filter); }
  Ok(filter.add_directive("debatescore_rs=info".parse()?))
}

/// Debate prompting vs. self-consistency scoring on a fixed factuality test set.
#[derive(Parser)]
#[command(name="debatescore", version, about)]
struct Cli {
  #[arg(long, default_value=DEFAULT_MODEL)] model: String,
  #[arg(long, default_value_t=DEFAULT_SEED)] seed: i64,
  /// Output cap for the baseline and each debate round
  #[arg(long, default_value_t=DEFAULT_MAX_TOKENS)] max_tokens: u32,
  /// OpenAI-compatible endpoint
  #[arg(long, env="OPENAI_BASE_URL")] base_url: Option<String>,
  #[arg(long, env="OPENAI_API_KEY", hide_env_values=true)] api_key: Option<String>,
  #[arg(long, default_value_t=120_000)] timeout_ms: u64,
  /// Client-side request rate limit
  #[arg(long, default_value_t=4)] qps: u32,
  /// Log every debate round
  #[arg(long)] verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  tracing_subscriber::fmt()
    .with_env_filter(log_filter(cli.verbose, std::env::var("RUST_LOG").ok())?)
    .with_writer(std::io::stderr)
    .init();

  let testset = generate_testset();
  println!("simulated {} test examples for evaluation.", testset.len());

  let cfg = ExperimentConfig { model: cli.model, seed: cli.seed, max_tokens: cli.max_tokens, verbose: cli.verbose };
  let client = LlmClient::new(cli.base_url, cli.api_key, cli.qps, cli.timeout_ms)?;
  println!("using model:  {}", cfg.model);

  let judge = LlmJudge::new(&client, cfg.generation());
  let results = run_experiment(&client, &judge, &cfg, &testset).await?;
  let summary = ExperimentSummary::from_results(&results);
  println!("baseline correctness:  {}", summary.baseline_correctness);
  println!("proposed correctness:  {}", summary.debate_correctness);
  println!("style check pass rate:  {}", summary.style_pass_rate);
  Ok(())
}
