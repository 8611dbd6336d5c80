//! Four-round debate: initial statement, critique, rebuttal, outcome.
//!
//! The rounds form a fixed pipeline. Each stage builds its prompt from the
//! claim and the outputs of the stages before it, and every stage always runs.

use crate::{llm::Llm, types::{DebateOutcome, GenerationSettings}};
use anyhow::Result;
use tracing::{debug, info, instrument};

pub struct Stage {
    pub label: &'static str,
    prompt: fn(&str, &[String]) -> String,
}

impl Stage {
    /// Missing prior outputs render as empty text.
    pub fn prompt(&self, claim: &str, prior: &[String]) -> String {
        (self.prompt)(claim, prior)
    }
}

fn prior_text(prior: &[String], i: usize) -> &str {
    prior.get(i).map(String::as_str).unwrap_or_default()
}

fn initial_prompt(claim: &str, _prior: &[String]) -> String {
    format!("Consider the following statement: {claim}\nPlease provide your perspective on the accuracy of this statement.")
}

fn critique_prompt(_claim: &str, prior: &[String]) -> String {
    format!(
        "Consider the following statement: {}\nPlease identify any factual inaccuracies or inconsistencies \
         in the statement. Provide evidence to support your arguments.",
        prior_text(prior, 0)
    )
}

fn rebuttal_prompt(_claim: &str, prior: &[String]) -> String {
    format!(
        "Consider the following critique: {}\nPlease defend the factual accuracy of your original statement \
         in light of these counterarguments. Provide evidence to support your defense.",
        prior_text(prior, 1)
    )
}

fn outcome_prompt(_claim: &str, prior: &[String]) -> String {
    format!(
        "Given the following debate:\n\nInitial Statement: {}\nCritique: {}\nRebuttal: {}\n\n\
         Please provide a final verdict on whether the original statement is SUPPORTED or REFUTED \
         based on the arguments presented in the debate.",
        prior_text(prior, 0), prior_text(prior, 1), prior_text(prior, 2)
    )
}

pub const STAGES: [Stage; 4] = [
    Stage { label: "Model A's Initial Statement", prompt: initial_prompt },
    Stage { label: "Model B's Critique", prompt: critique_prompt },
    Stage { label: "Model A's Rebuttal", prompt: rebuttal_prompt },
    Stage { label: "Debate Outcome", prompt: outcome_prompt },
];

pub fn render_transcript(outputs: &[String]) -> String {
    STAGES.iter()
        .zip(outputs)
        .map(|(stage, out)| format!("{}:\n{}", stage.label, out))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[instrument(skip_all)]
pub async fn debate_method(client: &dyn Llm, settings: &GenerationSettings, claim: &str, verbose: bool)
-> Result<DebateOutcome> {
    if verbose { info!("question:\n{claim}"); }

    let mut outputs: Vec<String> = Vec::with_capacity(STAGES.len());
    for stage in STAGES.iter() {
        let req = settings.request(stage.prompt(claim, &outputs), settings.max_tokens);
        // embedded verbatim downstream; only the verdict is trimmed
        let text = client.generate(req).await?.text;
        if verbose {
            info!("{}:\n{text}", stage.label);
        } else {
            debug!(stage = stage.label, chars = text.len(), "debate stage done");
        }
        outputs.push(text);
    }

    let transcript = render_transcript(&outputs);
    let verdict = outputs.last().map(|s| s.trim().to_string()).unwrap_or_default();
    Ok(DebateOutcome { verdict, transcript, stages: outputs })
}
