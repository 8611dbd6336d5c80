use crate::{llm::Llm, types::{GenerationSettings, Verdict}};
use anyhow::Result;
use tracing::debug;

/// Judges used by the experiment runner. Model-backed in production, stubbed in tests.
#[async_trait::async_trait]
pub trait Evaluator: Send + Sync {
    /// Is `candidate` a correct judgment of `claim` given the ground truth?
    async fn judge_outcome(&self, claim: &str, expected: Verdict, candidate: &str) -> Result<bool>;

    /// Does the debate transcript meet the completeness criteria relative to the baseline?
    async fn judge_style(&self, claim: &str, baseline: &str, transcript: &str) -> Result<bool>;
}

/// Exactly "yes" after trimming and lowercasing; everything else is a no.
pub fn is_affirmative(response: &str) -> bool {
    response.trim().to_lowercase() == "yes"
}

fn build_outcome_prompt(claim: &str, expected: Verdict, candidate: &str) -> String {
    format!(
        "Given the following statement and the debate outcome, determine if the debate outcome is correct. \
         Just tell me 'yes' or 'no', nothing else is needed.\n\n\
         Statement: {claim}\n\nDebate Outcome: {candidate}\n\nGround Truth: {expected}\n\n"
    )
}

fn build_style_prompt(claim: &str, baseline: &str, transcript: &str) -> String {
    let mut prompt = format!("Given the task: {claim}\n");
    prompt += &format!("The baseline method produced the following output:\n{baseline}\n\n");
    prompt += &format!("The proposed new method produced the following output:\n{transcript}\n\n");
    prompt += "Now determine if the proposed method is better by checking if it has satisfied the following criteria:\n";
    prompt += "1. The proposed method's output should include all the key debate components: initial statement, critique, rebuttal, and final outcome.\n";
    prompt += "2. The proposed method should provide a more comprehensive analysis of the statement's accuracy compared to the baseline method.\n";
    prompt += "Just tell me 'yes' or 'no' for whether the criteria are met, nothing else is needed.";
    prompt
}

/// Grades with the same model and seed as the strategies, one output token per call.
pub struct LlmJudge<'a> {
    client: &'a dyn Llm,
    settings: GenerationSettings,
}

impl<'a> LlmJudge<'a> {
    pub const MAX_TOKENS: u32 = 1;

    pub fn new(client: &'a dyn Llm, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    async fn ask(&self, prompt: String) -> Result<bool> {
        let out = self.client.generate(self.settings.request(prompt, Self::MAX_TOKENS)).await?;
        let yes = is_affirmative(&out.text);
        debug!(response = %out.text.trim(), yes, "judge");
        Ok(yes)
    }
}

#[async_trait::async_trait]
impl Evaluator for LlmJudge<'_> {
    async fn judge_outcome(&self, claim: &str, expected: Verdict, candidate: &str) -> Result<bool> {
        self.ask(build_outcome_prompt(claim, expected, candidate)).await
    }

    async fn judge_style(&self, claim: &str, baseline: &str, transcript: &str) -> Result<bool> {
        self.ask(build_style_prompt(claim, baseline, transcript)).await
    }
}
