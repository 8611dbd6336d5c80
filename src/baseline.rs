use crate::{llm::Llm, types::GenerationSettings};
use anyhow::Result;
use tracing::instrument;

fn build_baseline_prompt(claim: &str) -> String {
    format!(
        "Given the following statement: {claim}\n\
         Please verify the factual accuracy of the statement. Provide a score from 1 to 5, \
         where 1 means the statement is completely inaccurate and 5 means the statement is \
         completely accurate. Explain your reasoning."
    )
}

/// Self-consistency scoring: a single 1-5 accuracy judgment, returned unparsed.
#[instrument(skip_all)]
pub async fn baseline_method(client: &dyn Llm, settings: &GenerationSettings, claim: &str) -> Result<String> {
    let req = settings.request(build_baseline_prompt(claim), settings.max_tokens);
    let out = client.generate(req).await?;
    Ok(out.text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::FakeLlm;

    #[tokio::test]
    async fn baseline_issues_one_deterministic_call() {
        let fake = FakeLlm::new(|_| "  Score: 1. The tallest is not the tower.\n".into());
        let settings = GenerationSettings { model: "m".into(), seed: 2024, temperature: 0.0, max_tokens: 2000 };
        let out = baseline_method(&fake, &settings, "The Eiffel Tower is the tallest building in Paris.").await.unwrap();

        assert_eq!(out, "Score: 1. The tallest is not the tower.");
        let reqs = fake.requests();
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].temperature, 0.0);
        assert_eq!(reqs[0].seed, 2024);
        assert_eq!(reqs[0].max_tokens, 2000);
        let prompt = reqs[0].prompt();
        assert!(prompt.starts_with("Given the following statement: The Eiffel Tower is the tallest building in Paris.\n"));
        assert!(prompt.contains("Provide a score from 1 to 5"));
    }

    #[tokio::test]
    async fn baseline_propagates_client_errors() {
        let fake = FakeLlm::failing("rate limited");
        let settings = GenerationSettings { model: "m".into(), seed: 1, temperature: 0.0, max_tokens: 10 };
        let err = baseline_method(&fake, &settings, "c").await.unwrap_err();
        assert!(err.to_string().contains("rate limited"));
    }
}
