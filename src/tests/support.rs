use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;

use crate::evaluator::Evaluator;
use crate::llm::Llm;
use crate::types::{Generation, GenerationRequest, Verdict};

type Handler = Box<dyn Fn(&GenerationRequest) -> Result<String> + Send + Sync>;

pub struct FakeLlm {
    // maps each request to the completion text
    handler: Handler,
    seen: Mutex<Vec<GenerationRequest>>,
}

impl FakeLlm {
    pub fn new(f: impl Fn(&GenerationRequest) -> String + Send + Sync + 'static) -> Self {
        Self { handler: Box::new(move |r: &GenerationRequest| -> Result<String> { Ok(f(r)) }), seen: Mutex::new(Vec::new()) }
    }

    pub fn failing(msg: &'static str) -> Self {
        Self { handler: Box::new(move |_: &GenerationRequest| -> Result<String> { Err(anyhow!(msg)) }), seen: Mutex::new(Vec::new()) }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Llm for FakeLlm {
    async fn generate(&self, req: GenerationRequest) -> Result<Generation> {
        self.seen.lock().unwrap().push(req.clone());
        let text = (self.handler)(&req)?;
        Ok(Generation { text, meta: serde_json::json!({"fake": true}) })
    }
}

/// Deterministic judge keyed on the claim; records the claim of every call.
pub struct ScriptedJudge {
    decide: Box<dyn Fn(&str) -> bool + Send + Sync>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedJudge {
    pub fn new(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self { decide: Box::new(f), calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, claim: &str) -> bool {
        self.calls.lock().unwrap().push(claim.to_string());
        (self.decide)(claim)
    }
}

#[async_trait]
impl Evaluator for ScriptedJudge {
    async fn judge_outcome(&self, claim: &str, _expected: Verdict, _candidate: &str) -> Result<bool> {
        Ok(self.record(claim))
    }

    async fn judge_style(&self, claim: &str, _baseline: &str, _transcript: &str) -> Result<bool> {
        Ok(self.record(claim))
    }
}
