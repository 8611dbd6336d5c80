use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict { Supports, Refutes }

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Supports => "SUPPORTS",
            Verdict::Refutes => "REFUTES",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub claim: String,
    pub expected: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role { System, User, Assistant }

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// One chat-completion call. Built fresh per call and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub seed: i64,
    pub json_output: bool,
}

impl GenerationRequest {
    /// Concatenated user content; every request here carries a single user turn.
    pub fn prompt(&self) -> String {
        self.messages.iter()
            .filter(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Generation {
    pub text: String,
    pub meta: serde_json::Value, // id / finish reason / usage, opaque here
}

/// Model and decoding parameters shared by every call of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub seed: i64,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GenerationSettings {
    pub fn request(&self, prompt: String, max_tokens: u32) -> GenerationRequest {
        GenerationRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: self.temperature,
            max_tokens,
            seed: self.seed,
            json_output: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateOutcome {
    pub verdict: String,                // trimmed final stage output
    pub transcript: String,             // labeled blocks, stage order
    pub stages: Vec<String>,            // per-stage outputs as generated
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperimentResults {
    pub baseline_correctness: Vec<bool>,
    pub debate_correctness: Vec<bool>,
    pub style_check: Vec<bool>,
    pub baseline_predictions: Vec<String>,
    pub debate_predictions: Vec<String>,
}

impl ExperimentResults {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            baseline_correctness: Vec::with_capacity(n),
            debate_correctness: Vec::with_capacity(n),
            style_check: Vec::with_capacity(n),
            baseline_predictions: Vec::with_capacity(n),
            debate_predictions: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize { self.baseline_correctness.len() }

    pub fn is_empty(&self) -> bool { self.baseline_correctness.is_empty() }
}
