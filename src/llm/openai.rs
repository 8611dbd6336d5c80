use anyhow::{anyhow, Context, Result};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::Llm;
use crate::types::{ChatMessage, Generation, GenerationRequest, Role};

pub const DEFAULT_QPS: NonZeroU32 = nonzero!(4u32);

#[derive(Clone)]
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    limiter: Arc<DefaultDirectRateLimiter>,
}

impl LlmClient {
    pub fn new(base_url: Option<String>, api_key: Option<String>, qps: u32, timeout_ms: u64) -> Result<Self> {
        let mut cfg = OpenAIConfig::default();
        if let Some(url) = base_url { cfg = cfg.with_api_base(url); }
        if let Some(key) = api_key { cfg = cfg.with_api_key(key); }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .context("building http client")?;
        let client = Client::with_config(cfg).with_http_client(http);
        let qps = NonZeroU32::new(qps).unwrap_or(DEFAULT_QPS);
        let limiter = Arc::new(RateLimiter::direct(Quota::per_second(qps)));
        Ok(Self { client, limiter })
    }
}

fn to_openai_message(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    Ok(match msg.role {
        Role::System => ChatCompletionRequestSystemMessageArgs::default().content(content).build()?.into(),
        Role::User => ChatCompletionRequestUserMessageArgs::default().content(content).build()?.into(),
        Role::Assistant => ChatCompletionRequestAssistantMessageArgs::default().content(content).build()?.into(),
    })
}

pub(crate) fn build_request(req: &GenerationRequest) -> Result<CreateChatCompletionRequest> {
    let messages = req.messages.iter().map(to_openai_message).collect::<Result<Vec<_>>>()?;
    let mut args = CreateChatCompletionRequestArgs::default();
    args.model(req.model.clone())
        .messages(messages)
        .temperature(req.temperature)
        .max_tokens(req.max_tokens)
        .seed(req.seed);
    if req.json_output {
        args.response_format(ResponseFormat::JsonObject);
    }
    Ok(args.build()?)
}

#[async_trait::async_trait]
impl Llm for LlmClient {
    async fn generate(&self, req: GenerationRequest) -> Result<Generation> {
        let body = build_request(&req)?;
        self.limiter.until_ready().await;
        debug!(model = %req.model, max_tokens = req.max_tokens, "chat completion");

        let resp = self.client.chat().create(body).await
            .with_context(|| format!("chat completion against {}", req.model))?;
        let choice = resp.choices.into_iter().next()
            .ok_or_else(|| anyhow!("chat completion returned no choices"))?;
        let meta = serde_json::json!({
            "id": resp.id,
            "finish_reason": choice.finish_reason,
            "usage": resp.usage,
        });
        Ok(Generation { text: choice.message.content.unwrap_or_default(), meta })
    }
}
