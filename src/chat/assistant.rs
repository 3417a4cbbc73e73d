//! The "ask Mendel" tutor.
//!
//! A thin client for a remote text generation service. The cross engine
//! never depends on this module; the web layer calls it and substitutes a
//! configured fallback message when the remote call fails, so a broken
//! tutor never breaks the lab.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;

/// Errors from the tutor capability
#[derive(Debug)]
pub enum ChatError {
    /// The tutor is not usable as configured (e.g. missing API key)
    Config(String),
    /// The remote call failed
    Network(reqwest::Error),
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Tutor configuration error: {}", msg),
            Self::Network(e) => write!(f, "Tutor request failed: {}", e),
        }
    }
}

impl std::error::Error for ChatError {}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}

/// Chat tutor backed by a generateContent-style REST API
pub struct Tutor {
    client: Client,
    config: ChatConfig,
    api_key: Option<String>,
}

// Wire format of the generateContent call

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl Tutor {
    /// Create a tutor from configuration.
    ///
    /// The API key is read from the configured environment variable; a
    /// missing key is not an error until a question is asked.
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let api_key = std::env::var(&config.api_key_env).ok().filter(|k| !k.is_empty());

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// The configured opening message
    pub fn greeting(&self) -> &str {
        &self.config.greeting
    }

    /// Ask the remote model to explain a genetics question.
    ///
    /// Returns the generated text; empty text means the model declined.
    pub async fn explain(&self, question: &str) -> Result<String, ChatError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ChatError::Config(format!("{} is not set", self.config.api_key_env)))?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_url, self.config.model
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: question.to_string(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: self.config.system_prompt.clone(),
                }],
            },
        };

        let response: GenerateResponse = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        Ok(text)
    }

    /// Ask the tutor, substituting the configured fallback on any failure.
    ///
    /// Returns the answer and whether it is a fallback message.
    pub async fn explain_or_fallback(&self, question: &str) -> (String, bool) {
        match self.explain(question).await {
            Ok(text) if !text.trim().is_empty() => (text, false),
            Ok(_) => {
                log::warn!("Tutor returned no text");
                (self.config.fallback_empty.clone(), true)
            }
            Err(ChatError::Config(msg)) => {
                log::warn!("Tutor not configured: {}", msg);
                (self.config.fallback_missing_key.clone(), true)
            }
            Err(ChatError::Network(e)) => {
                log::error!("Tutor request failed: {}", e);
                (self.config.fallback_unavailable.clone(), true)
            }
        }
    }
}
