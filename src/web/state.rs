//! Shared application state for the web laboratory.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::chat::Tutor;
use crate::config::Config;
use crate::genetics::{cross, CrossResult, Genotype};

/// The lab's per-cross flow: idle until a cross is invoked, then a result
/// is available until the next cross or a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabState {
    Idle,
    ResultAvailable,
}

/// Application state shared between all handlers
pub struct AppState {
    /// Chat tutor capability
    pub tutor: Tutor,
    /// Configured default parents
    defaults: (Genotype, Genotype),
    /// The current cross result, if any
    result: RwLock<Option<CrossResult>>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let defaults = config.default_parents()?;
        let tutor = Tutor::new(config.chat)?;

        Ok(Self {
            tutor,
            defaults,
            result: RwLock::new(None),
        })
    }

    /// Run a cross and store the result as the current one.
    ///
    /// The previous result, if any, is fully replaced; stale and fresh
    /// statistics are never merged.
    pub async fn run_cross(&self, parent1: Genotype, parent2: Genotype) -> CrossResult {
        let result = cross(&parent1, &parent2);
        *self.result.write().await = Some(result.clone());
        result
    }

    /// The currently stored result
    pub async fn current(&self) -> Option<CrossResult> {
        self.result.read().await.clone()
    }

    /// Clear the stored result, returning the lab to idle
    pub async fn reset(&self) {
        *self.result.write().await = None;
    }

    /// Current lab state
    pub async fn lab_state(&self) -> LabState {
        if self.result.read().await.is_some() {
            LabState::ResultAvailable
        } else {
            LabState::Idle
        }
    }

    /// The configured default parents
    pub fn defaults(&self) -> (Genotype, Genotype) {
        self.defaults
    }
}
