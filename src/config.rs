//! Configuration system for the pea cross laboratory.
//!
//! Supports YAML configuration files with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::genetics::Genotype;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub lab: LabConfig,
    pub chat: ChatConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Default parent genotypes shown when the lab opens or resets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabConfig {
    /// Parent 1 color alleles (e.g. "YY")
    pub parent1_color: String,
    /// Parent 1 shape alleles (e.g. "RR")
    pub parent1_shape: String,
    /// Parent 2 color alleles
    pub parent2_color: String,
    /// Parent 2 shape alleles
    pub parent2_shape: String,
}

/// Chat tutor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the text generation API
    pub api_url: String,
    /// Model name
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Persona instruction sent with every question
    pub system_prompt: String,
    /// Opening message shown before any question is asked
    pub greeting: String,
    /// Shown when the API key is not configured
    pub fallback_missing_key: String,
    /// Shown when the remote call fails
    pub fallback_unavailable: String,
    /// Shown when the model returns no text
    pub fallback_empty: String,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the web lab
    pub bind: String,
    /// Directory of static files to serve
    pub static_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lab: LabConfig::default(),
            chat: ChatConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        // Pure yellow-round crossed with pure green-wrinkled
        Self {
            parent1_color: "YY".to_string(),
            parent1_shape: "RR".to_string(),
            parent2_color: "yy".to_string(),
            parent2_shape: "rr".to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: 15,
            system_prompt: "You are Gregor Mendel, the father of genetics. Explain genetics \
                            concepts to students in plain language. Focus on the pea experiments, \
                            dominant and recessive traits, and probability. Keep answers under \
                            150 words, friendly, rigorous but fun."
                .to_string(),
            greeting: "Hello! I am Gregor Mendel. Ask me anything about peas, inheritance, \
                       or probability!"
                .to_string(),
            fallback_missing_key: "The tutor API key is missing. Check the configuration."
                .to_string(),
            fallback_unavailable: "Something went wrong while reaching the tutor.".to_string(),
            fallback_empty: "Sorry, I cannot answer that question right now.".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        self.default_parents().map_err(|e| e.to_string())?;

        if self.chat.timeout_secs == 0 {
            return Err("chat timeout_secs must be > 0".to_string());
        }
        if self.chat.api_url.is_empty() {
            return Err("chat api_url must not be empty".to_string());
        }
        if self.server.bind.is_empty() {
            return Err("server bind address must not be empty".to_string());
        }
        Ok(())
    }

    /// Parse the configured default parent genotypes
    pub fn default_parents(
        &self,
    ) -> Result<(Genotype, Genotype), crate::genetics::InvalidGenotype> {
        let parent1 = Genotype::parse(&self.lab.parent1_color, &self.lab.parent1_shape)?;
        let parent2 = Genotype::parse(&self.lab.parent2_color, &self.lab.parent2_shape)?;
        Ok((parent1, parent2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.lab.parent1_color, loaded.lab.parent1_color);
        assert_eq!(config.server.bind, loaded.server.bind);
    }

    #[test]
    fn test_default_parents_parse() {
        let config = Config::default();
        let (parent1, parent2) = config.default_parents().unwrap();
        assert_eq!(parent1.label(), "YYRR");
        assert_eq!(parent2.label(), "yyrr");
    }

    #[test]
    fn test_validate_rejects_bad_genotype() {
        let mut config = Config::default();
        config.lab.parent1_color = "YX".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.chat.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
