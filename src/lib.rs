//! # MENDEL
//!
//! Interactive Mendelian pea-plant cross laboratory.
//!
//! ## Features
//!
//! - **Exact**: theoretical Punnett ratios, never stochastic samples
//! - **Pure**: the cross engine is stateless and deterministic
//! - **Typed**: phenotypes aggregate by enumerated key, not label strings
//! - **Configurable**: YAML configuration files
//! - **Teachable**: web lab with a chat tutor impersonating Gregor Mendel
//!
//! ## Quick Start
//!
//! ```rust
//! use mendel::genetics::{cross, Genotype};
//!
//! // The classic dihybrid cross
//! let parent = Genotype::parse("Yy", "Rr").unwrap();
//! let result = cross(&parent, &parent);
//!
//! assert_eq!(result.grid.len(), 16);
//! assert_eq!(result.total(), 16);
//! assert_eq!(result.ratio_label(), "9:3:3:1");
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use mendel::Config;
//!
//! let mut config = Config::default();
//! config.lab.parent1_color = "Yy".to_string();
//! assert!(config.validate().is_ok());
//! ```

pub mod chat;
pub mod config;
pub mod genetics;
pub mod punnett;
pub mod web;

// Re-export main types
pub use config::Config;
pub use genetics::{cross, gametes_of, CrossResult, Genotype};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
