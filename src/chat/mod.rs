//! Chat tutor - remote text generation with canned fallbacks.

pub mod assistant;

pub use assistant::{ChatError, Tutor};
