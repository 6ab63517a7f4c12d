//! Description generation
//!
//! The regeneration engine only sees the [`DescriptionGenerator`] trait.
//! Production runs use [`LlmCliGenerator`], which shells out to the `llm`
//! command-line tool; tests substitute [`MockGenerator`].

mod client;
mod error;
mod llm_cli;
mod mock;
mod prompt;

pub use client::DescriptionGenerator;
pub use error::GeneratorError;
pub use llm_cli::LlmCliGenerator;
pub use mock::{MockGenerator, MockResponse};
pub use prompt::{DEFAULT_LLM_COMMAND, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT};
