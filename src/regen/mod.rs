//! Staleness-driven regeneration of tool descriptions
//!
//! A run discovers the tool sources in a directory, decides for each one
//! whether its description artifact is missing or stale, asks the configured
//! [`DescriptionGenerator`](crate::generator::DescriptionGenerator) for a new
//! description where needed, and tallies the outcome.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use tooldocs::fs::RealFileSystem;
//! use tooldocs::generator::LlmCliGenerator;
//! use tooldocs::regen::{RegenerationEngine, RunOptions};
//!
//! # async fn example() {
//! let engine = RegenerationEngine::new(
//!     Arc::new(RealFileSystem::new()),
//!     Arc::new(LlmCliGenerator::default()),
//! );
//! let report = engine.run(Path::new("public/tools"), &RunOptions::default()).await;
//! println!("{}", report.summary);
//! # }
//! ```

pub mod discovery;
pub mod engine;
pub mod policy;
pub mod types;

pub use discovery::{discover_tools, Discovery, DiscoveryError, DiscoveryRules, UnreadableTool};
pub use engine::{RegenerationEngine, RegenerationFailure};
pub use policy::{decide, should_regenerate, Decision, RegenerationPolicy, RunOptions};
pub use types::{
    Action, DescriptionArtifact, OutcomeKind, RunReport, RunStatus, RunSummary, ToolOutcome,
    ToolSource,
};
