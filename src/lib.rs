//! tooldocs - LLM-written descriptions for standalone HTML tools
//!
//! This library scans a directory of single-file HTML tools and keeps a short
//! description next to each one (`clock.html` -> `clock.md`). Descriptions are
//! produced by an external language-model command and regenerated only when
//! they are missing or older than their tool.
//!
//! # Core Concepts
//!
//! - **Discovery**: Lists candidate tools, skipping `_`-prefixed templates
//! - **Regeneration policy**: Decides per tool whether to generate, update or
//!   skip, purely from timestamps, existence and run flags
//! - **Description generator**: Pluggable backend that turns tool content
//!   into text; the default shells out to the `llm` CLI
//!
//! # Example Usage
//!
//! ```ignore
//! use std::path::Path;
//! use std::sync::Arc;
//! use tooldocs::{RealFileSystem, RegenerationEngine, RunOptions, ToolDocsConfig};
//!
//! async fn refresh() {
//!     let config = ToolDocsConfig::default();
//!     let engine = RegenerationEngine::new(
//!         Arc::new(RealFileSystem::new()),
//!         Arc::new(config.create_generator()),
//!     );
//!
//!     let report = engine.run(&config.tools_dir, &RunOptions::default()).await;
//!     println!("{}", report.summary);
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`regen`]: Discovery, decision rule and the batch engine
//! - [`generator`]: Description generator trait and implementations
//! - [`fs`]: File system abstraction
//! - [`progress`]: Progress events and handlers
//! - [`cli`]: Argument parsing, handlers and output formatting

pub mod cli;
pub mod config;
pub mod fs;
pub mod generator;
pub mod progress;
pub mod regen;
pub mod util;

pub use config::{ConfigError, ToolDocsConfig};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use generator::{DescriptionGenerator, GeneratorError, LlmCliGenerator, MockGenerator};
pub use regen::{
    RegenerationEngine, RegenerationPolicy, RunOptions, RunReport, RunStatus, RunSummary,
};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
