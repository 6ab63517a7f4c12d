//! Progress reporting for regeneration runs

mod console;
mod handler;
mod logging;

pub use console::ConsoleHandler;
pub use handler::{CompositeHandler, NoOpHandler, ProgressEvent, ProgressHandler};
pub use logging::LoggingHandler;
