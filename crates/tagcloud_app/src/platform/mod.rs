//! Terminal front end: prompts, logging setup and exit codes.
mod app;
mod error;
mod logging;
mod prompt;

pub use app::run_app;
