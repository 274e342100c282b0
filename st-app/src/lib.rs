pub mod backend;
pub mod cli;
pub mod error;
pub mod logger;
pub mod prompt;
pub mod prompt_command;

#[cfg(test)]
mod tests;

pub use backend::build_controller;
pub use cli::Cli;
pub use error::{AppError, Result as AppResult};
pub use prompt_command::PromptCommand;
