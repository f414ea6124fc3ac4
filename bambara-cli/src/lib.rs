//! Bambara CLI library
//!
//! Command-line interface for the Bambara tokenizer: input reading, token
//! export, and output formatting around the `bambara-core` engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
