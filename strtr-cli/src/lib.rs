//! strtr CLI library
//!
//! This library provides the command-line interface for the strtr
//! multi-needle string replacement engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod table_source;

pub use error::CliError;
