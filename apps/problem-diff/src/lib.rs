//! problem-diff core library.
//!
//! This crate exposes programmatic APIs for partitioning two static-analysis
//! result sets into problems only in the first, only in the second, and in
//! both.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `compare`: Hash-based diff and data-aware match.
//! - `io`: JSON document reading and writing.
//! - `prompt`: Interactive path prompts.
//! - `run`: End-to-end compare run.
//! - `models`: Problem/result models and the duplicate policy.
//! - `output`: Human/JSON summary printers.
//! - `error`: Error kinds and exit codes.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod output;
pub mod prompt;
pub mod run;
pub mod utils;
