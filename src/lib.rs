//! `Preso` - Markdown PRD to presentation compiler.
//!
//! This crate parses a Markdown PRD with YAML frontmatter into a structured
//! slide model, optionally re-renders it into styled HTML via `OpenAI`, and
//! stores the result under opaque identifiers.

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod enhance;
pub mod error;
pub mod parser;
pub mod storage;
pub mod types;
