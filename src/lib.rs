//! commitlens — bounded git commit context assembly for LLM code review
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod context;
pub mod env;
pub mod git;
pub mod imports;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod reviewer;
