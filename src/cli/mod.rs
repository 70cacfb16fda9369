//! CLI argument definitions.

pub mod args;
