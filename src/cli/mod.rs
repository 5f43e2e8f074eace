//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod align;

pub use align::{run_match, MatchOverrides, MatchPaths};

pub use crate::config::AppConfig;
