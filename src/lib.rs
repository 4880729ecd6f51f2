//! usacloud-update
//!
//! Rewrites shell scripts invoking the usacloud v0 CLI for the v1 CLI,
//! annotating each changed line with the rule applied, and performs
//! semantic validation of each invocation: known commands and
//! subcommands, deprecations, typo suggestions, and bilingual
//! color-capable diagnostics.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod profile;
pub mod transform;
