// Rust guideline compliant 2026-02-09

//! Shared application services for otorule.
//!
//! This crate wires the core transformations into complete runs: output
//! location discovery, rule loading, conversion with file and trace output,
//! reclist generation, and standardized error codes and response envelopes.

pub mod convert;
pub mod error;
pub mod locations;
pub mod reclist;
pub mod response;
pub mod rules;

pub use convert::{run_conversion, ConversionReport, ConversionRequest};
pub use error::{AppError, ErrorCode, Result};
pub use locations::OutputLocations;
pub use reclist::{run_reclist, ReclistReport, ReclistRequest};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use rules::{summarize_rules, RuleSummary, TableSummary};
