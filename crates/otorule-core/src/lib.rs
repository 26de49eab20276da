// Rust guideline compliant 2026-02-06

//! Otorule Core Library
//!
//! This crate provides the transformation logic for UTAU voicebank `oto.ini`
//! files:
//! - Rule table loading (CV, V, C and tail tables)
//! - Per-entry alias rewriting and the tail rule pass
//! - Duplicate alias numbering with an optional cap
//! - The sort/rewrite/resolve/sort conversion pipeline and its debug trace
//! - Recording list (reclist) generation
//! - UTF-8 / Shift_JIS text handling, configuration and error types

pub mod collision;
pub mod config;
pub mod entry;
pub mod error;
pub mod pipeline;
pub mod reclist;
pub mod rewrite;
pub mod rules;
pub mod tail;
pub mod textio;
pub mod trace;

pub use collision::{resolve_collisions, CollisionResolver, MaxEntries};
pub use config::{Config, OutputFormat};
pub use entry::OtoEntry;
pub use error::{Error, Result};
pub use pipeline::{apply_rules, convert, ApplyOptions, Conversion, ConversionStats};
pub use reclist::{collect_base_names, generate_reclist};
pub use rewrite::{rewrite_entry, AliasForm};
pub use rules::{load_rules, parse_rules, RuleTable, RuleTables};
pub use tail::TailIndex;
pub use trace::PipelineTrace;
