// Rust guideline compliant 2026-02-06

//! Command implementations for the otorule CLI.

pub mod apply;
pub mod reclist;
pub mod rules;
