//! Backends module - collaborators around the core engine
//!
//! Provides:
//! - git: repository acquisition (clone into a temporary directory)
//! - writer: persisting the aggregated document to the output directory

pub mod git;
pub mod writer;
