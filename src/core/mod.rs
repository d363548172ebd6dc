//! Core module - the selection-and-aggregation engine
//!
//! This module provides:
//! - Filter configuration with validated defaults
//! - Pure path matching (extension, blacklist, include/exclude directories)
//! - Deterministic directory traversal
//! - Content aggregation into an ordered document
//! - The run orchestrator tying the pieces together

pub mod aggregate;
pub mod config;
pub mod matcher;
pub mod paths;
pub mod run;
pub mod walker;
