//! # Engine Module
//!
//! Run-level plumbing shared by the training and scoring workflows.
//!
//! - **Configuration** ([`config`]) - validated run parameters built through builders
//! - **Error Handling** ([`error`]) - the error type every workflow returns
//! - **Progress Monitoring** ([`progress`]) - events forwarded to an optional front-end callback

pub mod config;
pub mod error;
pub mod progress;
