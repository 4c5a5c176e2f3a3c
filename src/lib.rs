//! Benefits Pricing Engine
//!
//! This crate computes the per-employee premium for voluntary benefit products
//! (voluntary life, long-term disability and commuter benefits) after the
//! employer's contribution has been applied.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
