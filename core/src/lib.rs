//! ChurnWatch core — heuristic churn scoring and regional retention playbooks.
//!
//! Everything here is a pure function of its inputs and the static tables.
//! Rendering lives in the `dashboard` binary.

pub mod analysis;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod profile;
pub mod scoring;
pub mod strategy;
pub mod types;
pub mod view;
