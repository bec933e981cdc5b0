//! Evaluates an Orquesta rule from a GitHub Actions workflow step.
//!
//! The run is a straight line: gather and validate the step inputs,
//! build the evaluation context, send one request to the Orquesta
//! Evaluation API and publish the result as a step output. Any failure
//! along the way marks the step as failed with a user-facing message.

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod github;
