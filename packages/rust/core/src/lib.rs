//! Core generation pipeline and domain logic for BrandForge.
//!
//! This crate turns a validated [`Brief`](brandforge_shared::Brief) into a
//! [`Blueprint`](brandforge_shared::Blueprint): classification, the four
//! generation stages, and the end-to-end `build_blueprint` flow that
//! validates, runs the pipeline and hands the result to a persistence sink.

pub mod architect;
pub mod classifier;
pub mod copywriter;
pub mod integration;
pub mod pipeline;
pub mod sink;
pub mod text;
pub mod visual;

#[cfg(test)]
pub(crate) mod fixtures;
