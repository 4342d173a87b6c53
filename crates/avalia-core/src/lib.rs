//! avalia-core — Criteria catalog, scoring engine, and payload model.
//!
//! This crate defines the questionnaire criteria, the score/classification
//! logic, and the typed evaluation payloads that the rest of avalia builds on.

pub mod criteria;
pub mod model;
pub mod parser;
pub mod scoring;
