//! Résumé reviewer: deterministic JD keyword matching plus AI-written reviews.
//!
//! The `matching` module is the pure core (`normalize`, `extract_keywords`,
//! `compute_match`, `highlight`); everything else is the HTTP service around it.

pub mod config;
pub mod errors;
pub mod llm_client;
pub mod matching;
pub mod report;
pub mod review;
pub mod routes;
pub mod state;
