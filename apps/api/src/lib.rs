//! Résumé structuring service.
//!
//! `structuring` is the offline engine (`extract_cv`); the remaining modules
//! wrap it in an HTTP API with document upload and an optional hosted-model
//! backend.

pub mod config;
pub mod document;
pub mod errors;
pub mod llm_client;
pub mod routes;
pub mod state;
pub mod structuring;

pub use structuring::{extract_cv, extract_cv_with, CvRecord, Thresholds};
