//! CV Structurer: pluggable, trait-based backend that turns raw résumé text
//! into a `CvRecord`.
//!
//! Default: `HeuristicStructurer` (the pure-Rust engine in this module tree).
//! `LlmStructurer` asks the hosted model for the same schema, and
//! `FallbackStructurer` tries the model first and degrades to the heuristics.
//!
//! `AppState` holds an `Arc<dyn CvStructurer>`, chosen at startup via config.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::structuring::models::CvRecord;
use crate::structuring::prompts::{CV_STRUCTURE_PROMPT_TEMPLATE, CV_STRUCTURE_SYSTEM};
use crate::structuring::{extract_cv_with, Thresholds};

pub const HEURISTIC_BACKEND: &str = "heuristic";
pub const LLM_BACKEND: &str = "llm";

/// A structured record plus the backend that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredCv {
    pub cv: CvRecord,
    pub backend: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap backends without touching the handlers.
#[async_trait]
pub trait CvStructurer: Send + Sync {
    async fn structure(&self, raw_text: &str) -> Result<StructuredCv, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicStructurer
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic, offline. Never fails.
#[derive(Debug, Clone, Default)]
pub struct HeuristicStructurer {
    pub thresholds: Thresholds,
}

impl HeuristicStructurer {
    fn run(&self, raw_text: &str) -> StructuredCv {
        StructuredCv {
            cv: extract_cv_with(raw_text, &self.thresholds),
            backend: HEURISTIC_BACKEND,
        }
    }
}

#[async_trait]
impl CvStructurer for HeuristicStructurer {
    async fn structure(&self, raw_text: &str) -> Result<StructuredCv, AppError> {
        Ok(self.run(raw_text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmStructurer
// ────────────────────────────────────────────────────────────────────────────

/// Structures text with the hosted model. The response is normalized so ids
/// and placeholders match the heuristic output.
pub struct LlmStructurer(pub LlmClient);

#[async_trait]
impl CvStructurer for LlmStructurer {
    async fn structure(&self, raw_text: &str) -> Result<StructuredCv, AppError> {
        let prompt = CV_STRUCTURE_PROMPT_TEMPLATE.replace("{cv_text}", raw_text);
        let cv = self
            .0
            .call_json::<CvRecord>(&prompt, CV_STRUCTURE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("CV structuring failed: {e}")))?;

        Ok(StructuredCv {
            cv: cv.normalized(),
            backend: LLM_BACKEND,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackStructurer
// ────────────────────────────────────────────────────────────────────────────

/// Tries `primary` and falls back to the heuristic engine on any error.
pub struct FallbackStructurer {
    pub primary: Box<dyn CvStructurer>,
    pub fallback: HeuristicStructurer,
}

#[async_trait]
impl CvStructurer for FallbackStructurer {
    async fn structure(&self, raw_text: &str) -> Result<StructuredCv, AppError> {
        match self.primary.structure(raw_text).await {
            Ok(structured) => Ok(structured),
            Err(e) => {
                warn!("Primary CV structurer failed, using heuristics: {e}");
                Ok(self.fallback.run(raw_text))
            }
        }
    }
}

/// Picks the backend from config: AI with heuristic fallback when enabled and
/// a key is present, otherwise heuristics only.
pub fn select_structurer(llm: Option<LlmClient>, enable_ai: bool) -> Arc<dyn CvStructurer> {
    match llm {
        Some(llm) if enable_ai => {
            info!("CV structurer: llm with heuristic fallback");
            Arc::new(FallbackStructurer {
                primary: Box::new(LlmStructurer(llm)),
                fallback: HeuristicStructurer::default(),
            })
        }
        _ => {
            info!("CV structurer: heuristic");
            Arc::new(HeuristicStructurer::default())
        }
    }
}
