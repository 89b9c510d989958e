//! Suimei LLM - Gemini Enrichment
//!
//! This crate provides the optional Gemini enrichment for Suimei:
//! - Gemini: `generateContent` REST provider with bounded retry
//! - Enrichment: appraisal prompt assembly and fenced-JSON response parsing
//!
//! Enrichment is strictly additive: every error here is reported to the
//! caller, never raised into the deterministic analysis.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod enrichment;
pub mod error;
pub mod gemini;
pub mod util;

pub use enrichment::{
    build_prompt, parse_response, EnrichedWorldView, EnrichmentRequest, EnrichmentResponse,
};
pub use error::{Error, Result};
pub use gemini::{GeminiConfig, GeminiProvider, DEFAULT_MODEL};
