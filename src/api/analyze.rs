//! Analysis endpoint: validation, appraisal pipeline and optional Gemini
//! enrichment.
//!
//! The deterministic result is always computed and returned; enrichment
//! failures are logged and surface only as a null `geminiAppraisal` field.

use crate::api::AppState;
use crate::server::config::LlmConfig;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use suimei_core::{
    appraise, generate_world_view, match_persona, score_compatibility, score_positioning,
    CompatibilityAnalysis, FourPillarsAppraisal, PersonaProfile, PositioningAnalysis,
    WorldViewConcept, WorldViewRequest,
};
use suimei_llm::{EnrichmentRequest, EnrichmentResponse, GeminiConfig, GeminiProvider};
use tracing::{debug, warn};

/// Analysis request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Creator name
    pub name: String,
    /// Birth date (YYYY-MM-DD)
    pub birth_date: String,
    /// Birth time (HH:MM); noon is assumed when absent
    #[serde(default)]
    pub birth_time: Option<String>,
    /// Gender label
    pub gender: String,
    /// Topic keyword
    pub keyword: String,
    /// Gemini API key enabling enrichment
    #[serde(default)]
    pub gemini_api_key: Option<String>,
}

/// Creator info echoed back in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorInfo {
    /// Name as given
    pub name: String,
    /// Birth date as given
    pub birth_date: String,
    /// Gender as given
    pub gender: String,
    /// Keyword as given
    pub keyword: String,
    /// Computed age in whole years
    pub performer_age: i32,
}

/// Combined analysis response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Creator info
    pub creator: CreatorInfo,
    /// Deterministic four-pillar appraisal
    pub four_pillars_appraisal: FourPillarsAppraisal,
    /// Matched audience persona
    pub persona_analysis: PersonaProfile,
    /// Audience compatibility analysis
    pub compatibility_analysis: CompatibilityAnalysis,
    /// Positioning analysis
    pub positioning_analysis: PositioningAnalysis,
    /// Branding concept
    pub world_view_concept: WorldViewConcept,
    /// Optional Gemini enrichment; null when not attempted or failed
    pub gemini_appraisal: Option<EnrichmentResponse>,
    /// Generation timestamp
    pub timestamp: DateTime<Utc>,
}

/// Client-side request problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeError {
    /// A required field is missing or empty
    MissingFields,
    /// Birth date is not a valid YYYY-MM-DD date
    InvalidBirthDate,
}

impl AnalyzeError {
    /// User-facing Japanese message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingFields => "必須項目が入力されていません",
            Self::InvalidBirthDate => "生年月日の形式が正しくありません",
        }
    }
}

/// Error body shape.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: self.message(),
            }),
        )
            .into_response()
    }
}

/// POST /api/analyze
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AnalyzeError> {
    run_analysis(request, &state.config.llm).await.map(Json)
}

/// Runs the full pipeline for one request.
///
/// Core functions are invoked in dependency order: appraisal → persona →
/// scorers → world view, then the optional enrichment.
pub async fn run_analysis(
    request: AnalyzeRequest,
    llm: &LlmConfig,
) -> Result<AnalyzeResponse, AnalyzeError> {
    if request.name.trim().is_empty()
        || request.birth_date.trim().is_empty()
        || request.gender.trim().is_empty()
        || request.keyword.trim().is_empty()
    {
        return Err(AnalyzeError::MissingFields);
    }

    let birth_date = NaiveDate::parse_from_str(request.birth_date.trim(), "%Y-%m-%d")
        .map_err(|_| AnalyzeError::InvalidBirthDate)?;
    let birth_hour = parse_birth_hour(request.birth_time.as_deref());
    let performer_age = performer_age(birth_date, Utc::now().date_naive());

    let appraisal = appraise(birth_date, birth_hour);
    let persona = match_persona(&request.keyword);
    let compatibility = score_compatibility(performer_age, &persona);
    let positioning = score_positioning(performer_age, &persona);
    let world_view = generate_world_view(&WorldViewRequest {
        element: appraisal.dominant(),
        genre: request.keyword.clone(),
        target_age: persona.primary_audience.age_range.clone(),
        target_gender: persona.primary_audience.gender.clone(),
    });

    let gemini_appraisal = enrich(
        &request,
        performer_age,
        &appraisal,
        &persona,
        &positioning,
        llm,
    )
    .await;

    Ok(AnalyzeResponse {
        creator: CreatorInfo {
            name: request.name,
            birth_date: request.birth_date,
            gender: request.gender,
            keyword: request.keyword,
            performer_age,
        },
        four_pillars_appraisal: appraisal,
        persona_analysis: persona,
        compatibility_analysis: compatibility,
        positioning_analysis: positioning,
        world_view_concept: world_view,
        gemini_appraisal,
        timestamp: Utc::now(),
    })
}

/// Attempts the Gemini enrichment at most once; any failure is downgraded to
/// "enrichment absent".
async fn enrich(
    request: &AnalyzeRequest,
    performer_age: i32,
    appraisal: &FourPillarsAppraisal,
    persona: &PersonaProfile,
    positioning: &PositioningAnalysis,
    llm: &LlmConfig,
) -> Option<EnrichmentResponse> {
    let config = match request.gemini_api_key.as_deref().filter(|k| !k.is_empty()) {
        Some(key) => GeminiConfig::new(key),
        None => match GeminiConfig::from_env() {
            Ok(config) => config,
            Err(_) => {
                debug!("no gemini api key available, skipping enrichment");
                return None;
            }
        },
    };
    let config = config
        .with_model(llm.model.as_str())
        .with_timeout(Duration::from_secs(llm.timeout_secs))
        .with_max_retries(llm.max_retries)
        .with_max_output_tokens(llm.max_output_tokens);

    let provider = match GeminiProvider::new(config) {
        Ok(provider) => provider,
        Err(e) => {
            warn!(error = %e, "failed to build gemini provider, continuing without enrichment");
            return None;
        }
    };

    let enrichment_request = EnrichmentRequest {
        name: &request.name,
        birth_date: &request.birth_date,
        gender: &request.gender,
        keyword: &request.keyword,
        performer_age,
        appraisal,
        persona,
        positioning,
    };

    match provider.enrich(&enrichment_request).await {
        Ok(response) => Some(response),
        Err(e) => {
            warn!(error = %e, "gemini enrichment failed, returning deterministic result only");
            None
        }
    }
}

/// Extracts the hour from an "HH:MM" string; noon when absent or garbled.
fn parse_birth_hour(birth_time: Option<&str>) -> u32 {
    birth_time
        .and_then(|time| time.split(':').next())
        .and_then(|hour| hour.trim().parse().ok())
        .unwrap_or(12)
}

/// Whole years elapsed since birth, accounting for a birthday not yet
/// reached this year.
fn performer_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(birth_date: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            name: "山田太郎".to_string(),
            birth_date: birth_date.to_string(),
            birth_time: Some("14:30".to_string()),
            gender: "男性".to_string(),
            keyword: "ゲーム実況".to_string(),
            gemini_api_key: None,
        }
    }

    #[test]
    fn test_parse_birth_hour() {
        assert_eq!(parse_birth_hour(Some("14:30")), 14);
        assert_eq!(parse_birth_hour(Some("0:15")), 0);
        assert_eq!(parse_birth_hour(Some("23:59")), 23);
        assert_eq!(parse_birth_hour(None), 12);
        assert_eq!(parse_birth_hour(Some("not a time")), 12);
        assert_eq!(parse_birth_hour(Some("")), 12);
    }

    #[test]
    fn test_performer_age_before_and_after_birthday() {
        let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        let before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let on = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        assert_eq!(performer_age(birth, before), 33);
        assert_eq!(performer_age(birth, on), 34);
        assert_eq!(performer_age(birth, after), 34);
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let mut bad = request("1990-05-15");
        bad.name = "  ".to_string();
        let error = run_analysis(bad, &LlmConfig::default()).await.unwrap_err();
        assert_eq!(error, AnalyzeError::MissingFields);
        assert_eq!(error.message(), "必須項目が入力されていません");
    }

    #[tokio::test]
    async fn test_invalid_birth_date_rejected() {
        let error = run_analysis(request("15/05/1990"), &LlmConfig::default())
            .await
            .unwrap_err();
        assert_eq!(error, AnalyzeError::InvalidBirthDate);
    }

    #[tokio::test]
    async fn test_pipeline_produces_consistent_sections() {
        let response = run_analysis(request("1990-05-15"), &LlmConfig::default())
            .await
            .unwrap();

        // Persona drives the world view's target demographic
        assert_eq!(
            response.persona_analysis.primary_audience.age_range,
            "15-30歳"
        );
        assert!(response
            .world_view_concept
            .description
            .contains("15-30歳"));
        // Both scorers echo the same performer window
        assert_eq!(
            response.compatibility_analysis.performer_optimal_range,
            response.positioning_analysis.performer_optimal_range
        );
        assert_eq!(response.creator.keyword, "ゲーム実況");
    }

    #[tokio::test]
    async fn test_enrichment_failure_keeps_deterministic_result() {
        // A bogus key with a single fast attempt: whether the call fails on
        // the network or on authentication, the analysis must come through.
        let mut req = request("1990-05-15");
        req.gemini_api_key = Some("invalid-key-1234".to_string());
        let llm = LlmConfig {
            timeout_secs: 2,
            max_retries: 1,
            ..LlmConfig::default()
        };

        let response = run_analysis(req, &llm).await.unwrap();
        assert!(response.gemini_appraisal.is_none());
        assert_eq!(
            response.persona_analysis.primary_audience.age_range,
            "15-30歳"
        );
    }
}
