//! Suimei Core - Four-Pillar Appraisal Engine
//!
//! This crate provides the deterministic analysis pipeline for Suimei:
//! - Calendar: fixed-epoch stem/branch pillar calculation
//! - Five Elements: weighted balance with dominant/weak selection
//! - Personality & Colors: per-element trait and palette tables
//! - Persona: keyword-to-audience matching
//! - Compatibility / Positioning: the two age-range scoring models
//! - World View: branding concept templating
//!
//! Everything here is synchronous, side-effect-free and total over its
//! documented inputs; the HTTP layer and the optional LLM enrichment live in
//! the sibling crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod age_range;
pub mod calendar;
pub mod colors;
pub mod compatibility;
pub mod constants;
pub mod engine;
pub mod five_elements;
pub mod persona;
pub mod personality;
pub mod positioning;
pub mod world_view;

pub use age_range::{AgeRange, OverlapGeometry};
pub use calendar::{
    compute_chart, day_pillar, hour_pillar, month_pillar, year_pillar, FourPillars, Pillar,
};
pub use colors::{color_affinity, color_palette, element_colors, ColorAffinity, ColorPalette};
pub use compatibility::{
    score_compatibility, CompatibilityAnalysis, MatchLevel, OverlapSummary,
};
pub use constants::{Branch, Element, Polarity, Stem};
pub use engine::{appraise, FourPillarsAppraisal, PersonalityProfile};
pub use five_elements::{
    analyze_five_elements, FiveElementsBalance, BRANCH_WEIGHT, STEM_WEIGHT,
};
pub use persona::{
    match_persona, CompetitionLevel, ContentPreferences, PersonaProfile, PrimaryAudience,
};
pub use personality::{analyze_personality, element_traits, PersonalityAnalysis};
pub use positioning::{
    score_positioning, PositioningAnalysis, PositioningStrategy, PositioningType,
};
pub use world_view::{
    generate_world_view, DetailedColorPalette, PaletteColor, ProductionRecommendations,
    ToneAndManner, WorldViewConcept, WorldViewRequest,
};
