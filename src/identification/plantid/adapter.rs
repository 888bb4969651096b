//! Adapter layer: Convert Plant.id DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if Plant.id changes their response format,
//! only this file and dto.rs need to change.
//!
//! The endpoint's shape-guessing (two token field names, two suggestion
//! nesting locations) is modeled here as ordered lists of lookup strategies
//! tried in sequence, not as conditionals scattered through callers.

use super::dto;
use crate::identification::domain::{Candidate, CandidateDetail, Watering};

/// Ordered token lookups. The endpoint inconsistently names the job token;
/// `access_token` wins when both are present.
const TOKEN_LOOKUPS: [fn(&dto::IdentificationResponse) -> Option<&str>; 2] = [
    |r| r.access_token.as_deref(),
    |r| r.id.as_deref(),
];

/// Ordered suggestion lookups. A directly classified image carries
/// `result.classification`; one routed through the "is this a plant" check
/// carries `result.is_plant.classification`.
const SUGGESTION_LOOKUPS: [fn(&dto::IdentificationResult) -> Option<&[dto::Suggestion]>; 2] = [
    |r| r.classification.as_ref()?.suggestions.as_deref(),
    |r| {
        r.is_plant
            .as_ref()?
            .classification
            .as_ref()?
            .suggestions
            .as_deref()
    },
];

/// Extract the job token from a creation response, if the API issued one
pub fn extract_token(response: &dto::IdentificationResponse) -> Option<&str> {
    TOKEN_LOOKUPS
        .iter()
        .find_map(|lookup| lookup(response).filter(|token| !token.is_empty()))
}

/// Convert a Plant.id response to domain candidates.
///
/// A missing or empty suggestion list means "no matches" and maps to an empty
/// vector, never an error. Sorting and the gallery fallback happen later, in
/// `ResultSet::new`.
pub fn to_candidates(response: dto::IdentificationResponse) -> Vec<Candidate> {
    let Some(result) = response.result else {
        return Vec::new();
    };

    let suggestions = SUGGESTION_LOOKUPS
        .iter()
        .find_map(|lookup| lookup(&result))
        .unwrap_or_default();

    suggestions.iter().cloned().map(to_candidate).collect()
}

/// Map one raw suggestion into a candidate
fn to_candidate(suggestion: dto::Suggestion) -> Candidate {
    let name = suggestion.name.filter(|n| !n.trim().is_empty());

    let gallery = suggestion
        .similar_images
        .unwrap_or_default()
        .into_iter()
        .filter_map(|image| image.url.or(image.url_small))
        .collect();

    Candidate {
        label: name.clone().unwrap_or_else(|| "Unknown".to_string()),
        scientific_name: name,
        confidence: suggestion.probability,
        detail: suggestion.details.map(to_detail),
        gallery,
    }
}

fn to_detail(details: dto::SuggestionDetails) -> CandidateDetail {
    CandidateDetail {
        common_names: details.common_names.unwrap_or_default(),
        description: details.description.map(|d| d.text().to_string()),
        edible_parts: details.edible_parts.unwrap_or_default(),
        watering: details.watering.and_then(to_watering),
        url: details.url,
    }
}

fn to_watering(dto: dto::WateringDto) -> Option<Watering> {
    match (dto.min, dto.max) {
        (Some(min), Some(max)) => Some(Watering { min, max }),
        _ => None,
    }
}
