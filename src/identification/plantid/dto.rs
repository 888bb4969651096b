//! Plant.id v3 API Data Transfer Objects
//!
//! These types match EXACTLY what the Plant.id API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the plantid module - convert to domain types.
//!
//! API Reference: https://plant.id/docs
//!
//! The endpoint is inconsistent in two ways that the adapter has to deal with:
//! the job token appears under either `access_token` or `id`, and the
//! suggestion list appears either directly under `result.classification` or
//! wrapped in a `result.is_plant` envelope. Both shapes are represented here
//! with optional fields.
//!
//! Example retrieval response:
//! ```json
//! {
//!   "access_token": "aBcD1234",
//!   "result": {
//!     "classification": {
//!       "suggestions": [{
//!         "name": "Monstera deliciosa",
//!         "probability": 0.97,
//!         "details": {"common_names": ["Swiss cheese plant"]},
//!         "similar_images": [{"url": "https://..."}]
//!       }]
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/v3/identification`
#[derive(Debug, Clone, Serialize)]
pub struct CreateRequest {
    /// Base64 images, with or without a data-URI prefix
    pub images: Vec<String>,
    /// Ask the API to return visually similar reference images
    pub similar_images: bool,
}

/// Response to both the creation and the retrieval call
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentificationResponse {
    /// Job token (preferred field name)
    pub access_token: Option<String>,
    /// Job token (the creation endpoint sometimes uses this name instead)
    pub id: Option<String>,
    /// Embedded result, present when the job has completed
    pub result: Option<IdentificationResult>,
}

/// The `result` object
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IdentificationResult {
    /// Direct classification (image recognized as a plant outright)
    pub classification: Option<Classification>,
    /// "Is this a plant" envelope; classification may be nested inside it
    pub is_plant: Option<IsPlant>,
}

/// The `is_plant` envelope
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IsPlant {
    pub probability: Option<f64>,
    pub binary: Option<bool>,
    pub classification: Option<Classification>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Classification {
    pub suggestions: Option<Vec<Suggestion>>,
}

/// A single species suggestion
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Suggestion {
    /// Scientific name of the suggested species
    pub name: Option<String>,
    /// Match confidence. Lenient: numbers, numeric strings, null, and garbage
    /// all deserialize; anything unusable becomes 0.0.
    #[serde(default, deserialize_with = "lenient_probability")]
    pub probability: f32,
    /// Species details (only present on the retrieval call, per `details=`)
    pub details: Option<SuggestionDetails>,
    /// Visually similar reference images
    pub similar_images: Option<Vec<SimilarImage>>,
}

/// The `details` object requested via the `details=` query parameter
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SuggestionDetails {
    pub common_names: Option<Vec<String>>,
    pub description: Option<Description>,
    pub edible_parts: Option<Vec<String>>,
    pub watering: Option<WateringDto>,
    pub url: Option<String>,
}

/// Description is a bare string on older responses and a cited object on
/// current ones
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Cited { value: String },
}

impl Description {
    pub fn text(&self) -> &str {
        match self {
            Description::Text(s) => s,
            Description::Cited { value } => value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct WateringDto {
    pub min: Option<f32>,
    pub max: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SimilarImage {
    pub url: Option<String>,
    pub url_small: Option<String>,
}

/// Accept whatever the API puts in `probability` and coerce it to a finite
/// f32 in [0, 1]. Missing, null, and unparseable values become 0.0 rather
/// than failing the whole document.
fn lenient_probability<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_probability(&value))
}

fn coerce_probability(value: &serde_json::Value) -> f32 {
    let raw = match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0) as f32,
        serde_json::Value::String(s) => s.trim().parse::<f32>().unwrap_or(0.0),
        _ => 0.0,
    };
    if raw.is_finite() { raw.clamp(0.0, 1.0) } else { 0.0 }
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Creation response carrying only a token under `access_token`
    #[test]
    fn test_parse_creation_response_access_token() {
        let json = r#"{"access_token": "tok-abc", "status": "CREATED"}"#;

        let response: IdentificationResponse =
            serde_json::from_str(json).expect("Should parse creation response");

        assert_eq!(response.access_token.as_deref(), Some("tok-abc"));
        assert!(response.id.is_none());
        assert!(response.result.is_none());
    }

    /// Creation response using the alternate `id` field name
    #[test]
    fn test_parse_creation_response_id() {
        let json = r#"{"id": "tok1"}"#;

        let response: IdentificationResponse =
            serde_json::from_str(json).expect("Should parse id-only response");

        assert_eq!(response.id.as_deref(), Some("tok1"));
        assert!(response.access_token.is_none());
    }

    /// Full retrieval response with a direct classification
    #[test]
    fn test_parse_direct_classification() {
        let json = r#"{
            "access_token": "tok-abc",
            "result": {
                "classification": {
                    "suggestions": [{
                        "name": "Ficus benjamina",
                        "probability": 0.91,
                        "details": {
                            "common_names": ["Weeping fig"],
                            "description": {"value": "An evergreen tree."},
                            "edible_parts": [],
                            "watering": {"min": 0.3, "max": 0.5},
                            "url": "https://en.wikipedia.org/wiki/Ficus_benjamina"
                        },
                        "similar_images": [
                            {"url": "https://img.plant.id/a.jpg", "url_small": "https://img.plant.id/a_s.jpg"}
                        ]
                    }]
                }
            }
        }"#;

        let response: IdentificationResponse =
            serde_json::from_str(json).expect("Should parse retrieval response");

        let suggestions = response
            .result
            .unwrap()
            .classification
            .unwrap()
            .suggestions
            .unwrap();
        assert_eq!(suggestions.len(), 1);

        let s = &suggestions[0];
        assert_eq!(s.name.as_deref(), Some("Ficus benjamina"));
        assert!((s.probability - 0.91).abs() < 1e-6);

        let details = s.details.as_ref().unwrap();
        assert_eq!(
            details.common_names.as_deref(),
            Some(&["Weeping fig".to_string()][..])
        );
        assert_eq!(
            details.description.as_ref().map(|d| d.text()),
            Some("An evergreen tree.")
        );
        assert_eq!(details.watering.unwrap().min, Some(0.3));
    }

    /// Suggestions nested inside the is_plant envelope
    #[test]
    fn test_parse_is_plant_envelope() {
        let json = r#"{
            "id": "tok2",
            "result": {
                "is_plant": {
                    "probability": 0.99,
                    "binary": true,
                    "classification": {
                        "suggestions": [{"name": "Rosa canina", "probability": 0.6}]
                    }
                }
            }
        }"#;

        let response: IdentificationResponse =
            serde_json::from_str(json).expect("Should parse is_plant envelope");

        let result = response.result.unwrap();
        assert!(result.classification.is_none());
        let suggestions = result
            .is_plant
            .unwrap()
            .classification
            .unwrap()
            .suggestions
            .unwrap();
        assert_eq!(suggestions[0].name.as_deref(), Some("Rosa canina"));
    }

    /// Sparse suggestion: everything optional is absent
    #[test]
    fn test_parse_sparse_suggestion() {
        let json = r#"{"name": "Ficus"}"#;

        let suggestion: Suggestion =
            serde_json::from_str(json).expect("Should parse sparse suggestion");

        assert_eq!(suggestion.name.as_deref(), Some("Ficus"));
        assert_eq!(suggestion.probability, 0.0);
        assert!(suggestion.details.is_none());
        assert!(suggestion.similar_images.is_none());
    }

    /// Probability coercion: the field is never allowed to reject a document
    #[test]
    fn test_lenient_probability_shapes() {
        let cases = [
            (r#"{"probability": 0.42}"#, 0.42f32),
            (r#"{"probability": "0.42"}"#, 0.42),
            (r#"{"probability": null}"#, 0.0),
            (r#"{"probability": "garbage"}"#, 0.0),
            (r#"{"probability": []}"#, 0.0),
            (r#"{}"#, 0.0),
            // Out-of-range values clamp rather than propagate
            (r#"{"probability": 1.7}"#, 1.0),
            (r#"{"probability": -0.3}"#, 0.0),
        ];

        for (json, expected) in cases {
            let suggestion: Suggestion =
                serde_json::from_str(json).unwrap_or_else(|e| panic!("{json}: {e}"));
            assert!(
                (suggestion.probability - expected).abs() < 1e-6,
                "{json} -> {} (expected {expected})",
                suggestion.probability
            );
        }
    }

    /// Description comes back as a bare string on some responses
    #[test]
    fn test_description_as_bare_string() {
        let json = r#"{"description": "A climbing vine."}"#;

        let details: SuggestionDetails =
            serde_json::from_str(json).expect("Should parse string description");

        assert_eq!(
            details.description.as_ref().map(|d| d.text()),
            Some("A climbing vine.")
        );
    }

    /// The create request serializes to the documented body
    #[test]
    fn test_create_request_body() {
        let request = CreateRequest {
            images: vec!["QUJD".to_string()],
            similar_images: true,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"images": ["QUJD"], "similar_images": true})
        );
    }
}
