//! Deterministic offline identification source.
//!
//! Returns a fixed candidate list after a simulated network delay, for
//! development and testing without an API key. Selected via configuration or
//! the `--offline` CLI flag; callers see the same `PlantIdApi` surface as the
//! real client.

use std::time::Duration;

use async_trait::async_trait;

use super::domain::{Candidate, CandidateDetail, IdentificationError, Watering};
use super::photo::EncodedPhoto;
use super::traits::PlantIdApi;

/// Offline source with hardcoded sample data
pub struct SampleSource {
    delay: Duration,
}

impl SampleSource {
    /// Default simulated round-trip of 1.2s, roughly what the live API takes
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(1200),
        }
    }

    /// Custom delay (tests use zero)
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlantIdApi for SampleSource {
    async fn identify(
        &self,
        _photo: &EncodedPhoto,
    ) -> Result<Vec<Candidate>, IdentificationError> {
        tokio::time::sleep(self.delay).await;
        Ok(sample_candidates())
    }
}

/// The fixed sample data. Deliberately unsorted so the normal sorting path
/// is exercised in offline mode too.
pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            label: "Epipremnum aureum".to_string(),
            scientific_name: Some("Epipremnum aureum".to_string()),
            confidence: 0.41,
            detail: Some(CandidateDetail {
                common_names: vec!["Golden pothos".to_string(), "Devil's ivy".to_string()],
                description: Some(
                    "A trailing vine with heart-shaped, often variegated leaves."
                        .to_string(),
                ),
                edible_parts: vec![],
                watering: Some(Watering { min: 0.1, max: 0.3 }),
                url: Some("https://en.wikipedia.org/wiki/Epipremnum_aureum".to_string()),
            }),
            gallery: vec![
                "https://img.plant.id/samples/pothos_1.jpg".to_string(),
                "https://img.plant.id/samples/pothos_2.jpg".to_string(),
            ],
        },
        Candidate {
            label: "Monstera deliciosa".to_string(),
            scientific_name: Some("Monstera deliciosa".to_string()),
            confidence: 0.92,
            detail: Some(CandidateDetail {
                common_names: vec![
                    "Swiss cheese plant".to_string(),
                    "Split-leaf philodendron".to_string(),
                ],
                description: Some(
                    "A climbing evergreen with large fenestrated leaves; mature plants \
                     produce an arum-like flower and an edible fruit."
                        .to_string(),
                ),
                edible_parts: vec!["fruit".to_string()],
                watering: Some(Watering { min: 0.4, max: 0.6 }),
                url: Some("https://en.wikipedia.org/wiki/Monstera_deliciosa".to_string()),
            }),
            // Empty on purpose: offline mode exercises the captured-photo
            // gallery fallback for the top candidate
            gallery: vec![],
        },
        Candidate {
            label: "Philodendron hederaceum".to_string(),
            scientific_name: Some("Philodendron hederaceum".to_string()),
            confidence: 0.63,
            detail: Some(CandidateDetail {
                common_names: vec!["Heartleaf philodendron".to_string()],
                description: Some(
                    "An evergreen climber grown indoors for its glossy foliage.".to_string(),
                ),
                edible_parts: vec![],
                watering: Some(Watering { min: 0.5, max: 0.7 }),
                url: Some("https://en.wikipedia.org/wiki/Philodendron_hederaceum".to_string()),
            }),
            gallery: vec!["https://img.plant.id/samples/philodendron_1.jpg".to_string()],
        },
    ]
}
