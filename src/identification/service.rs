//! Identification service - orchestrates the photo-to-ResultSet flow
//!
//! This is the high-level API for identifying a plant:
//! 1. Read and encode the captured photo (input errors stop here)
//! 2. Ask the configured source for candidates (network client or offline sample data)
//! 3. Build the sorted `ResultSet` with the gallery fallback applied

use std::path::Path;

use crate::identification::{
    domain::{IdentificationError, ResultSet},
    photo,
    plantid::PlantIdClient,
    sample::SampleSource,
    traits::PlantIdApi,
};

/// Configuration for the identification service
pub struct IdentificationConfig {
    /// Plant.id API key (get one at https://web.plant.id)
    pub api_key: String,
    /// Language for species details (ISO 639-1 code)
    pub language: String,
}

impl Default for IdentificationConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: "en".to_string(),
        }
    }
}

/// Service that turns a captured photo into a [`ResultSet`]
pub struct IdentificationService {
    source: Box<dyn PlantIdApi>,
}

impl IdentificationService {
    /// Create a service backed by the live Plant.id API
    pub fn new(config: IdentificationConfig) -> Self {
        Self::with_source(Box::new(PlantIdClient::new(
            config.api_key,
            config.language,
        )))
    }

    /// Create a service backed by the deterministic offline sample data
    pub fn offline() -> Self {
        Self::with_source(Box::new(SampleSource::new()))
    }

    /// Create a service with an arbitrary source (tests use mocks)
    pub fn with_source(source: Box<dyn PlantIdApi>) -> Self {
        Self { source }
    }

    /// Identify the plant in a captured photo.
    ///
    /// An empty `ResultSet` means the API found no matches - that is a normal
    /// outcome, not an error. Callers are expected to serialize requests; the
    /// flow itself is a single sequential call chain.
    pub async fn identify(&self, photo_path: &Path) -> Result<ResultSet, IdentificationError> {
        let photo = photo::encode(photo_path)?;
        tracing::debug!(photo = %photo.reference, "requesting identification");

        let candidates = self.source.identify(&photo).await?;
        if candidates.is_empty() {
            tracing::info!(photo = %photo.reference, "no matches");
        } else {
            tracing::debug!(count = candidates.len(), "received candidates");
        }

        Ok(ResultSet::new(candidates, Some(&photo.reference)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identification::domain::Candidate;
    use crate::identification::traits::mocks::MockPlantId;

    fn temp_photo() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.jpg");
        std::fs::write(&path, b"fake jpeg bytes").unwrap();
        (dir, path)
    }

    #[test]
    fn test_default_config() {
        let config = IdentificationConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.language, "en");
    }

    #[tokio::test]
    async fn test_single_match_gets_photo_gallery_fallback() {
        let (_dir, path) = temp_photo();
        let service =
            IdentificationService::with_source(Box::new(MockPlantId::single_match("Ficus", 0.9)));

        let results = service.identify(&path).await.unwrap();
        assert_eq!(results.len(), 1);

        let current = results.current().unwrap();
        assert_eq!(current.label, "Ficus");
        assert_eq!(current.confidence, 0.9);
        // The mock returns no similar images, so the gallery is exactly the
        // captured photo reference
        assert_eq!(current.gallery, vec![path.to_string_lossy().into_owned()]);
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_result_not_error() {
        let (_dir, path) = temp_photo();
        let service = IdentificationService::with_source(Box::new(MockPlantId::no_matches()));

        let results = service.identify(&path).await.unwrap();
        assert!(results.is_empty());
        assert!(results.current().is_none());
    }

    #[tokio::test]
    async fn test_candidates_come_back_sorted() {
        let (_dir, path) = temp_photo();
        let candidates = vec![
            Candidate {
                label: "low".to_string(),
                scientific_name: None,
                confidence: 0.2,
                detail: None,
                gallery: vec!["https://img.example.com/low.jpg".to_string()],
            },
            Candidate {
                label: "high".to_string(),
                scientific_name: None,
                confidence: 0.8,
                detail: None,
                gallery: vec!["https://img.example.com/high.jpg".to_string()],
            },
        ];
        let service =
            IdentificationService::with_source(Box::new(MockPlantId::with_candidates(candidates)));

        let results = service.identify(&path).await.unwrap();
        assert_eq!(results.current().map(|c| c.label.as_str()), Some("high"));
        assert_eq!(results.candidates()[1].label, "low");
    }

    #[tokio::test]
    async fn test_source_error_propagates() {
        let (_dir, path) = temp_photo();
        let service = IdentificationService::with_source(Box::new(MockPlantId::with_error(
            IdentificationError::Api {
                status: 429,
                body: "rate limited".to_string(),
            },
        )));

        let result = service.identify(&path).await;
        assert!(matches!(
            result,
            Err(IdentificationError::Api { status: 429, .. })
        ));
    }

    #[tokio::test]
    async fn test_unreadable_photo_is_input_error_before_any_call() {
        let service = IdentificationService::with_source(Box::new(MockPlantId::with_error(
            IdentificationError::Network("should never be reached".to_string()),
        )));

        let result = service.identify(Path::new("/nope/missing.jpg")).await;
        assert!(matches!(result, Err(IdentificationError::Photo(_))));
    }

    #[tokio::test]
    async fn test_offline_service_end_to_end() {
        let (_dir, path) = temp_photo();
        let service = IdentificationService::with_source(Box::new(
            crate::identification::sample::SampleSource::with_delay(std::time::Duration::ZERO),
        ));

        let results = service.identify(&path).await.unwrap();
        assert_eq!(results.len(), 3);
        // Sample data's best match has no images of its own
        let current = results.current().unwrap();
        assert_eq!(current.label, "Monstera deliciosa");
        assert_eq!(current.gallery, vec![path.to_string_lossy().into_owned()]);
    }
}
