//! Trait definitions for identification data sources.
//!
//! The network client and the offline sample source both implement
//! [`PlantIdApi`], so the service can swap between them (and tests can
//! substitute mocks) without any conditional inside the identification flow.

use async_trait::async_trait;

use super::domain::{Candidate, IdentificationError};
use super::photo::EncodedPhoto;

/// A source of identification candidates for an encoded photo.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait PlantIdApi: Send + Sync {
    /// Identify the photographed plant and return raw (unsorted) candidates.
    /// An empty vector means "no matches", not an error.
    async fn identify(&self, photo: &EncodedPhoto)
    -> Result<Vec<Candidate>, IdentificationError>;
}

#[async_trait]
impl PlantIdApi for super::plantid::PlantIdClient {
    async fn identify(
        &self,
        photo: &EncodedPhoto,
    ) -> Result<Vec<Candidate>, IdentificationError> {
        self.identify(photo).await
    }
}

/// Mock identification sources for testing.
#[cfg(test)]
pub mod mocks {
    use super::*;

    /// Mock source that returns predefined candidates.
    pub struct MockPlantId {
        /// Candidates to return from identify
        pub candidates: Vec<Candidate>,
        /// Error to return (takes precedence over candidates)
        pub error: Option<IdentificationError>,
    }

    impl MockPlantId {
        /// Create a mock that returns no matches.
        pub fn no_matches() -> Self {
            Self {
                candidates: vec![],
                error: None,
            }
        }

        /// Create a mock that returns a single match with no gallery.
        pub fn single_match(label: &str, confidence: f32) -> Self {
            Self {
                candidates: vec![Candidate {
                    label: label.to_string(),
                    scientific_name: Some(label.to_string()),
                    confidence,
                    detail: None,
                    gallery: vec![],
                }],
                error: None,
            }
        }

        /// Create a mock that returns the given candidates.
        pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
            Self {
                candidates,
                error: None,
            }
        }

        /// Create a mock that returns an error.
        pub fn with_error(error: IdentificationError) -> Self {
            Self {
                candidates: vec![],
                error: Some(error),
            }
        }
    }

    #[async_trait]
    impl PlantIdApi for MockPlantId {
        async fn identify(
            &self,
            _photo: &EncodedPhoto,
        ) -> Result<Vec<Candidate>, IdentificationError> {
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(self.candidates.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn photo() -> EncodedPhoto {
            EncodedPhoto {
                reference: "/photos/capture.jpg".to_string(),
                base64: "QUJD".to_string(),
            }
        }

        #[tokio::test]
        async fn test_mock_no_matches() {
            let mock = MockPlantId::no_matches();
            let candidates = mock.identify(&photo()).await.unwrap();
            assert!(candidates.is_empty());
        }

        #[tokio::test]
        async fn test_mock_single_match() {
            let mock = MockPlantId::single_match("Ficus", 0.9);
            let candidates = mock.identify(&photo()).await.unwrap();
            assert_eq!(candidates.len(), 1);
            assert_eq!(candidates[0].label, "Ficus");
            assert_eq!(candidates[0].confidence, 0.9);
        }

        #[tokio::test]
        async fn test_mock_error() {
            let mock =
                MockPlantId::with_error(IdentificationError::Network("timeout".to_string()));
            let result = mock.identify(&photo()).await;
            assert!(matches!(result, Err(IdentificationError::Network(_))));
        }
    }
}
