//! Internal domain models for plant identification.
//!
//! These types are OUR types - they don't change when the external API changes.
//! All external API responses get converted into these types via adapters.

/// One species-identification suggestion
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Display name. Never empty - "Unknown" when the source omits a name.
    pub label: String,
    /// Latin binomial, when the source supplied one
    pub scientific_name: Option<String>,
    /// Confidence score (0.0 to 1.0). Absent or unparseable source values
    /// coerce to 0.0, never NaN.
    pub confidence: f32,
    /// Descriptive detail, passed through when the API returned it
    pub detail: Option<CandidateDetail>,
    /// Image references (URLs or local file references); may be empty
    pub gallery: Vec<String>,
}

/// Descriptive detail for a candidate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateDetail {
    /// Common names, in the order the API returned them
    pub common_names: Vec<String>,
    /// Free-text species description
    pub description: Option<String>,
    /// Edible parts of the plant (empty = not edible)
    pub edible_parts: Vec<String>,
    /// Watering range, when known
    pub watering: Option<Watering>,
    /// External reference URL (e.g. Wikipedia)
    pub url: Option<String>,
}

/// Watering range, each bound in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Watering {
    pub min: f32,
    pub max: f32,
}

/// The sorted collection of candidates for one identification request,
/// plus a cursor identifying which candidate is currently primary.
///
/// Immutable after construction except for the cursor, which moves via
/// [`ResultSet::promote`].
#[derive(Debug, Clone)]
pub struct ResultSet {
    candidates: Vec<Candidate>,
    current: usize,
}

impl ResultSet {
    /// Build a result set from raw candidates.
    ///
    /// Candidates are sorted by descending confidence (`sort_by` is stable,
    /// so equal confidences keep their input order). If the top candidate has
    /// no gallery images and a captured photo reference exists, the gallery
    /// becomes that single reference so a caller always has one image to show.
    pub fn new(mut candidates: Vec<Candidate>, photo_reference: Option<&str>) -> Self {
        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if let Some(top) = candidates.first_mut()
            && top.gallery.is_empty()
            && let Some(photo) = photo_reference
        {
            top.gallery = vec![photo.to_string()];
        }

        Self {
            candidates,
            current: 0,
        }
    }

    /// An empty result set (zero matches)
    pub fn empty() -> Self {
        Self {
            candidates: Vec::new(),
            current: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// All candidates, best first
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The currently displayed candidate, or None when the set is empty
    pub fn current(&self) -> Option<&Candidate> {
        self.candidates.get(self.current)
    }

    /// Index of the current candidate, or None when the set is empty
    pub fn current_index(&self) -> Option<usize> {
        if self.candidates.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    /// Make the first candidate whose label matches the current one.
    ///
    /// An unknown label is a no-op (the cursor does not move) - callers only
    /// promote from candidates they were handed. Returns whether a candidate
    /// was promoted.
    pub fn promote(&mut self, label: &str) -> bool {
        match self.candidates.iter().position(|c| c.label == label) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }
}

/// Errors that can occur during identification
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentificationError {
    /// The photo reference did not resolve to readable image bytes
    #[error("Failed to read photo: {0}")]
    Photo(String),

    /// Non-2xx API response (body truncated for display)
    #[error("API request failed (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
