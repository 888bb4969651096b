//! Derived display badges.
//!
//! Pure functions over a candidate's detail, used by the presentation layer
//! for short labels (care level, edibility, bloom category). These encode the
//! only display-facing business rules in the system, so they live here rather
//! than in the UI.

use super::domain::Candidate;

/// How demanding the plant's watering needs are
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareLevel {
    Easy,
    Moderate,
    Thirsty,
}

impl std::fmt::Display for CareLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            CareLevel::Easy => "Easy Care",
            CareLevel::Moderate => "Moderate to Care",
            CareLevel::Thirsty => "Thirsty",
        };
        f.write_str(text)
    }
}

/// Whether any part of the plant is known to be edible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edibility {
    Edible,
    NotEdible,
}

impl std::fmt::Display for Edibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Edibility::Edible => "Edible",
            Edibility::NotEdible => "Not edible",
        };
        f.write_str(text)
    }
}

/// Coarse bloom category derived from the description text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bloom {
    Flowering,
    Foliage,
}

impl std::fmt::Display for Bloom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Bloom::Flowering => "Flowering",
            Bloom::Foliage => "Foliage",
        };
        f.write_str(text)
    }
}

/// Care level from the watering range.
///
/// No watering data reads as moderate. Otherwise the average of the range
/// buckets at 0.25 and 0.55.
pub fn care_level(candidate: &Candidate) -> CareLevel {
    let Some(watering) = candidate.detail.as_ref().and_then(|d| d.watering) else {
        return CareLevel::Moderate;
    };

    let avg = (watering.min + watering.max) / 2.0;
    if avg <= 0.25 {
        CareLevel::Easy
    } else if avg <= 0.55 {
        CareLevel::Moderate
    } else {
        CareLevel::Thirsty
    }
}

/// Edible iff the edible-parts list is non-empty
pub fn edibility(candidate: &Candidate) -> Edibility {
    let edible = candidate
        .detail
        .as_ref()
        .is_some_and(|d| !d.edible_parts.is_empty());
    if edible {
        Edibility::Edible
    } else {
        Edibility::NotEdible
    }
}

/// Flowering iff the description mentions "flower" (case-insensitive)
pub fn bloom(candidate: &Candidate) -> Bloom {
    let flowering = candidate
        .detail
        .as_ref()
        .and_then(|d| d.description.as_ref())
        .is_some_and(|text| text.to_lowercase().contains("flower"));
    if flowering {
        Bloom::Flowering
    } else {
        Bloom::Foliage
    }
}

/// Confidence as a rounded integer percentage (0.87 -> 87)
pub fn confidence_percent(candidate: &Candidate) -> u32 {
    (candidate.confidence * 100.0).round() as u32
}
