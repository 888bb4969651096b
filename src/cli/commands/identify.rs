//! Photo identification command.

use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config;
use crate::error::{Error, ResultExt};
use crate::identification::{
    self, IdentificationConfig, IdentificationService, ResultSet, badges,
};

/// Identify the plant in a photo and print the ranked candidates
pub fn cmd_identify(
    rt: &Runtime,
    photo: &PathBuf,
    api_key: Option<&str>,
    language: Option<&str>,
    offline: bool,
    promote: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    if !photo.exists() {
        return Err(Error::not_found(photo).into());
    }

    let config = config::load();
    let service = build_service(&config, api_key, language, offline);

    if !json {
        println!("Identifying: {:?}", photo);
        println!();
    }

    rt.block_on(async {
        match service
            .identify(photo)
            .await
            .with_context("identification failed")
        {
            Ok(mut results) => {
                if let Some(label) = promote
                    && !results.promote(label)
                {
                    eprintln!("(no candidate labelled {:?} to promote)", label);
                }
                if json {
                    // Value's alternate Display is pretty-printed JSON
                    println!("{:#}", result_set_to_json(&results));
                } else if results.is_empty() {
                    println!("✗ No matches found for this photo.");
                    println!("  Try again with a closer, well-lit shot of the plant.");
                } else {
                    print_result_set(&results);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    });
    Ok(())
}

/// Pick the data source: explicit flags win over the config file, and
/// offline mode needs no API key
fn build_service(
    config: &config::Config,
    api_key: Option<&str>,
    language: Option<&str>,
    offline: bool,
) -> IdentificationService {
    if offline || config.identification.offline {
        return IdentificationService::offline();
    }

    let api_key = api_key
        .map(str::to_string)
        .or_else(|| config.credentials.plant_id_api_key.clone());
    let Some(api_key) = api_key else {
        eprintln!("Error: Plant.id API key required.");
        eprintln!("Get one at: https://web.plant.id");
        eprintln!("Then use: --api-key YOUR_KEY, set PLANT_ID_API_KEY, or run:");
        eprintln!("  plant-scout configure --api-key YOUR_KEY");
        std::process::exit(1);
    };

    IdentificationService::new(IdentificationConfig {
        api_key,
        language: language
            .map(str::to_string)
            .unwrap_or_else(|| config.identification.language.clone()),
    })
}

/// Serialize a result set for `--json` output. The domain types stay free of
/// serde; this is a display concern, so the shaping (including badge strings)
/// lives at the CLI boundary.
fn result_set_to_json(results: &ResultSet) -> serde_json::Value {
    serde_json::json!({
        "current_index": results.current_index(),
        "candidates": results
            .candidates()
            .iter()
            .map(candidate_to_json)
            .collect::<Vec<_>>(),
    })
}

fn candidate_to_json(candidate: &identification::Candidate) -> serde_json::Value {
    serde_json::json!({
        "label": &candidate.label,
        "scientific_name": &candidate.scientific_name,
        "confidence": candidate.confidence,
        "confidence_percent": badges::confidence_percent(candidate),
        "badges": {
            "care_level": badges::care_level(candidate).to_string(),
            "edibility": badges::edibility(candidate).to_string(),
            "bloom": badges::bloom(candidate).to_string(),
        },
        "detail": candidate.detail.as_ref().map(|d| serde_json::json!({
            "common_names": &d.common_names,
            "description": &d.description,
            "edible_parts": &d.edible_parts,
            "watering": d.watering.map(|w| serde_json::json!({"min": w.min, "max": w.max})),
            "url": &d.url,
        })),
        "gallery": &candidate.gallery,
    })
}

/// Print the current candidate in full, then the alternatives
fn print_result_set(results: &ResultSet) {
    let Some(current) = results.current() else {
        return;
    };

    println!(
        "✓ Best match: {} (confidence: {}%)",
        current.label,
        badges::confidence_percent(current)
    );
    print_candidate(current);

    let alternatives: Vec<_> = results
        .candidates()
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != results.current_index())
        .collect();

    if !alternatives.is_empty() {
        println!();
        println!("Alternatives (re-run with --promote LABEL to inspect one):");
        for (_, candidate) in alternatives {
            println!(
                "  {} ({}%)",
                candidate.label,
                badges::confidence_percent(candidate)
            );
        }
    }
}

fn print_candidate(candidate: &identification::Candidate) {
    println!();
    if let Some(detail) = &candidate.detail {
        if !detail.common_names.is_empty() {
            println!("  Also known as: {}", detail.common_names.join(", "));
        }
        if let Some(description) = &detail.description {
            println!("  {}", description);
        }
        if let Some(url) = &detail.url {
            println!("  More: {}", url);
        }
    }
    println!(
        "  Badges: {} | {} | {}",
        badges::care_level(candidate),
        badges::edibility(candidate),
        badges::bloom(candidate)
    );
    if !candidate.gallery.is_empty() {
        println!("  Images:");
        for image in &candidate.gallery {
            println!("    {}", image);
        }
    }
}
