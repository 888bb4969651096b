//! Plant identification module - turns a captured photo into ranked species candidates.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`plantid/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP client for the Plant.id v3 API
//! - **Photo** - Image loading and transport encoding
//! - **Sample** - Deterministic offline substitute source
//! - **Service** - High-level orchestration of the identification flow
//! - **Badges** - Derived display predicates over a candidate's detail
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. The network and offline data paths are swappable strategies
//!
//! # Usage
//!
//! ```ignore
//! use identification::{IdentificationService, IdentificationConfig};
//!
//! let config = IdentificationConfig {
//!     api_key: "your-api-key".to_string(),
//!     ..Default::default()
//! };
//! let service = IdentificationService::new(config);
//!
//! // Identify a photo
//! let mut results = service.identify(Path::new("capture.jpg")).await?;
//! if let Some(best) = results.current() {
//!     println!("{} ({}%)", best.label, badges::confidence_percent(best));
//! }
//! results.promote("Philodendron hederaceum");
//! ```

pub mod badges;
pub mod domain;
pub mod photo;
pub mod plantid;
pub mod sample;
pub mod service;
pub mod traits;

pub use domain::{Candidate, CandidateDetail, IdentificationError, ResultSet, Watering};
pub use sample::SampleSource;
pub use service::{IdentificationConfig, IdentificationService};
