//! Plant.id v3 API integration.
//!
//! - `dto`: exact API response shapes
//! - `adapter`: DTO to domain conversion (token + suggestion lookup strategies)
//! - `client`: HTTP client for the create/retrieve flow

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::PlantIdClient;
