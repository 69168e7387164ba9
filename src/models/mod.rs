// src/models/mod.rs

//! Domain models for the ad rotator.
//!
//! Ad definitions and settings come from the forum's theme configuration;
//! the viewer comes from the host's current-user accessor.

mod ad;
mod config;
mod viewer;

// Re-export all public types
pub use ad::{AdDefinition, AdResult, EligibleAd, Impression, TRACKING_PREFIX};
pub use config::{PlacementConfig, Settings};
pub use viewer::ViewerContext;
