// src/lib.rs

//! Forum Ad Rotator Library
//!
//! Picks which configured ads a viewer may see and serves them round-robin
//! from a random starting point. Placement in the page is left to the host.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{AppError, Result};
pub use models::{AdDefinition, AdResult, Impression, Settings, ViewerContext};
pub use services::{AdSelector, CategoryExclusions};
