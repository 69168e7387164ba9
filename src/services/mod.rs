//! Service layer for the ad rotator.
//!
//! This module contains the business logic for:
//! - Group targeting rules (`GroupRule`)
//! - Eligibility filtering (`filter_eligible`)
//! - Tracked link construction (`build_link`)
//! - Category exclusion (`CategoryExclusions`)
//! - Placement frequency (`PlacementFrequency`)
//! - Rotation and serving (`AdSelector`)

mod categories;
mod eligibility;
mod groups;
mod links;
mod placement;
mod selector;

pub use categories::CategoryExclusions;
pub use eligibility::{Targeting, filter_eligible};
pub use groups::GroupRule;
pub use links::{build_link, try_build_link};
pub use placement::{PlacementFrequency, Stream};
pub use selector::AdSelector;
