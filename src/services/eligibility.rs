//! Ad eligibility filtering.
//!
//! Reduces the configured ads to those the current viewer may see, keeping
//! configuration order, and precomputes each survivor's link and classes.

use std::collections::BTreeMap;

use crate::models::{AdDefinition, EligibleAd, ViewerContext};
use crate::services::groups::GroupRule;
use crate::services::links::try_build_link;

/// Parsed include/exclude rules of a single ad.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targeting {
    include: Option<GroupRule>,
    exclude: Option<GroupRule>,
}

impl Targeting {
    pub fn from_ad(ad: &AdDefinition) -> Self {
        Self {
            include: GroupRule::parse(ad.include_groups.as_deref()),
            exclude: GroupRule::parse(ad.exclude_groups.as_deref()),
        }
    }

    /// No include rule means everyone is included. An exclude match always
    /// wins over an include match.
    pub fn allows(&self, viewer: &ViewerContext) -> bool {
        let included = self.include.as_ref().is_none_or(|rule| rule.matches(viewer));
        let excluded = self.exclude.as_ref().is_some_and(|rule| rule.matches(viewer));
        included && !excluded
    }
}

/// Filter ads down to the ones eligible for `viewer`.
pub fn filter_eligible(ads: &[AdDefinition], viewer: &ViewerContext) -> Vec<EligibleAd> {
    let no_extra = BTreeMap::new();

    ads.iter()
        .filter(|ad| {
            let allowed = Targeting::from_ad(ad).allows(viewer);
            if !allowed {
                log::debug!("Ad '{}' not eligible for viewer", ad.id);
            }
            allowed
        })
        .map(|ad| EligibleAd {
            final_link: try_build_link(ad, &no_extra),
            classes: ad.class_string(),
            definition: ad.clone(),
        })
        .collect()
}
