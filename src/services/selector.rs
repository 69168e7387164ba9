//! Ad selection and rotation.
//!
//! An [`AdSelector`] lives for one viewing session. On first use it filters
//! the configured ads for the viewer, picks a random starting ad, and from
//! then on serves eligible ads round-robin. Its state is fixed after that
//! first initialization.

use std::collections::BTreeMap;
use std::mem;

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::models::{AdDefinition, AdResult, EligibleAd, Settings, ViewerContext};
use crate::services::categories::CategoryExclusions;
use crate::services::eligibility::filter_eligible;
use crate::services::links::try_build_link;

/// Lifecycle of the rotation cursor.
#[derive(Debug)]
enum RotationState {
    /// Inputs held until the first request
    Uninitialized {
        ads: Vec<AdDefinition>,
        viewer: ViewerContext,
    },
    /// Nothing to serve for this viewer
    Empty,
    /// At least one eligible ad; `cursor < ads.len()`
    Ready {
        ads: Vec<EligibleAd>,
        start: usize,
        cursor: usize,
    },
}

/// Per-session ad selector.
#[derive(Debug)]
pub struct AdSelector<R = ThreadRng> {
    state: RotationState,
    exclusions: CategoryExclusions,
    rng: R,
}

impl AdSelector<ThreadRng> {
    /// Create a selector for `viewer` over the configured `ads`.
    pub fn new(ads: Vec<AdDefinition>, viewer: ViewerContext) -> Self {
        Self::with_rng(ads, viewer, rand::rng())
    }

    /// Create a selector from theme settings, including category exclusions.
    pub fn from_settings(settings: &Settings, viewer: ViewerContext) -> Self {
        Self::new(settings.ads.clone(), viewer)
            .with_excluded_categories(CategoryExclusions::parse(&settings.exclude_categories))
    }
}

impl<R: Rng> AdSelector<R> {
    /// Create a selector drawing its start offset from `rng`.
    pub fn with_rng(ads: Vec<AdDefinition>, viewer: ViewerContext, rng: R) -> Self {
        Self {
            state: RotationState::Uninitialized { ads, viewer },
            exclusions: CategoryExclusions::default(),
            rng,
        }
    }

    pub fn with_excluded_categories(mut self, exclusions: CategoryExclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Has eligibility been computed?
    pub fn is_ready(&self) -> bool {
        !matches!(self.state, RotationState::Uninitialized { .. })
    }

    /// Number of eligible ads; zero before initialization.
    pub fn eligible_count(&self) -> usize {
        self.eligible_ads().len()
    }

    pub fn eligible_ads(&self) -> &[EligibleAd] {
        match &self.state {
            RotationState::Ready { ads, .. } => ads,
            _ => &[],
        }
    }

    /// The randomly chosen first position, once ready with ads.
    pub fn start_index(&self) -> Option<usize> {
        match self.state {
            RotationState::Ready { start, .. } => Some(start),
            _ => None,
        }
    }

    /// Compute eligibility and pick the start offset, once.
    pub fn initialize_if_needed(&mut self) {
        if self.is_ready() {
            return;
        }

        let RotationState::Uninitialized { ads, viewer } =
            mem::replace(&mut self.state, RotationState::Empty)
        else {
            return;
        };

        let eligible = filter_eligible(&ads, &viewer);
        if eligible.is_empty() {
            log::debug!("No eligible ads out of {} configured", ads.len());
            return;
        }

        let start = self.rng.random_range(0..eligible.len());
        log::debug!(
            "{} of {} ads eligible, starting rotation at {}",
            eligible.len(),
            ads.len(),
            start
        );

        self.state = RotationState::Ready {
            ads: eligible,
            start,
            cursor: start,
        };
    }

    /// Serve the ad under the cursor and advance it.
    pub fn next_ad(&mut self) -> Option<&EligibleAd> {
        self.initialize_if_needed();

        match &mut self.state {
            RotationState::Ready { ads, cursor, .. } => {
                let current = *cursor;
                *cursor = (current + 1) % ads.len();
                ads.get(current)
            }
            _ => None,
        }
    }

    /// Entry point for the placement host.
    ///
    /// `should_serve` is the host's positional decision. When it is false
    /// nothing is served and the rotation does not advance. Non-empty
    /// `extra_params` are appended to the served ad's link.
    pub fn serve_for_placement(
        &mut self,
        should_serve: bool,
        extra_params: &BTreeMap<String, String>,
    ) -> Option<AdResult> {
        self.initialize_if_needed();
        if !should_serve {
            return None;
        }

        let ad = self.next_ad()?;
        let final_link = if extra_params.is_empty() {
            ad.final_link.clone()
        } else {
            try_build_link(&ad.definition, extra_params)
        };

        Some(AdResult {
            id: ad.definition.id.clone(),
            text: ad.definition.text.clone(),
            final_link,
            classes: ad.classes.clone(),
        })
    }

    /// Should the content stream of this category carry no ads at all?
    pub fn is_category_excluded(&self, category_id: u64, parent_category_id: Option<u64>) -> bool {
        self.exclusions.is_excluded(category_id, parent_category_id)
    }
}
