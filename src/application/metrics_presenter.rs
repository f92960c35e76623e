// Metrics presenter - display figures for the Analytics panel
use crate::domain::metrics::{DashboardMetrics, StatsObject};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

pub const VISITOR_COUNT_FALLBACK: &str = "42.5k";
pub const TOTAL_USERS_KPI: &str = "Total Users";
pub const ACTIVE_NOW_RANGE: RangeInclusive<u32> = 10..=59;

/// Where older analytics feeds put "Total Users" when the entry is unlabeled.
const LEGACY_TOTAL_USERS_INDEX: usize = 2;

#[derive(Debug, Clone)]
pub struct MetricsPresenter<R = StdRng> {
    rng: R,
}

impl MetricsPresenter<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MetricsPresenter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn derive_visitor_count(&self, stats: Option<&StatsObject>) -> String {
        let Some(stats) = stats else {
            return VISITOR_COUNT_FALLBACK.to_string();
        };

        if let Some(entry) = stats.by_name(TOTAL_USERS_KPI) {
            return entry.value.clone();
        }

        match stats.at(LEGACY_TOTAL_USERS_INDEX) {
            Some(entry) => {
                tracing::debug!(
                    "No '{}' KPI label, using position {} ({:?})",
                    TOTAL_USERS_KPI,
                    LEGACY_TOTAL_USERS_INDEX,
                    entry.label
                );
                entry.value.clone()
            }
            None => VISITOR_COUNT_FALLBACK.to_string(),
        }
    }

    /// Placeholder "active right now" figure. Not a measurement.
    pub fn derive_active_now(&mut self) -> u32 {
        self.rng.gen_range(ACTIVE_NOW_RANGE)
    }

    pub fn derive(&mut self, stats: Option<&StatsObject>) -> DashboardMetrics {
        DashboardMetrics {
            visitor_count: self.derive_visitor_count(stats),
            active_now_count: self.derive_active_now(),
        }
    }
}
