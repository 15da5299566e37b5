use crate::buildings::{IndustryBuilding, IndustryBuildingType};
use crate::calc::{calc_bound, calc_percentage};
use crate::config::EFFICIENCY_HIGHLIGHT_PCT;
use crate::goods::{Climate, ResourceKind};

// =============================================================================
// Helper functions (pure, testable)
// =============================================================================

/// Actual monthly output as a percentage of the resource's quota, in `[0, 100]`.
///
/// Returns 0 while the building has not started producing or when there is no
/// resource to measure against.
pub fn compute_efficiency(
    building: &IndustryBuilding,
    resource: Option<ResourceKind>,
    climate: Climate,
) -> i32 {
    let Some(resource) = resource else {
        return 0;
    };
    if building.age_months == 0 {
        return 0;
    }
    let quota = resource.monthly_production_for(climate);
    let pct = calc_percentage(building.average_production_per_month, quota);
    calc_bound(pct, 0, 100)
}

/// Whether the panel should draw this efficiency in the warning colour.
pub fn efficiency_is_low(efficiency: i32) -> bool {
    efficiency < EFFICIENCY_HIGHLIGHT_PCT
}

/// How far the current production cycle has progressed, as a percentage.
///
/// `None` for buildings without a production cycle (wharves).
pub fn production_progress_percent(
    building_type: IndustryBuildingType,
    progress: i32,
) -> Option<i32> {
    building_type
        .production_cycle()
        .map(|cycle| calc_percentage(progress, cycle))
}

/// Employment coverage in `[0, 100]`. A building that needs no workers is 0.
pub fn worker_coverage_percentage(num_workers: i32, laborers: i32) -> i32 {
    calc_bound(calc_percentage(num_workers, laborers), 0, 100)
}
