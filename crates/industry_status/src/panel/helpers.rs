use crate::buildings::{IndustryBuilding, IndustryBuildingType};
use crate::efficiency::{
    compute_efficiency, efficiency_is_low, production_progress_percent,
    worker_coverage_percentage,
};
use crate::fishing::{shipyard_status, wharf_status};
use crate::goods::ResourceKind;
use crate::status::select_status_message;

use super::types::{IndustryPanelReport, InputStock, PanelContext, PanelStatus};

/// Input loads a workshop panel shows, or `None` when the panel hides the
/// stock line (not a workshop, or on strike). Negative counts show as 0.
pub fn input_loads_on_hand(building: &IndustryBuilding) -> Option<InputStock> {
    if building.is_striking() {
        return None;
    }
    building.building_type.input().map(|resource| InputStock {
        resource,
        loads: building.loads_stored.max(0),
    })
}

/// Build the full panel for one building.
pub fn evaluate_panel(building: &IndustryBuilding, ctx: &PanelContext) -> IndustryPanelReport {
    let building_type = building.building_type;
    let worker_percentage =
        worker_coverage_percentage(building.num_workers, building_type.laborers());

    match building_type {
        IndustryBuildingType::Shipyard => IndustryPanelReport {
            building_type,
            worker_percentage,
            progress_percent: building
                .has_road_access
                .then(|| production_progress_percent(building_type, building.progress))
                .flatten(),
            efficiency: None,
            efficiency_is_low: false,
            input: None,
            average_catch: None,
            status: PanelStatus::Shipyard(shipyard_status(
                building.has_road_access,
                ctx.boats_needed,
            )),
        },
        IndustryBuildingType::Wharf => IndustryPanelReport {
            building_type,
            worker_percentage,
            progress_percent: None,
            efficiency: None,
            efficiency_is_low: false,
            input: None,
            average_catch: Some(building.average_production_per_month),
            status: PanelStatus::Wharf(wharf_status(
                building,
                ctx.mothballed.is_mothballed(ResourceKind::Fish),
                ctx.boat_action,
            )),
        },
        _ => {
            let output = building_type.output();
            let efficiency = compute_efficiency(building, output, ctx.climate);
            let status = select_status_message(
                building_type.category(),
                building,
                worker_percentage,
                efficiency,
                building.has_road_access,
                ctx.mothballed.is_output_mothballed(output),
            );
            IndustryPanelReport {
                building_type,
                worker_percentage,
                progress_percent: production_progress_percent(building_type, building.progress),
                efficiency: Some(efficiency),
                efficiency_is_low: efficiency_is_low(efficiency),
                input: input_loads_on_hand(building),
                average_catch: None,
                status: PanelStatus::Industry(status),
            }
        }
    }
}
