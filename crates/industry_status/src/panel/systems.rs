use bevy::prelude::*;

use crate::buildings::{IndustryBuilding, IndustryBuildingType};
use crate::fishing::{shipyard_boats_needed, FishingBoat};
use crate::policy::{MothballedResources, ScenarioSettings};
use crate::IndustryStatusSet;

use super::helpers::evaluate_panel;
use super::types::{IndustryPanel, IndustryStatusChanged, InspectedBuilding, PanelContext};

// =============================================================================
// System
// =============================================================================

/// System: Refresh the panel for the inspected industry building.
///
/// Runs every frame. Clears the panel when nothing is inspected or the
/// inspected entity is not an industry building. Sends
/// `IndustryStatusChanged` when the status line differs from last frame.
pub fn update_industry_panel(
    inspected: Res<InspectedBuilding>,
    settings: Res<ScenarioSettings>,
    mothballed: Res<MothballedResources>,
    buildings: Query<&IndustryBuilding>,
    boats: Query<&FishingBoat>,
    mut panel: ResMut<IndustryPanel>,
    mut status_changed: EventWriter<IndustryStatusChanged>,
) {
    let Some(entity) = inspected.0 else {
        if panel.entity.is_some() {
            panel.clear();
        }
        return;
    };
    let Ok(building) = buildings.get(entity) else {
        if panel.entity.is_some() {
            panel.clear();
        }
        return;
    };

    // Only shipyards need the city-wide wharf scan.
    let boats_needed = building.building_type == IndustryBuildingType::Shipyard
        && shipyard_boats_needed(buildings.iter());

    let mut missing_boat = None;
    let boat_action = building.fishing_boat.and_then(|boat| match boats.get(boat) {
        Ok(b) => Some(b.action),
        Err(_) => {
            missing_boat = Some(boat);
            None
        }
    });

    let ctx = PanelContext {
        climate: settings.climate,
        mothballed: &mothballed,
        boats_needed,
        boat_action,
    };
    let report = evaluate_panel(building, &ctx);

    let previous = if panel.entity == Some(entity) {
        panel.status()
    } else {
        None
    };
    if previous != Some(report.status) {
        if let Some(boat) = missing_boat {
            warn!(
                "Wharf {:?}: fishing boat {:?} no longer exists, showing default boat status",
                entity, boat
            );
        }
        debug!(
            "{} {:?}: status {:?} -> {:?}",
            building.building_type.name(),
            entity,
            previous,
            report.status
        );
        status_changed.send(IndustryStatusChanged {
            entity,
            status: report.status,
        });
    }

    panel.entity = Some(entity);
    panel.report = Some(report);
}

// =============================================================================
// Plugin
// =============================================================================

pub struct PanelPlugin;

impl Plugin for PanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InspectedBuilding>()
            .init_resource::<IndustryPanel>()
            .add_event::<IndustryStatusChanged>()
            .add_systems(
                Update,
                update_industry_panel.in_set(IndustryStatusSet::Evaluate),
            );
    }
}
