use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::IndustryBuildingType;
use crate::fishing::{FishingBoatAction, ShipyardStatus, WharfStatus};
use crate::goods::{Climate, ResourceKind};
use crate::policy::MothballedResources;
use crate::status::StatusCode;

// =============================================================================
// Report
// =============================================================================

/// The status line of a panel. Shipyards and wharves have their own wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelStatus {
    Industry(StatusCode),
    Shipyard(ShipyardStatus),
    Wharf(WharfStatus),
}

impl PanelStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Industry(s) => s.label(),
            Self::Shipyard(s) => s.label(),
            Self::Wharf(s) => s.label(),
        }
    }
}

/// Raw material a workshop has on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStock {
    pub resource: ResourceKind,
    pub loads: i32,
}

/// Everything the renderer needs to draw one industry panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryPanelReport {
    pub building_type: IndustryBuildingType,
    pub worker_percentage: i32,
    /// Current production cycle progress. `None` for wharves, and for
    /// shipyards cut off from the road.
    pub progress_percent: Option<i32>,
    /// `None` for shipyards and wharves.
    pub efficiency: Option<i32>,
    pub efficiency_is_low: bool,
    /// Workshop input stock; hidden while the workers are on strike.
    pub input: Option<InputStock>,
    /// Average monthly catch (wharves only).
    pub average_catch: Option<i32>,
    pub status: PanelStatus,
}

// =============================================================================
// Context
// =============================================================================

/// City state a panel evaluation reads besides the building itself.
#[derive(Debug, Clone, Copy)]
pub struct PanelContext<'a> {
    pub climate: Climate,
    pub mothballed: &'a MothballedResources,
    /// Result of the wharf scan; only consulted for shipyards.
    pub boats_needed: bool,
    /// Action of the wharf's boat, if it has one and it still exists.
    pub boat_action: Option<FishingBoatAction>,
}

// =============================================================================
// ECS resources and events
// =============================================================================

/// The building whose info panel is open.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InspectedBuilding(pub Option<Entity>);

/// Panel contents for the inspected building, refreshed every frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct IndustryPanel {
    pub entity: Option<Entity>,
    pub report: Option<IndustryPanelReport>,
}

impl IndustryPanel {
    pub fn status(&self) -> Option<PanelStatus> {
        self.report.as_ref().map(|r| r.status)
    }

    pub fn clear(&mut self) {
        self.entity = None;
        self.report = None;
    }
}

/// Sent when the inspected building's status line changes, including when a
/// panel is first opened.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryStatusChanged {
    pub entity: Entity,
    pub status: PanelStatus,
}
