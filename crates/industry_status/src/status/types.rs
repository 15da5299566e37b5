use serde::{Deserialize, Serialize};

use crate::buildings::{BuildingCategory, IndustryBuilding};

// =============================================================================
// Status codes
// =============================================================================

/// The single diagnostic an industry panel shows, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    NoRoad,
    Striking,
    Mothballed,
    Cursed,
    NoWorkers,
    NoRawMaterials,
    SevereUnderstaffed,
    Understaffed,
    PartiallyStaffed,
    MostlyStaffed,
    LowEfficiency,
    FullyProductive,
}

impl StatusCode {
    /// Short title for the status line.
    pub fn label(self) -> &'static str {
        match self {
            Self::NoRoad => "No road access",
            Self::Striking => "Workers on strike",
            Self::Mothballed => "Production mothballed",
            Self::Cursed => "Cursed by the gods",
            Self::NoWorkers => "No workers",
            Self::NoRawMaterials => "No raw materials",
            Self::SevereUnderstaffed => "Severely understaffed",
            Self::Understaffed => "Understaffed",
            Self::PartiallyStaffed => "Partially staffed",
            Self::MostlyStaffed => "Mostly staffed",
            Self::LowEfficiency => "Low efficiency",
            Self::FullyProductive => "Working at full capacity",
        }
    }

    /// Longer explanation. Low efficiency is worded differently for workshops,
    /// whose output also depends on deliveries.
    pub fn describe(self, category: BuildingCategory) -> &'static str {
        match (self, category) {
            (Self::LowEfficiency, BuildingCategory::Workshop) => {
                "Production is slow. Check that raw materials are delivered steadily."
            }
            (Self::LowEfficiency, _) => {
                "Production is slow. The building has been short of workers recently."
            }
            (Self::NoRoad, _) => "This building needs road access to function.",
            (Self::Striking, _) => "The workers have walked out over unpaid wages.",
            (Self::Mothballed, _) => "The city has stopped production of this good.",
            (Self::Cursed, _) => "A divine curse has blighted this farm.",
            (Self::NoWorkers, _) => "Nobody works here. Production has stopped.",
            (Self::NoRawMaterials, _) => "Waiting for raw materials to be delivered.",
            (Self::SevereUnderstaffed, _) => "Very few workers. Production is crawling.",
            (Self::Understaffed, _) => "Too few workers. Production is slow.",
            (Self::PartiallyStaffed, _) => "More workers would speed up production.",
            (Self::MostlyStaffed, _) => "Almost fully staffed.",
            (Self::FullyProductive, _) => "Fully staffed and working well.",
        }
    }

    /// Whether this status means nothing is being produced at all.
    pub fn halts_production(self) -> bool {
        matches!(
            self,
            Self::NoRoad
                | Self::Striking
                | Self::Mothballed
                | Self::Cursed
                | Self::NoWorkers
                | Self::NoRawMaterials
        )
    }
}

// =============================================================================
// Rule inputs
// =============================================================================

/// Everything the status rules look at for one building, flattened so each
/// rule is a plain predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInputs {
    pub has_road_access: bool,
    pub is_mothballed: bool,
    pub strike_duration_days: u32,
    pub curse_days_left: u32,
    pub num_workers: i32,
    pub loads_stored: i32,
    pub worker_percentage: i32,
    pub efficiency: i32,
}

impl StatusInputs {
    pub fn from_building(
        building: &IndustryBuilding,
        worker_percentage: i32,
        efficiency: i32,
        has_road_access: bool,
        is_mothballed: bool,
    ) -> Self {
        Self {
            has_road_access,
            is_mothballed,
            strike_duration_days: building.strike_duration_days,
            curse_days_left: building.curse_days_left,
            num_workers: building.num_workers,
            loads_stored: building.loads_stored,
            worker_percentage,
            efficiency,
        }
    }
}
