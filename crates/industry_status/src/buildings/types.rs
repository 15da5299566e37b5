use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{FARM_CYCLE, RAW_MATERIAL_CYCLE, SHIPYARD_CYCLE, WORKSHOP_CYCLE};
use crate::goods::ResourceKind;

// =============================================================================
// Categories
// =============================================================================

/// Which status cascade a building's panel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingCategory {
    Farm,
    RawMaterial,
    Workshop,
    /// Shipyards and wharves, which report boat state instead of efficiency.
    Special,
}

// =============================================================================
// Building types
// =============================================================================

/// Every building type that opens an industry info panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndustryBuildingType {
    WheatFarm,
    VegetableFarm,
    FruitFarm,
    OliveFarm,
    VinesFarm,
    PigFarm,
    MarbleQuarry,
    IronMine,
    TimberYard,
    ClayPit,
    WineWorkshop,
    OilWorkshop,
    WeaponsWorkshop,
    FurnitureWorkshop,
    PotteryWorkshop,
    Shipyard,
    Wharf,
}

impl IndustryBuildingType {
    pub fn all() -> &'static [IndustryBuildingType] {
        &[
            Self::WheatFarm,
            Self::VegetableFarm,
            Self::FruitFarm,
            Self::OliveFarm,
            Self::VinesFarm,
            Self::PigFarm,
            Self::MarbleQuarry,
            Self::IronMine,
            Self::TimberYard,
            Self::ClayPit,
            Self::WineWorkshop,
            Self::OilWorkshop,
            Self::WeaponsWorkshop,
            Self::FurnitureWorkshop,
            Self::PotteryWorkshop,
            Self::Shipyard,
            Self::Wharf,
        ]
    }

    pub fn category(self) -> BuildingCategory {
        match self {
            Self::WheatFarm
            | Self::VegetableFarm
            | Self::FruitFarm
            | Self::OliveFarm
            | Self::VinesFarm
            | Self::PigFarm => BuildingCategory::Farm,
            Self::MarbleQuarry | Self::IronMine | Self::TimberYard | Self::ClayPit => {
                BuildingCategory::RawMaterial
            }
            Self::WineWorkshop
            | Self::OilWorkshop
            | Self::WeaponsWorkshop
            | Self::FurnitureWorkshop
            | Self::PotteryWorkshop => BuildingCategory::Workshop,
            Self::Shipyard | Self::Wharf => BuildingCategory::Special,
        }
    }

    /// The good this building produces. Shipyards build boats, not goods.
    pub fn output(self) -> Option<ResourceKind> {
        match self {
            Self::WheatFarm => Some(ResourceKind::Wheat),
            Self::VegetableFarm => Some(ResourceKind::Vegetables),
            Self::FruitFarm => Some(ResourceKind::Fruit),
            Self::OliveFarm => Some(ResourceKind::Olives),
            Self::VinesFarm => Some(ResourceKind::Vines),
            Self::PigFarm => Some(ResourceKind::Meat),
            Self::MarbleQuarry => Some(ResourceKind::Marble),
            Self::IronMine => Some(ResourceKind::Iron),
            Self::TimberYard => Some(ResourceKind::Timber),
            Self::ClayPit => Some(ResourceKind::Clay),
            Self::WineWorkshop => Some(ResourceKind::Wine),
            Self::OilWorkshop => Some(ResourceKind::Oil),
            Self::WeaponsWorkshop => Some(ResourceKind::Weapons),
            Self::FurnitureWorkshop => Some(ResourceKind::Furniture),
            Self::PotteryWorkshop => Some(ResourceKind::Pottery),
            Self::Wharf => Some(ResourceKind::Fish),
            Self::Shipyard => None,
        }
    }

    /// The raw material a workshop turns into its output.
    pub fn input(self) -> Option<ResourceKind> {
        match self {
            Self::WineWorkshop => Some(ResourceKind::Vines),
            Self::OilWorkshop => Some(ResourceKind::Olives),
            Self::WeaponsWorkshop => Some(ResourceKind::Iron),
            Self::FurnitureWorkshop => Some(ResourceKind::Timber),
            Self::PotteryWorkshop => Some(ResourceKind::Clay),
            _ => None,
        }
    }

    /// Workers needed for full staffing.
    pub fn laborers(self) -> i32 {
        match self {
            Self::Wharf => 6,
            _ => 10,
        }
    }

    /// Progress units per production cycle, if the building has one.
    pub fn production_cycle(self) -> Option<i32> {
        match self.category() {
            BuildingCategory::Farm => Some(FARM_CYCLE),
            BuildingCategory::RawMaterial => Some(RAW_MATERIAL_CYCLE),
            BuildingCategory::Workshop => Some(WORKSHOP_CYCLE),
            BuildingCategory::Special => match self {
                Self::Shipyard => Some(SHIPYARD_CYCLE),
                _ => None,
            },
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::WheatFarm => "Wheat Farm",
            Self::VegetableFarm => "Vegetable Farm",
            Self::FruitFarm => "Fruit Farm",
            Self::OliveFarm => "Olive Farm",
            Self::VinesFarm => "Vineyard",
            Self::PigFarm => "Pig Farm",
            Self::MarbleQuarry => "Marble Quarry",
            Self::IronMine => "Iron Mine",
            Self::TimberYard => "Timber Yard",
            Self::ClayPit => "Clay Pit",
            Self::WineWorkshop => "Wine Workshop",
            Self::OilWorkshop => "Oil Workshop",
            Self::WeaponsWorkshop => "Weapons Workshop",
            Self::FurnitureWorkshop => "Furniture Workshop",
            Self::PotteryWorkshop => "Pottery Workshop",
            Self::Shipyard => "Shipyard",
            Self::Wharf => "Wharf",
        }
    }
}

// =============================================================================
// Component
// =============================================================================

/// Production snapshot of an industry building.
///
/// Written by the simulation; the panel only reads it.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryBuilding {
    pub building_type: IndustryBuildingType,
    /// Months since the building started producing. 0 means not yet producing.
    pub age_months: u32,
    pub average_production_per_month: i32,
    /// Progress toward the current production cycle.
    pub progress: i32,
    pub curse_days_left: u32,
    pub strike_duration_days: u32,
    pub num_workers: i32,
    /// Input loads on hand (workshops only).
    pub loads_stored: i32,
    pub has_road_access: bool,
    /// Fishing boat assigned to this wharf.
    #[serde(skip)]
    pub fishing_boat: Option<Entity>,
}

impl IndustryBuilding {
    /// A freshly placed building: on a road, no workers, nothing produced yet.
    pub fn new(building_type: IndustryBuildingType) -> Self {
        Self {
            building_type,
            age_months: 0,
            average_production_per_month: 0,
            progress: 0,
            curse_days_left: 0,
            strike_duration_days: 0,
            num_workers: 0,
            loads_stored: 0,
            has_road_access: true,
            fishing_boat: None,
        }
    }

    pub fn category(&self) -> BuildingCategory {
        self.building_type.category()
    }

    pub fn is_striking(&self) -> bool {
        self.strike_duration_days > 0
    }
}
