pub(crate) mod types;

pub use types::{BuildingCategory, IndustryBuilding, IndustryBuildingType};
