use crate::buildings::{IndustryBuilding, IndustryBuildingType};

use super::types::{FishingBoatAction, ShipyardStatus, WharfStatus};

/// Whether any staffed wharf is still waiting for its fishing boat.
///
/// Non-wharf buildings in `buildings` are ignored.
pub fn shipyard_boats_needed<'a>(
    buildings: impl IntoIterator<Item = &'a IndustryBuilding>,
) -> bool {
    buildings
        .into_iter()
        .filter(|b| b.building_type == IndustryBuildingType::Wharf)
        .any(|wharf| wharf.num_workers > 0 && wharf.fishing_boat.is_none())
}

pub fn shipyard_status(has_road_access: bool, boats_needed: bool) -> ShipyardStatus {
    if !has_road_access {
        ShipyardStatus::NoRoad
    } else if boats_needed {
        ShipyardStatus::NeedsFishingBoat
    } else {
        ShipyardStatus::BoatsBusy
    }
}

/// Status line for a wharf.
///
/// `boat_action` is the current action of the wharf's assigned boat, or
/// `None` when the assigned boat could not be found.
pub fn wharf_status(
    wharf: &IndustryBuilding,
    fish_mothballed: bool,
    boat_action: Option<FishingBoatAction>,
) -> WharfStatus {
    if !wharf.has_road_access {
        return WharfStatus::NoRoad;
    }
    if fish_mothballed {
        return WharfStatus::Mothballed;
    }
    if wharf.fishing_boat.is_none() {
        return WharfStatus::NoBoat;
    }
    match boat_action {
        Some(FishingBoatAction::GoingToFish) => WharfStatus::BoatGoingToFish,
        Some(FishingBoatAction::Fishing) => WharfStatus::BoatFishing,
        Some(FishingBoatAction::GoingToWharf) => WharfStatus::BoatGoingToWharf,
        Some(FishingBoatAction::AtWharf) => WharfStatus::BoatAtWharf,
        Some(FishingBoatAction::ReturningWithFish) => WharfStatus::BoatReturningWithFish,
        Some(FishingBoatAction::Other(_)) | None => WharfStatus::BoatBusyElsewhere,
    }
}
