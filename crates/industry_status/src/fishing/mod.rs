mod helpers;
pub(crate) mod types;

pub use helpers::{shipyard_boats_needed, shipyard_status, wharf_status};
pub use types::{FishingBoat, FishingBoatAction, ShipyardStatus, WharfStatus};
