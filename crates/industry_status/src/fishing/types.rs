use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Fishing boat
// =============================================================================

/// What a fishing boat is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FishingBoatAction {
    GoingToFish,
    Fishing,
    GoingToWharf,
    AtWharf,
    ReturningWithFish,
    /// Any other action code (sinking, being built, states added later).
    Other(u8),
}

impl FishingBoatAction {
    /// Decode a saved figure action code.
    pub fn from_action_state(code: u8) -> Self {
        match code {
            191 => Self::GoingToFish,
            192 => Self::Fishing,
            193 => Self::GoingToWharf,
            194 => Self::AtWharf,
            195 => Self::ReturningWithFish,
            other => Self::Other(other),
        }
    }
}

/// A fishing boat working out of a wharf.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FishingBoat {
    pub action: FishingBoatAction,
    pub wharf: Entity,
}

// =============================================================================
// Panel statuses
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipyardStatus {
    NoRoad,
    /// Some staffed wharf is waiting for a boat.
    NeedsFishingBoat,
    /// Every staffed wharf has its boat; the shipyard has no customer.
    BoatsBusy,
}

impl ShipyardStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::NoRoad => "No road access",
            Self::NeedsFishingBoat => "Building a fishing boat for a waiting wharf",
            Self::BoatsBusy => "No wharf needs a boat right now",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WharfStatus {
    NoRoad,
    Mothballed,
    NoBoat,
    BoatGoingToFish,
    BoatFishing,
    BoatGoingToWharf,
    BoatAtWharf,
    BoatReturningWithFish,
    /// The boat is doing something the panel has no wording for.
    BoatBusyElsewhere,
}

impl WharfStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::NoRoad => "No road access",
            Self::Mothballed => "Fishing mothballed",
            Self::NoBoat => "Waiting for a boat from the shipyard",
            Self::BoatGoingToFish => "Boat is sailing to the fishing grounds",
            Self::BoatFishing => "Boat is fishing",
            Self::BoatGoingToWharf => "Boat is returning to the wharf",
            Self::BoatAtWharf => "Boat is unloading at the wharf",
            Self::BoatReturningWithFish => "Boat is bringing back its catch",
            Self::BoatBusyElsewhere => "Boat is busy",
        }
    }
}
