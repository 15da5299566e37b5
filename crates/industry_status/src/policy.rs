//! City-wide settings the industry panels read: which goods are mothballed
//! and the scenario climate. Both persist through the save extension map.

use std::collections::BTreeSet;

use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::goods::{Climate, ResourceKind};
use crate::Saveable;

// ---------------------------------------------------------------------------
// Mothballed goods
// ---------------------------------------------------------------------------

/// Goods whose production the city has suspended without demolishing the
/// buildings that make them.
#[derive(
    Resource, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Encode, Decode,
)]
pub struct MothballedResources {
    resources: BTreeSet<ResourceKind>,
}

impl MothballedResources {
    pub fn is_mothballed(&self, resource: ResourceKind) -> bool {
        self.resources.contains(&resource)
    }

    /// Like `is_mothballed`, treating "no resource" as never mothballed.
    pub fn is_output_mothballed(&self, resource: Option<ResourceKind>) -> bool {
        resource.is_some_and(|r| self.is_mothballed(r))
    }

    pub fn set(&mut self, resource: ResourceKind, mothballed: bool) {
        if mothballed {
            self.resources.insert(resource);
        } else {
            self.resources.remove(&resource);
        }
    }

    /// Flip the mothball flag and return the new value.
    pub fn toggle(&mut self, resource: ResourceKind) -> bool {
        let now = !self.is_mothballed(resource);
        self.set(resource, now);
        info!("{} production mothballed: {}", resource.name(), now);
        now
    }

    pub fn iter(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        self.resources.iter().copied()
    }
}

impl Saveable for MothballedResources {
    const SAVE_KEY: &'static str = "mothballed_resources";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if self.resources.is_empty() {
            return None;
        }
        Some(bitcode::encode(self))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        crate::decode_or_warn(Self::SAVE_KEY, bytes)
    }
}

// ---------------------------------------------------------------------------
// Scenario settings
// ---------------------------------------------------------------------------

#[derive(
    Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Encode, Decode,
)]
pub struct ScenarioSettings {
    pub climate: Climate,
}

impl Saveable for ScenarioSettings {
    const SAVE_KEY: &'static str = "scenario_settings";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if *self == Self::default() {
            return None;
        }
        Some(bitcode::encode(self))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        crate::decode_or_warn(Self::SAVE_KEY, bytes)
    }
}
