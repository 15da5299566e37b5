//! # TestCity: headless harness for industry panel integration tests
//!
//! Wraps `bevy::app::App` + `IndustryStatusPlugin` so tests can spawn
//! industry buildings, open a panel on one of them, run frames, and assert on
//! the resulting `IndustryPanel`.

use bevy::app::App;
use bevy::prelude::*;

use crate::buildings::IndustryBuilding;
use crate::fishing::{FishingBoat, FishingBoatAction};
use crate::goods::{Climate, ResourceKind};
use crate::panel::{IndustryPanel, IndustryStatusChanged, InspectedBuilding, PanelStatus};
use crate::policy::{MothballedResources, ScenarioSettings};
use crate::IndustryStatusPlugin;

pub struct TestCity {
    app: App,
}

impl TestCity {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A city with no buildings, central climate, nothing mothballed.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(IndustryStatusPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // World setup (builder pattern, consumes and returns Self)
    // -----------------------------------------------------------------------

    pub fn with_climate(mut self, climate: Climate) -> Self {
        self.app.world_mut().resource_mut::<ScenarioSettings>().climate = climate;
        self
    }

    pub fn with_mothballed(mut self, resource: ResourceKind) -> Self {
        self.app
            .world_mut()
            .resource_mut::<MothballedResources>()
            .set(resource, true);
        self
    }

    // -----------------------------------------------------------------------
    // Spawning and mutation
    // -----------------------------------------------------------------------

    pub fn spawn_building(&mut self, building: IndustryBuilding) -> Entity {
        self.app.world_mut().spawn(building).id()
    }

    /// Spawn a fishing boat and assign it to `wharf`.
    pub fn spawn_boat(&mut self, wharf: Entity, action: FishingBoatAction) -> Entity {
        let world = self.app.world_mut();
        let boat = world.spawn(FishingBoat { action, wharf }).id();
        if let Some(mut building) = world.get_mut::<IndustryBuilding>(wharf) {
            building.fishing_boat = Some(boat);
        }
        boat
    }

    pub fn set_boat_action(&mut self, boat: Entity, action: FishingBoatAction) {
        if let Some(mut b) = self.app.world_mut().get_mut::<FishingBoat>(boat) {
            b.action = action;
        }
    }

    pub fn despawn(&mut self, entity: Entity) {
        self.app.world_mut().despawn(entity);
    }

    /// Mutate a building's snapshot in place.
    pub fn update_building(&mut self, entity: Entity, f: impl FnOnce(&mut IndustryBuilding)) {
        if let Some(mut building) = self.app.world_mut().get_mut::<IndustryBuilding>(entity) {
            f(&mut building);
        }
    }

    pub fn set_mothballed(&mut self, resource: ResourceKind, mothballed: bool) {
        self.app
            .world_mut()
            .resource_mut::<MothballedResources>()
            .set(resource, mothballed);
    }

    /// Open the info panel on `entity` (or close it with `None`).
    pub fn inspect(&mut self, entity: Option<Entity>) {
        self.app.world_mut().resource_mut::<InspectedBuilding>().0 = entity;
    }

    // -----------------------------------------------------------------------
    // Frames
    // -----------------------------------------------------------------------

    /// Run `n` frames.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn panel(&self) -> &IndustryPanel {
        self.resource::<IndustryPanel>()
    }

    pub fn status(&self) -> Option<PanelStatus> {
        self.panel().status()
    }

    /// Take every `IndustryStatusChanged` sent since the last drain.
    pub fn drain_status_events(&mut self) -> Vec<IndustryStatusChanged> {
        self.app
            .world_mut()
            .resource_mut::<Events<IndustryStatusChanged>>()
            .drain()
            .collect()
    }
}

impl Default for TestCity {
    fn default() -> Self {
        Self::new()
    }
}
