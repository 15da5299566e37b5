//! Integration tests for the industry panel lifecycle and status events.

use crate::buildings::{IndustryBuilding, IndustryBuildingType};
use crate::goods::{Climate, ResourceKind};
use crate::panel::PanelStatus;
use crate::status::StatusCode;
use crate::test_harness::TestCity;

fn working(building_type: IndustryBuildingType, average: i32) -> IndustryBuilding {
    IndustryBuilding {
        age_months: 24,
        average_production_per_month: average,
        num_workers: building_type.laborers(),
        loads_stored: 4,
        ..IndustryBuilding::new(building_type)
    }
}

// ====================================================================
// Panel lifecycle
// ====================================================================

#[test]
fn test_no_panel_when_nothing_inspected() {
    let mut city = TestCity::new();
    city.spawn_building(working(IndustryBuildingType::IronMine, 80));
    city.tick(1);
    assert!(city.panel().report.is_none());
    assert!(city.drain_status_events().is_empty());
}

#[test]
fn test_panel_filled_for_inspected_building() {
    let mut city = TestCity::new();
    let mine = city.spawn_building(working(IndustryBuildingType::IronMine, 80));
    city.inspect(Some(mine));
    city.tick(1);

    let panel = city.panel();
    assert_eq!(panel.entity, Some(mine));
    let report = panel.report.as_ref().expect("panel should be filled");
    assert_eq!(report.efficiency, Some(100));
    assert_eq!(
        report.status,
        PanelStatus::Industry(StatusCode::FullyProductive)
    );
}

#[test]
fn test_panel_cleared_when_closed() {
    let mut city = TestCity::new();
    let farm = city.spawn_building(working(IndustryBuildingType::FruitFarm, 80));
    city.inspect(Some(farm));
    city.tick(1);
    assert!(city.panel().report.is_some());

    city.inspect(None);
    city.tick(1);
    assert!(city.panel().report.is_none());
    assert!(city.panel().entity.is_none());
}

#[test]
fn test_panel_cleared_when_building_demolished() {
    let mut city = TestCity::new();
    let pit = city.spawn_building(working(IndustryBuildingType::ClayPit, 80));
    city.inspect(Some(pit));
    city.tick(1);
    city.despawn(pit);
    city.tick(1);
    assert!(city.panel().report.is_none());
}

// ====================================================================
// Status follows simulation state
// ====================================================================

#[test]
fn test_status_tracks_staffing_changes() {
    let mut city = TestCity::new();
    let yard = city.spawn_building(working(IndustryBuildingType::TimberYard, 80));
    city.inspect(Some(yard));
    city.tick(1);
    assert_eq!(
        city.status(),
        Some(PanelStatus::Industry(StatusCode::FullyProductive))
    );

    city.update_building(yard, |b| b.num_workers = 6);
    city.tick(1);
    assert_eq!(
        city.status(),
        Some(PanelStatus::Industry(StatusCode::PartiallyStaffed))
    );

    city.update_building(yard, |b| b.num_workers = 0);
    city.tick(1);
    assert_eq!(city.status(), Some(PanelStatus::Industry(StatusCode::NoWorkers)));
}

#[test]
fn test_strike_overrides_everything_but_road() {
    let mut city = TestCity::new().with_mothballed(ResourceKind::Weapons);
    let shop = city.spawn_building(working(IndustryBuildingType::WeaponsWorkshop, 40));
    city.inspect(Some(shop));
    city.tick(1);
    assert_eq!(city.status(), Some(PanelStatus::Industry(StatusCode::Mothballed)));

    city.update_building(shop, |b| b.strike_duration_days = 7);
    city.tick(1);
    assert_eq!(city.status(), Some(PanelStatus::Industry(StatusCode::Striking)));
    let report = city.panel().report.as_ref().expect("panel");
    assert!(report.input.is_none(), "stock line hidden during strike");

    city.update_building(shop, |b| b.has_road_access = false);
    city.tick(1);
    assert_eq!(city.status(), Some(PanelStatus::Industry(StatusCode::NoRoad)));
}

#[test]
fn test_unmothballing_restores_status() {
    let mut city = TestCity::new().with_mothballed(ResourceKind::Olives);
    let farm = city.spawn_building(working(IndustryBuildingType::OliveFarm, 80));
    city.inspect(Some(farm));
    city.tick(1);
    assert_eq!(city.status(), Some(PanelStatus::Industry(StatusCode::Mothballed)));

    city.set_mothballed(ResourceKind::Olives, false);
    city.tick(1);
    assert_eq!(
        city.status(),
        Some(PanelStatus::Industry(StatusCode::FullyProductive))
    );
}

#[test]
fn test_cursed_farm() {
    let mut city = TestCity::new();
    let farm = city.spawn_building(IndustryBuilding {
        curse_days_left: 12,
        ..working(IndustryBuildingType::VinesFarm, 80)
    });
    city.inspect(Some(farm));
    city.tick(1);
    assert_eq!(city.status(), Some(PanelStatus::Industry(StatusCode::Cursed)));
}

#[test]
fn test_northern_climate_raises_wheat_efficiency() {
    let mut central = TestCity::new();
    let farm = central.spawn_building(working(IndustryBuildingType::WheatFarm, 80));
    central.inspect(Some(farm));
    central.tick(1);
    let central_eff = central.panel().report.as_ref().and_then(|r| r.efficiency);

    let mut northern = TestCity::new().with_climate(Climate::Northern);
    let farm = northern.spawn_building(working(IndustryBuildingType::WheatFarm, 80));
    northern.inspect(Some(farm));
    northern.tick(1);
    let northern_eff = northern.panel().report.as_ref().and_then(|r| r.efficiency);

    assert_eq!(central_eff, Some(50));
    assert_eq!(northern_eff, Some(100));
    assert_eq!(
        central.status(),
        Some(PanelStatus::Industry(StatusCode::LowEfficiency))
    );
    assert_eq!(
        northern.status(),
        Some(PanelStatus::Industry(StatusCode::FullyProductive))
    );
}

// ====================================================================
// Status change events
// ====================================================================

#[test]
fn test_status_event_sent_on_open_and_change_only() {
    let mut city = TestCity::new();
    let shop = city.spawn_building(working(IndustryBuildingType::FurnitureWorkshop, 40));
    city.inspect(Some(shop));
    city.tick(1);
    let events = city.drain_status_events();
    assert_eq!(events.len(), 1, "opening the panel reports the status");
    assert_eq!(events[0].entity, shop);
    assert_eq!(
        events[0].status,
        PanelStatus::Industry(StatusCode::FullyProductive)
    );

    city.tick(1);
    assert!(
        city.drain_status_events().is_empty(),
        "unchanged status should not resend"
    );

    city.update_building(shop, |b| b.loads_stored = 0);
    city.tick(1);
    let events = city.drain_status_events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].status,
        PanelStatus::Industry(StatusCode::NoRawMaterials)
    );
}

#[test]
fn test_switching_buildings_reports_new_status() {
    let mut city = TestCity::new();
    let a = city.spawn_building(working(IndustryBuildingType::MarbleQuarry, 40));
    let b = city.spawn_building(working(IndustryBuildingType::MarbleQuarry, 40));
    city.inspect(Some(a));
    city.tick(1);
    city.drain_status_events();

    city.inspect(Some(b));
    city.tick(1);
    let events = city.drain_status_events();
    assert_eq!(events.len(), 1, "same status on a different building is news");
    assert_eq!(events[0].entity, b);
}
