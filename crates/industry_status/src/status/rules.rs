//! Ordered status rules for each building category.
//!
//! Each table is evaluated top to bottom and the first matching rule decides
//! the status. Anything that falls through every rule is `FullyProductive`.

use crate::buildings::{BuildingCategory, IndustryBuilding};
use crate::config::{
    CURSE_GRACE_DAYS, FULLY_STAFFED_PCT, PARTIALLY_STAFFED_PCT, RAW_MATERIAL_LOW_EFFICIENCY_PCT,
    SEVERE_UNDERSTAFFED_PCT, UNDERSTAFFED_PCT, WORKSHOP_LOW_EFFICIENCY_PCT,
};

use super::types::{StatusCode, StatusInputs};

/// One `(predicate, status)` pair.
#[derive(Clone, Copy)]
pub struct StatusRule {
    pub status: StatusCode,
    pub applies: fn(&StatusInputs) -> bool,
}

impl std::fmt::Debug for StatusRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusRule")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

const fn rule(status: StatusCode, applies: fn(&StatusInputs) -> bool) -> StatusRule {
    StatusRule { status, applies }
}

// =============================================================================
// Predicates
// =============================================================================

fn no_road(i: &StatusInputs) -> bool {
    !i.has_road_access
}

fn striking(i: &StatusInputs) -> bool {
    i.strike_duration_days > 0
}

fn mothballed(i: &StatusInputs) -> bool {
    i.is_mothballed
}

fn cursed(i: &StatusInputs) -> bool {
    i.curse_days_left > CURSE_GRACE_DAYS
}

fn no_workers(i: &StatusInputs) -> bool {
    i.num_workers <= 0
}

fn no_raw_materials(i: &StatusInputs) -> bool {
    i.loads_stored <= 0
}

fn severely_understaffed(i: &StatusInputs) -> bool {
    i.worker_percentage < SEVERE_UNDERSTAFFED_PCT
}

fn understaffed(i: &StatusInputs) -> bool {
    i.worker_percentage < UNDERSTAFFED_PCT
}

fn partially_staffed(i: &StatusInputs) -> bool {
    i.worker_percentage < PARTIALLY_STAFFED_PCT
}

fn mostly_staffed(i: &StatusInputs) -> bool {
    i.worker_percentage < FULLY_STAFFED_PCT
}

fn fully_staffed(i: &StatusInputs) -> bool {
    i.worker_percentage >= FULLY_STAFFED_PCT
}

fn raw_material_inefficient(i: &StatusInputs) -> bool {
    i.efficiency < RAW_MATERIAL_LOW_EFFICIENCY_PCT
}

fn workshop_inefficient(i: &StatusInputs) -> bool {
    i.efficiency < WORKSHOP_LOW_EFFICIENCY_PCT
}

// =============================================================================
// Rule tables
// =============================================================================

pub const FARM_RULES: &[StatusRule] = &[
    rule(StatusCode::NoRoad, no_road),
    rule(StatusCode::Mothballed, mothballed),
    rule(StatusCode::Cursed, cursed),
    rule(StatusCode::NoWorkers, no_workers),
    rule(StatusCode::SevereUnderstaffed, severely_understaffed),
    rule(StatusCode::Understaffed, understaffed),
    rule(StatusCode::PartiallyStaffed, partially_staffed),
    rule(StatusCode::MostlyStaffed, mostly_staffed),
    rule(StatusCode::LowEfficiency, raw_material_inefficient),
    // Explicit terminal guard; the staffing rules above leave only >= 100 here.
    rule(StatusCode::FullyProductive, fully_staffed),
];

pub const RAW_MATERIAL_RULES: &[StatusRule] = &[
    rule(StatusCode::NoRoad, no_road),
    rule(StatusCode::Striking, striking),
    rule(StatusCode::Mothballed, mothballed),
    rule(StatusCode::NoWorkers, no_workers),
    rule(StatusCode::SevereUnderstaffed, severely_understaffed),
    rule(StatusCode::Understaffed, understaffed),
    rule(StatusCode::PartiallyStaffed, partially_staffed),
    rule(StatusCode::MostlyStaffed, mostly_staffed),
    rule(StatusCode::LowEfficiency, raw_material_inefficient),
];

pub const WORKSHOP_RULES: &[StatusRule] = &[
    rule(StatusCode::NoRoad, no_road),
    rule(StatusCode::Striking, striking),
    rule(StatusCode::Mothballed, mothballed),
    rule(StatusCode::NoWorkers, no_workers),
    rule(StatusCode::NoRawMaterials, no_raw_materials),
    rule(StatusCode::SevereUnderstaffed, severely_understaffed),
    rule(StatusCode::Understaffed, understaffed),
    rule(StatusCode::PartiallyStaffed, partially_staffed),
    rule(StatusCode::MostlyStaffed, mostly_staffed),
    rule(StatusCode::LowEfficiency, workshop_inefficient),
];

/// Shipyards and wharves report boat state elsewhere; the generic cascade
/// only checks the preconditions they share with other industry.
pub const SPECIAL_RULES: &[StatusRule] = &[
    rule(StatusCode::NoRoad, no_road),
    rule(StatusCode::Mothballed, mothballed),
];

pub fn rules_for(category: BuildingCategory) -> &'static [StatusRule] {
    match category {
        BuildingCategory::Farm => FARM_RULES,
        BuildingCategory::RawMaterial => RAW_MATERIAL_RULES,
        BuildingCategory::Workshop => WORKSHOP_RULES,
        BuildingCategory::Special => SPECIAL_RULES,
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// Status of the first rule that matches, or `FullyProductive`.
pub fn evaluate_rules(rules: &[StatusRule], inputs: &StatusInputs) -> StatusCode {
    rules
        .iter()
        .find(|r| (r.applies)(inputs))
        .map_or(StatusCode::FullyProductive, |r| r.status)
}

/// Pick the one status line an industry panel shows for `building`.
pub fn select_status_message(
    category: BuildingCategory,
    building: &IndustryBuilding,
    worker_percentage: i32,
    efficiency: i32,
    has_road_access: bool,
    is_mothballed: bool,
) -> StatusCode {
    let inputs = StatusInputs::from_building(
        building,
        worker_percentage,
        efficiency,
        has_road_access,
        is_mothballed,
    );
    evaluate_rules(rules_for(category), &inputs)
}
