/// Progress units a farm accumulates per harvest.
pub const FARM_CYCLE: i32 = 200;
/// Progress units a quarry, mine, timber yard or clay pit accumulates per load.
pub const RAW_MATERIAL_CYCLE: i32 = 200;
/// Progress units a workshop accumulates per finished good.
pub const WORKSHOP_CYCLE: i32 = 400;
/// Progress units a shipyard accumulates per fishing boat.
pub const SHIPYARD_CYCLE: i32 = 160;

/// Farms and raw-material extractors below this efficiency report low efficiency.
pub const RAW_MATERIAL_LOW_EFFICIENCY_PCT: i32 = 80;
/// Workshops below this efficiency report low efficiency.
pub const WORKSHOP_LOW_EFFICIENCY_PCT: i32 = 70;

/// Efficiency below this is drawn in the warning colour on the panel.
pub const EFFICIENCY_HIGHLIGHT_PCT: i32 = 50;

/// A curse only shows on the panel once more than this many days remain.
pub const CURSE_GRACE_DAYS: u32 = 4;

/// Worker coverage thresholds, most severe first.
pub const SEVERE_UNDERSTAFFED_PCT: i32 = 25;
pub const UNDERSTAFFED_PCT: i32 = 50;
pub const PARTIALLY_STAFFED_PCT: i32 = 75;
pub const FULLY_STAFFED_PCT: i32 = 100;
