use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

// =============================================================================
// Resource kinds
// =============================================================================

/// A good that an industry building produces or consumes.
///
/// "No resource" is expressed as `Option<ResourceKind>::None`; the legacy
/// numeric index 0 maps to `None` in [`ResourceKind::from_index`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Encode, Decode,
)]
pub enum ResourceKind {
    // Farm produce
    Wheat,
    Vegetables,
    Fruit,
    Olives,
    Vines,
    Meat,
    // Workshop goods
    Wine,
    Oil,
    // Raw materials
    Iron,
    Timber,
    Clay,
    Marble,
    // Workshop goods
    Weapons,
    Furniture,
    Pottery,
    // Wharf catch
    Fish,
}

impl ResourceKind {
    /// All resource kinds, in legacy index order (index 1 upward).
    pub fn all() -> &'static [ResourceKind] {
        &[
            Self::Wheat,
            Self::Vegetables,
            Self::Fruit,
            Self::Olives,
            Self::Vines,
            Self::Meat,
            Self::Wine,
            Self::Oil,
            Self::Iron,
            Self::Timber,
            Self::Clay,
            Self::Marble,
            Self::Weapons,
            Self::Furniture,
            Self::Pottery,
            Self::Fish,
        ]
    }

    /// Decode a legacy resource index. Index 0 is "no resource".
    pub fn from_index(index: u8) -> Option<ResourceKind> {
        match index {
            0 => None,
            i => Self::all().get(usize::from(i) - 1).copied(),
        }
    }

    /// Legacy resource index (1-based; 0 is reserved for "no resource").
    pub fn index(self) -> u8 {
        Self::all()
            .iter()
            .position(|&r| r == self)
            .map_or(0, |i| i as u8 + 1)
    }

    /// Theoretical monthly output of one fully staffed building producing
    /// this resource, before climate adjustment.
    ///
    /// Fish has no fixed quota (the catch depends on the boat), so it reports 0
    /// and efficiency for it is always 0.
    pub fn base_monthly_production(self) -> i32 {
        match self {
            Self::Wheat => 160,
            Self::Vegetables | Self::Fruit | Self::Olives | Self::Vines | Self::Meat => 80,
            Self::Iron | Self::Timber | Self::Clay => 80,
            Self::Wine | Self::Oil => 40,
            Self::Marble | Self::Weapons | Self::Furniture | Self::Pottery => 40,
            Self::Fish => 0,
        }
    }

    /// Monthly production quota under the given climate.
    ///
    /// Wheat grows at half the rate in the northern climate.
    pub fn monthly_production_for(self, climate: Climate) -> i32 {
        let base = self.base_monthly_production();
        if self == Self::Wheat && climate == Climate::Northern {
            base / 2
        } else {
            base
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Wheat => "Wheat",
            Self::Vegetables => "Vegetables",
            Self::Fruit => "Fruit",
            Self::Olives => "Olives",
            Self::Vines => "Vines",
            Self::Meat => "Meat",
            Self::Wine => "Wine",
            Self::Oil => "Oil",
            Self::Iron => "Iron",
            Self::Timber => "Timber",
            Self::Clay => "Clay",
            Self::Marble => "Marble",
            Self::Weapons => "Weapons",
            Self::Furniture => "Furniture",
            Self::Pottery => "Pottery",
            Self::Fish => "Fish",
        }
    }
}

// =============================================================================
// Climate
// =============================================================================

/// Scenario climate. Only `Northern` changes production quotas.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode,
)]
pub enum Climate {
    #[default]
    Central,
    Northern,
    Desert,
}
