pub(crate) mod helpers;
pub(crate) mod systems;
pub(crate) mod types;

pub use helpers::{evaluate_panel, input_loads_on_hand};
pub use systems::{update_industry_panel, PanelPlugin};
pub use types::{
    IndustryPanel, IndustryPanelReport, IndustryStatusChanged, InputStock, InspectedBuilding,
    PanelContext, PanelStatus,
};
