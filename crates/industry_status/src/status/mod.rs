pub(crate) mod rules;
pub(crate) mod types;

pub use rules::{
    evaluate_rules, rules_for, select_status_message, StatusRule, FARM_RULES, RAW_MATERIAL_RULES,
    SPECIAL_RULES, WORKSHOP_RULES,
};
pub use types::{StatusCode, StatusInputs};
