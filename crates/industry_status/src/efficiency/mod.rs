mod helpers;

pub use helpers::{
    compute_efficiency, efficiency_is_low, production_progress_percent,
    worker_coverage_percentage,
};
