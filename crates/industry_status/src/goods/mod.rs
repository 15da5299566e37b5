pub(crate) mod types;

pub use types::{Climate, ResourceKind};
