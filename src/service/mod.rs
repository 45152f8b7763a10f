//! Service implementations

mod builder;
mod lookup;

pub use builder::{Shennong, ShennongBuilder};
pub use lookup::{LookupService, Resolution};
