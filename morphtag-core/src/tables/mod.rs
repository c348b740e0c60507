//! Static rule tables
//!
//! Both tables are compiled in and never change at runtime.

pub mod feature;
pub mod profile;

pub use feature::{FeatureCategory, PositionalPattern, UnknownCategory};
pub use profile::blacklist;
