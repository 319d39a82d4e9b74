//! Domain records returned by queries
//!
//! Parsers produce raw forms (`Fields`, `RawResults`). Typecasting wraps them
//! into `Proceeding` and `ResultSet` through `From`, and `into_fields` /
//! `into_raw` unwrap them again without loss.

mod proceeding;
mod result_set;

pub use proceeding::{Fields, Proceeding};
pub use result_set::{RawResults, ResultSet};
