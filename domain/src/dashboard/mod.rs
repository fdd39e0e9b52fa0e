//! Dashboard statistics.

pub mod stats;
