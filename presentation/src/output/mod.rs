//! Console rendering of roster data and mutation notices

pub mod console;
pub mod notification;
