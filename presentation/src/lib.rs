//! Presentation layer for doctor-roster
//!
//! This crate contains CLI definitions, output formatters and
//! mutation notifications.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{
    Cli, Command, DoctorCommand, OutputArg, SpecialtyCommand, StatusArg, new_specialty,
    specialty_patch,
};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::notification::{Notification, NotificationKind};
