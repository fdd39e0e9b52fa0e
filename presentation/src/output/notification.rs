//! Success and failure notices printed after a mutation

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A short titled notice, e.g. "Doctor added" / "Dr. Ada Park was added."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NotificationKind::Failure
    }

    pub fn render(&self) -> String {
        let marker = match self.kind {
            NotificationKind::Success => "✓".green().bold(),
            NotificationKind::Failure => "✗".red().bold(),
        };
        format!("{} {} {}", marker, self.title.bold(), self.message)
    }

    /// Print to stdout on success, stderr on failure. `quiet` hides successes.
    pub fn emit(&self, quiet: bool) {
        match self.kind {
            NotificationKind::Success if quiet => {}
            NotificationKind::Success => println!("{}", self.render()),
            NotificationKind::Failure => eprintln!("{}", self.render()),
        }
    }
}
