//! Console output formatter for roster listings and the dashboard

use colored::Colorize;
use roster_application::DashboardSummary;
use roster_domain::{Doctor, DoctorStatus, OutputFormat, Specialty, truncate};
use serde::Serialize;

const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 28;
const SPECIALTY_WIDTH: usize = 20;
const DESCRIPTION_WIDTH: usize = 40;
const BAR_WIDTH: usize = 30;

/// Formats roster data for console display
pub struct ConsoleFormatter {
    format: OutputFormat,
}

impl ConsoleFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn doctors(&self, doctors: &[Doctor]) -> String {
        match self.format {
            OutputFormat::Json => Self::json(doctors),
            OutputFormat::Table => Self::doctor_table(doctors),
        }
    }

    pub fn doctor(&self, doctor: &Doctor) -> String {
        match self.format {
            OutputFormat::Json => Self::json(doctor),
            OutputFormat::Table => Self::doctor_detail(doctor),
        }
    }

    pub fn specialties(&self, specialties: &[Specialty]) -> String {
        match self.format {
            OutputFormat::Json => Self::json(specialties),
            OutputFormat::Table => Self::specialty_table(specialties),
        }
    }

    pub fn specialty(&self, specialty: &Specialty) -> String {
        match self.format {
            OutputFormat::Json => Self::json(specialty),
            OutputFormat::Table => Self::specialty_table(std::slice::from_ref(specialty)),
        }
    }

    pub fn dashboard(&self, summary: &DashboardSummary) -> String {
        match self.format {
            OutputFormat::Json => Self::json(summary),
            OutputFormat::Table => Self::dashboard_text(summary),
        }
    }

    /// Pretty JSON, `{}` if serialization fails
    pub fn json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn doctor_table(doctors: &[Doctor]) -> String {
        if doctors.is_empty() {
            return format!("{}\n", "No doctors found.".dimmed());
        }

        let mut output = format!(
            "{}\n{}\n",
            format!(
                "{:<NAME_WIDTH$}  {:<EMAIL_WIDTH$}  {:<SPECIALTY_WIDTH$}  {:<9}  {:>6}  {}",
                "NAME", "EMAIL", "SPECIALTY", "STATUS", "RATING", "ID"
            )
            .cyan()
            .bold(),
            "-".repeat(NAME_WIDTH + EMAIL_WIDTH + SPECIALTY_WIDTH + 40)
        );

        for doctor in doctors {
            let specialty = if doctor.has_specialty() {
                truncate(&doctor.specialty, SPECIALTY_WIDTH)
            } else {
                "-".to_string()
            };
            output.push_str(&format!(
                "{:<NAME_WIDTH$}  {:<EMAIL_WIDTH$}  {:<SPECIALTY_WIDTH$}  {}  {:>6.1}  {}\n",
                truncate(&doctor.name, NAME_WIDTH),
                truncate(&doctor.email, EMAIL_WIDTH),
                specialty,
                Self::status_cell(doctor.status),
                doctor.rating,
                doctor.id.dimmed()
            ));
        }

        output.push_str(&format!("\n{} doctor(s)\n", doctors.len()));
        output
    }

    fn doctor_detail(doctor: &Doctor) -> String {
        let rows = [
            ("ID", doctor.id.clone()),
            ("Email", doctor.email.clone()),
            ("Phone", doctor.phone.clone()),
            ("Specialty", doctor.specialty.clone()),
            ("Rating", format!("{:.1}", doctor.rating)),
            ("Joined", doctor.joined_date.format("%Y-%m-%d").to_string()),
            ("Address", doctor.location.address.clone()),
            (
                "Coordinates",
                format!(
                    "{}, {}",
                    doctor.location.coordinates.lat, doctor.location.coordinates.lng
                ),
            ),
        ];

        let mut output = format!(
            "{}  {}\n",
            doctor.name.bold(),
            Self::status_cell(doctor.status)
        );
        for (label, value) in rows {
            let value = if value.is_empty() { "-".to_string() } else { value };
            output.push_str(&format!("  {:<12} {}\n", format!("{}:", label).cyan(), value));
        }
        output
    }

    fn specialty_table(specialties: &[Specialty]) -> String {
        if specialties.is_empty() {
            return format!("{}\n", "No specialties found.".dimmed());
        }

        let mut output = format!(
            "{}\n{}\n",
            format!(
                "{:<SPECIALTY_WIDTH$}  {:>7}  {:<DESCRIPTION_WIDTH$}  {}",
                "NAME", "DOCTORS", "DESCRIPTION", "ID"
            )
            .cyan()
            .bold(),
            "-".repeat(SPECIALTY_WIDTH + DESCRIPTION_WIDTH + 30)
        );

        for specialty in specialties {
            output.push_str(&format!(
                "{:<SPECIALTY_WIDTH$}  {:>7}  {:<DESCRIPTION_WIDTH$}  {}\n",
                truncate(&specialty.name, SPECIALTY_WIDTH),
                specialty.doctor_count,
                truncate(&specialty.description, DESCRIPTION_WIDTH),
                specialty.id.dimmed()
            ));
        }
        output
    }

    fn dashboard_text(summary: &DashboardSummary) -> String {
        let stats = &summary.stats;
        let mut output = Self::header("Roster Dashboard");
        output.push('\n');

        output.push_str(&format!(
            "{} {}   {} {}   {} {}   {} {:.1}\n",
            "Doctors:".cyan().bold(),
            stats.total_doctors,
            "Active:".cyan().bold(),
            stats.active_doctors,
            "Specialties:".cyan().bold(),
            stats.specialties,
            "Avg rating:".cyan().bold(),
            stats.average_rating
        ));

        output.push_str(&Self::section_header("Top Specialties"));
        let widest = summary
            .top_specialties
            .iter()
            .map(|s| s.doctor_count)
            .max()
            .unwrap_or(0);
        if summary.top_specialties.is_empty() {
            output.push_str(&format!("{}\n", "  (none)".dimmed()));
        }
        for specialty in &summary.top_specialties {
            output.push_str(&format!(
                "  {:<SPECIALTY_WIDTH$} {} {}\n",
                truncate(&specialty.name, SPECIALTY_WIDTH),
                Self::bar(specialty.doctor_count as usize, widest as usize).green(),
                specialty.doctor_count
            ));
        }

        output.push_str(&Self::section_header("Registrations"));
        let busiest = summary
            .registrations
            .iter()
            .map(|m| m.count)
            .max()
            .unwrap_or(0);
        for month in &summary.registrations {
            output.push_str(&format!(
                "  {} {} {}\n",
                month.label,
                Self::bar(month.count, busiest).yellow(),
                month.count
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    fn status_cell(status: DoctorStatus) -> String {
        let text = format!("{:<9}", status.as_str());
        match status {
            DoctorStatus::Active => text.green().to_string(),
            DoctorStatus::Suspended => text.red().to_string(),
        }
    }

    /// Horizontal bar scaled against `max`
    fn bar(value: usize, max: usize) -> String {
        if max == 0 {
            return String::new();
        }
        let filled = (value * BAR_WIDTH).div_ceil(max).min(BAR_WIDTH);
        "#".repeat(filled)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
