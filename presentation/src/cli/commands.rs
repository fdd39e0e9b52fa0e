//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use roster_domain::{
    DoctorFilter, DoctorPatch, DoctorStatus, LocationFields, NewDoctor, NewSpecialty,
    OutputFormat, SpecialtyFilter, SpecialtyPatch, DEFAULT_SPECIALTY_NAME,
};
use std::path::PathBuf;

/// Output format for listings and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Aligned, colored tables
    Table,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Table => OutputFormat::Table,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// Doctor account status as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Suspended,
}

impl From<StatusArg> for DoctorStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => DoctorStatus::Active,
            StatusArg::Suspended => DoctorStatus::Suspended,
        }
    }
}

/// CLI arguments for roster-admin
#[derive(Parser, Debug)]
#[command(name = "roster-admin")]
#[command(author, version, about = "Administer the doctor roster and its specialty counts")]
#[command(long_about = r#"
roster-admin manages doctors and medical specialties. Every specialty keeps
a count of the doctors assigned to it; adding, reassigning and deleting
doctors keeps those counts in step automatically.

Configuration files are loaded from (in priority order):
1. ROSTER_* env vars    e.g. ROSTER_STORE__BACKEND=memory
2. --config <path>      Explicit config file
3. ./roster.toml        Project-level config
4. ~/.config/doctor-roster/config.toml   Global config

Example:
  roster-admin doctors add "Dr. Ada Park" --specialty Cardiology
  roster-admin doctors update <ID> --specialty Neurology
  roster-admin specialties list --search card
  roster-admin dashboard --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides `[output] format`)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress success notifications
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Manage doctors
    #[command(subcommand)]
    Doctors(DoctorCommand),
    /// Manage specialties
    #[command(subcommand)]
    Specialties(SpecialtyCommand),
    /// Show headline statistics, top specialties and recent registrations
    Dashboard,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum DoctorCommand {
    /// List doctors, optionally filtered
    List(DoctorListArgs),
    /// Show one doctor
    Show { id: String },
    /// Add a doctor and count it against its specialty
    Add(AddDoctorArgs),
    /// Change a doctor's fields; a new specialty moves the count
    Update(UpdateDoctorArgs),
    /// Mark a doctor active
    Activate { id: String },
    /// Mark a doctor suspended
    Suspend { id: String },
    /// Delete a doctor and release its specialty count
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SpecialtyCommand {
    /// List specialties, optionally filtered
    List {
        /// Case-insensitive match on name or description
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one specialty
    Show { id: String },
    /// Add a specialty with no doctors
    Add {
        #[arg(default_value = DEFAULT_SPECIALTY_NAME)]
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Edit a specialty's name, description or count
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Manual count correction
        #[arg(long, value_name = "N")]
        doctor_count: Option<u64>,
    },
    /// Delete a specialty (doctors keep their specialty text)
    Delete { id: String },
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct DoctorListArgs {
    /// Case-insensitive match on name, email or specialty
    #[arg(short, long)]
    pub search: Option<String>,
    /// Exact specialty name
    #[arg(long)]
    pub specialty: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
}

/// Location flags shared by add and update
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct LocationArgs {
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct AddDoctorArgs {
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub specialty: String,
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    #[arg(long, default_value = "")]
    pub image: String,
    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct UpdateDoctorArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// New specialty; pass "" to clear it
    #[arg(long)]
    pub specialty: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    #[arg(long)]
    pub image: Option<String>,
    #[command(flatten)]
    pub location: LocationArgs,
}

impl LocationArgs {
    pub fn to_fields(&self) -> Option<LocationFields> {
        if self.address.is_none() && self.lat.is_none() && self.lng.is_none() {
            return None;
        }
        Some(LocationFields {
            address: self.address.clone(),
            lat: self.lat,
            lng: self.lng,
        })
    }
}

impl DoctorListArgs {
    pub fn to_filter(&self) -> DoctorFilter {
        DoctorFilter {
            search: self.search.clone(),
            specialty: self.specialty.clone(),
            status: self.status.map(DoctorStatus::from),
        }
    }
}

impl AddDoctorArgs {
    pub fn to_new_doctor(&self) -> NewDoctor {
        NewDoctor {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            specialty: self.specialty.clone(),
            status: self.status.map(DoctorStatus::from),
            image: self.image.clone(),
            location: self.location.to_fields(),
        }
    }
}

impl UpdateDoctorArgs {
    pub fn to_patch(&self) -> DoctorPatch {
        DoctorPatch {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            specialty: self.specialty.clone(),
            status: self.status.map(DoctorStatus::from),
            image: self.image.clone(),
            location: self.location.to_fields(),
        }
    }
}

impl SpecialtyCommand {
    /// Filter for `specialties list`; empty for other subcommands
    pub fn to_filter(&self) -> SpecialtyFilter {
        match self {
            SpecialtyCommand::List {
                search: Some(term),
            } => SpecialtyFilter::new().with_search(term.clone()),
            _ => SpecialtyFilter::new(),
        }
    }
}

/// Build the draft for `specialties add`
pub fn new_specialty(name: &str, description: &str) -> NewSpecialty {
    NewSpecialty::new(name).with_description(description)
}

/// Build the patch for `specialties update`
pub fn specialty_patch(
    name: Option<&String>,
    description: Option<&String>,
    doctor_count: Option<u64>,
) -> SpecialtyPatch {
    SpecialtyPatch {
        name: name.cloned(),
        description: description.cloned(),
        doctor_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("roster-admin").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_doctor_add() {
        let cli = parse(&[
            "doctors",
            "add",
            "Dr. Ada Park",
            "--specialty",
            "Cardiology",
            "--email",
            "ada@example.com",
            "--lat",
            "-33.9",
        ]);

        let Some(Command::Doctors(DoctorCommand::Add(args))) = cli.command else {
            panic!("expected doctors add");
        };
        let draft = args.to_new_doctor();
        assert_eq!(draft.name, "Dr. Ada Park");
        assert_eq!(draft.specialty, "Cardiology");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.status, None);
        let location = draft.location.unwrap();
        assert_eq!(location.lat, Some(-33.9));
        assert_eq!(location.lng, None);
    }

    #[test]
    fn test_update_only_carries_given_fields() {
        let cli = parse(&["doctors", "update", "d1", "--specialty", ""]);
        let Some(Command::Doctors(DoctorCommand::Update(args))) = cli.command else {
            panic!("expected doctors update");
        };
        let patch = args.to_patch();
        assert_eq!(patch.specialty.as_deref(), Some(""));
        assert!(patch.name.is_none());
        assert!(patch.location.is_none());
    }

    #[test]
    fn test_list_filter_from_flags() {
        let cli = parse(&["doctors", "list", "--search", "ada", "--status", "suspended"]);
        let Some(Command::Doctors(DoctorCommand::List(args))) = cli.command else {
            panic!("expected doctors list");
        };
        let filter = args.to_filter();
        assert_eq!(filter.search.as_deref(), Some("ada"));
        assert_eq!(filter.status, Some(DoctorStatus::Suspended));
        assert!(filter.specialty.is_none());
    }

    #[test]
    fn test_specialty_add_defaults_name() {
        let cli = parse(&["specialties", "add"]);
        assert_eq!(
            cli.command,
            Some(Command::Specialties(SpecialtyCommand::Add {
                name: DEFAULT_SPECIALTY_NAME.to_string(),
                description: String::new(),
            }))
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["dashboard", "--output", "json", "-vv"]);
        assert_eq!(cli.command, Some(Command::Dashboard));
        assert_eq!(cli.output, Some(OutputArg::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        let result = Cli::try_parse_from(["roster-admin", "doctors", "list", "--status", "retired"]);
        assert!(result.is_err());
    }
}
