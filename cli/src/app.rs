//! Command dispatch for roster-admin

use roster_application::{DoctorRepository, LoadDashboardUseCase, SpecialtyDirectory};
use roster_domain::DoctorStatus;
use roster_presentation::{
    Command, ConsoleFormatter, DoctorCommand, Notification, OutputConfig, SpecialtyCommand,
    new_specialty, specialty_patch,
};
use std::fmt::Display;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

/// Wired use cases plus output settings
pub struct App {
    pub doctors: Arc<DoctorRepository>,
    pub specialties: Arc<SpecialtyDirectory>,
    pub dashboard: LoadDashboardUseCase,
    pub output: OutputConfig,
}

impl App {
    pub async fn run(&self, command: Command) -> ExitCode {
        debug!("Dispatching {:?}", command);
        match command {
            Command::Doctors(command) => self.doctors(command).await,
            Command::Specialties(command) => self.specialties(command).await,
            Command::Dashboard => {
                let summary = self.dashboard.execute().await;
                self.print(self.formatter().dashboard(&summary))
            }
        }
    }

    async fn doctors(&self, command: DoctorCommand) -> ExitCode {
        match command {
            DoctorCommand::List(args) => {
                let doctors = self.doctors.list_filtered(&args.to_filter()).await;
                self.print(self.formatter().doctors(&doctors))
            }
            DoctorCommand::Show { id } => match self.doctors.get(&id).await {
                Ok(doctor) => self.print(self.formatter().doctor(&doctor)),
                Err(e) => self.fail(e),
            },
            DoctorCommand::Add(args) => {
                let draft = args.to_new_doctor();
                match self.doctors.add(draft).await {
                    Ok(id) => self.succeed(
                        "Doctor added",
                        format!("{} was added to the roster (id {}).", args.name, id),
                    ),
                    Err(e) => self.fail(e),
                }
            }
            DoctorCommand::Update(args) => {
                let patch = args.to_patch();
                if patch.is_empty() {
                    return self.fail("Nothing to update: pass at least one field flag.");
                }
                match self.doctors.update(&args.id, patch).await {
                    Ok(()) => self.succeed("Doctor updated", format!("Saved changes to {}.", args.id)),
                    Err(e) => self.fail(e),
                }
            }
            DoctorCommand::Activate { id } => self.set_status(&id, DoctorStatus::Active).await,
            DoctorCommand::Suspend { id } => self.set_status(&id, DoctorStatus::Suspended).await,
            DoctorCommand::Delete { id } => match self.doctors.delete(&id).await {
                Ok(()) => self.succeed("Doctor deleted", format!("Removed {} from the roster.", id)),
                Err(e) => self.fail(e),
            },
        }
    }

    async fn set_status(&self, id: &str, status: DoctorStatus) -> ExitCode {
        match self.doctors.set_status(id, status).await {
            Ok(()) => self.succeed("Status updated", format!("{} is now {}.", id, status)),
            Err(e) => self.fail(e),
        }
    }

    async fn specialties(&self, command: SpecialtyCommand) -> ExitCode {
        match &command {
            SpecialtyCommand::List { .. } => {
                let specialties = command.to_filter().apply(self.specialties.list_all().await);
                self.print(self.formatter().specialties(&specialties))
            }
            SpecialtyCommand::Show { id } => match self.specialties.get(id).await {
                Ok(specialty) => self.print(self.formatter().specialty(&specialty)),
                Err(e) => self.fail(e),
            },
            SpecialtyCommand::Add { name, description } => {
                match self.specialties.add(new_specialty(name, description)).await {
                    Ok(id) => self.succeed(
                        "Specialty added",
                        format!("{} was added (id {}).", name, id),
                    ),
                    Err(e) => self.fail(e),
                }
            }
            SpecialtyCommand::Update {
                id,
                name,
                description,
                doctor_count,
            } => {
                let patch = specialty_patch(name.as_ref(), description.as_ref(), *doctor_count);
                if patch.is_empty() {
                    return self.fail("Nothing to update: pass at least one field flag.");
                }
                match self.specialties.update(id, patch).await {
                    Ok(()) => {
                        self.succeed("Specialty updated", format!("Saved changes to {}.", id))
                    }
                    Err(e) => self.fail(e),
                }
            }
            SpecialtyCommand::Delete { id } => match self.specialties.remove(id).await {
                Ok(()) => self.succeed("Specialty deleted", format!("Removed {}.", id)),
                Err(e) => self.fail(e),
            },
        }
    }

    fn formatter(&self) -> ConsoleFormatter {
        ConsoleFormatter::new(self.output.format)
    }

    fn print(&self, rendered: String) -> ExitCode {
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
        ExitCode::SUCCESS
    }

    fn succeed(&self, title: &str, message: String) -> ExitCode {
        Notification::success(title, message).emit(self.output.quiet);
        ExitCode::SUCCESS
    }

    fn fail(&self, error: impl Display) -> ExitCode {
        Notification::failure("Error", error.to_string()).emit(self.output.quiet);
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_application::StoreConnection;
    use roster_domain::OutputFormat;
    use roster_infrastructure::InMemoryCollectionStore;
    use roster_presentation::Cli;
    use clap::Parser;

    fn app(connection: StoreConnection) -> App {
        let specialties = Arc::new(SpecialtyDirectory::new(connection.clone()));
        let doctors = Arc::new(DoctorRepository::new(connection, Arc::clone(&specialties)));
        let dashboard = LoadDashboardUseCase::new(Arc::clone(&doctors), Arc::clone(&specialties));
        App {
            doctors,
            specialties,
            dashboard,
            output: OutputConfig::resolve(Some(OutputFormat::Json), None, false, true),
        }
    }

    fn command(args: &[&str]) -> Command {
        Cli::try_parse_from(std::iter::once("roster-admin").chain(args.iter().copied()))
            .unwrap()
            .command
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_then_reassign_moves_count() {
        let app = app(StoreConnection::ready(Arc::new(InMemoryCollectionStore::new())));

        let code = app
            .run(command(&["doctors", "add", "Dr. Ada", "--specialty", "Cardiology"]))
            .await;
        assert_eq!(code, ExitCode::SUCCESS);

        let id = app.doctors.list_all().await[0].id.clone();
        let code = app
            .run(command(&["doctors", "update", &id, "--specialty", "Neurology"]))
            .await;
        assert_eq!(code, ExitCode::SUCCESS);

        let specialties = app.specialties.list_all().await;
        assert_eq!(specialties.len(), 1);
        assert_eq!(specialties[0].name, "Neurology");
        assert_eq!(specialties[0].doctor_count, 1);
    }

    #[tokio::test]
    async fn test_write_against_unavailable_store_fails() {
        let app = app(StoreConnection::unavailable("store.path is not configured"));

        let code = app.run(command(&["doctors", "add", "Dr. Ben"])).await;
        assert_eq!(code, ExitCode::FAILURE);

        let code = app.run(command(&["doctors", "list"])).await;
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected() {
        let app = app(StoreConnection::ready(Arc::new(InMemoryCollectionStore::new())));
        let code = app.run(command(&["doctors", "update", "d1"])).await;
        assert_eq!(code, ExitCode::FAILURE);
    }
}
