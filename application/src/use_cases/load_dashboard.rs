//! Load Dashboard use case
//!
//! Reads doctors and specialties and derives the dashboard figures. Specialty
//! counts are read as stored; nothing is recounted from doctors.

use crate::config::DashboardConfig;
use crate::use_cases::doctor_repository::DoctorRepository;
use crate::use_cases::specialty_directory::SpecialtyDirectory;
use chrono::{DateTime, Utc};
use roster_domain::{
    DashboardStats, MonthlyRegistrations, Specialty, registrations_by_month, top_specialties,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub top_specialties: Vec<Specialty>,
    pub registrations: Vec<MonthlyRegistrations>,
}

/// Use case for loading the dashboard
pub struct LoadDashboardUseCase {
    doctors: Arc<DoctorRepository>,
    specialties: Arc<SpecialtyDirectory>,
    config: DashboardConfig,
}

impl LoadDashboardUseCase {
    pub fn new(doctors: Arc<DoctorRepository>, specialties: Arc<SpecialtyDirectory>) -> Self {
        Self {
            doctors,
            specialties,
            config: DashboardConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn execute(&self) -> DashboardSummary {
        self.execute_at(Utc::now()).await
    }

    /// Build the summary with `now` as the reference month
    pub async fn execute_at(&self, now: DateTime<Utc>) -> DashboardSummary {
        let (doctors, specialties) =
            futures::join!(self.doctors.list_all(), self.specialties.list_all());

        info!(
            "Loaded dashboard data: {} doctors, {} specialties",
            doctors.len(),
            specialties.len()
        );

        DashboardSummary {
            stats: DashboardStats::compute(&doctors, &specialties),
            top_specialties: top_specialties(&specialties, self.config.top_specialties),
            registrations: registrations_by_month(
                &doctors,
                now,
                self.config.registration_months,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::collection_store::{
        DOCTORS_COLLECTION, SPECIALTY_COLLECTION, StoreConnection,
    };
    use crate::use_cases::test_support::MockStore;
    use chrono::TimeZone;
    use serde_json::json;

    fn use_case(connection: StoreConnection) -> LoadDashboardUseCase {
        let directory = Arc::new(SpecialtyDirectory::new(connection.clone()));
        let repository = Arc::new(DoctorRepository::new(connection, directory.clone()));
        LoadDashboardUseCase::new(repository, directory)
    }

    #[tokio::test]
    async fn test_summary_from_store() {
        let store = Arc::new(MockStore::new());
        store.seed(
            DOCTORS_COLLECTION,
            "d1",
            json!({"status": "active", "rating": 5, "joinedDate": "2026-10-02T00:00:00.000Z"}),
        );
        store.seed(
            DOCTORS_COLLECTION,
            "d2",
            json!({"status": "suspended", "rating": 4, "joinedDate": "2026-08-15T00:00:00.000Z"}),
        );
        for (id, name, count) in [("a", "Cardiology", 1), ("b", "Neurology", 4), ("c", "Oncology", 2)] {
            store.seed(SPECIALTY_COLLECTION, id, json!({"name": name, "doctorCount": count}));
        }

        let summary = use_case(StoreConnection::ready(store))
            .with_config(DashboardConfig::default().with_top_specialties(2))
            .execute_at(Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap())
            .await;

        assert_eq!(summary.stats.total_doctors, 2);
        assert_eq!(summary.stats.active_doctors, 1);
        assert_eq!(summary.stats.specialties, 3);
        assert_eq!(summary.stats.average_rating, 4.5);
        let names: Vec<_> = summary.top_specialties.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Neurology", "Oncology"]);
        assert_eq!(summary.registrations.len(), 6);
        assert_eq!(summary.registrations[5].count, 1);
        assert_eq!(summary.registrations[3].month_key, "2026-08");
        assert_eq!(summary.registrations[3].count, 1);
    }

    #[tokio::test]
    async fn test_unavailable_store_yields_empty_summary() {
        let summary = use_case(StoreConnection::unavailable("not configured"))
            .execute()
            .await;
        assert_eq!(summary.stats, DashboardStats::default());
        assert!(summary.top_specialties.is_empty());
        assert!(summary.registrations.iter().all(|m| m.count == 0));
    }
}
