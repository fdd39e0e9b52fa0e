//! Doctor list filtering

use super::entities::{Doctor, DoctorStatus};
use crate::core::string::contains_ignore_case;

/// Criteria for narrowing the doctor list. All criteria are optional and
/// combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilter {
    /// Case-insensitive substring over name, email and specialty
    pub search: Option<String>,
    /// Exact specialty name
    pub specialty: Option<String>,
    pub status: Option<DoctorStatus>,
}

impl DoctorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn with_status(mut self, status: DoctorStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        let matches_search = self.search.as_deref().is_none_or(|term| {
            contains_ignore_case(&doctor.name, term)
                || contains_ignore_case(&doctor.email, term)
                || contains_ignore_case(&doctor.specialty, term)
        });
        let matches_specialty = self
            .specialty
            .as_deref()
            .is_none_or(|specialty| doctor.specialty == specialty);
        let matches_status = self.status.is_none_or(|status| doctor.status == status);

        matches_search && matches_specialty && matches_status
    }

    /// Keep only the doctors matching this filter, preserving order.
    pub fn apply(&self, doctors: Vec<Doctor>) -> Vec<Doctor> {
        doctors.into_iter().filter(|d| self.matches(d)).collect()
    }
}

/// Distinct specialty names present on the given doctors, in first-seen order.
pub fn distinct_specialties(doctors: &[Doctor]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for doctor in doctors {
        if !names.contains(&doctor.specialty) {
            names.push(doctor.specialty.clone());
        }
    }
    names
}
