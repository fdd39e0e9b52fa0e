//! Specialty list filtering

use super::entities::Specialty;
use crate::core::string::contains_ignore_case;

/// Case-insensitive search over specialty name and description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialtyFilter {
    pub search: Option<String>,
}

impl SpecialtyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn matches(&self, specialty: &Specialty) -> bool {
        self.search.as_deref().is_none_or(|term| {
            contains_ignore_case(&specialty.name, term)
                || contains_ignore_case(&specialty.description, term)
        })
    }

    pub fn apply(&self, specialties: Vec<Specialty>) -> Vec<Specialty> {
        specialties.into_iter().filter(|s| self.matches(s)).collect()
    }
}
