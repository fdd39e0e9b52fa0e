//! Application-level configuration.
//!
//! Controls how use cases shape their results, such as how much of the
//! specialty ranking and registration history the dashboard returns.

/// Dashboard shaping configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Number of specialties shown in the ranking
    pub top_specialties: usize,
    /// Number of calendar months in the registration history
    pub registration_months: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_specialties: 7,
            registration_months: 6,
        }
    }
}

impl DashboardConfig {
    pub fn with_top_specialties(mut self, limit: usize) -> Self {
        self.top_specialties = limit;
        self
    }

    pub fn with_registration_months(mut self, months: u32) -> Self {
        self.registration_months = months;
        self
    }
}
