//! Dashboard configuration from TOML (`[dashboard]` section)

use roster_application::DashboardConfig;
use serde::{Deserialize, Serialize};

/// Raw dashboard configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDashboardConfig {
    /// Specialties shown in the ranking
    pub top_specialties: usize,
    /// Calendar months of registration history
    pub registration_months: u32,
}

impl Default for FileDashboardConfig {
    fn default() -> Self {
        let defaults = DashboardConfig::default();
        Self {
            top_specialties: defaults.top_specialties,
            registration_months: defaults.registration_months,
        }
    }
}

impl FileDashboardConfig {
    pub fn to_dashboard_config(&self) -> DashboardConfig {
        DashboardConfig::default()
            .with_top_specialties(self.top_specialties)
            .with_registration_months(self.registration_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_application() {
        let config = FileDashboardConfig::default();
        assert_eq!(config.to_dashboard_config(), DashboardConfig::default());
    }
}
