//! Dashboard statistics derived from the doctor and specialty lists

use crate::doctor::entities::Doctor;
use crate::specialty::entities::Specialty;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Headline figures shown on the dashboard (Value Object)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_doctors: usize,
    pub active_doctors: usize,
    pub specialties: usize,
    /// Mean rating rounded to one decimal; 0 with no doctors
    pub average_rating: f64,
}

impl DashboardStats {
    pub fn compute(doctors: &[Doctor], specialties: &[Specialty]) -> Self {
        let active_doctors = doctors.iter().filter(|d| d.status.is_active()).count();
        let average_rating = if doctors.is_empty() {
            0.0
        } else {
            let total: f64 = doctors.iter().map(|d| d.rating).sum();
            round_to_tenth(total / doctors.len() as f64)
        };

        Self {
            total_doctors: doctors.len(),
            active_doctors,
            specialties: specialties.len(),
            average_rating,
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Number of doctors who joined in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRegistrations {
    /// `YYYY-MM`
    pub month_key: String,
    /// Abbreviated month name, e.g. `Oct`
    pub label: String,
    pub count: usize,
}

/// Specialties with the most doctors, highest first, at most `limit`.
///
/// Ties keep their original relative order.
pub fn top_specialties(specialties: &[Specialty], limit: usize) -> Vec<Specialty> {
    let mut sorted = specialties.to_vec();
    sorted.sort_by(|a, b| b.doctor_count.cmp(&a.doctor_count));
    sorted.truncate(limit);
    sorted
}

/// Registrations for the last `months` calendar months up to and including
/// the month of `now`, oldest first.
pub fn registrations_by_month(
    doctors: &[Doctor],
    now: DateTime<Utc>,
    months: u32,
) -> Vec<MonthlyRegistrations> {
    let current = now.year() * 12 + now.month0() as i32;

    (0..months as i32)
        .rev()
        .filter_map(|back| {
            let index = current - back;
            let year = index.div_euclid(12);
            let month = index.rem_euclid(12) as u32 + 1;
            let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
            let count = doctors
                .iter()
                .filter(|d| {
                    d.joined_date.year() == first_day.year()
                        && d.joined_date.month() == first_day.month()
                })
                .count();
            Some(MonthlyRegistrations {
                month_key: first_day.format("%Y-%m").to_string(),
                label: first_day.format("%b").to_string(),
                count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctor::entities::{DoctorStatus, Location};
    use chrono::TimeZone;

    fn doctor(status: DoctorStatus, rating: f64, joined: DateTime<Utc>) -> Doctor {
        Doctor {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            specialty: String::new(),
            status,
            rating,
            image: String::new(),
            joined_date: joined,
            location: Location::default(),
        }
    }

    fn specialty(name: &str, count: u64) -> Specialty {
        Specialty {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: String::new(),
            doctor_count: count,
        }
    }

    #[test]
    fn test_stats_empty() {
        let stats = DashboardStats::compute(&[], &[]);
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_stats_counts_and_rounds() {
        let now = Utc::now();
        let doctors = vec![
            doctor(DoctorStatus::Active, 4.0, now),
            doctor(DoctorStatus::Suspended, 4.5, now),
            doctor(DoctorStatus::Active, 3.0, now),
        ];
        let stats = DashboardStats::compute(&doctors, &[specialty("Cardiology", 2)]);
        assert_eq!(stats.total_doctors, 3);
        assert_eq!(stats.active_doctors, 2);
        assert_eq!(stats.specialties, 1);
        assert_eq!(stats.average_rating, 3.8);
    }

    #[test]
    fn test_top_specialties_sorted_and_limited() {
        let all = vec![
            specialty("A", 1),
            specialty("B", 5),
            specialty("C", 3),
            specialty("D", 5),
        ];
        let top = top_specialties(&all, 3);
        let names: Vec<_> = top.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "D", "C"]);
    }

    #[test]
    fn test_registrations_cover_year_boundary() {
        let now = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
        let doctors = vec![
            doctor(DoctorStatus::Active, 0.0, Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap()),
            doctor(DoctorStatus::Active, 0.0, Utc.with_ymd_and_hms(2025, 12, 31, 23, 0, 0).unwrap()),
            doctor(DoctorStatus::Active, 0.0, Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()),
            doctor(DoctorStatus::Active, 0.0, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
        ];
        let months = registrations_by_month(&doctors, now, 6);
        assert_eq!(months.len(), 6);
        assert_eq!(months[0].month_key, "2025-09");
        assert_eq!(months[3].month_key, "2025-12");
        assert_eq!(months[3].label, "Dec");
        assert_eq!(months[3].count, 2);
        assert_eq!(months[5].month_key, "2026-02");
        assert_eq!(months[5].count, 1);
        assert_eq!(months.iter().map(|m| m.count).sum::<usize>(), 3);
    }
}
