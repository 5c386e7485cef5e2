#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use crate::net::types::Patient;

/// Invalidation counter for the patients directory, bumped after a new
/// patient is registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatientsEpoch(pub u32);

impl PatientsEpoch {
    /// Invalidate all patient listings.
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Case-insensitive search over patient name and MRN.
pub fn filter_patients(patients: &[Patient], query: &str) -> Vec<Patient> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return patients.to_vec();
    }
    patients
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.mrn.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// CSS class for a risk badge.
pub fn risk_class(risk_level: &str) -> &'static str {
    match risk_level.to_lowercase().as_str() {
        "high" => "risk-high",
        "moderate" => "risk-moderate",
        "low" => "risk-low",
        _ => "risk-unknown",
    }
}

/// Count of patients classified high-risk.
pub fn high_risk_count(patients: &[Patient]) -> usize {
    patients
        .iter()
        .filter(|p| p.risk_level.eq_ignore_ascii_case("high"))
        .count()
}
