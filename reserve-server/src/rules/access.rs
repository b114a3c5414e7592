//! Access-restriction evaluator
//!
//! Checked at the seat-confirmation step, before session selection. Grade
//! is derived from the leading digit of the student identifier: an input
//! contract with the account system, not internal state.

use shared::models::RestrictionConfig;

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    /// Denied: the section's permitted-grade set does not contain the
    /// student's grade
    Denied {
        section: String,
        permitted: Vec<u8>,
    },
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

/// Grade from a student identifier's first character, parsed as a digit
pub fn grade_from_student_id(student_id: &str) -> Option<u8> {
    student_id
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map(|d| d as u8)
}

/// Check whether `grade` may sit in (zone, section)
///
/// Restrictions globally disabled, an absent zone/section entry, an empty
/// permitted set, or an underivable grade all pass: missing configuration
/// is permissive here, unlike the scheduling rules.
pub fn check_access(
    config: &RestrictionConfig,
    zone_id: i64,
    section: &str,
    grade: Option<u8>,
) -> AccessDecision {
    if !config.enabled {
        return AccessDecision::Allowed;
    }
    let Some(permitted) = config.permitted_grades(zone_id, section) else {
        return AccessDecision::Allowed;
    };
    if permitted.is_empty() {
        return AccessDecision::Allowed;
    }
    match grade {
        Some(g) if permitted.contains(&g) => AccessDecision::Allowed,
        Some(_) | None => AccessDecision::Denied {
            section: section.to_string(),
            permitted: permitted.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(enabled: bool, zone_id: i64, section: &str, grades: Vec<u8>) -> RestrictionConfig {
        let mut sections = HashMap::new();
        sections.insert(section.to_string(), grades);
        let mut zones = HashMap::new();
        zones.insert(zone_id.to_string(), sections);
        RestrictionConfig { enabled, zones }
    }

    #[test]
    fn disabled_config_always_allows() {
        let cfg = config(false, 1, "A", vec![1]);
        assert!(check_access(&cfg, 1, "A", Some(3)).is_allowed());
    }

    #[test]
    fn grade_in_permitted_set_is_allowed() {
        let cfg = config(true, 1, "A", vec![1, 2]);
        assert!(check_access(&cfg, 1, "A", Some(1)).is_allowed());
        assert!(check_access(&cfg, 1, "A", Some(2)).is_allowed());
    }

    #[test]
    fn grade_outside_set_is_denied_naming_section() {
        let cfg = config(true, 1, "A", vec![1, 2]);
        match check_access(&cfg, 1, "A", Some(3)) {
            AccessDecision::Denied { section, permitted } => {
                assert_eq!(section, "A");
                assert_eq!(permitted, vec![1, 2]);
            }
            AccessDecision::Allowed => panic!("grade 3 must be denied"),
        }
    }

    #[test]
    fn missing_section_entry_is_unrestricted() {
        let cfg = config(true, 1, "A", vec![1]);
        assert!(check_access(&cfg, 1, "B", Some(3)).is_allowed());
        assert!(check_access(&cfg, 2, "A", Some(3)).is_allowed());
    }

    #[test]
    fn empty_permitted_set_is_unrestricted() {
        let cfg = config(true, 1, "A", vec![]);
        assert!(check_access(&cfg, 1, "A", Some(3)).is_allowed());
    }

    #[test]
    fn underivable_grade_is_denied_in_restricted_section() {
        let cfg = config(true, 1, "A", vec![1, 2]);
        assert!(!check_access(&cfg, 1, "A", None).is_allowed());
    }

    #[test]
    fn grade_derivation_takes_leading_digit() {
        assert_eq!(grade_from_student_id("20315"), Some(2));
        assert_eq!(grade_from_student_id("1"), Some(1));
        assert_eq!(grade_from_student_id("x123"), None);
        assert_eq!(grade_from_student_id(""), None);
    }
}
