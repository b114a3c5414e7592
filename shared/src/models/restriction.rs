//! Grade Restriction Config Model
//!
//! Stored as one JSON document in `app_config` under the key
//! `grade_restriction`. Absent document, absent zone/section entry, or an
//! empty permitted set all mean "unrestricted", unlike the fail-closed
//! scheduling rules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Grade restriction configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestrictionConfig {
    /// Global switch; when false every check passes
    #[serde(default)]
    pub enabled: bool,
    /// zone id (stringified, JSON object key) → section → permitted grades
    #[serde(default)]
    pub zones: HashMap<String, HashMap<String, Vec<u8>>>,
}

impl RestrictionConfig {
    /// Permitted grades for a (zone, section), if any are configured
    pub fn permitted_grades(&self, zone_id: i64, section: &str) -> Option<&Vec<u8>> {
        self.zones
            .get(&zone_id.to_string())
            .and_then(|sections| sections.get(section))
    }
}
