use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Well-known homepage section keys. The set is open: unknown keys are
/// accepted and, like every key, enabled unless explicitly switched off.
pub mod keys {
    pub const ANNOUNCEMENTS: &str = "announcements";
    pub const ACADEMIC_RESULTS: &str = "academic_results";
    pub const STATS: &str = "stats";
    pub const FACULTY: &str = "faculty";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const FACILITIES: &str = "facilities";
    pub const GALLERY: &str = "gallery";
    pub const EVENTS: &str = "events";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomepageSectionRecord {
    pub section_key: String,
    #[serde(default)]
    pub is_enabled: Option<bool>,
}

/// Homepage feature flags keyed by section name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SectionFlags(HashMap<String, bool>);

impl SectionFlags {
    /// The first record for a key wins; a record without `isEnabled` counts as enabled.
    pub fn from_records(records: &[HomepageSectionRecord]) -> Self {
        let mut flags = HashMap::new();
        for record in records {
            flags
                .entry(record.section_key.trim().to_string())
                .or_insert(record.is_enabled.unwrap_or(true));
        }
        SectionFlags(flags)
    }

    pub fn is_enabled(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, enabled: Option<bool>) -> HomepageSectionRecord {
        HomepageSectionRecord { section_key: key.into(), is_enabled: enabled }
    }

    #[test]
    fn test_missing_and_null_flags_are_enabled() {
        let flags = SectionFlags::from_records(&[record("stats", None), record("gallery", Some(false))]);

        assert!(flags.is_enabled("stats"));
        assert!(flags.is_enabled("events"));
        assert!(flags.is_enabled("brand_new_section"));
        assert!(!flags.is_enabled("gallery"));
    }

    #[test]
    fn test_first_record_for_a_key_wins() {
        let flags = SectionFlags::from_records(&[record("events", Some(false)), record("events", Some(true))]);
        assert!(!flags.is_enabled("events"));
    }
}
