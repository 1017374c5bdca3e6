use serde::{Deserialize, Serialize};

use super::{
    academics::{AcademicResult, Achievement, Statistic},
    admission::Admission,
    calendar::{Announcement, Event},
    campus::{Facility, GalleryImage},
    people::{FacultyMember, Principal},
    programs::Activities,
    school::{Branding, Contact, Footer, SchoolMeta, SocialLink},
    sections::SectionFlags,
};

/// Canonical tenant content: one shape, every legacy alias already resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub meta: SchoolMeta,
    pub contact: Contact,
    pub branding: Branding,
    pub social_links: Vec<SocialLink>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub principal: Option<Principal>,
    pub faculty: Vec<FacultyMember>,
    pub activities: Activities,
    pub facilities: Vec<Facility>,
    pub gallery: Vec<GalleryImage>,
    pub events: Vec<Event>,
    pub announcements: Vec<Announcement>,
    pub academic_results: Vec<AcademicResult>,
    pub achievements: Vec<Achievement>,
    pub statistics: Vec<Statistic>,
    pub sections: SectionFlags,
    pub admission: Option<Admission>,
    pub footer: Footer,
}

impl SiteContent {
    /// Placeholder content rendered underneath the system notice when a
    /// tenant has no content or could not be fetched.
    pub fn fallback(school_id: &str) -> Self {
        SiteContent {
            meta: SchoolMeta {
                school_id: school_id.to_string(),
                school_name: "School Website".into(),
                established_year: None,
            },
            ..Default::default()
        }
    }
}
