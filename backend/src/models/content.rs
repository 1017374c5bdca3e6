use serde::{Deserialize, Serialize};

use super::{
    academics::{AcademicResult, Achievement, StatisticRecord},
    admission::AdmissionRecord,
    calendar::{Announcement, Event},
    campus::{FacilityRecord, GalleryRecord},
    people::{PersonnelRecord, PrincipalRecord},
    programs::Activities,
    school::{Branding, Contact, FooterRecord, SchoolMeta, SocialLinkRecord, VisionMission},
    sections::HomepageSectionRecord,
};

/// A tenant's content record exactly as it is persisted or fetched.
///
/// Both the legacy flat shape and the newer structured shape are accepted;
/// nothing downstream of [`crate::services::normalize`] reads this type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenantContent {
    pub meta: SchoolMeta,
    pub contact: Contact,
    #[serde(default, deserialize_with = "crate::models::lenient::or_default")]
    pub branding: Option<Branding>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub social_links: Vec<SocialLinkRecord>,
    #[serde(default, deserialize_with = "crate::models::lenient::or_default")]
    pub vision_mission: Option<VisionMission>,
    /// Deprecated duplicate of `visionMission.vision`.
    #[serde(default)]
    pub vision: Option<String>,
    /// Deprecated duplicate of `visionMission.mission`.
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default, deserialize_with = "crate::models::lenient::or_default")]
    pub principal: Option<PrincipalRecord>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub personnel: Vec<PersonnelRecord>,
    #[serde(default, deserialize_with = "crate::models::lenient::or_default")]
    pub activities: Activities,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub infrastructure: Vec<FacilityRecord>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub facilities: Vec<FacilityRecord>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub gallery: Vec<GalleryRecord>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub media_library: Vec<GalleryRecord>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub events: Vec<Event>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub announcements: Vec<Announcement>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub academic_results: Vec<AcademicResult>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub achievements: Vec<Achievement>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub statistics: Vec<StatisticRecord>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub homepage_sections: Vec<HomepageSectionRecord>,
    #[serde(default, deserialize_with = "crate::models::lenient::or_default")]
    pub admission: Option<AdmissionRecord>,
    #[serde(default, deserialize_with = "crate::models::lenient::or_default")]
    pub footer: Option<FooterRecord>,
}

impl TenantContent {
    /// Checks the invariants a record must satisfy before it is stored.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.meta.school_id.trim().is_empty() {
            anyhow::bail!("meta.schoolId must not be empty");
        }
        if self.meta.school_name.trim().is_empty() {
            anyhow::bail!("meta.schoolName must not be empty");
        }
        Ok(())
    }
}
