use serde::{Deserialize, Serialize};

use super::{
    academics::{AcademicResult, Achievement, StatFigure},
    admission::Admission,
    calendar::{Announcement, Event},
    campus::{FacilityGroup, GalleryImage},
    people::{FacultyMember, Principal},
    programs::{ActivityBucket, ActivityItem},
    school::{Branding, Contact, Footer, SocialLink},
    tenant::TenantStatus,
};
use crate::services::notice::SystemNotice;

/// The fixed set of screens a template can dispatch to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    About,
    Admission,
    Activities,
    Events,
    Faculty,
    Infrastructure,
    Gallery,
    Contact,
    Notices,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Screen::Home => "home",
            Screen::About => "about",
            Screen::Admission => "admission",
            Screen::Activities => "activities",
            Screen::Events => "events",
            Screen::Faculty => "faculty",
            Screen::Infrastructure => "infrastructure",
            Screen::Gallery => "gallery",
            Screen::Contact => "contact",
            Screen::Notices => "notices",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatView {
    pub label: String,
    pub value: String,
    pub icon: Option<String>,
    pub figure: StatFigure,
}

/// Disabled homepage sections are emptied rather than omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub school_name: String,
    pub established_year: Option<i32>,
    pub hero_images: Vec<GalleryImage>,
    pub announcements: Vec<Announcement>,
    pub statistics: Vec<StatView>,
    pub latest_result: Option<AcademicResult>,
    pub principal: Option<Principal>,
    pub faculty: Vec<FacultyMember>,
    pub academic_achievements: Vec<Achievement>,
    pub sports_achievements: Vec<Achievement>,
    pub facilities: Vec<FacilityGroup>,
    pub upcoming_events: Vec<Event>,
    pub gallery: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    pub school_name: String,
    pub established_year: Option<i32>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub principal: Option<Principal>,
    pub statistics: Vec<StatView>,
    pub academic_achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionView {
    pub admission: Admission,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityGroup {
    pub bucket: ActivityBucket,
    pub label: String,
    pub items: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivitiesView {
    pub groups: Vec<ActivityGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventsView {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacultyView {
    pub principal: Option<Principal>,
    pub members: Vec<FacultyMember>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureView {
    pub groups: Vec<FacilityGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub contact: Contact,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoticesView {
    pub announcements: Vec<Announcement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "screen", content = "view", rename_all = "snake_case")]
pub enum ScreenView {
    Home(HomeView),
    About(AboutView),
    Admission(AdmissionView),
    Activities(ActivitiesView),
    Events(EventsView),
    Faculty(FacultyView),
    Infrastructure(InfrastructureView),
    Gallery(GalleryView),
    Contact(ContactView),
    Notices(NoticesView),
}

impl ScreenView {
    pub fn screen(&self) -> Screen {
        match self {
            ScreenView::Home(_) => Screen::Home,
            ScreenView::About(_) => Screen::About,
            ScreenView::Admission(_) => Screen::Admission,
            ScreenView::Activities(_) => Screen::Activities,
            ScreenView::Events(_) => Screen::Events,
            ScreenView::Faculty(_) => Screen::Faculty,
            ScreenView::Infrastructure(_) => Screen::Infrastructure,
            ScreenView::Gallery(_) => Screen::Gallery,
            ScreenView::Contact(_) => Screen::Contact,
            ScreenView::Notices(_) => Screen::Notices,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Header/footer data shared by every screen of a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteChrome {
    pub school_id: String,
    pub school_name: String,
    pub branding: Branding,
    pub nav: Vec<NavLink>,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    pub template_id: String,
    pub template_name: String,
    /// The logical route the request resolved to, e.g. `/` for unknown paths.
    pub route: String,
    pub base_path: String,
    #[serde(flatten)]
    pub screen: ScreenView,
    pub chrome: SiteChrome,
    pub tenant_status: TenantStatus,
    pub notice: Option<SystemNotice>,
}
