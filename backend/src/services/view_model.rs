use chrono::{DateTime, Utc};

use crate::{
    models::{
        sections::keys,
        site::SiteContent,
        view::{
            AboutView, ActivitiesView, AdmissionView, ContactView, EventsView, FacultyView, GalleryView,
            HomeView, InfrastructureView, NoticesView, Screen, ScreenView, StatView,
        },
    },
    services::derive,
    templates::TemplateProfile,
};

/// Builds the view model for one screen.
pub fn build(screen: Screen, data: &SiteContent, now: DateTime<Utc>, profile: &TemplateProfile) -> ScreenView {
    match screen {
        Screen::Home => ScreenView::Home(home(data, now, profile)),
        Screen::About => ScreenView::About(AboutView {
            school_name: data.meta.school_name.clone(),
            established_year: data.meta.established_year,
            vision: data.vision.clone(),
            mission: data.mission.clone(),
            principal: data.principal.clone(),
            statistics: statistics(data),
            academic_achievements: derive::academic_achievements(data),
        }),
        Screen::Admission => ScreenView::Admission(AdmissionView {
            admission: data.admission.clone().unwrap_or_default(),
            contact: data.contact.clone(),
        }),
        Screen::Activities => ScreenView::Activities(ActivitiesView {
            groups: derive::activity_groups(data),
        }),
        Screen::Events => {
            let (upcoming, past) = derive::events_timeline(data, now);
            ScreenView::Events(EventsView { upcoming, past })
        }
        Screen::Faculty => ScreenView::Faculty(FacultyView {
            principal: data.principal.clone(),
            members: derive::faculty_members(data, None),
        }),
        Screen::Infrastructure => ScreenView::Infrastructure(InfrastructureView {
            groups: derive::grouped_facilities(data),
        }),
        Screen::Gallery => ScreenView::Gallery(GalleryView {
            images: data.gallery.clone(),
        }),
        Screen::Contact => ScreenView::Contact(ContactView {
            contact: data.contact.clone(),
            social_links: data.social_links.clone(),
        }),
        Screen::Notices => ScreenView::Notices(NoticesView {
            announcements: derive::active_announcements(data, now),
        }),
    }
}

fn home(data: &SiteContent, now: DateTime<Utc>, profile: &TemplateProfile) -> HomeView {
    let enabled = |key: &str| derive::section_enabled(data, key);

    let mut view = HomeView {
        school_name: data.meta.school_name.clone(),
        established_year: data.meta.established_year,
        hero_images: derive::featured_gallery(data, profile.hero_image_limit),
        principal: data.principal.clone(),
        ..Default::default()
    };

    if enabled(keys::ANNOUNCEMENTS) {
        view.announcements = derive::active_announcements(data, now);
    }
    if enabled(keys::STATS) {
        view.statistics = statistics(data);
    }
    if enabled(keys::ACADEMIC_RESULTS) {
        view.latest_result = derive::latest_academic_result(data);
    }
    if enabled(keys::FACULTY) {
        view.faculty = derive::faculty_members(data, profile.home_faculty_limit);
    }
    if enabled(keys::ACHIEVEMENTS) {
        view.academic_achievements = derive::academic_achievements(data);
        view.sports_achievements = derive::sports_achievements(data, profile.sports_limit);
    }
    if enabled(keys::FACILITIES) {
        view.facilities = derive::grouped_facilities(data);
    }
    if enabled(keys::EVENTS) {
        view.upcoming_events = derive::upcoming_featured_events(data, now, profile.home_event_limit);
    }
    if enabled(keys::GALLERY) {
        view.gallery = data.gallery.iter().take(profile.home_gallery_limit).cloned().collect();
    }
    view
}

fn statistics(data: &SiteContent) -> Vec<StatView> {
    derive::sorted_statistics(data)
        .into_iter()
        .map(|s| StatView {
            figure: derive::parse_stat_value(&s.value),
            label: s.label,
            value: s.value,
            icon: s.icon,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        academics::Statistic,
        calendar::Announcement,
        sections::{HomepageSectionRecord, SectionFlags},
    };
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn sample() -> SiteContent {
        let mut content = SiteContent::fallback("greenfield");
        content.statistics = vec![Statistic {
            label: "Pass rate".into(),
            value: "84%".into(),
            icon: None,
            display_order: 1,
        }];
        content.announcements = vec![Announcement {
            id: "a1".into(),
            title: "Holiday".into(),
            message: "School closed Friday".into(),
            is_active: true,
            created_at: None,
            expires_at: None,
        }];
        content
    }

    #[test]
    fn test_home_includes_enabled_sections() {
        let ScreenView::Home(home) = build(Screen::Home, &sample(), now(), &TemplateProfile::default()) else {
            panic!("expected home view");
        };
        assert_eq!(home.announcements.len(), 1);
        assert_eq!(home.statistics[0].figure.number, Some(84));
        assert_eq!(home.statistics[0].figure.suffix, "%");
    }

    #[test]
    fn test_disabled_sections_render_empty() {
        let mut content = sample();
        content.sections = SectionFlags::from_records(&[
            HomepageSectionRecord { section_key: "stats".into(), is_enabled: Some(false) },
            HomepageSectionRecord { section_key: "announcements".into(), is_enabled: Some(false) },
        ]);

        let ScreenView::Home(home) = build(Screen::Home, &content, now(), &TemplateProfile::default()) else {
            panic!("expected home view");
        };
        assert!(home.statistics.is_empty());
        assert!(home.announcements.is_empty());
        assert_eq!(home.school_name, "School Website");
    }

    #[test]
    fn test_notices_ignore_homepage_flags() {
        let mut content = sample();
        content.sections = SectionFlags::from_records(&[HomepageSectionRecord {
            section_key: "announcements".into(),
            is_enabled: Some(false),
        }]);

        let ScreenView::Notices(notices) = build(Screen::Notices, &content, now(), &TemplateProfile::default()) else {
            panic!("expected notices view");
        };
        assert_eq!(notices.announcements.len(), 1);
    }

    #[test]
    fn test_admission_defaults_when_absent() {
        let ScreenView::Admission(admission) =
            build(Screen::Admission, &SiteContent::default(), now(), &TemplateProfile::default())
        else {
            panic!("expected admission view");
        };
        assert!(admission.admission.steps.is_empty());
    }
}
