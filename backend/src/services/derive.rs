//! Pure view-model derivations shared by every template.
//!
//! Every function takes the canonical content and, where time matters, an
//! explicit `now`. None of them fail: sparse content yields empty results.

use chrono::{DateTime, Utc};

use crate::models::{
    academics::{AcademicResult, Achievement, AchievementType, StatFigure, Statistic},
    calendar::{Announcement, Event},
    campus::{FacilityGroup, GalleryImage},
    people::FacultyMember,
    programs::ActivityBucket,
    site::SiteContent,
    view::ActivityGroup,
};

pub const DEFAULT_EVENT_LIMIT: usize = 3;
pub const DEFAULT_FACILITY_CATEGORY: &str = "Common Facilities";
const CAMPUS_CATEGORY: &str = "campus";

/// Active announcements that have not expired, in input order.
pub fn active_announcements(content: &SiteContent, now: DateTime<Utc>) -> Vec<Announcement> {
    content
        .announcements
        .iter()
        .filter(|a| a.is_active && a.expires_at.map_or(true, |expires| expires > now))
        .cloned()
        .collect()
}

/// Featured events strictly after `now`, soonest first, at most `limit`.
pub fn upcoming_featured_events(content: &SiteContent, now: DateTime<Utc>, limit: usize) -> Vec<Event> {
    let mut events: Vec<Event> = content
        .events
        .iter()
        .filter(|e| e.is_featured && e.starts_at() > now)
        .cloned()
        .collect();
    events.sort_by_key(Event::starts_at);
    events.truncate(limit);
    events
}

/// Active events split around `now`: upcoming soonest first, past most recent first.
pub fn events_timeline(content: &SiteContent, now: DateTime<Utc>) -> (Vec<Event>, Vec<Event>) {
    let (mut upcoming, mut past): (Vec<Event>, Vec<Event>) = content
        .events
        .iter()
        .filter(|e| e.is_active)
        .cloned()
        .partition(|e| e.starts_at() > now);
    upcoming.sort_by_key(Event::starts_at);
    past.sort_by_key(|e| std::cmp::Reverse(e.starts_at()));
    (upcoming, past)
}

pub fn latest_academic_result(content: &SiteContent) -> Option<AcademicResult> {
    content.academic_results.iter().max_by_key(|r| r.year).cloned()
}

/// Academic achievements, newest year first, then by display order.
pub fn academic_achievements(content: &SiteContent) -> Vec<Achievement> {
    let mut achievements = achievements_of(content, AchievementType::Academic);
    achievements.sort_by(|a, b| b.year.cmp(&a.year).then(a.display_order.cmp(&b.display_order)));
    achievements
}

pub fn sports_achievements(content: &SiteContent, limit: Option<usize>) -> Vec<Achievement> {
    let mut achievements = achievements_of(content, AchievementType::Sports);
    achievements.sort_by_key(|a| a.display_order);
    if let Some(limit) = limit {
        achievements.truncate(limit);
    }
    achievements
}

fn achievements_of(content: &SiteContent, kind: AchievementType) -> Vec<Achievement> {
    content
        .achievements
        .iter()
        .filter(|a| a.achievement_type == kind)
        .cloned()
        .collect()
}

/// Groups facilities by category, keeping categories in first-seen order.
pub fn grouped_facilities(content: &SiteContent) -> Vec<FacilityGroup> {
    let mut groups: Vec<FacilityGroup> = Vec::new();
    for facility in &content.facilities {
        let category = facility
            .category
            .clone()
            .unwrap_or_else(|| DEFAULT_FACILITY_CATEGORY.to_string());
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.items.push(facility.clone()),
            None => groups.push(FacilityGroup { category, items: vec![facility.clone()] }),
        }
    }
    groups
}

pub fn section_enabled(content: &SiteContent, key: &str) -> bool {
    content.sections.is_enabled(key)
}

pub fn sorted_statistics(content: &SiteContent) -> Vec<Statistic> {
    let mut stats = content.statistics.clone();
    stats.sort_by_key(|s| s.display_order);
    stats
}

/// Splits a display value into its digits and its non-digits, e.g. `"84%"`
/// becomes `84` and `"%"`.
pub fn parse_stat_value(value: &str) -> StatFigure {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let suffix: String = value.chars().filter(|c| !c.is_ascii_digit()).collect();
    StatFigure {
        number: digits.parse().ok(),
        suffix,
    }
}

/// Carousel images: featured or campus-tagged ones, else the first `limit` images.
pub fn featured_gallery(content: &SiteContent, limit: usize) -> Vec<GalleryImage> {
    let featured: Vec<GalleryImage> = content
        .gallery
        .iter()
        .filter(|g| {
            g.is_featured
                || g.category.as_deref().is_some_and(|c| c.eq_ignore_ascii_case(CAMPUS_CATEGORY))
        })
        .take(limit)
        .cloned()
        .collect();
    if featured.is_empty() {
        content.gallery.iter().take(limit).cloned().collect()
    } else {
        featured
    }
}

pub fn faculty_members(content: &SiteContent, limit: Option<usize>) -> Vec<FacultyMember> {
    let take = limit.unwrap_or(usize::MAX);
    content.faculty.iter().take(take).cloned().collect()
}

/// All six activity buckets in their fixed order; empty buckets are kept.
pub fn activity_groups(content: &SiteContent) -> Vec<ActivityGroup> {
    ActivityBucket::ALL
        .iter()
        .map(|&bucket| ActivityGroup {
            bucket,
            label: bucket.label().to_string(),
            items: content.activities.bucket(bucket).to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        calendar::EventDate,
        campus::Facility,
        sections::{HomepageSectionRecord, SectionFlags},
    };
    use chrono::{NaiveDate, TimeZone};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn announcement(id: &str, active: bool, expires_at: Option<DateTime<Utc>>) -> Announcement {
        Announcement {
            id: id.into(),
            title: id.into(),
            message: String::new(),
            is_active: active,
            created_at: None,
            expires_at,
        }
    }

    fn event(id: &str, date: (i32, u32, u32), time: Option<&str>, featured: bool) -> Event {
        Event {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            event_date: EventDate::Day(NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap()),
            start_time: time.map(str::to_string),
            location: None,
            is_active: true,
            is_featured: featured,
        }
    }

    fn achievement(title: &str, kind: AchievementType, year: i32, order: i32) -> Achievement {
        Achievement {
            title: title.into(),
            description: String::new(),
            year,
            achievement_type: kind,
            display_order: order,
        }
    }

    #[test]
    fn test_active_announcements_filter() {
        let content = SiteContent {
            announcements: vec![
                announcement("A", true, None),
                announcement("B", true, Some(at(2024, 5, 1))),
                announcement("C", false, Some(at(2025, 1, 1))),
                announcement("D", true, Some(at(2024, 7, 1))),
            ],
            ..Default::default()
        };

        let ids: Vec<_> = active_announcements(&content, at(2024, 6, 1))
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["A", "D"]);
    }

    #[test]
    fn test_announcement_expiring_exactly_now_is_hidden() {
        let now = at(2024, 6, 1);
        let content = SiteContent {
            announcements: vec![announcement("A", true, Some(now))],
            ..Default::default()
        };
        assert!(active_announcements(&content, now).is_empty());
    }

    #[test]
    fn test_upcoming_featured_events_sorted_and_capped() {
        let content = SiteContent {
            events: vec![
                event("e5", (2024, 9, 1), None, true),
                event("e2", (2024, 6, 10), Some("14:00"), true),
                event("e4", (2024, 8, 1), None, true),
                event("e1", (2024, 6, 10), Some("09:00"), true),
                event("e3", (2024, 7, 1), None, true),
                event("not-featured", (2024, 6, 2), None, false),
                event("past", (2024, 5, 1), None, true),
            ],
            ..Default::default()
        };
        let now = at(2024, 6, 1);

        let upcoming = upcoming_featured_events(&content, now, DEFAULT_EVENT_LIMIT);
        let ids: Vec<_> = upcoming.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2", "e3"]);
        assert!(upcoming.iter().all(|e| e.starts_at() > now));
    }

    #[test]
    fn test_event_later_today_is_upcoming() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let content = SiteContent {
            events: vec![
                event("morning", (2024, 6, 1), Some("08:00"), true),
                event("evening", (2024, 6, 1), Some("18:30"), true),
                event("all-day", (2024, 6, 1), None, true),
            ],
            ..Default::default()
        };

        let ids: Vec<_> = upcoming_featured_events(&content, now, 3)
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["evening"]);
    }

    #[test]
    fn test_events_timeline_skips_inactive() {
        let mut cancelled = event("cancelled", (2024, 7, 1), None, false);
        cancelled.is_active = false;
        let content = SiteContent {
            events: vec![
                event("old", (2024, 1, 1), None, false),
                cancelled,
                event("next", (2024, 6, 5), None, false),
                event("older", (2023, 1, 1), None, false),
            ],
            ..Default::default()
        };

        let (upcoming, past) = events_timeline(&content, at(2024, 6, 1));
        assert_eq!(upcoming.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), vec!["next"]);
        assert_eq!(past.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), vec!["old", "older"]);
    }

    #[test]
    fn test_latest_academic_result() {
        let mut content = SiteContent::default();
        assert_eq!(latest_academic_result(&content), None);

        content.academic_results = vec![
            AcademicResult { year: 2022, pass_percentage: 96.0, ..Default::default() },
            AcademicResult { year: 2024, pass_percentage: 99.0, ..Default::default() },
            AcademicResult { year: 2023, pass_percentage: 98.0, ..Default::default() },
        ];
        assert_eq!(latest_academic_result(&content).map(|r| r.year), Some(2024));
    }

    #[test]
    fn test_achievement_ordering() {
        let content = SiteContent {
            achievements: vec![
                achievement("olympiad", AchievementType::Academic, 2023, 2),
                achievement("relay", AchievementType::Sports, 2024, 3),
                achievement("board topper", AchievementType::Academic, 2024, 5),
                achievement("science fair", AchievementType::Academic, 2023, 1),
                achievement("football", AchievementType::Sports, 2020, 1),
                achievement("green campus", AchievementType::Recognition, 2024, 1),
                achievement("chess", AchievementType::Sports, 2022, 2),
            ],
            ..Default::default()
        };

        let academic: Vec<_> = academic_achievements(&content).into_iter().map(|a| a.title).collect();
        assert_eq!(academic, vec!["board topper", "science fair", "olympiad"]);

        let sports: Vec<_> = sports_achievements(&content, Some(2)).into_iter().map(|a| a.title).collect();
        assert_eq!(sports, vec!["football", "chess"]);
        assert_eq!(sports_achievements(&content, None).len(), 3);
    }

    #[test]
    fn test_grouped_facilities_preserves_first_seen_order() {
        let facility = |name: &str, category: Option<&str>| Facility {
            name: name.into(),
            description: String::new(),
            image: None,
            category: category.map(str::to_string),
        };
        let content = SiteContent {
            facilities: vec![
                facility("Lab A", Some("Labs")),
                facility("Court", Some("Sports")),
                facility("Lab B", Some("Labs")),
                facility("Canteen", None),
            ],
            ..Default::default()
        };

        let groups = grouped_facilities(&content);
        let categories: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["Labs", "Sports", DEFAULT_FACILITY_CATEGORY]);
        let labs: Vec<_> = groups[0].items.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(labs, vec!["Lab A", "Lab B"]);
    }

    #[test]
    fn test_sections_default_to_enabled() {
        let mut content = SiteContent::default();
        for key in ["announcements", "academic_results", "stats", "faculty", "achievements", "facilities", "gallery", "events"] {
            assert!(section_enabled(&content, key), "{key} should default to enabled");
        }

        content.sections = SectionFlags::from_records(&[HomepageSectionRecord {
            section_key: "stats".into(),
            is_enabled: Some(false),
        }]);
        assert!(!section_enabled(&content, "stats"));
        assert!(section_enabled(&content, "events"));
    }

    #[test]
    fn test_parse_stat_value() {
        assert_eq!(parse_stat_value("84%"), StatFigure { number: Some(84), suffix: "%".into() });
        assert_eq!(parse_stat_value("1500"), StatFigure { number: Some(1500), suffix: String::new() });
        assert_eq!(parse_stat_value("50+"), StatFigure { number: Some(50), suffix: "+".into() });
        assert_eq!(parse_stat_value("N/A"), StatFigure { number: None, suffix: "N/A".into() });
    }

    #[test]
    fn test_sorted_statistics() {
        let stat = |label: &str, order: i32| Statistic {
            label: label.into(),
            value: "1".into(),
            icon: None,
            display_order: order,
        };
        let content = SiteContent {
            statistics: vec![stat("Teachers", 3), stat("Students", 1), stat("Years", 2)],
            ..Default::default()
        };

        let labels: Vec<_> = sorted_statistics(&content).into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Students", "Years", "Teachers"]);
    }

    #[test]
    fn test_empty_content_degrades_to_empty_results() {
        let content = SiteContent::default();
        let now = at(2024, 6, 1);

        assert!(active_announcements(&content, now).is_empty());
        assert!(upcoming_featured_events(&content, now, 3).is_empty());
        assert!(academic_achievements(&content).is_empty());
        assert!(grouped_facilities(&content).is_empty());
        assert!(featured_gallery(&content, 5).is_empty());
        let groups = activity_groups(&content);
        assert_eq!(groups.len(), 6);
        assert!(groups.iter().all(|g| g.items.is_empty()));
    }
}
