use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::lenient;

/// `eventDate` as stored: either a calendar day or a full instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDate {
    Day(NaiveDate),
    At(DateTime<Utc>),
}

impl EventDate {
    /// The UTC calendar day.
    pub fn date(&self) -> NaiveDate {
        match self {
            EventDate::Day(date) => *date,
            EventDate::At(at) => at.date_naive(),
        }
    }
}

impl std::fmt::Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventDate::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            EventDate::At(at) => write!(f, "{}", at.to_rfc3339()),
        }
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Some(at) = lenient::parse_instant(&raw) {
            return Ok(EventDate::At(at));
        }
        let raw = raw.trim();
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(EventDate::Day)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_date: EventDate,
    /// `HH:MM` or `HH:MM:SS`.
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl Event {
    /// Composite timestamp, in UTC. A readable `startTime` sets the time of
    /// day; otherwise a full `eventDate` instant is used as is and a bare day
    /// falls back to midnight.
    pub fn starts_at(&self) -> DateTime<Utc> {
        match (self.start_time.as_deref().and_then(parse_time), self.event_date) {
            (Some(time), date) => NaiveDateTime::new(date.date(), time).and_utc(),
            (None, EventDate::At(at)) => at,
            (None, EventDate::Day(date)) => NaiveDateTime::new(date, NaiveTime::default()).and_utc(),
        }
    }
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub expires_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_date_accepts_timestamps() {
        let event: Event = serde_json::from_value(json!({
            "id": "e1",
            "title": "Sports Day",
            "eventDate": "2024-07-10T00:00:00.000Z",
            "startTime": "09:30"
        }))
        .unwrap();

        assert_eq!(event.event_date.date(), NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
        assert!(event.is_active);
        assert!(!event.is_featured);
        assert_eq!(event.starts_at().to_rfc3339(), "2024-07-10T09:30:00+00:00");
    }

    #[test]
    fn test_event_timestamp_offset_is_kept() {
        let event: Event = serde_json::from_value(json!({
            "title": "Night Sky Walk",
            "eventDate": "2024-07-09T22:00:00-05:00"
        }))
        .unwrap();

        assert_eq!(event.event_date.date(), NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
        assert_eq!(event.starts_at().to_rfc3339(), "2024-07-10T03:00:00+00:00");
        assert_eq!(
            serde_json::to_value(&event).unwrap()["eventDate"],
            json!("2024-07-10T03:00:00+00:00")
        );
    }

    #[test]
    fn test_announcement_accepts_date_only_expiry() {
        let announcement: Announcement = serde_json::from_value(json!({
            "title": "Exams",
            "isActive": true,
            "createdAt": "2024-04-20T08:15:00Z",
            "expiresAt": "2024-05-01"
        }))
        .unwrap();

        assert_eq!(
            announcement.expires_at.map(|t| t.to_rfc3339()),
            Some("2024-05-01T00:00:00+00:00".to_string())
        );
        assert!(announcement.created_at.is_some());
    }

    #[test]
    fn test_unreadable_start_time_falls_back_to_midnight() {
        let event: Event = serde_json::from_value(json!({
            "title": "Open House",
            "eventDate": "2024-07-10",
            "startTime": "after lunch"
        }))
        .unwrap();

        assert_eq!(event.starts_at().to_rfc3339(), "2024-07-10T00:00:00+00:00");
    }
}
