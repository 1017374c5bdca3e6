use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcademicResult {
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub pass_percentage: f64,
    #[serde(default)]
    pub distinctions: u32,
    #[serde(default)]
    pub first_class: u32,
    #[serde(default)]
    pub legacy_quote: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AchievementType {
    Academic,
    Sports,
    Recognition,
    Cultural,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub achievement_type: AchievementType,
    #[serde(default)]
    pub display_order: i32,
}

/// Statistic values arrive as either text (`"84%"`) or bare numbers (`1500`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StatText {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Default for StatText {
    fn default() -> Self {
        StatText::Text(String::new())
    }
}

impl std::fmt::Display for StatText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatText::Text(s) => write!(f, "{s}"),
            StatText::Integer(n) => write!(f, "{n}"),
            StatText::Float(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticRecord {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: StatText,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub label: String,
    pub value: String,
    pub icon: Option<String>,
    pub display_order: i32,
}

/// A display value split into its numeric part and whatever surrounds it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatFigure {
    /// `None` when the value carries no digits at all.
    pub number: Option<u64>,
    pub suffix: String,
}
