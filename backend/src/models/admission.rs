use serde::{Deserialize, Serialize};

/// `process` is stored either as one delimited string or as a list of steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProcessSteps {
    Steps(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub label: String,
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
}

fn default_field_type() -> String {
    "text".into()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRecord {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub process: Option<ProcessSteps>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub form_fields: Vec<FormField>,
    #[serde(default)]
    pub fee_payment_url: Option<String>,
    #[serde(default)]
    pub contact_note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Admission {
    pub overview: String,
    pub steps: Vec<String>,
    pub form_fields: Vec<FormField>,
    pub fee_payment_url: Option<String>,
    pub contact_note: Option<String>,
}
