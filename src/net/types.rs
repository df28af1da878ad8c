//! JSON shapes consumed from the dashboard endpoints.
//!
//! DESIGN
//! ======
//! The server renders most scalars loosely (ids and counters as numbers or
//! strings, timestamps as numeric strings), so display fields are decoded
//! into `String` and cursor fields into numbers through tolerant helpers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of the info or events panel.
///
/// A non-empty `group_name` makes a header; anything else is a leaf row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawPanelEntry")]
pub enum PanelEntry {
    /// Group header; rendered as a label only.
    Group { group_name: String },
    /// Leaf row rendered as a name/value pair.
    Item { name: String, value: String, key: Option<String> },
}

#[derive(Deserialize)]
struct RawPanelEntry {
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    group_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    value: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    key: Option<String>,
}

impl TryFrom<RawPanelEntry> for PanelEntry {
    type Error = String;

    fn try_from(raw: RawPanelEntry) -> Result<Self, Self::Error> {
        match (raw.group_name, raw.name) {
            (Some(group_name), _) => Ok(Self::Group { group_name }),
            (None, Some(name)) => Ok(Self::Item { name, value: raw.value, key: raw.key }),
            (None, None) => Err("panel entry has neither group_name nor name".to_owned()),
        }
    }
}

/// A live stream (API worker) row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StreamItem {
    #[serde(deserialize_with = "deserialize_text")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub calls: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub api_key: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub called: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub status: String,
}

/// Snapshot returned by the info endpoint; feeds three panels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoSnapshot {
    #[serde(default)]
    pub info: Vec<PanelEntry>,
    #[serde(default)]
    pub events: Vec<PanelEntry>,
    #[serde(default)]
    pub streams: Vec<StreamItem>,
}

/// A background task known to the worker pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub name: String,
    /// Human-readable label.
    #[serde(default)]
    pub name_ru: String,
    /// Running instance id; absent (or empty) when the task is idle.
    #[serde(default, alias = "task_id", deserialize_with = "deserialize_opt_text")]
    pub id: Option<String>,
}

impl TaskItem {
    /// Label shown in the list, falling back to the machine name.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.name_ru.is_empty() { &self.name } else { &self.name_ru }
    }
}

/// One log line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogItem {
    #[serde(default)]
    pub time: String,
    #[serde(deserialize_with = "deserialize_f64_from_number_or_str")]
    pub timestamp: f64,
    pub text: String,
    #[serde(default)]
    pub category: u8,
}

/// A remotely supplied select option.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteOption {
    #[serde(deserialize_with = "deserialize_text")]
    pub value: String,
    pub text: String,
    #[serde(default)]
    pub subtext: Option<String>,
    #[serde(default)]
    pub info: Option<serde_json::Value>,
}

/// Remote options endpoint response: a list or an application error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectOptionsResponse {
    Options(Vec<RemoteOption>),
    Error { message: String },
}

/// `name`/`value` pair as produced by serializing a form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// Body POSTed by action buttons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: String,
    pub info: Vec<FormField>,
    pub ids: Vec<String>,
}

/// Action endpoint reply; everything but `redirect` is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub redirect: Option<String>,
}

fn value_to_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_to_text(value).unwrap_or_default())
}

fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_to_text(value).filter(|s| !s.is_empty()))
}

fn deserialize_f64_from_number_or_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(D::Error::custom("expected numeric timestamp")),
    }
}
