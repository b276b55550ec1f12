//! Request and result shapes for the three generation tasks.
//!
//! Result types are lenient on the way in (backend JSON is requested in prose,
//! not enforced) and complete on the way out: every field deserializes to some
//! value even when the model omitted it or sent `null`.

use std::fmt;

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRequest {
    pub linkedin_url: String,
    #[serde(default)]
    pub target_role: Option<String>,
    /// Extra profile data. Must be a JSON object when present.
    #[serde(default)]
    pub user_profile: Option<Map<String, Value>>,
}

impl ResumeRequest {
    /// The target role, treating a blank string as absent.
    pub fn target_role(&self) -> Option<&str> {
        self.target_role.as_deref().filter(|r| !r.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatchRequest {
    pub user_skills: Vec<String>,
    pub job_requirements: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRequest {
    pub topic: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

impl PostRequest {
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref().filter(|d| !d.trim().is_empty())
    }

    pub fn tone(&self) -> &str {
        self.tone
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("professional")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRequest {
    Resume(ResumeRequest),
    JobMatch(JobMatchRequest),
    Post(PostRequest),
}

impl GenerationRequest {
    pub fn kind(&self) -> TaskKind {
        match self {
            GenerationRequest::Resume(_) => TaskKind::Resume,
            GenerationRequest::JobMatch(_) => TaskKind::JobMatch,
            GenerationRequest::Post(_) => TaskKind::Post,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Resume,
    JobMatch,
    Post,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskKind::Resume => "resume",
            TaskKind::JobMatch => "job-match",
            TaskKind::Post => "post",
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Results
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub linkedin_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "lenient_string")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub institution: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default, deserialize_with = "lenient_record")]
    pub personal_info: PersonalInfo,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient_records")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchAnalysis {
    /// 0 – 100
    #[serde(default, deserialize_with = "lenient_score")]
    pub compatibility_score: u32,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub matching_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub missing_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub recommendations: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub strength_areas: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub improvement_areas: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub overall_assessment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResult {
    pub success: bool,
    pub post: String,
    pub error: Option<String>,
}

impl PostResult {
    pub fn ok(post: impl Into<String>) -> Self {
        Self {
            success: true,
            post: post.into(),
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StructuredResult {
    Resume(Resume),
    JobMatch(JobMatchAnalysis),
    Post(PostResult),
}

impl StructuredResult {
    pub fn kind(&self) -> TaskKind {
        match self {
            StructuredResult::Resume(_) => TaskKind::Resume,
            StructuredResult::JobMatch(_) => TaskKind::JobMatch,
            StructuredResult::Post(_) => TaskKind::Post,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient deserializers
// ────────────────────────────────────────────────────────────────────────────

/// Renders any JSON value as text. Lists are joined with ", " and objects are
/// kept as compact JSON, so no backend answer is lost to a type mismatch.
fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .into_iter()
            .map(value_to_text)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        object @ Value::Object(_) => object.to_string(),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

/// A list of anything renderable as text. A bare string is split on commas,
/// any other single value becomes a one-element list, and null is empty.
fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().map(value_to_text).collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        other => vec![value_to_text(other)],
    })
}

/// A nested record. Anything that is not an object leaves the default in place.
fn lenient_record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        object @ Value::Object(_) => serde_json::from_value(object).map_err(D::Error::custom),
        _ => Ok(T::default()),
    }
}

/// A list of nested records. A single object is a one-element list; non-object
/// entries are skipped.
fn lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => Vec::new(),
    };
    items
        .into_iter()
        .filter(Value::is_object)
        .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
        .collect()
}

/// Integer, float or numeric string, rounded and clamped into 0 – 100.
/// Anything else (words, lists, objects) scores 0.
fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(raw
        .filter(|score| score.is_finite())
        .map_or(0, |score| score.round().clamp(0.0, 100.0) as u32))
}
