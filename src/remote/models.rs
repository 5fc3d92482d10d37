// ABOUTME: Data structures for job records and the feed response envelope
// ABOUTME: Normalizes the three accepted body shapes into one ordered job list

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{BoardError, Result};

pub const DEFAULT_JOB_TYPE: &str = "Full-time";
pub const DEFAULT_SALARY: &str = "Competitive";
pub const DEFAULT_CATEGORY: &str = "Executive";
pub const NO_OP_LINK: &str = "#";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_opt_string")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub apply_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub redirect_url: Option<String>,
}

/// Display text for any JSON scalar; `null` has none.
fn text_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_value(Value::deserialize(deserializer)?))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Job {
    pub fn job_type(&self) -> &str {
        non_empty(&self.job_type).unwrap_or(DEFAULT_JOB_TYPE)
    }

    pub fn salary(&self) -> &str {
        non_empty(&self.salary).unwrap_or(DEFAULT_SALARY)
    }

    pub fn category(&self) -> &str {
        non_empty(&self.category).unwrap_or(DEFAULT_CATEGORY)
    }

    /// Outbound link: `redirect_url`, then `apply_url`, then a no-op anchor.
    pub fn apply_link(&self) -> &str {
        non_empty(&self.redirect_url)
            .or_else(|| non_empty(&self.apply_url))
            .unwrap_or(NO_OP_LINK)
    }

    pub fn description(&self) -> String {
        match non_empty(&self.description) {
            Some(text) => text.to_string(),
            None => format!(
                "{} is hiring for the {} role. Apply to learn more about the position.",
                self.company, self.title
            ),
        }
    }
}

/// Where a normalized feed came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// Bare array or `{jobs: [...]}` envelope.
    Live { last_updated: Option<String> },
    /// `{fallback: [...]}`: the server's primary source failed.
    Fallback { error: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFeed {
    pub jobs: Vec<Job>,
    pub source: FeedSource,
}

impl JobFeed {
    pub fn is_degraded(&self) -> bool {
        matches!(self.source, FeedSource::Fallback { .. })
    }
}

fn parse_jobs(value: Value, field: &str) -> Result<Vec<Job>> {
    serde_json::from_value(value)
        .map_err(|e| BoardError::MalformedResponse(format!("invalid job list in {}: {}", field, e)))
}

fn string_field(body: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    body.get(key).cloned().and_then(text_value)
}

/// Apply the accepted-shape precedence: bare array, then `jobs`, then `fallback`.
pub fn normalize_feed(body: Value) -> Result<JobFeed> {
    match body {
        Value::Array(_) => Ok(JobFeed {
            jobs: parse_jobs(body, "body")?,
            source: FeedSource::Live { last_updated: None },
        }),
        Value::Object(mut map) => {
            if matches!(map.get("jobs"), Some(Value::Array(_))) {
                let last_updated = string_field(&map, "last_updated");
                let jobs = map.remove("jobs").unwrap_or(Value::Null);
                return Ok(JobFeed {
                    jobs: parse_jobs(jobs, "jobs")?,
                    source: FeedSource::Live { last_updated },
                });
            }
            if let Some(fallback) = map.remove("fallback") {
                let error = string_field(&map, "error");
                return Ok(JobFeed {
                    jobs: parse_jobs(fallback, "fallback")?,
                    source: FeedSource::Fallback { error },
                });
            }
            Err(BoardError::MalformedResponse(
                "object has neither `jobs` nor `fallback`".to_string(),
            ))
        }
        other => Err(BoardError::MalformedResponse(format!(
            "expected array or object, got {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
