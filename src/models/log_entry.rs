use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Intent, Language};

/// One unmatched interaction, as persisted in the unmatched log.
///
/// Text fields tolerate a missing key or `null`, which older whole-array log
/// files contain when the webhook omitted a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub from: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    /// Always `None` for entries written from the fallback path.
    #[serde(default)]
    pub intent_detected: Option<Intent>,
    pub language: Language,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub response_sent: String,
    /// Millisecond precision, written as `2024-03-01T10:15:30.123Z`.
    #[serde(serialize_with = "serialize_millis")]
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn unmatched(from: &str, message: &str, language: Language, response: &str) -> Self {
        Self {
            from: from.to_string(),
            message: message.to_string(),
            intent_detected: None,
            language,
            response_sent: response.to_string(),
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn serialize_millis<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
