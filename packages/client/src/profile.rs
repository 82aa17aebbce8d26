use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of a successful `/api/auth/profile` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    /// The profile itself. `null` or missing means the backend sent nothing usable.
    #[serde(default)]
    pub data: Option<UserProfile>,
}

/// The signed-in user's profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Tokens earned so far.
    pub points: i64,

    /// Submitted scans. Only the count is shown; a missing or `null` list counts as zero.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reports: Vec<Value>,

    /// Leaderboard standing.
    pub rank: Rank,

    /// Every other field the backend sends (name, email, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl UserProfile {
    /// Number of scans the user has submitted.
    pub fn scan_count(&self) -> usize {
        self.reports.len()
    }

    /// A string field outside the core three, such as `name` or `email`.
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

/// Rank is either a leaderboard position or a named tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rank {
    /// e.g. `3`
    Position(i64),
    /// e.g. `"Gold"`
    Title(String),
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Position(position) => write!(f, "{position}"),
            Rank::Title(title) => f.write_str(title),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}
