//! Raw snapshot model.
//!
//! The snapshot comes from an external collector and is only loosely
//! structured, so every level here is read leniently: a list element that
//! does not have the expected shape is dropped on its own, and participant
//! fields are looked up by name on demand instead of being bound to a fixed
//! schema.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Reads the player list of a raw snapshot. Entries that are not player
/// objects are dropped; `None` when the snapshot is not a list at all.
pub fn players_from_snapshot(snapshot: Value) -> Option<Vec<PlayerEntry>> {
    let Value::Array(entries) = snapshot else {
        return None;
    };
    Some(
        entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
    )
}

/// One tracked player and the matches collected for them, most relevant first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub puuid: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub summoner_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub matches: Vec<MatchEntry>,
}

impl PlayerEntry {
    /// `summonerName`, falling back to `name`.
    pub fn display_name(&self) -> &str {
        self.summoner_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub metadata: Option<MatchMetadata>,
    #[serde(default, deserialize_with = "lenient")]
    pub match_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub info: Option<MatchInfo>,
}

impl MatchEntry {
    pub fn id(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|metadata| metadata.match_id.as_deref())
            .or(self.match_id.as_deref())
    }

    pub fn participants(&self) -> &[Participant] {
        self.info
            .as_ref()
            .map(|info| info.participants.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub match_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchInfo {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub participants: Vec<Participant>,
}

/// One player's record within one match, kept as the raw key/value map.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Participant(Map<String, Value>);

impl Participant {
    pub fn puuid(&self) -> Option<&str> {
        self.0.get("puuid").and_then(Value::as_str)
    }

    /// Numeric top-level field, `None` when missing or unreadable.
    pub fn field(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(as_number)
    }

    /// Numeric field of the nested `challenges` map.
    pub fn challenge(&self, key: &str) -> Option<f64> {
        self.0
            .get("challenges")
            .and_then(Value::as_object)
            .and_then(|challenges| challenges.get(key))
            .and_then(as_number)
    }

    pub fn kills(&self) -> f64 {
        self.field("kills").unwrap_or_default()
    }

    pub fn deaths(&self) -> f64 {
        self.field("deaths").unwrap_or_default()
    }

    pub fn assists(&self) -> f64 {
        self.field("assists").unwrap_or_default()
    }

    /// Missing team identifiers collapse onto team 0.
    pub fn team_id(&self) -> i64 {
        self.field("teamId").map(|id| id as i64).unwrap_or_default()
    }

    /// `true`, `"true"` and any nonzero number count as a win.
    pub fn win(&self) -> bool {
        match self.0.get("win") {
            Some(Value::String(s)) if s.trim().eq_ignore_ascii_case("true") => true,
            Some(Value::String(s)) if s.trim().eq_ignore_ascii_case("false") => false,
            _ => self.field("win").is_some_and(|win| win != 0.0),
        }
    }

    pub fn time_played_secs(&self) -> f64 {
        self.field("timePlayed")
            .or_else(|| self.field("gameDuration"))
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Participant {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Deserializes `T`, yielding `None` instead of an error on a shape mismatch.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserializes a list, dropping elements that do not fit `T`. Anything that
/// is not a list becomes empty.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
