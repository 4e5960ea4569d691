use std::collections::HashMap;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::match_record::MatchRecord;

/// Metadata about an opposing team: home ground, colors, kit icon.
///
/// `name` is the join key from [`MatchRecord::opponent`]; there are no
/// id-based references between matches and teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub home_address: String,
    #[serde(default)]
    pub club_color1: String,
    #[serde(default)]
    pub club_color2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kit_icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for a team.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDraft {
    pub name: String,
    pub home_address: String,
    pub club_color1: String,
    pub club_color2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kit_icon: Option<String>,
}

impl TeamDraft {
    /// A bare entry with only the name set, as seeded from a match list.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            home_address: String::new(),
            club_color1: String::new(),
            club_color2: String::new(),
            kit_icon: None,
        }
    }
}

/// Partial update for a team.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_color1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_color2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kit_icon: Option<String>,
}

/// Name-keyed index over a fetched team list, built once per request.
///
/// Lookups are exact and case-sensitive. Duplicate names are a data-quality
/// bug; the first record wins, deterministically.
pub struct TeamDirectory<'a> {
    records: &'a [TeamRecord],
    index: HashMap<&'a str, &'a TeamRecord>,
}

impl<'a> TeamDirectory<'a> {
    pub fn new(records: &'a [TeamRecord]) -> Self {
        let mut index = HashMap::new();
        for team in records {
            index.entry(team.name.as_str()).or_insert(team);
        }
        Self { records, index }
    }

    pub fn get(&self, name: &str) -> Option<&'a TeamRecord> {
        self.index.get(name).copied()
    }

    pub fn list(&self) -> &'a [TeamRecord] {
        self.records
    }

    /// Opponent names from a match list that have no team record yet, in
    /// first-appearance order. This is the admin's directory seeding step.
    pub fn missing_opponents(&self, matches: &[MatchRecord]) -> Vec<String> {
        matches
            .iter()
            .map(|record| record.opponent.as_str())
            .filter(|name| !name.is_empty() && !self.index.contains_key(name))
            .unique()
            .map(str::to_string)
            .collect_vec()
    }
}
