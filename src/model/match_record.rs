use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::ClubError;

/// Whether a fixture still has to be played or already has been.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Completed,
}

/// Final score of a completed match, always in home/away order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home: u32,
    pub away: u32,
}

/// A scheduled or played fixture between the club and an opponent.
///
/// The opponent is referenced by name only; team metadata is joined in at
/// read time. `date` is kept as the raw stored text because legacy rows can
/// hold anything; parse it at the edge with [`MatchRecord::kickoff`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub opponent: String,
    pub is_home: bool,
    /// Local wall-clock kick-off, `YYYY-MM-DDTHH:MM` with optional seconds.
    pub date: String,
    /// Free-text location, used only when no team record supplies an address.
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub competition: String,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parse a stored wall-clock kick-off string, with or without seconds.
pub fn parse_kickoff(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
}

impl MatchRecord {
    pub fn kickoff(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        parse_kickoff(&self.date)
    }
}

fn check_status_result(
    entity: &'static str,
    status: MatchStatus,
    result: Option<&MatchResult>,
) -> Result<(), ClubError> {
    match (status, result) {
        (MatchStatus::Completed, None) => Err(ClubError::Validation {
            entity,
            reason: "completed match must carry a result".to_string(),
        }),
        (MatchStatus::Upcoming, Some(_)) => Err(ClubError::Validation {
            entity,
            reason: "upcoming match must not carry a result".to_string(),
        }),
        _ => Ok(()),
    }
}

/// Creation payload for a match; the store assigns id and audit stamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDraft {
    pub opponent: String,
    pub is_home: bool,
    pub date: String,
    pub venue: String,
    pub competition: String,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
}

impl MatchDraft {
    /// Write-boundary checks: the status/result pairing must be consistent
    /// and the kick-off must parse, so bad dates never reach the store.
    pub fn validate(&self) -> Result<(), ClubError> {
        if self.opponent.trim().is_empty() {
            return Err(ClubError::Validation {
                entity: "match",
                reason: "opponent name is empty".to_string(),
            });
        }
        check_status_result("match", self.status, self.result.as_ref())?;
        if let Err(err) = parse_kickoff(&self.date) {
            return Err(ClubError::Validation {
                entity: "match",
                reason: format!("unparseable kick-off {:?}: {err}", self.date),
            });
        }
        Ok(())
    }
}

/// Partial update for a match. Absent fields are left untouched by the store;
/// `result: Some(None)` clears a stored result.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_home: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Option<MatchResult>>,
}

impl MatchPatch {
    /// A patch may not break the status/result invariant, so one of the pair
    /// cannot be changed without the other.
    pub fn validate(&self) -> Result<(), ClubError> {
        match (self.status, self.result.as_ref()) {
            (None, None) => {}
            (Some(status), Some(result)) => {
                check_status_result("match patch", status, result.as_ref())?
            }
            _ => {
                return Err(ClubError::Validation {
                    entity: "match patch",
                    reason: "status and result must be updated together".to_string(),
                })
            }
        }
        if let Some(date) = &self.date {
            if let Err(err) = parse_kickoff(date) {
                return Err(ClubError::Validation {
                    entity: "match patch",
                    reason: format!("unparseable kick-off {date:?}: {err}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MatchDraft {
        MatchDraft {
            opponent: "V.B.".to_string(),
            is_home: true,
            date: "2025-09-06T15:15".to_string(),
            venue: String::new(),
            competition: "League".to_string(),
            status: MatchStatus::Upcoming,
            result: None,
        }
    }

    #[test]
    fn test_parse_kickoff_with_and_without_seconds() {
        assert!(parse_kickoff("2025-09-06T15:15").is_ok());
        assert!(parse_kickoff("2025-09-06T15:15:00").is_ok());
        assert!(parse_kickoff("06-09-2025 15:15").is_err());
        assert!(parse_kickoff("").is_err());
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());

        let played = MatchDraft {
            status: MatchStatus::Completed,
            result: Some(MatchResult { home: 2, away: 1 }),
            ..draft()
        };
        assert!(played.validate().is_ok());
    }

    #[test]
    fn test_draft_rejects_inconsistent_status_result() {
        let completed_without_result = MatchDraft {
            status: MatchStatus::Completed,
            ..draft()
        };
        assert!(completed_without_result.validate().is_err());

        let upcoming_with_result = MatchDraft {
            result: Some(MatchResult { home: 0, away: 0 }),
            ..draft()
        };
        assert!(upcoming_with_result.validate().is_err());
    }

    #[test]
    fn test_draft_rejects_bad_date() {
        let bad = MatchDraft {
            date: "next saturday".to_string(),
            ..draft()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_patch_requires_status_and_result_together() {
        let status_only = MatchPatch {
            status: Some(MatchStatus::Completed),
            ..MatchPatch::default()
        };
        assert!(status_only.validate().is_err());

        let both = MatchPatch {
            status: Some(MatchStatus::Completed),
            result: Some(Some(MatchResult { home: 3, away: 0 })),
            ..MatchPatch::default()
        };
        assert!(both.validate().is_ok());

        let reverted = MatchPatch {
            status: Some(MatchStatus::Upcoming),
            result: Some(None),
            ..MatchPatch::default()
        };
        assert!(reverted.validate().is_ok());

        let venue_only = MatchPatch {
            venue: Some("Sportpark Oost".to_string()),
            ..MatchPatch::default()
        };
        assert!(venue_only.validate().is_ok());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = r#"{
            "id": "m1",
            "opponent": "LAS MANAS",
            "isHome": false,
            "date": "2025-08-30T15:00",
            "venue": "Sportpark Las Manas",
            "competition": "League",
            "status": "completed",
            "result": {"home": 2, "away": 1},
            "createdAt": "2025-08-01T10:00:00Z",
            "updatedAt": "2025-08-30T18:00:00Z"
        }"#;
        let record: MatchRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_home);
        assert_eq!(record.status, MatchStatus::Completed);
        assert_eq!(record.result, Some(MatchResult { home: 2, away: 1 }));

        let draft_json = serde_json::to_value(draft()).unwrap();
        assert!(draft_json.get("isHome").is_some());
        // an absent result must stay absent, not become null
        assert!(draft_json.get("result").is_none());
    }
}
