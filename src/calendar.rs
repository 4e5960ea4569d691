use chrono::{Datelike, NaiveDateTime};
use itertools::Itertools;
use tracing::warn;

use crate::config::ClubIdentity;
use crate::locale::Locale;
use crate::model::{MatchRecord, MatchResult, MatchStatus, TeamDirectory, TeamRecord};

/// One side of a fixture, ready for display.
///
/// An opponent with no team record gets its name and nothing else; that is a
/// lookup miss, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SideView {
    pub name: String,
    pub home_address: String,
    pub colors: Option<(String, String)>,
    pub kit_icon: Option<String>,
}

impl SideView {
    fn from_team(team: &TeamRecord) -> Self {
        let colors = if team.club_color1.is_empty() && team.club_color2.is_empty() {
            None
        } else {
            Some((team.club_color1.clone(), team.club_color2.clone()))
        };
        Self {
            name: team.name.clone(),
            home_address: team.home_address.clone(),
            colors,
            kit_icon: team.kit_icon.clone(),
        }
    }

    fn from_club(club: &ClubIdentity) -> Self {
        let colors = if club.club_color1.is_empty() && club.club_color2.is_empty() {
            None
        } else {
            Some((club.club_color1.clone(), club.club_color2.clone()))
        };
        Self {
            name: club.name.clone(),
            home_address: club.home_address.clone(),
            colors,
            kit_icon: club.kit_icon.clone(),
        }
    }

    fn unknown(name: &str) -> Self {
        Self {
            name: name.to_string(),
            home_address: String::new(),
            colors: None,
            kit_icon: None,
        }
    }
}

/// A single fixture enriched for display, rebuilt on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchViewModel {
    pub id: String,
    pub home_side: SideView,
    pub away_side: SideView,
    /// True when the club is the home side; score helpers orient on this.
    pub is_home: bool,
    pub kickoff: NaiveDateTime,
    /// E.g. `"zaterdag 6 september 2025"`.
    pub display_date: String,
    /// 24-hour `HH:MM`.
    pub display_time: String,
    pub resolved_venue: String,
    pub competition: String,
    pub status: MatchStatus,
    pub result: Option<MatchResult>,
}

impl MatchViewModel {
    /// The club's own goals, regardless of which side it played on.
    pub fn club_score(&self) -> Option<u32> {
        self.result
            .map(|r| if self.is_home { r.home } else { r.away })
    }

    pub fn opponent_score(&self) -> Option<u32> {
        self.result
            .map(|r| if self.is_home { r.away } else { r.home })
    }

    /// Score in home/away order, e.g. `"2 - 1"`.
    pub fn score_line(&self) -> Option<String> {
        self.result.map(|r| format!("{} - {}", r.home, r.away))
    }
}

/// One calendar month of fixtures, in kick-off order.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    /// Locale month label, e.g. `"September 2025"`.
    pub label: String,
    pub matches: Vec<MatchViewModel>,
}

/// A match left out of the view because its stored date would not parse.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedMatch {
    pub id: String,
    pub raw_date: String,
    pub error: chrono::ParseError,
}

/// The grouped, display-ready calendar plus any records that had to be
/// skipped. Groups appear in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedCalendar {
    pub groups: Vec<MonthGroup>,
    pub warnings: Vec<SkippedMatch>,
}

impl GroupedCalendar {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All view models across groups, in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &MatchViewModel> {
        self.groups.iter().flat_map(|group| group.matches.iter())
    }
}

/// Build the grouped match calendar from already-fetched lists.
///
/// Pure and deterministic: no I/O, inputs untouched, identical inputs give
/// identical output. Records whose date fails to parse are excluded and
/// reported in `warnings` rather than dropped silently.
pub fn build_grouped_view(
    matches: &[MatchRecord],
    teams: &[TeamRecord],
    club: &ClubIdentity,
    locale: Locale,
) -> GroupedCalendar {
    let directory = TeamDirectory::new(teams);
    let mut warnings = Vec::new();
    let mut rows = Vec::with_capacity(matches.len());

    for record in matches {
        let kickoff = match record.kickoff() {
            Ok(kickoff) => kickoff,
            Err(error) => {
                warn!(id = %record.id, raw = %record.date, %error, "skipping match with unparseable date");
                warnings.push(SkippedMatch {
                    id: record.id.clone(),
                    raw_date: record.date.clone(),
                    error,
                });
                continue;
            }
        };

        let club_side = SideView::from_club(club);
        let opponent_side = directory
            .get(&record.opponent)
            .map(SideView::from_team)
            .unwrap_or_else(|| SideView::unknown(&record.opponent));
        let (home_side, away_side) = if record.is_home {
            (club_side, opponent_side)
        } else {
            (opponent_side, club_side)
        };

        // The home side's ground wins; the free-text venue is only a fallback.
        let resolved_venue = if home_side.home_address.is_empty() {
            record.venue.clone()
        } else {
            home_side.home_address.clone()
        };

        rows.push(MatchViewModel {
            id: record.id.clone(),
            home_side,
            away_side,
            is_home: record.is_home,
            kickoff,
            display_date: locale.format_date(kickoff.date()),
            display_time: locale.format_time(kickoff.time()),
            resolved_venue,
            competition: record.competition.clone(),
            status: record.status,
            result: record.result,
        });
    }

    rows.sort_by_key(|vm| vm.kickoff);

    let chunks = rows
        .into_iter()
        .chunk_by(|vm| (vm.kickoff.year(), vm.kickoff.month()));
    let groups = chunks
        .into_iter()
        .map(|((year, month), fixtures)| MonthGroup {
            label: locale.month_key(year, month),
            matches: fixtures.collect_vec(),
        })
        .collect_vec();

    GroupedCalendar { groups, warnings }
}

/// Which fixtures to keep; unset fields do not constrain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub status: Option<MatchStatus>,
    pub is_home: Option<bool>,
}

impl MatchFilter {
    pub fn with_status(status: MatchStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn home(is_home: bool) -> Self {
        Self {
            is_home: Some(is_home),
            ..Self::default()
        }
    }
}

/// Attribute-equality filter over a match list. An over-constrained filter
/// yields an empty list, not an error.
pub fn filter_matches(matches: &[MatchRecord], filter: MatchFilter) -> Vec<MatchRecord> {
    matches
        .iter()
        .filter(|record| {
            filter.status.is_none_or(|status| record.status == status)
                && filter.is_home.is_none_or(|is_home| record.is_home == is_home)
        })
        .cloned()
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use itertools::Itertools;

    fn club() -> ClubIdentity {
        ClubIdentity::new("GOOMA UNITED", "Gemeentelijk Sportpark, Gooma")
            .with_colors("#DC2626", "#000000")
    }

    fn record(id: &str, opponent: &str, is_home: bool, date: &str) -> MatchRecord {
        let stamp = Utc.with_ymd_and_hms(2025, 8, 1, 10, 0, 0).unwrap();
        MatchRecord {
            id: id.to_string(),
            opponent: opponent.to_string(),
            is_home,
            date: date.to_string(),
            venue: String::new(),
            competition: "League".to_string(),
            status: MatchStatus::Upcoming,
            result: None,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    fn team(name: &str, address: &str) -> TeamRecord {
        let stamp = Utc.with_ymd_and_hms(2025, 8, 1, 10, 0, 0).unwrap();
        TeamRecord {
            id: format!("t-{name}"),
            name: name.to_string(),
            home_address: address.to_string(),
            club_color1: "#0000FF".to_string(),
            club_color2: "#FFFFFF".to_string(),
            kit_icon: None,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    // The 2025/26 season opening, shuffled out of order on purpose.
    fn season() -> Vec<MatchRecord> {
        vec![
            record("m3", "MORTSEL VC", false, "2025-09-13T16:30"),
            record("m1", "LAS MANAS", false, "2025-08-30T15:00"),
            record("m5", "FOXES OXFORD", true, "2025-10-04T15:15"),
            record("m2", "V.B.", true, "2025-09-06T15:15"),
            record("m4", "BENNE 1980 B", false, "2025-09-27T15:30"),
        ]
    }

    #[test]
    fn test_grouping_never_drops_or_duplicates() {
        let matches = season();
        let view = build_grouped_view(&matches, &[], &club(), Locale::En);

        let ids = view.iter().map(|vm| vm.id.as_str()).collect_vec();
        assert_eq!(ids, vec!["m1", "m2", "m3", "m4", "m5"]);
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn test_groups_in_chronological_order() {
        let view = build_grouped_view(&season(), &[], &club(), Locale::En);

        let labels = view
            .groups
            .iter()
            .map(|group| group.label.as_str())
            .collect_vec();
        assert_eq!(
            labels,
            vec!["August 2025", "September 2025", "October 2025"]
        );
        assert_eq!(view.groups[1].matches.len(), 3);
        for group in &view.groups {
            let sorted = group
                .matches
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.kickoff <= b.kickoff);
            assert!(sorted);
        }
    }

    #[test]
    fn test_empty_matches_empty_view() {
        let teams = vec![team("V.B.", "Kerkstraat 1")];
        let view = build_grouped_view(&[], &teams, &club(), Locale::En);
        assert!(view.is_empty());
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn test_unmatched_opponent_gets_defaults() {
        let mut away = record("m1", "MANHATTAN", false, "2025-10-11T14:00");
        away.venue = "Sportpark Manhattan".to_string();
        let view = build_grouped_view(&[away], &[], &club(), Locale::En);

        let vm = view.iter().next().unwrap();
        assert_eq!(vm.home_side.name, "MANHATTAN");
        assert_eq!(vm.home_side.home_address, "");
        assert!(vm.home_side.colors.is_none());
        assert_eq!(vm.resolved_venue, "Sportpark Manhattan");
    }

    #[test]
    fn test_home_side_address_always_wins() {
        // Club at home against an opponent that has its own ground on file:
        // the venue must be the club's, not the opponent's.
        let matches = vec![record("m1", "FC Brussels", true, "2025-09-20T15:00")];
        let teams = vec![team("FC Brussels", "X")];
        let view = build_grouped_view(&matches, &teams, &club(), Locale::En);

        let vm = view.iter().next().unwrap();
        assert_eq!(vm.resolved_venue, "Gemeentelijk Sportpark, Gooma");
        assert_eq!(vm.away_side.home_address, "X");
    }

    #[test]
    fn test_away_match_uses_opponent_ground() {
        let matches = vec![record("m1", "SCHONENBERG", false, "2025-11-08T15:00")];
        let teams = vec![team("SCHONENBERG", "Schonenbergweg 12")];
        let view = build_grouped_view(&matches, &teams, &club(), Locale::En);

        let vm = view.iter().next().unwrap();
        assert_eq!(vm.resolved_venue, "Schonenbergweg 12");
        assert_eq!(vm.home_side.colors.as_ref().unwrap().0, "#0000FF");
    }

    #[test]
    fn test_idempotent() {
        let matches = season();
        let teams = vec![team("V.B.", "Kerkstraat 1"), team("MORTSEL VC", "")];
        let first = build_grouped_view(&matches, &teams, &club(), Locale::Nl);
        let second = build_grouped_view(&matches, &teams, &club(), Locale::Nl);
        assert_eq!(first, second);
    }

    #[test]
    fn test_home_fixture_against_unknown_opponent() {
        // No team records at all; both sides must still render.
        let matches = vec![record("m1", "V.B.", true, "2025-09-06T15:15")];
        let view = build_grouped_view(&matches, &[], &club(), Locale::En);

        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].label, "September 2025");
        let vm = &view.groups[0].matches[0];
        assert_eq!(vm.home_side.name, "GOOMA UNITED");
        assert_eq!(vm.away_side.name, "V.B.");
        assert_eq!(vm.resolved_venue, "Gemeentelijk Sportpark, Gooma");
        assert_eq!(vm.display_date, "Saturday 6 September 2025");
        assert_eq!(vm.display_time, "15:15");
    }

    #[test]
    fn test_score_orientation_tracks_home_flag() {
        let mut away_win = record("m1", "LAS MANAS", false, "2025-08-30T15:00");
        away_win.status = MatchStatus::Completed;
        away_win.result = Some(MatchResult { home: 2, away: 1 });
        let view = build_grouped_view(&[away_win], &[], &club(), Locale::En);

        let vm = view.iter().next().unwrap();
        assert_eq!(vm.home_side.name, "LAS MANAS");
        assert_eq!(vm.away_side.name, "GOOMA UNITED");
        // The club played away, so its goals are the second element.
        assert_eq!(vm.club_score(), Some(1));
        assert_eq!(vm.opponent_score(), Some(2));
        assert_eq!(vm.score_line().unwrap(), "2 - 1");
    }

    #[test]
    fn test_unparseable_date_skipped_with_warning() {
        let mut matches = season();
        matches.push(record("bad", "BELLE VUE", true, "next saturday"));
        let view = build_grouped_view(&matches, &[], &club(), Locale::En);

        assert_eq!(view.iter().count(), 5);
        assert_eq!(view.warnings.len(), 1);
        assert_eq!(view.warnings[0].id, "bad");
        assert_eq!(view.warnings[0].raw_date, "next saturday");
    }

    #[test]
    fn test_dutch_labels() {
        let matches = vec![record("m1", "V.B.", true, "2025-09-06T15:15")];
        let view = build_grouped_view(&matches, &[], &club(), Locale::Nl);
        assert_eq!(view.groups[0].label, "september 2025");
        assert_eq!(
            view.groups[0].matches[0].display_date,
            "zaterdag 6 september 2025"
        );
    }

    #[test]
    fn test_filter_by_status_and_side() {
        let mut matches = season();
        matches[0].status = MatchStatus::Completed;
        matches[0].result = Some(MatchResult { home: 0, away: 3 });

        let completed = filter_matches(&matches, MatchFilter::with_status(MatchStatus::Completed));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, "m3");

        let home = filter_matches(&matches, MatchFilter::home(true));
        assert_eq!(home.len(), 2);

        let over_constrained = filter_matches(
            &matches,
            MatchFilter {
                status: Some(MatchStatus::Completed),
                is_home: Some(true),
            },
        );
        assert!(over_constrained.is_empty());

        let all = filter_matches(&matches, MatchFilter::default());
        assert_eq!(all.len(), matches.len());
    }
}
